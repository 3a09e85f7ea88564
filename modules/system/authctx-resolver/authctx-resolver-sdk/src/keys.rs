//! Lookup key namespaces.
//!
//! Keys are matched by exact, case-sensitive equality against the names
//! returned by `as_str()`. The two namespaces share no names.

use std::fmt;

/// Which mapping a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Context,
    Hint,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context => f.write_str("context"),
            Self::Hint => f.write_str("hint"),
        }
    }
}

/// Identity fields describing the principal being authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    Username,
    Password,
    AuthenticationAuthority,
    Uid,
    Gid,
}

impl ContextKey {
    pub const ALL: [Self; 5] = [
        Self::Username,
        Self::Password,
        Self::AuthenticationAuthority,
        Self::Uid,
        Self::Gid,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::AuthenticationAuthority => "authenticationAuthority",
            Self::Uid => "uid",
            Self::Gid => "gid",
        }
    }

    /// Exact-match a raw key against the context namespace.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory fields describing the authentication environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKey {
    TokenName,
    AuthorizeRight,
    SuggestedUser,
    ClientPath,
}

impl HintKey {
    pub const ALL: [Self; 4] = [
        Self::TokenName,
        Self::AuthorizeRight,
        Self::SuggestedUser,
        Self::ClientPath,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TokenName => "tokenName",
            Self::AuthorizeRight => "authorizeRight",
            Self::SuggestedUser => "suggestedUser",
            Self::ClientPath => "clientPath",
        }
    }

    /// Exact-match a raw key against the hint namespace.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn context_keys_parse_their_own_names() {
        for key in ContextKey::ALL {
            assert_eq!(ContextKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn hint_keys_parse_their_own_names() {
        for key in HintKey::ALL {
            assert_eq!(HintKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        assert_eq!(ContextKey::parse("Username"), None);
        assert_eq!(ContextKey::parse("USERNAME"), None);
        assert_eq!(ContextKey::parse("user"), None);
        assert_eq!(ContextKey::parse("username "), None);
        assert_eq!(ContextKey::parse("authenticationauthority"), None);
        assert_eq!(HintKey::parse("tokenname"), None);
        assert_eq!(HintKey::parse("client"), None);
        assert_eq!(ContextKey::parse(""), None);
        assert_eq!(HintKey::parse(""), None);
    }

    #[test]
    fn namespaces_are_disjoint() {
        for key in ContextKey::ALL {
            assert_eq!(HintKey::parse(key.as_str()), None, "{key} leaked into hints");
        }
        for key in HintKey::ALL {
            assert_eq!(ContextKey::parse(key.as_str()), None, "{key} leaked into context");
        }
    }

    #[test]
    fn namespace_display() {
        assert_eq!(Namespace::Context.to_string(), "context");
        assert_eq!(Namespace::Hint.to_string(), "hint");
    }
}
