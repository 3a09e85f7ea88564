use secrecy::SecretString;

use crate::value::Record;

/// `ResolverState` holds the context and hint values for one authentication attempt.
///
/// Populated once by the session driver through [`ResolverStateBuilder`] and
/// read-only afterwards. Every field is either unset or holds a value of its
/// declared type.
#[derive(Debug, Clone, Default)]
pub struct ResolverState {
    /// Short name of the principal being authenticated.
    username: Option<String>,
    /// Credential presented for the principal. `Debug` redacts it.
    password: Option<SecretString>,
    /// Authority record describing where the identity comes from.
    authentication_authority: Option<Record>,
    uid: Option<u32>,
    gid: Option<u32>,

    /// Name of the token backing the attempt, if any.
    token_name: Option<String>,
    /// Authorization right being evaluated.
    authorize_right: Option<String>,
    /// User name the session proposes to the mechanism.
    suggested_user: Option<String>,
    /// Path of the client process requesting the right.
    client_path: Option<String>,
}

impl ResolverState {
    #[must_use]
    pub fn builder() -> ResolverStateBuilder {
        ResolverStateBuilder::default()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    #[must_use]
    pub fn authentication_authority(&self) -> Option<&Record> {
        self.authentication_authority.as_ref()
    }

    #[must_use]
    pub fn uid(&self) -> Option<u32> {
        self.uid
    }

    #[must_use]
    pub fn gid(&self) -> Option<u32> {
        self.gid
    }

    #[must_use]
    pub fn token_name(&self) -> Option<&str> {
        self.token_name.as_deref()
    }

    #[must_use]
    pub fn authorize_right(&self) -> Option<&str> {
        self.authorize_right.as_deref()
    }

    #[must_use]
    pub fn suggested_user(&self) -> Option<&str> {
        self.suggested_user.as_deref()
    }

    #[must_use]
    pub fn client_path(&self) -> Option<&str> {
        self.client_path.as_deref()
    }
}

#[derive(Default)]
pub struct ResolverStateBuilder {
    state: ResolverState,
}

impl ResolverStateBuilder {
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.state.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<SecretString>) -> Self {
        self.state.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn authentication_authority(mut self, authority: Record) -> Self {
        self.state.authentication_authority = Some(authority);
        self
    }

    #[must_use]
    pub fn uid(mut self, uid: u32) -> Self {
        self.state.uid = Some(uid);
        self
    }

    #[must_use]
    pub fn gid(mut self, gid: u32) -> Self {
        self.state.gid = Some(gid);
        self
    }

    #[must_use]
    pub fn token_name(mut self, token_name: impl Into<String>) -> Self {
        self.state.token_name = Some(token_name.into());
        self
    }

    #[must_use]
    pub fn authorize_right(mut self, right: impl Into<String>) -> Self {
        self.state.authorize_right = Some(right.into());
        self
    }

    #[must_use]
    pub fn suggested_user(mut self, user: impl Into<String>) -> Self {
        self.state.suggested_user = Some(user.into());
        self
    }

    #[must_use]
    pub fn client_path(mut self, path: impl Into<String>) -> Self {
        self.state.client_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ResolverState {
        self.state
    }
}
