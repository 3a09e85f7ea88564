//! Configuration for the static engine plugin.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use authctx_core::Record;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use secrecy::SecretString;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Prefix for environment overrides, e.g. `AUTHCTX_ENGINE_CONTEXT__USERNAME`.
pub const ENV_PREFIX: &str = "AUTHCTX_ENGINE_";

/// Plugin configuration.
///
/// Every value is optional; anything left out stays unset in the resolver
/// state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticEnginePluginConfig {
    /// Identity values.
    pub context: ContextConfig,

    /// Advisory values.
    pub hints: HintConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    #[serde(deserialize_with = "deserialize_text")]
    pub username: Option<String>,

    /// Wrapped on load so it never shows up in `Debug` output.
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: Option<SecretString>,

    pub authentication_authority: Option<Record>,

    pub uid: Option<u32>,

    pub gid: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HintConfig {
    #[serde(deserialize_with = "deserialize_text")]
    pub token_name: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub authorize_right: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub suggested_user: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub client_path: Option<String>,
}

/// Text that YAML or the environment may have typed as a scalar, such as a
/// numeric PIN or a numeric user name.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarTextVisitor).map(ScalarText)
    }
}

struct ScalarTextVisitor;

impl Visitor<'_> for ScalarTextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or scalar")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
        Ok(v.to_string())
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ScalarText>::deserialize(deserializer)?.map(|t| t.0))
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_text(deserializer)?.map(SecretString::from))
}

impl StaticEnginePluginConfig {
    /// Layered sources: the YAML file at `path`, then `AUTHCTX_ENGINE_*`
    /// environment variables with `__` separating nested keys.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from `path` plus environment overrides.
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or contains unknown or
    /// mistyped fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Self::figment(path).extract().with_context(|| {
            format!(
                "failed to load static engine config from {}",
                path.display()
            )
        })
    }

    /// Parse configuration from an inline YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or contains unknown or
    /// mistyped fields.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .context("invalid static engine config")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use authctx_core::Value;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn empty_document_leaves_everything_unset() {
        let cfg = StaticEnginePluginConfig::from_yaml_str("{}").unwrap();

        assert!(cfg.context.username.is_none());
        assert!(cfg.context.password.is_none());
        assert!(cfg.context.uid.is_none());
        assert!(cfg.hints.client_path.is_none());
    }

    #[test]
    fn parses_context_and_hints() {
        let cfg = StaticEnginePluginConfig::from_yaml_str(
            r"
context:
  username: alice
  password: hunter2
  uid: 501
  gid: 20
  authentication_authority:
    kind: Kerberosv5
    realm: EXAMPLE.COM
    kvno: 2
    principal:
      name: alice
hints:
  authorize_right: system.login.screensaver
  client_path: /System/Library/CoreServices/loginwindow.app
",
        )
        .unwrap();

        assert_eq!(cfg.context.username.as_deref(), Some("alice"));
        assert_eq!(
            cfg.context
                .password
                .as_ref()
                .map(ExposeSecret::expose_secret),
            Some("hunter2")
        );
        assert_eq!(cfg.context.uid, Some(501));
        assert_eq!(cfg.context.gid, Some(20));

        let authority = cfg.context.authentication_authority.unwrap();
        assert_eq!(authority.get("kvno"), Some(&Value::Numeric(2)));
        assert_eq!(
            authority.get("principal"),
            Some(&Value::Record(Record::new().with("name", "alice")))
        );

        assert_eq!(
            cfg.hints.authorize_right.as_deref(),
            Some("system.login.screensaver")
        );
        assert!(cfg.hints.token_name.is_none());
    }

    #[test]
    fn debug_output_redacts_password() {
        let cfg =
            StaticEnginePluginConfig::from_yaml_str("context:\n  password: hunter2\n").unwrap();

        assert!(!format!("{cfg:?}").contains("hunter2"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = StaticEnginePluginConfig::from_yaml_str("context:\n  shell: /bin/zsh\n")
            .expect_err("unknown context field");
        assert!(format!("{err:#}").contains("shell"), "got: {err:#}");

        assert!(StaticEnginePluginConfig::from_yaml_str("session: 1\n").is_err());
    }

    #[test]
    fn numeric_scalars_load_as_text() {
        let cfg = StaticEnginePluginConfig::from_yaml_str(
            "context:\n  username: 1001\n  password: 1234\nhints:\n  token_name: 42\n",
        )
        .unwrap();

        assert_eq!(cfg.context.username.as_deref(), Some("1001"));
        assert_eq!(
            cfg.context
                .password
                .as_ref()
                .map(ExposeSecret::expose_secret),
            Some("1234")
        );
        assert_eq!(cfg.hints.token_name.as_deref(), Some("42"));
    }

    #[test]
    fn structured_value_for_text_field_is_rejected() {
        assert!(StaticEnginePluginConfig::from_yaml_str("context:\n  username: [a, b]\n").is_err());
    }

    #[test]
    fn negative_uid_is_rejected() {
        assert!(StaticEnginePluginConfig::from_yaml_str("context:\n  uid: -1\n").is_err());
    }
}
