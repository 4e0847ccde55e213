//! Environment configuration.
//!
//! Recognised variables: `DISCORD_BOT_TOKEN` (optional bot credential),
//! `DISCORD_APP_ID` (application identity, required only by the deploy
//! tool), `PORT` (HTTP listen port), and `APP_ENV` (runtime-environment
//! label). A missing credential is not an error: the HTTP facade runs
//! without a gateway connection.

use thiserror::Error;

/// Environment variable holding the bot credential.
pub const BOT_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
/// Environment variable holding the application identity.
pub const APP_ID_VAR: &str = "DISCORD_APP_ID";
/// Environment variable holding the HTTP listen port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the runtime-environment label.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Errors raised while reading the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid {PORT_VAR} value '{value}'")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },

    /// `DISCORD_APP_ID` is not a valid application identifier.
    #[error("invalid {APP_ID_VAR} value '{value}'")]
    InvalidApplicationId {
        /// The rejected value.
        value: String,
    },
}

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bot credential, when configured.
    pub bot_token: Option<String>,
    /// Application identity, when configured. Always non-zero.
    pub application_id: Option<u64>,
    /// HTTP listen port.
    pub port: u16,
    /// Runtime-environment label.
    pub environment: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an injected variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present variable fails to parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bot_token = lookup(BOT_TOKEN_VAR).filter(|token| !token.is_empty());
        let application_id = lookup(APP_ID_VAR)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .ok_or(ConfigError::InvalidApplicationId { value })
            })
            .transpose()?;
        let port = lookup(PORT_VAR)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort { value })
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);
        let environment =
            lookup(ENVIRONMENT_VAR).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
        Ok(Self {
            bot_token,
            application_id,
            port,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).expect("defaults should apply");

        assert_eq!(config.bot_token, None);
        assert_eq!(config.application_id, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn configured_values_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DISCORD_APP_ID", "1234"),
            ("PORT", "8080"),
            ("APP_ENV", "production"),
        ]))
        .expect("configuration should parse");

        assert_eq!(config.bot_token.as_deref(), Some("token"));
        assert_eq!(config.application_id, Some(1234));
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "")]))
            .expect("configuration should parse");

        assert_eq!(config.bot_token, None);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let error = Config::from_lookup(lookup_from(&[("PORT", "eighty")]))
            .expect_err("port should be rejected");

        assert_eq!(
            error,
            ConfigError::InvalidPort {
                value: "eighty".to_owned()
            }
        );
    }

    #[test]
    fn zero_application_id_is_rejected() {
        let error = Config::from_lookup(lookup_from(&[("DISCORD_APP_ID", "0")]))
            .expect_err("zero id should be rejected");

        assert_eq!(
            error,
            ConfigError::InvalidApplicationId {
                value: "0".to_owned()
            }
        );
    }
}
