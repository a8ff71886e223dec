//! Start-up settings for the UI host, read from the environment.

use std::env;

use thiserror::Error;

pub const HOST_VAR: &str = "JOBMATCH_UI_HOST";
pub const PORT_VAR: &str = "JOBMATCH_UI_PORT";
pub const OPEN_BROWSER_VAR: &str = "JOBMATCH_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3006;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a port number between 0 and 65535, got `{value}`")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be one of true/false/1/0/yes/no, got `{value}`")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyHost { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiHostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for UiHostConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl UiHostConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            let host = host.trim();
            if host.is_empty() {
                return Err(ConfigError::EmptyHost { var: HOST_VAR });
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value: port.clone(),
                })?;
        }

        if let Some(flag) = lookup(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag).ok_or(ConfigError::InvalidFlag {
                var: OPEN_BROWSER_VAR,
                value: flag.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<UiHostConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UiHostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, UiHostConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:3006");
        assert!(config.open_browser);
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 8080 "),
            (OPEN_BROWSER_VAR, "no"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.open_browser);
    }

    #[test]
    fn browser_flag_accepts_common_spellings() {
        for (raw, expected) in [
            ("true", true),
            ("TRUE", true),
            ("1", true),
            ("yes", true),
            ("false", false),
            ("0", false),
            ("No", false),
        ] {
            let config = load(&[(OPEN_BROWSER_VAR, raw)]).unwrap();
            assert_eq!(config.open_browser, expected, "flag `{raw}`");
        }
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            load(&[(PORT_VAR, "70000")]).unwrap_err(),
            ConfigError::InvalidPort {
                var: PORT_VAR,
                value: "70000".into()
            }
        );
        assert!(matches!(
            load(&[(OPEN_BROWSER_VAR, "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert_eq!(
            load(&[(HOST_VAR, "  ")]).unwrap_err(),
            ConfigError::EmptyHost { var: HOST_VAR }
        );
    }
}
