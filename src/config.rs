use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "council-desk.yaml";
pub const ENV_PREFIX: &str = "COUNCIL_DESK_";

/// Desktop client configuration.
///
/// Sources, lowest to highest priority:
/// 1. Struct defaults
/// 2. `council-desk.yaml` (if present)
/// 3. `COUNCIL_DESK_` environment variables, nested keys split on `__`
///    (e.g. `COUNCIL_DESK_API__BASE_URL`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the tracking backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_width() -> f32 {
    960.0
}

fn default_height() -> f32 {
    640.0
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    /// Returns an error if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if a source cannot be parsed or a value is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be an http(s) URL, got '{base_url}'"
            )));
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Validation(
                "window.width and window.height must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert!(config.api.token.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                api:
                  base_url: "https://tracker.example.org"
                logging:
                  level: "debug"
                "#,
            )?;
            jail.set_env("COUNCIL_DESK_API__BASE_URL", "https://staging.example.org");
            jail.set_env("COUNCIL_DESK_API__TOKEN", "secret");

            let config = Config::load().expect("config loads");
            assert_eq!(config.api.base_url, "https://staging.example.org");
            assert_eq!(config.api.token.as_deref(), Some("secret"));
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn base_url_boundaries() {
        let cases = [
            ("http://localhost:5000", true, "plain http"),
            ("https://tracker.example.org", true, "https"),
            ("localhost:5000", false, "no scheme"),
            ("ftp://files.example.org", false, "ftp scheme"),
            ("", false, "empty"),
        ];

        for (url, should_pass, desc) in cases {
            let mut config = Config::default();
            config.api.base_url = url.into();
            let result = config.validate();
            assert_eq!(result.is_ok(), should_pass, "case '{}': {:?}", desc, result);
        }
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut config = Config::default();
        config.window.width = 0.0;
        assert!(config.validate().is_err());
    }
}
