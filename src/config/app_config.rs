use serde::Deserialize;

use crate::domain::PermissionLevel;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Defaults applied when registering accounts
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AccountsConfig {
    /// Tier given to new accounts when none is requested
    #[serde(default)]
    pub default_permission_level: PermissionLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(
            config.accounts.default_permission_level,
            PermissionLevel::Viewer
        );
    }

    #[test]
    fn test_deserialize_partial_sources() {
        let config: AppConfig = config::Config::builder()
            .set_override("logging.level", "debug")
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .set_override("accounts.default_permission_level", "author")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.accounts.default_permission_level,
            PermissionLevel::Author
        );
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.accounts.default_permission_level,
            PermissionLevel::Viewer
        );
    }
}
