use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    defaults: DefaultsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("LOCSIM").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
}

impl Core {
    /// Falls back to `INFO` for unknown levels.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Deserialize)]
pub struct DefaultsConfig {
    path: String,
}

impl DefaultsConfig {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "info".to_string(),
                },
                defaults: DefaultsConfig {
                    path: "defaults.json".to_string(),
                },
            },
        }
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.core.log_level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("debug", Level::DEBUG)]
    #[case("WARN", Level::WARN)]
    #[case("trace", Level::TRACE)]
    #[case("loud", Level::INFO)]
    fn parses_the_log_level(#[case] level: &str, #[case] expected: Level) {
        let config = AppConfigBuilder::new().log_level(level).build();
        assert_eq!(config.core().log_level(), expected);
    }

    #[test]
    fn deserializes_from_toml() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                r#"
                [core]
                log_level = "debug"

                [defaults]
                path = "/tmp/defaults.json"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.core().log_level(), Level::DEBUG);
        assert_eq!(config.defaults().path(), "/tmp/defaults.json");
    }
}
