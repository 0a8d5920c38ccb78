use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File, FileFormat};
use std::path::Path;

use crate::config::{MigratorConfig, RegistryConfig};
use crate::migrator::TierNameMigrator;
use crate::models::Result;
use crate::registry::TierRegistry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub registry: RegistryConfig,
    pub migrator: MigratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "GoalCoin Tiers".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
                environment: Environment::Development,
            },
            registry: RegistryConfig::default(),
            migrator: MigratorConfig::default(),
        }
    }
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("GOALCOIN_TIERS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    /// Layer an inline TOML document over the defaults.
    pub fn from_toml_str(document: &str) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?;

        s.try_deserialize()
    }

    pub fn build_registry(&self) -> Result<TierRegistry> {
        TierRegistry::from_config(&self.registry)
    }

    pub fn build_migrator(&self) -> Result<TierNameMigrator> {
        TierNameMigrator::from_config(&self.migrator)
    }

    pub fn validate(&self) -> Result<()> {
        self.build_registry()?;
        self.build_migrator()?;
        Ok(())
    }
}
