pub mod settings;
pub mod tiers;

pub use settings::{AppSettings, Environment, Settings};
pub use tiers::{LegacyAlias, MigratorConfig, RegistryConfig, TierEntry, TierNameEntry};
