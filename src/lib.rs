pub mod models;
pub mod config;
pub mod registry;
pub mod migrator;

pub use models::{TierDescriptor, TierError, TierId, TierPresentation, Result};
pub use crate::config::Settings;
pub use registry::TierRegistry;
pub use migrator::TierNameMigrator;

// Re-export commonly used types
pub use rust_decimal::Decimal;
