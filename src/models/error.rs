use thiserror::Error;

#[derive(Error, Debug)]
pub enum TierError {
    #[error("Tier registry must contain at least one tier")]
    EmptyRegistry,

    #[error("Duplicate tier key: {0}")]
    DuplicateKey(String),

    #[error("Default tier key {0} is not in the registry")]
    UnknownDefaultKey(String),

    #[error("Invalid {field} for tier {key}: {value} (must be >= 1.0)")]
    InvalidMultiplier { key: String, field: &'static str, value: f64 },

    #[error("Invalid streak cap for tier {0}: must be positive")]
    InvalidStreakCap(String),

    #[error("Invalid price for tier {key}: {price}")]
    InvalidPrice { key: String, price: String },

    #[error("Legacy alias {alias} points at unknown display name {target}")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("Duplicate tier display name: {0}")]
    DuplicateName(String),

    #[error("Duplicate legacy alias: {0}")]
    DuplicateAlias(String),

    #[error("Default display name {0} is not a current tier name")]
    UnknownDefaultName(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Global {0} already installed")]
    AlreadyInstalled(&'static str),
}

pub type Result<T> = std::result::Result<T, TierError>;
