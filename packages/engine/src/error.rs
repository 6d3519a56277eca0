use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

pub type PropsResult<T> = Result<T, PropsError>;

/// Errors raised while defining a style function. These come from static
/// config data, so they are reported once at construction and never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Circular extend chain detected: {chain}")]
    CircularExtend { chain: String },

    #[error("Config '{name}' extends '{parent}', which is not registered")]
    UnknownParent { name: String, parent: String },

    #[error("Config '{name}' not found in registry")]
    NotFound { name: String },

    #[error("Slot '{slot}' used by {location} is not declared")]
    UnknownSlot { slot: String, location: String },

    #[error("Default '{value}' for variant '{variant}' is not declared")]
    UnknownDefault { variant: String, value: String },

    #[error("Invalid style config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejections from the opt-in strict prop checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    #[error("Unknown variant '{name}'")]
    UnknownVariant { name: String },

    #[error("Unknown value '{value}' for variant '{variant}'")]
    UnknownValue { variant: String, value: String },

    #[error("Unknown slot '{slot}' in classNames")]
    UnknownSlot { slot: String },
}
