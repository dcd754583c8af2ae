use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Raised by the default `perform_call` of a service that never overrode it.
    #[error("Service objects must implement perform_call")]
    NotImplemented { service: &'static str },

    #[error("Service panicked: {message}")]
    Panicked { message: String },

    #[error("{message}")]
    Failed { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown service: {name}")]
    UnknownServiceError { name: String },
}

impl ServiceError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn not_implemented(service: &'static str) -> Self {
        Self::NotImplemented { service }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
