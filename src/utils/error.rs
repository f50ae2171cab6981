use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Invalid duration {seconds}: {reason}")]
    InvalidDuration { seconds: f64, reason: String },

    #[error("Non-finite number: {value}")]
    NonFiniteNumber { value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl TidyError {
    /// Errors caused by the caller's input rather than configuration or IO.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TidyError::InvalidDuration { .. } | TidyError::NonFiniteNumber { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TidyError>;
