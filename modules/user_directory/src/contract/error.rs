use thiserror::Error;

/// Errors that are safe to expose to consumers of the directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserDirectoryError {
    #[error("User source unavailable: {message}")]
    Unavailable { message: String },

    #[error("User source returned invalid data: {message}")]
    InvalidData { message: String },

    #[error("User source misconfigured: {message}")]
    Configuration { message: String },
}

impl UserDirectoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
