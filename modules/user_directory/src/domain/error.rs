use thiserror::Error;

use crate::contract::error::UserDirectoryError;

/// Failures of the user data source. The view state is never touched when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid source URL '{url}': {message}")]
    InvalidSourceUrl { url: String, message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Unexpected HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed users document: {message}")]
    Decode { message: String },
}

impl DomainError {
    pub fn invalid_source_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSourceUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<DomainError> for UserDirectoryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidSourceUrl { url, message } => {
                UserDirectoryError::configuration(format!("invalid URL '{url}': {message}"))
            }
            DomainError::Transport { message } => UserDirectoryError::unavailable(message),
            DomainError::HttpStatus { status } => {
                UserDirectoryError::unavailable(format!("HTTP status {status}"))
            }
            DomainError::Decode { message } => UserDirectoryError::invalid_data(message),
        }
    }
}
