use eco_core::{CoreError, ErrorKind};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const CONNECTIVITY_FAILURE: &str = "Could not reach the authentication service";

/// Errors that can occur during the credential exchange
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status {status}: {message:?} {location}")]
    Status {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("Malformed response: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rejected by server: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session error: {0}")]
    Session(#[from] CoreError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16, message: Option<String>) -> Self {
        ClientError::Status {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        ClientError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. }
            | Self::Json { .. }
            | Self::Status { .. }
            | Self::Rejected { .. } => ErrorKind::RemoteFailure,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Session(e) => e.kind(),
        }
    }

    /// Human-readable reason: the server's message when it sent one,
    /// otherwise a generic connectivity failure.
    pub fn reason(&self) -> String {
        match self {
            Self::Http { .. } | Self::Json { .. } => String::from(CONNECTIVITY_FAILURE),
            Self::Status { message, .. } => message
                .clone()
                .unwrap_or_else(|| String::from(CONNECTIVITY_FAILURE)),
            Self::Rejected { message, .. } | Self::Validation { message, .. } => message.clone(),
            Self::Session(e) => e.reason(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
