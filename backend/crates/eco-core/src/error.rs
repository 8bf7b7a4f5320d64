use crate::Role;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coarse classification used by rendering surfaces to decide where an
/// error is shown (inline next to the form or as a notification).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InsufficientFunds,
    RemoteFailure,
    Session,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Insufficient funds: requested {requested}, available {available} {location}")]
    InsufficientFunds {
        requested: i64,
        available: i64,
        location: ErrorLocation,
    },

    #[error("No active session {location}")]
    NoSession { location: ErrorLocation },

    #[error("Operation requires role {expected}, session has {actual} {location}")]
    RoleMismatch {
        expected: Role,
        actual: Role,
        location: ErrorLocation,
    },

    #[error("Session changed before the scheduled operation completed {location}")]
    StaleSession { location: ErrorLocation },

    #[error("Scheduled operation was cancelled {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid waste category: {value} {location}")]
    InvalidWasteCategory {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn insufficient_funds(requested: i64, available: i64) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_session() -> Self {
        Self::NoSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn role_mismatch(expected: Role, actual: Role) -> Self {
        Self::RoleMismatch {
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stale_session() -> Self {
        Self::StaleSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. }
            | Self::InvalidRole { .. }
            | Self::InvalidWasteCategory { .. } => ErrorKind::Validation,
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::NoSession { .. }
            | Self::RoleMismatch { .. }
            | Self::StaleSession { .. }
            | Self::Cancelled { .. } => ErrorKind::Session,
        }
    }

    /// Human-readable reason, without source locations, for the notification sink.
    pub fn reason(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InsufficientFunds { .. } => String::from("Insufficient funds in the account."),
            Self::NoSession { .. } => String::from("Please log in first."),
            Self::RoleMismatch { expected, .. } => {
                format!("This action is only available to the {expected} role.")
            }
            Self::StaleSession { .. } => {
                String::from("The session ended before the scan completed.")
            }
            Self::Cancelled { .. } => String::from("The scan was cancelled."),
            Self::InvalidRole { value, .. } => format!("Unknown role: {value}"),
            Self::InvalidWasteCategory { value, .. } => format!("Unknown waste type: {value}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
