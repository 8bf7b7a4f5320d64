use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Dashboard role of an identity. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Household user submitting waste
    #[default]
    #[serde(rename = "user")]
    EndUser,
    /// Waste collection point paying out for accepted waste
    #[serde(rename = "collection-point")]
    CollectionPoint,
    /// Factory paying collection points for delivered material
    #[serde(rename = "factory")]
    Factory,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::EndUser, Role::CollectionPoint, Role::Factory];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndUser => "user",
            Self::CollectionPoint => "collection-point",
            Self::Factory => "factory",
        }
    }

    /// Whether identities of this role carry a physical location.
    pub fn has_location(&self) -> bool {
        !matches!(self, Self::EndUser)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "user" => Ok(Self::EndUser),
            "collection-point" => Ok(Self::CollectionPoint),
            "factory" => Ok(Self::Factory),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
