use crate::Role;

use serde::Serialize;
use uuid::Uuid;

/// The single authenticated session's data record.
///
/// Only the session store can construct an identity or change its balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub(crate) id: Uuid,
    pub(crate) display_name: String,
    pub(crate) role: Role,
    pub(crate) balance: i64,
    pub(crate) location: Option<String>,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
