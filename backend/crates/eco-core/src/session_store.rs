use crate::{BalanceTiers, CoreError, Identity, Result as CoreErrorResult, Role};

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DEFAULT_LOCATION: &str = "Toshkent, O'zbekiston";

/// Handle shared by every view and by deferred work.
pub type SharedSession = Arc<RwLock<SessionStore>>;

/// Owner of the single live identity.
///
/// All balance changes go through [`SessionStore::adjust_balance`]; no
/// other component keeps its own copy of the balance.
#[derive(Debug, Clone)]
pub struct SessionStore {
    identity: Option<Identity>,
    tiers: BalanceTiers,
    location: String,
}

impl SessionStore {
    pub fn new(tiers: BalanceTiers, location: impl Into<String>) -> Self {
        Self {
            identity: None,
            tiers,
            location: location.into(),
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    pub fn tiers(&self) -> &BalanceTiers {
        &self.tiers
    }

    /// Local mock credential check: any non-empty username and password is
    /// accepted.
    #[track_caller]
    pub fn login(&mut self, username: &str, password: &str, role: Role) -> CoreErrorResult<&Identity> {
        if password.trim().is_empty() {
            return Err(CoreError::validation("Please fill in all required fields"));
        }
        self.create_session(username, role)
    }

    /// Replaces any existing identity with a fresh one for `role`.
    #[track_caller]
    pub fn create_session(&mut self, display_name: &str, role: Role) -> CoreErrorResult<&Identity> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(CoreError::validation("Please fill in all required fields"));
        }

        if let Some(previous) = &self.identity {
            debug!("Replacing session {} ({})", previous.id, previous.role);
        }

        let identity = Identity {
            id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            role,
            balance: self.tiers.initial_balance(role),
            location: role.has_location().then(|| self.location.clone()),
        };

        info!(
            "Session created: {} as {} (balance {})",
            identity.display_name, identity.role, identity.balance
        );

        Ok(self.identity.insert(identity))
    }

    /// Clears the identity. Safe to call without an active session.
    pub fn destroy_session(&mut self) {
        if let Some(identity) = self.identity.take() {
            info!("Session destroyed: {}", identity.display_name);
        }
    }

    /// Adds a signed delta to the balance. Sufficiency is the caller's concern.
    pub fn adjust_balance(&mut self, delta: i64) {
        if let Some(identity) = self.identity.as_mut() {
            identity.balance = identity.balance.saturating_add(delta);
            debug!(
                "Balance of {} adjusted by {delta} to {}",
                identity.display_name, identity.balance
            );
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Current identity if it has `role`.
    #[track_caller]
    pub fn require_role(&self, role: Role) -> CoreErrorResult<&Identity> {
        let identity = self.identity.as_ref().ok_or_else(CoreError::no_session)?;
        if identity.role != role {
            return Err(CoreError::role_mismatch(role, identity.role));
        }
        Ok(identity)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(BalanceTiers::default(), DEFAULT_LOCATION)
    }
}
