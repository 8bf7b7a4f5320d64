mod accept;
mod activity_log;
mod transfer;

use crate::{BalanceTiers, Role, SessionStore};

/// Store with a live session for `role`.
pub(crate) fn session_as(role: Role) -> SessionStore {
    let mut store = SessionStore::default();
    store.create_session("tester", role).unwrap();
    store
}

/// Store whose factory tier starts at `balance`.
pub(crate) fn factory_with_balance(balance: i64) -> SessionStore {
    let tiers = BalanceTiers {
        factory: balance,
        ..BalanceTiers::default()
    };
    let mut store = SessionStore::new(tiers, crate::DEFAULT_LOCATION);
    store.create_session("factory", Role::Factory).unwrap();
    store
}
