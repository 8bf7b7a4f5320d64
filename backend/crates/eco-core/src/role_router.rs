use crate::{Identity, Role, ViewKind};

use std::str::FromStr;

/// View responsible for the given session, or the login view without one.
pub fn resolve_view(identity: Option<&Identity>) -> ViewKind {
    match identity {
        None => ViewKind::LoginView,
        Some(identity) => view_for_role(identity.role()),
    }
}

/// Resolves a raw role tag, e.g. one read back from local storage.
///
/// Unknown tags fall back to the login view.
pub fn resolve_view_tag(tag: Option<&str>) -> ViewKind {
    match tag.map(Role::from_str) {
        Some(Ok(role)) => view_for_role(role),
        _ => ViewKind::LoginView,
    }
}

pub fn view_for_role(role: Role) -> ViewKind {
    match role {
        Role::EndUser => ViewKind::UserView,
        Role::CollectionPoint => ViewKind::CollectionPointView,
        Role::Factory => ViewKind::FactoryView,
    }
}
