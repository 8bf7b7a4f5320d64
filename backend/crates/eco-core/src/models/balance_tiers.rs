use crate::Role;

use serde::Deserialize;

pub const DEFAULT_END_USER_BALANCE: i64 = 50_000;
pub const DEFAULT_COLLECTION_POINT_BALANCE: i64 = 150_000;
pub const DEFAULT_FACTORY_BALANCE: i64 = 53_546_000;

/// Starting balance handed to a new identity, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BalanceTiers {
    pub end_user: i64,
    pub collection_point: i64,
    pub factory: i64,
}

impl BalanceTiers {
    pub fn initial_balance(&self, role: Role) -> i64 {
        match role {
            Role::EndUser => self.end_user,
            Role::CollectionPoint => self.collection_point,
            Role::Factory => self.factory,
        }
    }
}

impl Default for BalanceTiers {
    fn default() -> Self {
        Self {
            end_user: DEFAULT_END_USER_BALANCE,
            collection_point: DEFAULT_COLLECTION_POINT_BALANCE,
            factory: DEFAULT_FACTORY_BALANCE,
        }
    }
}
