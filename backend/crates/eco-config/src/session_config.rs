use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COLLECTION_POINT_BALANCE, DEFAULT_END_USER_BALANCE,
    DEFAULT_FACTORY_BALANCE, DEFAULT_LOCATION,
};

use serde::Deserialize;

/// Starting balances per role and the placeholder location of non-user roles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub end_user_balance: i64,
    pub collection_point_balance: i64,
    pub factory_balance: i64,
    pub location: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            end_user_balance: DEFAULT_END_USER_BALANCE,
            collection_point_balance: DEFAULT_COLLECTION_POINT_BALANCE,
            factory_balance: DEFAULT_FACTORY_BALANCE,
            location: String::from(DEFAULT_LOCATION),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("end_user_balance", self.end_user_balance),
            ("collection_point_balance", self.collection_point_balance),
            ("factory_balance", self.factory_balance),
        ] {
            if value < 0 {
                return Err(ConfigError::session(format!(
                    "session.{name} must not be negative, got {value}"
                )));
            }
        }

        if !(self.end_user_balance < self.collection_point_balance
            && self.collection_point_balance < self.factory_balance)
        {
            return Err(ConfigError::session(format!(
                "session balances must rise from end_user < collection_point < factory, got {} / {} / {}",
                self.end_user_balance, self.collection_point_balance, self.factory_balance
            )));
        }

        if self.location.trim().is_empty() {
            return Err(ConfigError::session("session.location must not be empty"));
        }

        Ok(())
    }
}
