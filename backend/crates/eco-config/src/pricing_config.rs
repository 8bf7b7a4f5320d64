use crate::{ConfigError, ConfigErrorResult, DEFAULT_PRICE_PER_KG, DEFAULT_PRICE_PER_UNIT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Payout per kilogram for weight-priced categories
    pub per_kg: i64,
    /// Payout per item for unit-priced categories (glass)
    pub per_unit: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_kg: DEFAULT_PRICE_PER_KG,
            per_unit: DEFAULT_PRICE_PER_UNIT,
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.per_kg <= 0 || self.per_unit <= 0 {
            return Err(ConfigError::pricing(format!(
                "pricing.per_kg and pricing.per_unit must be positive, got {} and {}",
                self.per_kg, self.per_unit
            )));
        }

        Ok(())
    }
}
