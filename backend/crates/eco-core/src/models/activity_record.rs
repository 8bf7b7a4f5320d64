use crate::{PricingUnit, WasteCategory};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted delivery at a collection point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub time: DateTime<Utc>,
    pub category: WasteCategory,
    pub quantity: f64,
    /// Signed balance effect; payouts are negative
    pub amount: i64,
}

impl ActivityRecord {
    pub fn unit(&self) -> PricingUnit {
        self.category.pricing_unit()
    }
}
