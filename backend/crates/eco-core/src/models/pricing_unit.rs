use serde::{Deserialize, Serialize};

/// How the quantity of a waste category is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingUnit {
    Kilogram,
    Unit,
}

impl PricingUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Unit => "pcs",
        }
    }
}
