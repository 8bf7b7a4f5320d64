use crate::{CoreError, PricingUnit, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Material category of accepted or purchased waste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    Plastic,
    Paper,
    Metal,
    /// Priced per item rather than per kilogram
    Glass,
    Mixed,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 5] = [
        WasteCategory::Plastic,
        WasteCategory::Paper,
        WasteCategory::Metal,
        WasteCategory::Glass,
        WasteCategory::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Paper => "paper",
            Self::Metal => "metal",
            Self::Glass => "glass",
            Self::Mixed => "mixed",
        }
    }

    pub fn pricing_unit(&self) -> PricingUnit {
        match self {
            Self::Glass => PricingUnit::Unit,
            _ => PricingUnit::Kilogram,
        }
    }
}

impl FromStr for WasteCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "plastic" | "plastik" => Ok(Self::Plastic),
            "paper" | "qogoz" | "qog'oz" => Ok(Self::Paper),
            "metal" => Ok(Self::Metal),
            "glass" | "shisha" => Ok(Self::Glass),
            "mixed" | "aralash" => Ok(Self::Mixed),
            _ => Err(CoreError::InvalidWasteCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
