use crate::{CoreError, PricingUnit, Result as CoreErrorResult, WasteCategory};

pub const DEFAULT_PRICE_PER_KG: i64 = 2000;
pub const DEFAULT_PRICE_PER_UNIT: i64 = 500;

/// Fixed payout prices used by collection points.
///
/// Weight-priced categories share one per-kilogram price; unit-priced
/// categories (glass) share one per-item price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    per_kg: i64,
    per_unit: i64,
}

impl PriceTable {
    pub fn new(per_kg: i64, per_unit: i64) -> Self {
        Self { per_kg, per_unit }
    }

    pub fn unit_price(&self, category: WasteCategory) -> i64 {
        match category.pricing_unit() {
            PricingUnit::Kilogram => self.per_kg,
            PricingUnit::Unit => self.per_unit,
        }
    }

    /// Payout for `quantity` of `category`, rounded to whole currency units.
    ///
    /// Quantities must be positive and finite; unit-priced categories also
    /// require a whole number of items.
    #[track_caller]
    pub fn total(&self, category: WasteCategory, quantity: f64) -> CoreErrorResult<i64> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::validation(format!(
                "Quantity must be a positive number, got {quantity}"
            )));
        }

        if category.pricing_unit() == PricingUnit::Unit && quantity.fract() != 0.0 {
            return Err(CoreError::validation(format!(
                "{category} is counted in whole items, got {quantity}"
            )));
        }

        let total = (quantity * self.unit_price(category) as f64).round();
        if total > i64::MAX as f64 {
            return Err(CoreError::validation("Quantity is too large"));
        }

        Ok(total as i64)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_PER_KG, DEFAULT_PRICE_PER_UNIT)
    }
}
