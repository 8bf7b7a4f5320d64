pub mod activity_log;
pub mod activity_record;
pub mod balance_tiers;
pub mod collection_point;
pub mod identity;
pub mod price_table;
pub mod pricing_unit;
pub mod role;
pub mod view_kind;
pub mod waste_category;
