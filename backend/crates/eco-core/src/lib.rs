//! Session and balance model of the EcoChain recycling dashboard.
//!
//! One [`SessionStore`] owns the single live [`Identity`]; the role router
//! maps it to a dashboard view, and the per-role operations mutate its
//! balance only through the store.

pub mod error;
pub mod format;
pub mod models;
pub mod notification;
pub mod operations;
pub mod role_router;
pub mod scanner;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use error::{CoreError, ErrorKind, Result};
pub use format::{format_amount, group_thousands};
pub use models::activity_log::{ActivityLog, DEFAULT_ACTIVITY_LOG_CAPACITY};
pub use models::activity_record::ActivityRecord;
pub use models::balance_tiers::BalanceTiers;
pub use models::collection_point::{COLLECTION_POINTS, CollectionPoint, find_collection_point};
pub use models::identity::Identity;
pub use models::price_table::PriceTable;
pub use models::pricing_unit::PricingUnit;
pub use models::role::Role;
pub use models::view_kind::ViewKind;
pub use models::waste_category::WasteCategory;
pub use notification::{LogNotifier, MemoryNotifier, Notification, Notifier, Severity};
pub use operations::accept::{
    AcceptForm, AcceptReceipt, AcceptRequest, accept_waste, submit_accept,
};
pub use operations::operation_state::OperationState;
pub use operations::transfer::{TransferForm, TransferReceipt, transfer_payment};
pub use operations::waste_submission::{WasteSubmissionForm, submit_waste};
pub use role_router::{resolve_view, resolve_view_tag, view_for_role};
pub use scanner::{DEFAULT_SCAN_DELAY, ScanTask, Scanner};
pub use session_store::{DEFAULT_LOCATION, SessionStore, SharedSession};
