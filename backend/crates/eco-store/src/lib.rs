//! Local key-value storage mirrored by the dashboard views: the remembered
//! display name, UI language, session token and the capped collection log.
//!
//! Nothing here is authoritative for balances.

pub mod error;
pub mod keys;
pub mod language;
pub mod local_store;


pub use error::{Result as StoreResult, StoreError};
pub use keys::{COLLECTIONS_KEY, LANGUAGE_KEY, TOKEN_KEY, USERNAME_KEY};
pub use language::Language;
pub use local_store::LocalStore;
