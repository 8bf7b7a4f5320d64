pub mod accept;
pub mod operation_state;
pub mod transfer;
pub mod waste_submission;
