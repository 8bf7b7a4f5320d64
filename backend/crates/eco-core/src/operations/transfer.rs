use crate::operations::operation_state::report_failure;
use crate::{
    CollectionPoint, CoreError, Notification, Notifier, OperationState,
    Result as CoreErrorResult, Role, SessionStore, WasteCategory, find_collection_point,
    format_amount,
};

use std::str::FromStr;

use log::info;

/// Factory payment to a collection point, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct TransferForm {
    pub point_id: String,
    pub waste_type: String,
    pub amount: String,
    state: OperationState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    pub point: &'static CollectionPoint,
    pub waste_type: Option<WasteCategory>,
    pub amount: i64,
    pub balance: i64,
}

impl TransferForm {
    pub fn new(
        point_id: impl Into<String>,
        waste_type: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            point_id: point_id.into(),
            waste_type: waste_type.into(),
            amount: amount.into(),
            state: OperationState::Idle,
        }
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn is_empty(&self) -> bool {
        self.point_id.is_empty() && self.waste_type.is_empty() && self.amount.is_empty()
    }

    pub fn clear(&mut self) {
        self.point_id.clear();
        self.waste_type.clear();
        self.amount.clear();
    }
}

/// Debits the factory balance by the requested amount.
///
/// The one balance path with a pre-commit guard: an amount above the current
/// balance is rejected with `InsufficientFunds` and nothing changes.
pub fn transfer_payment(
    session: &mut SessionStore,
    form: &mut TransferForm,
    notifier: &dyn Notifier,
) -> CoreErrorResult<TransferReceipt> {
    form.state.begin()?;

    let result = commit_transfer(session, form);

    form.state.finish(&result);
    match &result {
        Ok(receipt) => {
            notifier.notify(Notification::success(
                "Payment sent!",
                format!(
                    "{} sent to collection point {}.",
                    format_amount(receipt.amount),
                    receipt.point.label
                ),
            ));
            form.clear();
        }
        Err(e) => report_failure(notifier, e),
    }

    result
}

fn commit_transfer(
    session: &mut SessionStore,
    form: &TransferForm,
) -> CoreErrorResult<TransferReceipt> {
    let available = session.require_role(Role::Factory)?.balance();

    let point_id = form.point_id.trim();
    let amount = form.amount.trim();
    if point_id.is_empty() || amount.is_empty() {
        return Err(CoreError::validation("Please fill in all required fields"));
    }

    let point = find_collection_point(point_id)
        .ok_or_else(|| CoreError::validation(format!("Unknown collection point: {point_id}")))?;

    let waste_type = match form.waste_type.trim() {
        "" => None,
        tag => Some(WasteCategory::from_str(tag)?),
    };

    let amount: i64 = amount
        .parse()
        .map_err(|_| CoreError::validation(format!("Amount must be a whole number, got {amount}")))?;
    if amount <= 0 {
        return Err(CoreError::validation("Amount must be greater than zero"));
    }

    if amount > available {
        return Err(CoreError::insufficient_funds(amount, available));
    }

    session.adjust_balance(-amount);
    let balance = session
        .current_identity()
        .map(|identity| identity.balance())
        .unwrap_or_default();

    info!(
        "Transferred {amount} to {} for {}",
        point.id,
        waste_type.map_or("unspecified", |w| w.as_str())
    );

    Ok(TransferReceipt {
        point,
        waste_type,
        amount,
        balance,
    })
}
