use crate::operations::operation_state::report_failure;
use crate::{
    ActivityLog, ActivityRecord, CoreError, Notification, Notifier, OperationState, PriceTable,
    Result as CoreErrorResult, Role, SessionStore, WasteCategory, format_amount,
};

use chrono::Utc;
use log::info;

/// Collection-point intake form: scanned counterpart code, material and quantity.
#[derive(Debug, Clone, Default)]
pub struct AcceptForm {
    pub counterpart: String,
    pub category: Option<WasteCategory>,
    /// Kilograms, or item count for unit-priced categories
    pub quantity: String,
    pub(crate) state: OperationState,
}

/// Validated intake, ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptRequest {
    pub counterpart: String,
    pub category: WasteCategory,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcceptReceipt {
    pub total: i64,
    pub record: ActivityRecord,
    pub balance: i64,
}

impl AcceptForm {
    pub fn new(
        counterpart: impl Into<String>,
        category: WasteCategory,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            counterpart: counterpart.into(),
            category: Some(category),
            quantity: quantity.into(),
            state: OperationState::Idle,
        }
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn clear(&mut self) {
        self.counterpart.clear();
        self.category = None;
        self.quantity.clear();
    }

    #[track_caller]
    pub fn to_request(&self) -> CoreErrorResult<AcceptRequest> {
        let counterpart = self.counterpart.trim();
        let quantity = self.quantity.trim();
        let category = match self.category {
            Some(category) if !counterpart.is_empty() && !quantity.is_empty() => category,
            _ => return Err(CoreError::validation("Please fill in all required fields")),
        };

        let quantity: f64 = quantity
            .parse()
            .map_err(|_| CoreError::validation(format!("Quantity must be a number, got {quantity}")))?;

        Ok(AcceptRequest {
            counterpart: counterpart.to_string(),
            category,
            quantity,
        })
    }
}

/// Commits an intake: the collection point pays out `quantity × unit price`
/// from its own balance and the delivery is logged.
///
/// Affordability is not checked; the balance may go negative.
pub fn accept_waste(
    session: &mut SessionStore,
    activity: &mut ActivityLog,
    prices: &PriceTable,
    request: &AcceptRequest,
    notifier: &dyn Notifier,
) -> CoreErrorResult<AcceptReceipt> {
    let result = commit_accept(session, activity, prices, request);

    match &result {
        Ok(receipt) => notifier.notify(Notification::success(
            "Waste accepted!",
            format!(
                "{} {} {} from {}. {}",
                request.quantity,
                request.category.pricing_unit().suffix(),
                request.category,
                request.counterpart,
                format_amount(-receipt.total)
            ),
        )),
        Err(e) => report_failure(notifier, e),
    }

    result
}

/// Synchronous intake without a scan delay.
pub fn submit_accept(
    session: &mut SessionStore,
    activity: &mut ActivityLog,
    prices: &PriceTable,
    form: &mut AcceptForm,
    notifier: &dyn Notifier,
) -> CoreErrorResult<AcceptReceipt> {
    form.state.begin()?;

    let result = form
        .to_request()
        .and_then(|request| accept_waste(session, activity, prices, &request, notifier));

    form.state.finish(&result);
    if result.is_ok() {
        form.clear();
    }

    result
}

fn commit_accept(
    session: &mut SessionStore,
    activity: &mut ActivityLog,
    prices: &PriceTable,
    request: &AcceptRequest,
) -> CoreErrorResult<AcceptReceipt> {
    session.require_role(Role::CollectionPoint)?;
    if request.counterpart.trim().is_empty() {
        return Err(CoreError::validation("Scanned code is empty"));
    }

    let total = prices.total(request.category, request.quantity)?;

    session.adjust_balance(-total);
    let record = ActivityRecord {
        time: Utc::now(),
        category: request.category,
        quantity: request.quantity,
        amount: -total,
    };
    activity.push(record.clone());

    let balance = session
        .current_identity()
        .map(|identity| identity.balance())
        .unwrap_or_default();

    info!(
        "Accepted {} {} of {} from {} for {total}",
        request.quantity,
        request.category.pricing_unit().suffix(),
        request.category,
        request.counterpart
    );

    Ok(AcceptReceipt {
        total,
        record,
        balance,
    })
}
