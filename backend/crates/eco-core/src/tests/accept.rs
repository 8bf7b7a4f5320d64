use crate::tests::session_as;
use crate::{
    AcceptForm, AcceptRequest, ActivityLog, CoreError, ErrorKind, MemoryNotifier,
    OperationState, PriceTable, Role, WasteCategory, accept_waste, submit_accept,
};

fn request(category: WasteCategory, quantity: f64) -> AcceptRequest {
    AcceptRequest {
        counterpart: String::from("QR-USER-42"),
        category,
        quantity,
    }
}

#[test]
fn given_glass_count_when_accept_then_unit_priced_total_paid_out() {
    // Given
    let mut store = session_as(Role::CollectionPoint);
    let mut activity = ActivityLog::default();
    let notifier = MemoryNotifier::new();
    let mut form = AcceptForm::new("QR-USER-42", "shisha".parse().unwrap(), "10");

    // When
    let receipt = submit_accept(
        &mut store,
        &mut activity,
        &PriceTable::default(),
        &mut form,
        &notifier,
    )
    .unwrap();

    // Then
    assert_eq!(receipt.total, 5_000);
    assert_eq!(receipt.balance, 145_000);
    assert_eq!(store.current_identity().unwrap().balance(), 145_000);
    assert_eq!(activity.len(), 1);

    let record = activity.latest().unwrap();
    assert_eq!(record.category, WasteCategory::Glass);
    assert_eq!(record.quantity, 10.0);
    assert_eq!(record.amount, -5_000);

    assert_eq!(form.state(), &OperationState::Committed);
    assert!(form.counterpart.is_empty());
    assert!(!notifier.last().unwrap().is_error());
}

#[test]
fn given_weight_category_when_accept_then_per_kg_total() {
    let mut store = session_as(Role::CollectionPoint);
    let mut activity = ActivityLog::default();

    let receipt = accept_waste(
        &mut store,
        &mut activity,
        &PriceTable::default(),
        &request(WasteCategory::Plastic, 3.2),
        &MemoryNotifier::new(),
    )
    .unwrap();

    assert_eq!(receipt.total, 6_400);
    assert_eq!(store.current_identity().unwrap().balance(), 143_600);
}

#[test]
fn given_payout_above_balance_when_accept_then_committed_without_guard() {
    let mut store = session_as(Role::CollectionPoint);
    let mut activity = ActivityLog::default();

    accept_waste(
        &mut store,
        &mut activity,
        &PriceTable::default(),
        &request(WasteCategory::Metal, 100.0),
        &MemoryNotifier::new(),
    )
    .unwrap();

    assert_eq!(store.current_identity().unwrap().balance(), -50_000);
}

#[test]
fn given_factory_session_when_accept_then_role_mismatch_and_nothing_logged() {
    let mut store = session_as(Role::Factory);
    let mut activity = ActivityLog::default();
    let notifier = MemoryNotifier::new();

    let err = accept_waste(
        &mut store,
        &mut activity,
        &PriceTable::default(),
        &request(WasteCategory::Paper, 1.0),
        &notifier,
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::RoleMismatch { .. }));
    assert!(activity.is_empty());
    assert!(notifier.last().unwrap().is_error());
}

#[test]
fn given_fractional_glass_count_when_accept_then_validation_error() {
    let mut store = session_as(Role::CollectionPoint);
    let mut activity = ActivityLog::default();

    let err = accept_waste(
        &mut store,
        &mut activity,
        &PriceTable::default(),
        &request(WasteCategory::Glass, 2.5),
        &MemoryNotifier::new(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(store.current_identity().unwrap().balance(), 150_000);
    assert!(activity.is_empty());
}

#[test]
fn given_incomplete_form_when_submit_accept_then_rejected_inline() {
    let mut store = session_as(Role::CollectionPoint);
    let mut activity = ActivityLog::default();
    let notifier = MemoryNotifier::new();
    let mut form = AcceptForm {
        counterpart: String::from("QR-1"),
        ..AcceptForm::default()
    };

    let err = submit_accept(
        &mut store,
        &mut activity,
        &PriceTable::default(),
        &mut form,
        &notifier,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(form.state().rejection().is_some());
    assert_eq!(form.counterpart, "QR-1");
    assert!(notifier.notifications().is_empty());
}

#[test]
fn given_non_numeric_quantity_when_to_request_then_validation_error() {
    let form = AcceptForm::new("QR-1", WasteCategory::Paper, "lots");

    let err = form.to_request().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}
