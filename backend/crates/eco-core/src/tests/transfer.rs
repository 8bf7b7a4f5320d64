use crate::tests::{factory_with_balance, session_as};
use crate::{
    CoreError, ErrorKind, MemoryNotifier, OperationState, Role, SessionStore, Severity,
    TransferForm, WasteCategory, transfer_payment,
};

fn balance(store: &SessionStore) -> i64 {
    store.current_identity().unwrap().balance()
}

// =========================================================================
// Happy Path
// =========================================================================

#[test]
fn given_factory_session_when_transfer_within_balance_then_committed_and_form_cleared() {
    // Given
    let mut store = session_as(Role::Factory);
    let notifier = MemoryNotifier::new();
    let mut form = TransferForm::new("point1", "plastic", "1000000");

    // When
    let receipt = transfer_payment(&mut store, &mut form, &notifier).unwrap();

    // Then
    assert_eq!(balance(&store), 52_546_000);
    assert_eq!(receipt.amount, 1_000_000);
    assert_eq!(receipt.balance, 52_546_000);
    assert_eq!(receipt.point.id, "point1");
    assert_eq!(receipt.waste_type, Some(WasteCategory::Plastic));
    assert!(form.is_empty());
    assert_eq!(form.state(), &OperationState::Committed);

    let notification = notifier.last().unwrap();
    assert_eq!(notification.severity, Severity::Success);
    assert!(notification.description.contains("1,000,000 so'm"));
}

#[test]
fn given_amount_equal_to_balance_when_transfer_then_balance_zero() {
    let mut store = factory_with_balance(500_000);
    let notifier = MemoryNotifier::new();
    let mut form = TransferForm::new("point2", "", "500000");

    transfer_payment(&mut store, &mut form, &notifier).unwrap();

    assert_eq!(balance(&store), 0);
}

#[test]
fn given_committed_transfer_when_repeated_then_validated_against_new_balance() {
    let mut store = factory_with_balance(1_500_000);
    let notifier = MemoryNotifier::new();

    let mut first = TransferForm::new("point1", "metal", "1000000");
    transfer_payment(&mut store, &mut first, &notifier).unwrap();

    let mut second = TransferForm::new("point1", "metal", "1000000");
    let err = transfer_payment(&mut store, &mut second, &notifier).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    assert_eq!(balance(&store), 500_000);
}

// =========================================================================
// Rejections
// =========================================================================

#[test]
fn given_amount_above_balance_when_transfer_then_insufficient_funds_and_unchanged() {
    // Given
    let mut store = factory_with_balance(500_000);
    let notifier = MemoryNotifier::new();
    let mut form = TransferForm::new("point1", "plastic", "600000");

    // When
    let err = transfer_payment(&mut store, &mut form, &notifier).unwrap_err();

    // Then
    assert!(matches!(
        err,
        CoreError::InsufficientFunds {
            requested: 600_000,
            available: 500_000,
            ..
        }
    ));
    assert_eq!(balance(&store), 500_000);
    assert_eq!(form.amount, "600000");
    assert!(matches!(form.state(), OperationState::Rejected(_)));

    let notification = notifier.last().unwrap();
    assert!(notification.is_error());
}

#[test]
fn given_missing_point_when_transfer_then_validation_error_shown_inline() {
    let mut store = session_as(Role::Factory);
    let notifier = MemoryNotifier::new();
    let mut form = TransferForm::new("", "plastic", "1000");

    let err = transfer_payment(&mut store, &mut form, &notifier).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        form.state().rejection(),
        Some("Please fill in all required fields")
    );
    assert!(notifier.notifications().is_empty());
    assert_eq!(balance(&store), 53_546_000);
}

#[test]
fn given_missing_amount_when_transfer_then_validation_error() {
    let mut store = session_as(Role::Factory);
    let mut form = TransferForm::new("point1", "plastic", "");

    let err = transfer_payment(&mut store, &mut form, &MemoryNotifier::new()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn given_unknown_point_when_transfer_then_validation_error() {
    let mut store = session_as(Role::Factory);
    let mut form = TransferForm::new("point9", "plastic", "1000");

    let err = transfer_payment(&mut store, &mut form, &MemoryNotifier::new()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(balance(&store), 53_546_000);
}

#[test]
fn given_non_numeric_or_non_positive_amount_when_transfer_then_validation_error() {
    for amount in ["abc", "12.5", "0", "-100"] {
        let mut store = session_as(Role::Factory);
        let mut form = TransferForm::new("point1", "plastic", amount);

        let err = transfer_payment(&mut store, &mut form, &MemoryNotifier::new()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation, "amount {amount}");
        assert_eq!(balance(&store), 53_546_000);
    }
}

#[test]
fn given_unknown_waste_type_when_transfer_then_validation_error() {
    let mut store = session_as(Role::Factory);
    let mut form = TransferForm::new("point1", "wood", "1000");

    let err = transfer_payment(&mut store, &mut form, &MemoryNotifier::new()).unwrap_err();

    assert!(matches!(err, CoreError::InvalidWasteCategory { .. }));
}

#[test]
fn given_non_factory_session_when_transfer_then_role_mismatch_notified() {
    let mut store = session_as(Role::CollectionPoint);
    let notifier = MemoryNotifier::new();
    let mut form = TransferForm::new("point1", "plastic", "1000");

    let err = transfer_payment(&mut store, &mut form, &notifier).unwrap_err();

    assert!(matches!(err, CoreError::RoleMismatch { .. }));
    assert_eq!(balance(&store), 150_000);
    assert!(notifier.last().unwrap().is_error());
}

#[test]
fn given_no_session_when_transfer_then_no_session() {
    let mut store = SessionStore::default();
    let mut form = TransferForm::new("point1", "plastic", "1000");

    let err = transfer_payment(&mut store, &mut form, &MemoryNotifier::new()).unwrap_err();

    assert!(matches!(err, CoreError::NoSession { .. }));
}
