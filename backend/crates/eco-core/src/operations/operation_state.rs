use crate::{CoreError, ErrorKind, Notification, Notifier, Result as CoreErrorResult};

/// Lifecycle of a single balance-affecting submission.
///
/// `Idle -> Validating -> {Committed | Rejected}`; a form that is still
/// validating (e.g. waiting for a scan) refuses another submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Validating,
    Committed,
    Rejected(String),
}

impl OperationState {
    #[track_caller]
    pub fn begin(&mut self) -> CoreErrorResult<()> {
        if self.is_pending() {
            return Err(CoreError::validation("An operation is already in progress"));
        }
        *self = Self::Validating;
        Ok(())
    }

    pub fn finish<T>(&mut self, result: &CoreErrorResult<T>) {
        *self = match result {
            Ok(_) => Self::Committed,
            Err(e) => Self::Rejected(e.reason()),
        };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Validating)
    }

    /// Inline rejection reason, if the last attempt was rejected.
    pub fn rejection(&self) -> Option<&str> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Surfaces a failed attempt. Validation problems stay inline on the form;
/// everything else goes to the notification sink.
pub(crate) fn report_failure(notifier: &dyn Notifier, error: &CoreError) {
    if error.kind() != ErrorKind::Validation {
        notifier.notify(Notification::error("Error!", error.reason()));
    }
}
