use crate::operations::operation_state::report_failure;
use crate::{Notification, Notifier, OperationState, Result as CoreErrorResult, Role, SessionStore};

use std::path::PathBuf;

use log::info;

/// End-user waste report. Submitting it does not touch the balance.
#[derive(Debug, Clone, Default)]
pub struct WasteSubmissionForm {
    pub description: String,
    pub location: String,
    pub image: Option<PathBuf>,
    pub video: Option<PathBuf>,
    pub(crate) state: OperationState,
}

impl WasteSubmissionForm {
    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn clear(&mut self) {
        self.description.clear();
        self.location.clear();
        self.image = None;
        self.video = None;
    }
}

pub fn submit_waste(
    session: &SessionStore,
    form: &mut WasteSubmissionForm,
    notifier: &dyn Notifier,
) -> CoreErrorResult<()> {
    form.state.begin()?;

    let result = session.require_role(Role::EndUser).map(|identity| {
        info!(
            "Waste submitted by {} (image: {}, video: {})",
            identity.display_name(),
            form.image.is_some(),
            form.video.is_some()
        );
    });

    form.state.finish(&result);
    match &result {
        Ok(()) => {
            notifier.notify(Notification::success(
                "Waste submitted!",
                "Your waste was submitted successfully. Your balance will be updated.",
            ));
            form.clear();
        }
        Err(e) => report_failure(notifier, e),
    }

    result
}
