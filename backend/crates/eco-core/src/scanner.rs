use crate::{
    AcceptForm, AcceptReceipt, ActivityLog, CoreError, ErrorKind, Notification, Notifier,
    OperationState, PriceTable, Result as CoreErrorResult, Role, SharedSession, accept_waste,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(2000);

/// Applies collection-point intakes after a simulated scan delay.
#[derive(Clone)]
pub struct Scanner {
    session: SharedSession,
    activity: Arc<RwLock<ActivityLog>>,
    prices: PriceTable,
    delay: Duration,
    notifier: Arc<dyn Notifier>,
}

impl Scanner {
    pub fn new(
        session: SharedSession,
        activity: Arc<RwLock<ActivityLog>>,
        prices: PriceTable,
        delay: Duration,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            activity,
            prices,
            delay,
            notifier,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validates the form and schedules the intake.
    ///
    /// The returned task is bound to the session that scheduled it: if that
    /// session is gone or replaced when the delay elapses, nothing is applied.
    pub async fn schedule(&self, form: &mut AcceptForm) -> CoreErrorResult<ScanTask> {
        form.state.begin()?;

        let prepared = match form.to_request() {
            Ok(request) => self
                .session
                .read()
                .await
                .require_role(Role::CollectionPoint)
                .map(|identity| (identity.id(), request)),
            Err(e) => Err(e),
        };

        let (owner, request) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                form.state = OperationState::Rejected(e.reason());
                if e.kind() != ErrorKind::Validation {
                    self.notifier.notify(Notification::error("Error!", e.reason()));
                }
                return Err(e);
            }
        };

        debug!(
            "Scan of {} scheduled in {:?}",
            request.counterpart, self.delay
        );

        let session = Arc::clone(&self.session);
        let activity = Arc::clone(&self.activity);
        let notifier = Arc::clone(&self.notifier);
        let prices = self.prices;
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let mut session = session.write().await;
            if session.current_identity().map(|identity| identity.id()) != Some(owner) {
                warn!("Dropping scan of {}: session changed", request.counterpart);
                let error = CoreError::stale_session();
                notifier.notify(Notification::error("Error!", error.reason()));
                return Err(error);
            }

            let mut activity = activity.write().await;
            accept_waste(
                &mut session,
                &mut activity,
                &prices,
                &request,
                notifier.as_ref(),
            )
        });

        Ok(ScanTask {
            handle: Some(handle),
        })
    }
}

/// Pending scan. Dropping it cancels the deferred effect.
#[derive(Debug)]
pub struct ScanTask {
    handle: Option<JoinHandle<CoreErrorResult<AcceptReceipt>>>,
}

impl ScanTask {
    /// Waits for the scan to complete and settles the form.
    pub async fn complete(mut self, form: &mut AcceptForm) -> CoreErrorResult<AcceptReceipt> {
        let result = match self.handle.take() {
            Some(handle) => match handle.await {
                Ok(result) => result,
                Err(e) => {
                    warn!("Scan task did not finish: {e}");
                    Err(CoreError::cancelled())
                }
            },
            None => Err(CoreError::cancelled()),
        };

        form.state.finish(&result);
        if result.is_ok() {
            form.clear();
        }

        result
    }

    /// Cancels the pending effect and returns the form to idle.
    pub fn cancel(mut self, form: &mut AcceptForm) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Scan cancelled");
        }
        form.state = OperationState::Idle;
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|handle| handle.is_finished())
    }
}

impl Drop for ScanTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
