use crate::{ClientResult, CredentialClient, CredentialForm, FormMode};

use eco_core::{SharedSession, ViewKind, resolve_view};
use eco_store::{LocalStore, TOKEN_KEY, USERNAME_KEY};

use log::{info, warn};

/// Result of a successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Logged in; the session is live and routed to `view`.
    Authenticated(ViewKind),
    /// Account created; the form is back in login mode.
    Registered { message: Option<String> },
}

/// Drives [`CredentialForm`] submissions against the remote service.
#[derive(Debug, Clone)]
pub struct CredentialFlow {
    client: CredentialClient,
    session: SharedSession,
}

impl CredentialFlow {
    pub fn new(client: CredentialClient, session: SharedSession) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &CredentialClient {
        &self.client
    }

    /// Submits the form in its current mode.
    ///
    /// Any failure is also left in `form.error` for inline display. The
    /// session is only touched after the service has accepted the login.
    pub async fn submit(
        &self,
        form: &mut CredentialForm,
        store: Option<&mut LocalStore>,
    ) -> ClientResult<FlowOutcome> {
        form.error = None;

        let result = match form.mode {
            FormMode::Login => self.login(form, store).await,
            FormMode::Register => self.register(form).await,
        };

        if let Err(e) = &result {
            form.error = Some(e.reason());
        }
        result
    }

    async fn login(
        &self,
        form: &mut CredentialForm,
        store: Option<&mut LocalStore>,
    ) -> ClientResult<FlowOutcome> {
        form.validate()?;
        let login = form.login.trim().to_string();

        let grant = self.client.login(&login, &form.password).await?;

        // The role is the one picked on the form; the service does not send one.
        let view = {
            let mut session = self.session.write().await;
            let identity = session.create_session(&login, form.role)?;
            resolve_view(Some(identity))
        };

        if let Some(store) = store {
            remember(store, &grant.token, &login);
        }

        form.password.clear();
        info!("Logged in as {login} ({view})");
        Ok(FlowOutcome::Authenticated(view))
    }

    async fn register(&self, form: &mut CredentialForm) -> ClientResult<FlowOutcome> {
        form.validate()?;

        let message = self.client.register(&form.to_register_request()).await?;
        info!("Registered {}", form.login.trim());

        form.reset();
        Ok(FlowOutcome::Registered { message })
    }
}

/// Storage is a mirror; failing to write it does not fail the login.
fn remember(store: &mut LocalStore, token: &str, login: &str) {
    if let Err(e) = store.set(TOKEN_KEY, token) {
        warn!("Failed to store session token: {e}");
    }
    if let Err(e) = store.set(USERNAME_KEY, login) {
        warn!("Failed to store username: {e}");
    }
}
