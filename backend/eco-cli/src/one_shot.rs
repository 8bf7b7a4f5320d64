use crate::{App, CliResult};

use eco_client::{CredentialForm, FlowOutcome};
use eco_core::Role;

use std::io::Write;

/// `eco login`: one remote exchange. Returns whether it succeeded.
pub async fn run_login<W: Write>(
    app: &mut App,
    out: &mut W,
    login: String,
    password: String,
    role: Role,
) -> CliResult<bool> {
    let mut form = CredentialForm::login(login, password, role);
    submit(app, out, &mut form).await
}

/// `eco register`: one remote exchange. Returns whether it succeeded.
pub async fn run_register<W: Write>(
    app: &mut App,
    out: &mut W,
    mut form: CredentialForm,
) -> CliResult<bool> {
    submit(app, out, &mut form).await
}

async fn submit<W: Write>(app: &mut App, out: &mut W, form: &mut CredentialForm) -> CliResult<bool> {
    match app.submit_credentials(form).await {
        Ok(FlowOutcome::Authenticated(view)) => {
            writeln!(out, "Logged in. View: {view}")?;
            Ok(true)
        }
        Ok(FlowOutcome::Registered { message }) => {
            writeln!(
                out,
                "Registered. {}",
                message.as_deref().unwrap_or("You can now log in.")
            )?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "error: {}", e.reason())?;
            Ok(false)
        }
    }
}
