use crate::shell_command::{ShellCommand, ShellLine, split_args};
use crate::{App, CliResult};

use eco_client::{CredentialForm, FlowOutcome};
use eco_core::{
    AcceptForm, COLLECTION_POINTS, CoreError, ErrorKind, Role, Severity, TransferForm,
    WasteCategory, WasteSubmissionForm, format_amount, resolve_view, submit_waste,
    transfer_payment,
};
use eco_store::{Language, USERNAME_KEY};

use std::io::Write;
use std::str::FromStr;

use clap::Parser;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Continue,
    Quit,
}

/// Line-oriented front end over an [`App`].
pub struct Shell<'a, W: Write> {
    app: &'a mut App,
    out: W,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(app: &'a mut App, out: W) -> Self {
        Self { app, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> CliResult<()> {
        writeln!(self.out, "EcoChain shell. Type 'help' for commands.")?;
        if let Some(name) = self.app.store().get(USERNAME_KEY) {
            writeln!(self.out, "Last user: {name}")?;
        }

        let mut lines = input.lines();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.execute(&line).await? == Next::Quit {
                break;
            }
        }

        writeln!(self.out, "Bye!")?;
        Ok(())
    }

    async fn execute(&mut self, line: &str) -> CliResult<Next> {
        let args = split_args(line);
        if args.is_empty() {
            return Ok(Next::Continue);
        }

        let command = match ShellLine::try_parse_from(&args) {
            Ok(parsed) => parsed.command,
            // Covers `help` too: clap reports it as an error carrying the help text.
            Err(e) => {
                write!(self.out, "{e}")?;
                return Ok(Next::Continue);
            }
        };

        debug!("Shell command: {command:?}");
        let next = self.dispatch(command).await?;
        self.flush_notifications()?;
        Ok(next)
    }

    async fn dispatch(&mut self, command: ShellCommand) -> CliResult<Next> {
        match command {
            ShellCommand::Login {
                user,
                password,
                role,
            } => self.login(&user, &password, role).await?,
            ShellCommand::RemoteLogin {
                login,
                password,
                role,
            } => {
                let mut form = CredentialForm::login(login, password, role);
                self.submit_credentials(&mut form).await?;
            }
            ShellCommand::Register {
                login,
                password,
                full_name,
                phone,
                address,
                company,
            } => {
                let mut form = CredentialForm::register(login, password, full_name, phone, address);
                form.company_name = company.unwrap_or_default();
                self.submit_credentials(&mut form).await?;
            }
            ShellCommand::Logout => {
                self.app.session.write().await.destroy_session();
                self.app.forget_token();
                writeln!(self.out, "Logged out.")?;
            }
            ShellCommand::Whoami => self.whoami().await?,
            ShellCommand::View => {
                let session = self.app.session.read().await;
                let view = resolve_view(session.current_identity());
                writeln!(self.out, "View: {view}")?;
            }
            ShellCommand::Submit {
                description,
                location,
                image,
                video,
            } => {
                let mut form = WasteSubmissionForm::default();
                form.description = description;
                form.location = location;
                form.image = image;
                form.video = video;

                let session = self.app.session.read().await;
                let result = submit_waste(&session, &mut form, self.app.notifier.as_ref());
                drop(session);
                if let Err(e) = result {
                    self.report(&e)?;
                }
            }
            ShellCommand::Scan {
                code,
                category,
                quantity,
            } => self.scan(code, &category, quantity).await?,
            ShellCommand::Transfer {
                point,
                waste_type,
                amount,
            } => {
                let mut form = TransferForm::new(point, waste_type, amount);
                let mut session = self.app.session.write().await;
                let result = transfer_payment(&mut session, &mut form, self.app.notifier.as_ref());
                drop(session);
                match result {
                    Ok(receipt) => writeln!(
                        self.out,
                        "Paid {} to {}. Balance: {}",
                        format_amount(receipt.amount),
                        receipt.point.label,
                        format_amount(receipt.balance)
                    )?,
                    Err(e) => self.report(&e)?,
                }
            }
            ShellCommand::History => self.history().await?,
            ShellCommand::Points => {
                for point in COLLECTION_POINTS.iter() {
                    writeln!(self.out, "{:<8} {}", point.id, point.label)?;
                }
            }
            ShellCommand::Lang { code } => self.lang(code.as_deref())?,
            ShellCommand::Quit => return Ok(Next::Quit),
        }

        Ok(Next::Continue)
    }

    async fn login(&mut self, user: &str, password: &str, role: Role) -> CliResult<()> {
        let result = {
            let mut session = self.app.session.write().await;
            session
                .login(user, password, role)
                .map(|identity| (identity.display_name().to_string(), resolve_view(Some(identity))))
        };

        match result {
            Ok((name, view)) => {
                self.app.remember_username(&name);
                writeln!(self.out, "Welcome, {name}! View: {view}")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    async fn submit_credentials(&mut self, form: &mut CredentialForm) -> CliResult<()> {
        match self.app.submit_credentials(form).await {
            Ok(FlowOutcome::Authenticated(view)) => {
                writeln!(self.out, "Logged in. View: {view}")?;
            }
            Ok(FlowOutcome::Registered { message }) => {
                let message = message.unwrap_or_else(|| String::from("You can now log in."));
                writeln!(self.out, "Registered. {message}")?;
            }
            Err(_) => {
                let reason = form.error.as_deref().unwrap_or("Request failed");
                writeln!(self.out, "error: {reason}")?;
            }
        }
        Ok(())
    }

    async fn whoami(&mut self) -> CliResult<()> {
        let session = self.app.session.read().await;
        let Some(identity) = session.current_identity() else {
            writeln!(self.out, "Not logged in.")?;
            return Ok(());
        };

        writeln!(
            self.out,
            "{} ({}) balance: {}",
            identity.display_name(),
            identity.role(),
            format_amount(identity.balance())
        )?;
        if let Some(location) = identity.location() {
            writeln!(self.out, "Location: {location}")?;
        }
        Ok(())
    }

    async fn scan(&mut self, code: String, category: &str, quantity: String) -> CliResult<()> {
        let category = match WasteCategory::from_str(category) {
            Ok(category) => category,
            Err(e) => return self.report(&e),
        };

        let mut form = AcceptForm::new(code, category, quantity);
        let task = match self.app.scanner.schedule(&mut form).await {
            Ok(task) => task,
            Err(e) => return self.report(&e),
        };

        writeln!(self.out, "Scanning...")?;
        self.out.flush()?;

        match task.complete(&mut form).await {
            Ok(receipt) => {
                self.app.persist_activity().await;
                writeln!(
                    self.out,
                    "Paid {}. Balance: {}",
                    format_amount(receipt.total),
                    format_amount(receipt.balance)
                )?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    async fn history(&mut self) -> CliResult<()> {
        let activity = self.app.activity.read().await;
        if activity.is_empty() {
            writeln!(self.out, "No collections yet.")?;
            return Ok(());
        }

        for record in activity.records() {
            writeln!(
                self.out,
                "{}  {:<8} {} {}  {}",
                record.time.format(TIME_FORMAT),
                record.category,
                record.quantity,
                record.unit().suffix(),
                format_amount(record.amount)
            )?;
        }
        Ok(())
    }

    fn lang(&mut self, code: Option<&str>) -> CliResult<()> {
        let language = match code {
            None => self.app.language(),
            Some(code) => match Language::from_str(code) {
                Ok(language) => {
                    self.app.set_language(language);
                    language
                }
                Err(e) => {
                    writeln!(self.out, "error: {e}")?;
                    return Ok(());
                }
            },
        };

        writeln!(
            self.out,
            "Language: {} ({})",
            language.display_name(),
            language.as_str()
        )?;
        Ok(())
    }

    /// Validation failures are shown inline; everything else has already
    /// been raised as a notification.
    fn report(&mut self, error: &CoreError) -> CliResult<()> {
        if error.kind() == ErrorKind::Validation {
            writeln!(self.out, "error: {}", error.reason())?;
        }
        Ok(())
    }

    fn flush_notifications(&mut self) -> CliResult<()> {
        for notification in self.app.take_notifications() {
            let tag = match notification.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            writeln!(
                self.out,
                "[{tag}] {}: {}",
                notification.title, notification.description
            )?;
        }
        Ok(())
    }
}
