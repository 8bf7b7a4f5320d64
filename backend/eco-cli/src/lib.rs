//! eco-cli library
//!
//! Terminal front end for the EcoChain dashboards. The binary and the
//! integration tests drive the same [`App`] and [`Shell`].

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod one_shot;
pub mod shell;
pub(crate) mod shell_command;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use one_shot::{run_login, run_register};
pub use shell::Shell;
