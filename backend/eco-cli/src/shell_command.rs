use crate::commands::parse_role;

use eco_core::Role;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// One shell line; the first word names the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub(crate) command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum ShellCommand {
    /// Start a local session
    Login {
        user: String,
        password: String,
        #[arg(long, value_parser = parse_role, default_value = "user")]
        role: Role,
    },

    /// Log in against the authentication service
    RemoteLogin {
        login: String,
        password: String,
        #[arg(long, value_parser = parse_role, default_value = "user")]
        role: Role,
    },

    /// Create an account on the authentication service
    Register {
        login: String,
        password: String,
        full_name: String,
        phone: String,
        address: String,
        #[arg(long)]
        company: Option<String>,
    },

    /// End the session
    Logout,

    /// Show the current identity and balance
    Whoami,

    /// Show the dashboard the session is routed to
    View,

    /// Submit waste for pickup (user)
    Submit {
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long)]
        video: Option<PathBuf>,
    },

    /// Scan a delivery and pay for it (collection point)
    Scan {
        code: String,
        category: String,
        quantity: String,
    },

    /// Pay a collection point (factory)
    Transfer {
        point: String,
        waste_type: String,
        amount: String,
    },

    /// Show recent collections
    History,

    /// List collection points
    Points,

    /// Show or set the interface language (uz, ru, en)
    Lang { code: Option<String> },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Splits a line on whitespace, keeping double-quoted runs together.
pub(crate) fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if pending {
        args.push(current);
    }
    args
}
