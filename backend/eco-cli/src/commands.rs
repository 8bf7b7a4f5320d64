use eco_core::Role;

use std::str::FromStr;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive shell
    Shell,

    /// Log in against the authentication service
    Login {
        login: String,
        password: String,
        /// user, collection-point or factory
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
}

pub(crate) fn parse_role(value: &str) -> Result<Role, String> {
    Role::from_str(value).map_err(|e| e.reason())
}
