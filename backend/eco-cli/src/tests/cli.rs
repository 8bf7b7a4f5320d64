use crate::{Cli, Commands};

use eco_core::Role;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_no_subcommand_then_command_is_none() {
    let cli = Cli::try_parse_from(["eco"]).unwrap();

    assert_that!(cli.command, none());
    assert_that!(cli.server, none());
}

#[test]
fn given_login_with_role_then_parsed() {
    let cli = Cli::try_parse_from([
        "eco",
        "login",
        "zavod",
        "secret",
        "--role",
        "factory",
        "--server",
        "http://127.0.0.1:3000",
    ])
    .unwrap();

    assert_that!(
        cli.command,
        some(eq(&Commands::Login {
            login: String::from("zavod"),
            password: String::from("secret"),
            role: Role::Factory,
        }))
    );
    assert_that!(cli.server.as_deref(), some(eq("http://127.0.0.1:3000")));
}

#[test]
fn given_login_without_role_then_end_user() {
    let cli = Cli::try_parse_from(["eco", "login", "ali", "pw"]).unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Login {
            role: Role::EndUser,
            ..
        })
    ));
}

#[test]
fn given_unknown_role_then_parse_error_names_it() {
    let err = Cli::try_parse_from(["eco", "login", "ali", "pw", "--role", "admin"]).unwrap_err();

    assert_that!(err.to_string(), contains_substring("Unknown role: admin"));
}

#[test]
fn given_register_without_address_then_parse_error() {
    let result = Cli::try_parse_from(["eco", "register", "ali", "pw", "Ali Valiyev", "123"]);

    assert!(result.is_err());
}

#[test]
fn given_register_with_company_then_parsed() {
    let cli = Cli::try_parse_from([
        "eco",
        "register",
        "ali",
        "pw",
        "Ali Valiyev",
        "123",
        "Toshkent",
        "--company",
        "EcoZavod",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Register {
            address, company, ..
        }) => {
            assert_that!(address, eq("Toshkent"));
            assert_that!(company.as_deref(), some(eq("EcoZavod")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_config_dir_flag_then_parsed_as_path() {
    let cli = Cli::try_parse_from(["eco", "--config-dir", "/tmp/eco", "shell"]).unwrap();

    assert_that!(cli.command, some(eq(&Commands::Shell)));
    assert_that!(
        cli.config_dir,
        some(eq(&std::path::PathBuf::from("/tmp/eco")))
    );
}
