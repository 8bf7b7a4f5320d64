//! eco - EcoChain recycling dashboards
//!
//! # Examples
//!
//! ```bash
//! # Interactive shell
//! eco
//!
//! # One-shot remote login
//! eco login ali secret --role factory --server http://127.0.0.1:3000
//! ```

use eco_cli::{App, Cli, CliResult, Commands, Shell, logger, run_login, run_register};
use eco_client::CredentialForm;
use eco_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path(&config_dir),
        config.logging.colored,
    )?;

    info!("Starting eco v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = App::new(&config, &config_dir, cli.server.as_deref())?;
    let mut stdout = std::io::stdout();

    let succeeded = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            Shell::new(&mut app, stdout).run(stdin).await?;
            true
        }
        Commands::Login {
            login,
            password,
            role,
        } => run_login(&mut app, &mut stdout, login, password, role).await?,
        Commands::Register {
            login,
            password,
            full_name,
            phone,
            address,
            company,
        } => {
            let mut form = CredentialForm::register(login, password, full_name, phone, address);
            form.company_name = company.unwrap_or_default();
            run_register(&mut app, &mut stdout, form).await?
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
