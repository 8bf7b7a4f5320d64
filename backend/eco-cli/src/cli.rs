use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "eco")]
#[command(about = "EcoChain recycling dashboards in the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Authentication service URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Config directory (overrides ECO_CONFIG_DIR and ./.eco)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
