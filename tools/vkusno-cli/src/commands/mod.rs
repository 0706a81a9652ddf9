//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category slug ("all", "vegetables", "fruits", ...).
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// Day to check expiry against (dd.mm.yyyy, default: now).
    #[arg(short, long)]
    pub today: Option<String>,

    /// Only list products that are expiring soon.
    #[arg(long)]
    pub expiring: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Actions to apply in order: add=<id>, set=<id>:<qty>, inc=<id>,
    /// dec=<id>, remove=<id>, clear.
    #[arg(required = true)]
    pub actions: Vec<String>,

    /// Prepare an order draft after the last action.
    #[arg(long)]
    pub checkout: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default vkusno.toml to the working directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
