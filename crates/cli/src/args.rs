use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tally_infra::StoreConfig;
use tally_infra::config::DEFAULT_INVENTORY_FILE;

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Track consumable and durable items in a flat inventory file.")]
pub struct Cli {
    /// Inventory file to load at startup and save on exit
    #[arg(short, long, default_value = DEFAULT_INVENTORY_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the interactive shell (default)
    #[command(alias = "s")]
    Shell,
    /// Print the totals report and exit without saving
    #[command(alias = "r")]
    Report {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.file.clone())
    }

    pub fn command_or_default(&self) -> Commands {
        self.command.unwrap_or(Commands::Shell)
    }
}
