pub mod menu;
pub mod record;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Record a daily entry")]
    Record,
    #[command(about = "View monthly data and statistics")]
    Stats(stats::StatsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Dispatches a subcommand, or enters the interactive menu when none is
    /// given.
    pub fn run() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Record) => record::cmd(),
            Some(Commands::Stats(args)) => stats::cmd(args),
            None => menu::cmd(),
        }
    }
}
