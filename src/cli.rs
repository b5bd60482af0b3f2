//! CLI argument definitions and parsing.

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Settings shared by every command. Anything left unset falls back to the
/// environment, then to the built-in default.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// football-data.org API token (or set `FOOTBALL_DATA_API_TOKEN`).
    #[clap(long, global = true)]
    pub api_token: Option<String>,

    /// API base URL (or set `FOOTBALL_DATA_BASE_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// SQLite warehouse file (or set `FOOTBALL_ETL_DATABASE`).
    #[clap(long, global = true)]
    pub database: Option<PathBuf>,

    /// Root for JSON snapshots and the CSV report (or set `FOOTBALL_ETL_OUTPUT_DIR`).
    #[clap(long, short, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Seconds to wait between competitions (or set `FOOTBALL_ETL_THROTTLE_SECS`).
    #[clap(long, global = true)]
    pub throttle_secs: Option<u64>,

    /// Log at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_token: self.api_token.clone(),
            base_url: self.base_url.clone(),
            database: self.database.clone(),
            output_dir: self.output_dir.clone(),
            throttle_secs: self.throttle_secs,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "football-etl",
    about = "Load football-data.org competitions and teams into a warehouse"
)]
pub struct FootballEtl {
    #[clap(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `run`.
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Create tables if needed, load competitions and teams, write the summary.
    Run,

    /// Create the warehouse tables if they do not exist.
    CreateTables,

    /// Drop all warehouse tables.
    DropTables,

    /// Rewrite the summary CSV from what is already loaded.
    Summary,

    /// Print row counts of the warehouse tables.
    Status,
}
