//! Football competitions ETL
//!
//! Pulls competitions and their teams from the football-data.org v4 API,
//! loads them into a small SQLite warehouse (`dim_competitions`, `dim_teams`
//! and the `fact_competitions` link table) and writes a CSV summary of team
//! counts per competition.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_etl::{ApiClient, ConfigOverrides, EtlConfig, Pipeline, Warehouse};
//!
//! # async fn example() -> football_etl::Result<()> {
//! let config = EtlConfig::from_env(ConfigOverrides::default())?;
//! let mut warehouse = Warehouse::open(&config.database)?;
//! warehouse.create_tables()?;
//!
//! let client = ApiClient::new(&config.api)?;
//! let summary = Pipeline::from_config(&client, &warehouse, &config).run().await?;
//! println!("{} competitions in the report", summary.summary_rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FOOTBALL_DATA_API_TOKEN=your-token
//! export FOOTBALL_ETL_DATABASE=./warehouse.db   # optional
//! export FOOTBALL_ETL_THROTTLE_SECS=6           # optional
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use api::{ApiClient, CompetitionId, CompetitionRecord, TeamId, TeamRecord};
pub use config::{ConfigOverrides, DatabaseConfig, EtlConfig, OutputPaths};
pub use error::{EtlError, Result};
pub use pipeline::{Pipeline, RunSummary};
pub use report::write_summary;
pub use storage::Warehouse;
