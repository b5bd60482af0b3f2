//! Run configuration.
//!
//! Every setting is resolved once at startup, in this order: explicit
//! override (CLI flag), environment variable, built-in default. The result is
//! an [`EtlConfig`] that is passed into the warehouse, API client and pipeline
//! constructors.

use crate::error::{EtlError, Result};
use std::path::PathBuf;
use std::time::Duration;


pub const API_TOKEN_ENV_VAR: &str = "FOOTBALL_DATA_API_TOKEN";
pub const BASE_URL_ENV_VAR: &str = "FOOTBALL_DATA_BASE_URL";
pub const DATABASE_ENV_VAR: &str = "FOOTBALL_ETL_DATABASE";
pub const OUTPUT_DIR_ENV_VAR: &str = "FOOTBALL_ETL_OUTPUT_DIR";
pub const THROTTLE_ENV_VAR: &str = "FOOTBALL_ETL_THROTTLE_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_THROTTLE_SECS: u64 = 6;

/// Connection settings for the football-data.org API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

/// Location of the SQLite warehouse
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Values supplied on the command line. `None` falls through to the
/// environment, then to the default.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub database: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub throttle_secs: Option<u64>,
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub output_dir: PathBuf,
    /// Pause between two competitions' team requests.
    pub throttle: Duration,
}

impl EtlConfig {
    /// Resolve configuration against the process environment.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve configuration against an arbitrary environment lookup.
    pub fn resolve<F>(overrides: ConfigOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = resolve_api_token(overrides.api_token, &env)?;
        let base_url = overrides
            .base_url
            .or_else(|| non_empty(env(BASE_URL_ENV_VAR)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api: ApiConfig { base_url, token },
            database: DatabaseConfig::resolve(overrides.database, &env)?,
            output_dir: resolve_output_dir(overrides.output_dir, &env),
            throttle: resolve_throttle(overrides.throttle_secs, &env)?,
        })
    }
}

impl DatabaseConfig {
    /// Resolve the warehouse location without requiring API settings.
    pub fn resolve<F>(path: Option<PathBuf>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match path.or_else(|| non_empty(env(DATABASE_ENV_VAR)).map(PathBuf::from)) {
            Some(path) => path,
            None => default_database_path()?,
        };
        Ok(Self { path })
    }
}

/// Resolve the API token from the override or the environment.
pub fn resolve_api_token<F>(token: Option<String>, env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    token
        .or_else(|| non_empty(env(API_TOKEN_ENV_VAR)))
        .ok_or_else(|| EtlError::MissingApiToken {
            env_var: API_TOKEN_ENV_VAR.to_string(),
        })
}

/// Resolve the output root from the override or the environment.
pub fn resolve_output_dir<F>(dir: Option<PathBuf>, env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    dir.or_else(|| non_empty(env(OUTPUT_DIR_ENV_VAR)).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

fn resolve_throttle<F>(secs: Option<u64>, env: F) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match secs {
        Some(secs) => secs,
        None => match non_empty(env(THROTTLE_ENV_VAR)) {
            Some(raw) => raw.trim().parse().map_err(|_| EtlError::InvalidConfig {
                key: THROTTLE_ENV_VAR.to_string(),
                value: raw,
            })?,
            None => DEFAULT_THROTTLE_SECS,
        },
    };
    Ok(Duration::from_secs(secs))
}

/// Path: {data_dir}/football-etl/warehouse.db
fn default_database_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(EtlError::NoDataDir)?;
    Ok(data_dir.join("football-etl").join("warehouse.db"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fixed file layout under the output root.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `{root}/competition_data/competitions.json`
    pub fn competitions_snapshot(&self) -> PathBuf {
        self.root.join("competition_data").join("competitions.json")
    }

    /// `{root}/teams/{code}/teams.json`
    pub fn teams_snapshot(&self, code: &str) -> PathBuf {
        self.root.join("teams").join(code).join("teams.json")
    }

    /// `{root}/output_csv/summary.csv`
    pub fn summary_csv(&self) -> PathBuf {
        self.root.join("output_csv").join("summary.csv")
    }
}
