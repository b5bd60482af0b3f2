//! Warehouse connection and schema management

use crate::config::DatabaseConfig;
use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

const CREATE_DIM_TEAMS: &str = "CREATE TABLE IF NOT EXISTS dim_teams (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
)";

const CREATE_DIM_COMPETITIONS: &str = "CREATE TABLE IF NOT EXISTS dim_competitions (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
)";

const CREATE_FACT_COMPETITIONS: &str = "CREATE TABLE IF NOT EXISTS fact_competitions (
    competition_id INTEGER REFERENCES dim_competitions (id),
    team_id INTEGER REFERENCES dim_teams (id),
    PRIMARY KEY (competition_id, team_id)
)";

/// Connection to the SQLite warehouse holding the dimension and fact tables
pub struct Warehouse {
    pub(crate) conn: Connection,
}

impl Warehouse {
    /// Open (or create) the warehouse file named by `config`.
    ///
    /// Tables are not created here; call [`Warehouse::create_tables`].
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&config.path)?;
        debug!(path = %config.path.display(), "opened warehouse");
        Self::with_connection(conn)
    }

    /// Open a throwaway in-memory warehouse
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Create `dim_teams`, `dim_competitions` and `fact_competitions` if they
    /// do not already exist.
    pub fn create_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(CREATE_DIM_TEAMS, [])?;
        tx.execute(CREATE_DIM_COMPETITIONS, [])?;
        tx.execute(CREATE_FACT_COMPETITIONS, [])?;
        tx.commit()?;

        info!("warehouse tables ready");
        Ok(())
    }

    /// Drop all three tables. The fact table goes first since it holds the
    /// foreign keys into both dimensions.
    pub fn drop_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DROP TABLE IF EXISTS fact_competitions", [])?;
        tx.execute("DROP TABLE IF EXISTS dim_teams", [])?;
        tx.execute("DROP TABLE IF EXISTS dim_competitions", [])?;
        tx.commit()?;

        info!("warehouse tables dropped");
        Ok(())
    }

    /// Whether a table with this name exists in the warehouse
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
