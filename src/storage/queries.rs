//! Existence checks, inserts and listings for the warehouse tables

use super::{models::*, schema::Warehouse};
use crate::api::{CompetitionId, TeamId};
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Transaction};

impl Warehouse {
    /// Start a batch. Statements issued through `&self` while the returned
    /// transaction is alive are committed together by `commit()`; dropping it
    /// rolls the batch back.
    pub fn begin_batch(&self) -> Result<Transaction<'_>> {
        Ok(self.conn.unchecked_transaction()?)
    }

    pub fn competition_exists(&self, id: CompetitionId) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT id FROM dim_competitions WHERE id = ?",
                params![id.as_i64()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn insert_competition(&self, competition: &Competition) -> Result<()> {
        self.conn.execute(
            "INSERT INTO dim_competitions (id, name) VALUES (?, ?)",
            params![competition.id.as_i64(), competition.name],
        )?;
        Ok(())
    }

    pub fn team_exists(&self, id: TeamId) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT id FROM dim_teams WHERE id = ?",
                params![id.as_i64()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn insert_team(&self, team: &Team) -> Result<()> {
        self.conn.execute(
            "INSERT INTO dim_teams (id, name) VALUES (?, ?)",
            params![team.id.as_i64(), team.name],
        )?;
        Ok(())
    }

    pub fn link_exists(&self, link: CompetitionTeamLink) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM fact_competitions WHERE competition_id = ? AND team_id = ?",
                params![link.competition_id.as_i64(), link.team_id.as_i64()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn insert_link(&self, link: CompetitionTeamLink) -> Result<()> {
        self.conn.execute(
            "INSERT INTO fact_competitions (competition_id, team_id) VALUES (?, ?)",
            params![link.competition_id.as_i64(), link.team_id.as_i64()],
        )?;
        Ok(())
    }

    /// All competitions ordered by id
    pub fn competitions(&self) -> Result<Vec<Competition>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM dim_competitions ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Competition {
                id: CompetitionId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        let mut competitions = Vec::new();
        for row in rows {
            competitions.push(row?);
        }
        Ok(competitions)
    }

    /// All teams ordered by id
    pub fn teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM dim_teams ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Team {
                id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// All fact rows ordered by (competition_id, team_id)
    pub fn links(&self) -> Result<Vec<CompetitionTeamLink>> {
        let mut stmt = self.conn.prepare(
            "SELECT competition_id, team_id FROM fact_competitions
             ORDER BY competition_id, team_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CompetitionTeamLink {
                competition_id: CompetitionId::new(row.get(0)?),
                team_id: TeamId::new(row.get(1)?),
            })
        })?;

        let mut links = Vec::new();
        for row in rows {
            links.push(row?);
        }
        Ok(links)
    }

    pub fn table_counts(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            competitions: self.count_rows("dim_competitions")?,
            teams: self.count_rows("dim_teams")?,
            links: self.count_rows("fact_competitions")?,
        })
    }

    // `table` is always one of our own constants, never user input.
    fn count_rows(&self, table: &str) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(n.max(0) as u64)
    }
}
