//! Aggregation queries over the fact table

use super::{models::SummaryRow, schema::Warehouse};
use crate::error::Result;

impl Warehouse {
    /// Team counts per competition name, largest first. Ties are broken by
    /// competition name so the report is reproducible.
    pub fn summary_rows(&self) -> Result<Vec<SummaryRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.name AS competition, COUNT(*) AS num_teams
             FROM fact_competitions f
             JOIN dim_competitions d ON f.competition_id = d.id
             GROUP BY d.name
             ORDER BY num_teams DESC, competition ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let num_teams: i64 = row.get(1)?;
            Ok(SummaryRow {
                competition: row.get(0)?,
                num_teams: num_teams.max(0) as u64,
            })
        })?;

        let mut summary = Vec::new();
        for row in rows {
            summary.push(row?);
        }
        Ok(summary)
    }
}
