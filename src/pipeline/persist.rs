//! Load steps: write fetched records into the warehouse.
//!
//! Both loaders are insert-once: an existing row is left untouched and the
//! duplicate is logged. Each call commits its whole batch in one transaction.

use crate::api::{CompetitionId, CompetitionRecord, TeamRecord};
use crate::error::Result;
use crate::storage::{Competition, CompetitionTeamLink, Team, Warehouse};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of one `persist_competitions` batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompetitionStats {
    pub inserted: u64,
    pub existing: u64,
}

/// Outcome of one `persist_teams` batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub teams_inserted: u64,
    pub teams_existing: u64,
    pub links_inserted: u64,
    pub links_existing: u64,
    /// Links skipped because the competition is not in `dim_competitions`.
    pub links_orphaned: u64,
}

/// Insert every competition not yet in `dim_competitions`.
pub fn persist_competitions(
    warehouse: &Warehouse,
    records: &[CompetitionRecord],
) -> Result<CompetitionStats> {
    let mut stats = CompetitionStats::default();
    let tx = warehouse.begin_batch()?;

    for record in records {
        if warehouse.competition_exists(record.id)? {
            info!(
                competition_id = %record.id,
                name = %record.name,
                "competition already exists, skipping"
            );
            stats.existing += 1;
            continue;
        }

        warehouse.insert_competition(&Competition {
            id: record.id,
            name: record.name.clone(),
        })?;
        info!(competition_id = %record.id, name = %record.name, "competition inserted");
        stats.inserted += 1;
    }

    tx.commit()?;
    Ok(stats)
}

/// Insert every team not yet in `dim_teams`, then link it to
/// `competition_id` unless the link already exists.
///
/// When `competition_id` is not in `dim_competitions` the teams are still
/// stored but no fact rows are written.
pub fn persist_teams(
    warehouse: &Warehouse,
    records: &[TeamRecord],
    competition_id: CompetitionId,
) -> Result<TeamStats> {
    let mut stats = TeamStats::default();
    let tx = warehouse.begin_batch()?;
    let competition_known = warehouse.competition_exists(competition_id)?;

    for record in records {
        if warehouse.team_exists(record.id)? {
            info!(team_id = %record.id, name = %record.name, "team already exists, skipping");
            stats.teams_existing += 1;
        } else {
            warehouse.insert_team(&Team {
                id: record.id,
                name: record.name.clone(),
            })?;
            info!(team_id = %record.id, name = %record.name, "team inserted");
            stats.teams_inserted += 1;
        }

        if !competition_known {
            warn!(
                %competition_id,
                team_id = %record.id,
                name = %record.name,
                "competition not found, skipping link"
            );
            stats.links_orphaned += 1;
            continue;
        }

        let link = CompetitionTeamLink {
            competition_id,
            team_id: record.id,
        };
        if warehouse.link_exists(link)? {
            info!(
                %competition_id,
                team_id = %record.id,
                "link already exists, skipping"
            );
            stats.links_existing += 1;
        } else {
            warehouse.insert_link(link)?;
            info!(%competition_id, team_id = %record.id, "link inserted");
            stats.links_inserted += 1;
        }
    }

    tx.commit()?;
    Ok(stats)
}
