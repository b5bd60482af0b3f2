//! Data models for the storage layer

use crate::api::{CompetitionId, TeamId};
use serde::{Deserialize, Serialize};

/// Row of `dim_competitions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
}

/// Row of `dim_teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Row of `fact_competitions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionTeamLink {
    pub competition_id: CompetitionId,
    pub team_id: TeamId,
}

/// One line of the summary report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub competition: String,
    pub num_teams: u64,
}

/// Row counts of the three warehouse tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub competitions: u64,
    pub teams: u64,
    pub links: u64,
}
