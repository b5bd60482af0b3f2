use super::ids::{CompetitionId, TeamId};
use serde::{Deserialize, Serialize};


/// One competition from `/v4/competitions`, with its id, name and short code
/// kept together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompetitionRecord {
    pub id: CompetitionId,
    pub name: String,
    /// Short code used in the team listing URL (e.g. `PL`). Some listings
    /// carry competitions without one.
    #[serde(default)]
    pub code: Option<String>,
}

/// Top-level envelope for `/v4/competitions`
#[derive(Debug, Deserialize)]
pub struct CompetitionListing {
    #[serde(default)]
    pub competitions: Vec<CompetitionRecord>,
}

/// One team from `/v4/competitions/{code}/teams`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
}

/// Top-level envelope for `/v4/competitions/{code}/teams`
#[derive(Debug, Deserialize)]
pub struct TeamListing {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
}
