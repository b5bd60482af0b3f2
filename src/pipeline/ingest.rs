//! Fetch steps: pull listings from the API and decode the records we keep.

use crate::api::{ApiClient, CompetitionListing, CompetitionRecord, TeamListing, TeamRecord};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Fetch `/v4/competitions`.
///
/// Returns the competitions in listing order, each carrying its own id, name
/// and code, together with the raw payload for snapshotting.
pub async fn ingest_competitions(client: &ApiClient) -> Result<(Vec<CompetitionRecord>, Value)> {
    let raw = client.fetch(&client.competitions_url()).await?;
    let listing = CompetitionListing::deserialize(&raw)?;

    debug!(count = listing.competitions.len(), "competitions fetched");
    Ok((listing.competitions, raw))
}

/// Fetch the team listing for one competition code.
pub async fn ingest_teams(client: &ApiClient, code: &str) -> Result<(Vec<TeamRecord>, Value)> {
    let raw = client.fetch(&client.teams_url(code)).await?;
    let listing = TeamListing::deserialize(&raw)?;

    debug!(code, count = listing.teams.len(), "teams fetched");
    Ok((listing.teams, raw))
}
