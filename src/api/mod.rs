//! football-data.org API access: client, payload types and typed ids.

pub mod client;
pub mod ids;
pub mod types;

pub use client::ApiClient;
pub use ids::{CompetitionId, TeamId};
pub use types::{CompetitionListing, CompetitionRecord, TeamListing, TeamRecord};
