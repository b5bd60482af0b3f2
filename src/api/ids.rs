//! ID types for football-data.org entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for competition IDs.
///
/// Keeps competition ids from being mixed up with team ids when both are
/// passed around the pipeline as plain integers.
///
/// # Examples
///
/// ```rust
/// use football_etl::CompetitionId;
///
/// let id = CompetitionId::new(2021);
/// assert_eq!(id.as_i64(), 2021);
/// assert_eq!(id.to_string(), "2021");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitionId(pub i64);

impl CompetitionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for team IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
