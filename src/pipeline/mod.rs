//! Ingestion pipeline
//!
//! Runs strictly in sequence: competitions, then each competition's teams
//! with a throttle pause in between, then the summary report. A failed team
//! fetch only skips that competition. Store errors abort the run.

pub mod ingest;
pub mod persist;
pub mod snapshot;


use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    api::{ApiClient, CompetitionRecord},
    config::{EtlConfig, OutputPaths},
    error::Result,
    report::write_summary,
    storage::Warehouse,
};

pub use ingest::{ingest_competitions, ingest_teams};
pub use persist::{persist_competitions, persist_teams, CompetitionStats, TeamStats};
pub use snapshot::{write_snapshot, write_snapshot_if_absent, SnapshotOutcome};

/// Totals for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub competitions: CompetitionStats,
    pub teams: TeamStats,
    /// Competitions whose team listing could not be fetched or decoded.
    pub team_fetches_failed: u64,
    /// Competitions skipped because the listing gave them no usable code.
    pub competitions_without_code: u64,
    pub snapshots_written: u64,
    pub snapshots_kept: u64,
    pub snapshot_failures: u64,
    pub summary_rows: usize,
}

impl RunSummary {
    fn add_teams(&mut self, stats: TeamStats) {
        self.teams.teams_inserted += stats.teams_inserted;
        self.teams.teams_existing += stats.teams_existing;
        self.teams.links_inserted += stats.links_inserted;
        self.teams.links_existing += stats.links_existing;
        self.teams.links_orphaned += stats.links_orphaned;
    }
}

/// One configured ETL run over a warehouse and an API client
pub struct Pipeline<'a> {
    client: &'a ApiClient,
    warehouse: &'a Warehouse,
    paths: OutputPaths,
    throttle: Duration,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        client: &'a ApiClient,
        warehouse: &'a Warehouse,
        paths: OutputPaths,
        throttle: Duration,
    ) -> Self {
        Self {
            client,
            warehouse,
            paths,
            throttle,
        }
    }

    /// Build a pipeline with the output layout and throttle from `config`.
    pub fn from_config(client: &'a ApiClient, warehouse: &'a Warehouse, config: &EtlConfig) -> Self {
        Self::new(
            client,
            warehouse,
            OutputPaths::new(&config.output_dir),
            config.throttle,
        )
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    /// Run the whole job and write the summary report.
    ///
    /// The competitions listing must be fetchable; without it there is
    /// nothing to process and the error is returned.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let (competitions, raw) = ingest_competitions(self.client).await?;
        summary.competitions = persist_competitions(self.warehouse, &competitions)?;

        let path = self.paths.competitions_snapshot();
        match write_snapshot(&path, &raw) {
            Ok(()) => summary.snapshots_written += 1,
            Err(error) => {
                warn!(path = %path.display(), %error, "could not write competitions snapshot");
                summary.snapshot_failures += 1;
            }
        }

        // Pauses only separate team requests that were actually sent
        let mut requested = false;
        for competition in &competitions {
            let Some(code) = usable_code(competition) else {
                summary.competitions_without_code += 1;
                continue;
            };
            if requested {
                self.pause().await;
            }
            requested = true;
            self.process_teams(competition, code, &mut summary).await?;
        }

        summary.summary_rows = write_summary(self.warehouse, &self.paths.summary_csv())?;

        info!(
            competitions_inserted = summary.competitions.inserted,
            competitions_existing = summary.competitions.existing,
            teams_inserted = summary.teams.teams_inserted,
            teams_existing = summary.teams.teams_existing,
            links_inserted = summary.teams.links_inserted,
            links_existing = summary.teams.links_existing,
            links_orphaned = summary.teams.links_orphaned,
            team_fetches_failed = summary.team_fetches_failed,
            summary_rows = summary.summary_rows,
            "pipeline finished"
        );
        Ok(summary)
    }

    /// Fetch, load and snapshot one competition's teams. Only store errors
    /// escape; everything else is logged and counted.
    async fn process_teams(
        &self,
        competition: &CompetitionRecord,
        code: &str,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let (teams, raw) = match ingest_teams(self.client, code).await {
            Ok(fetched) => fetched,
            Err(error) => {
                warn!(
                    competition_id = %competition.id,
                    code,
                    status = error.status(),
                    %error,
                    "team fetch failed, skipping competition"
                );
                summary.team_fetches_failed += 1;
                return Ok(());
            }
        };

        let stats = persist_teams(self.warehouse, &teams, competition.id)?;
        summary.add_teams(stats);

        let path = self.paths.teams_snapshot(code);
        match write_snapshot_if_absent(&path, &raw) {
            Ok(SnapshotOutcome::Written) => summary.snapshots_written += 1,
            Ok(SnapshotOutcome::Kept) => {
                debug!(path = %path.display(), "teams snapshot already present");
                summary.snapshots_kept += 1;
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "could not write teams snapshot");
                summary.snapshot_failures += 1;
            }
        }

        Ok(())
    }

    async fn pause(&self) {
        if self.throttle.is_zero() {
            return;
        }
        debug!(secs = self.throttle.as_secs_f64(), "throttling before next competition");
        tokio::time::sleep(self.throttle).await;
    }
}

/// The competition's code if a team listing can be requested for it.
fn usable_code(competition: &CompetitionRecord) -> Option<&str> {
    let code = competition.code.as_deref().filter(|c| is_usable_code(c));
    if code.is_none() {
        warn!(
            competition_id = %competition.id,
            name = %competition.name,
            code = competition.code.as_deref(),
            "competition has no usable code, skipping team fetch"
        );
    }
    code
}

/// Codes end up in a URL path segment and a directory name.
fn is_usable_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
