//! End-to-end pipeline tests against a mock football-data.org server

use std::path::Path;
use std::time::{Duration, Instant};

use football_etl::{
    config::ApiConfig, ApiClient, DatabaseConfig, EtlError, OutputPaths, Pipeline, Warehouse,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "test-token";

fn competitions_fixture() -> Value {
    json!({
        "count": 2,
        "competitions": [
            {"id": 1, "name": "A", "code": "AAA"},
            {"id": 2, "name": "B", "code": "BBB"}
        ]
    })
}

fn teams_fixture(ids: &[i64]) -> Value {
    let teams: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("Team {id}")}))
        .collect();
    json!({"count": ids.len(), "teams": teams})
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("x-auth-token", TOKEN))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn standard_server() -> MockServer {
    let server = MockServer::start().await;
    mount_json(&server, "/v4/competitions", 200, competitions_fixture()).await;
    mount_json(
        &server,
        "/v4/competitions/AAA/teams",
        200,
        teams_fixture(&[10, 11, 12]),
    )
    .await;
    mount_json(&server, "/v4/competitions/BBB/teams", 200, teams_fixture(&[13])).await;
    server
}

struct Harness {
    dir: TempDir,
    client: ApiClient,
    warehouse: Warehouse,
}

impl Harness {
    fn new(server: &MockServer) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let client = ApiClient::new(&ApiConfig {
            base_url: server.uri(),
            token: TOKEN.to_string(),
        })
        .unwrap();

        let mut warehouse = Warehouse::open(&DatabaseConfig {
            path: dir.path().join("db").join("warehouse.db"),
        })
        .unwrap();
        warehouse.create_tables().unwrap();

        Self {
            dir,
            client,
            warehouse,
        }
    }

    fn output(&self) -> OutputPaths {
        OutputPaths::new(self.dir.path().join("output"))
    }

    fn pipeline(&self, throttle: Duration) -> Pipeline<'_> {
        Pipeline::new(&self.client, &self.warehouse, self.output(), throttle)
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn test_end_to_end_summary() {
    let server = standard_server().await;
    let harness = Harness::new(&server);

    let summary = harness.pipeline(Duration::ZERO).run().await.unwrap();

    assert_eq!(
        read(&harness.output().summary_csv()),
        "Competition,Number of Teams\r\nA,3\r\nB,1\r\n"
    );
    assert_eq!(summary.summary_rows, 2);
    assert_eq!(summary.competitions.inserted, 2);
    assert_eq!(summary.teams.teams_inserted, 4);
    assert_eq!(summary.teams.links_inserted, 4);
    assert_eq!(summary.team_fetches_failed, 0);
}

#[tokio::test]
async fn test_snapshots_are_written() {
    let server = standard_server().await;
    let harness = Harness::new(&server);

    harness.pipeline(Duration::ZERO).run().await.unwrap();

    let output = harness.output();
    let competitions: Value =
        serde_json::from_str(&read(&output.competitions_snapshot())).unwrap();
    assert_eq!(competitions, competitions_fixture());

    let teams: Value = serde_json::from_str(&read(&output.teams_snapshot("AAA"))).unwrap();
    assert_eq!(teams, teams_fixture(&[10, 11, 12]));
    assert!(output.teams_snapshot("BBB").is_file());
}

#[tokio::test]
async fn test_existing_team_snapshot_is_not_overwritten() {
    let server = standard_server().await;
    let harness = Harness::new(&server);

    let stale = harness.output().teams_snapshot("AAA");
    std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
    std::fs::write(&stale, "{\"teams\": []}").unwrap();

    let summary = harness.pipeline(Duration::ZERO).run().await.unwrap();

    assert_eq!(read(&stale), "{\"teams\": []}");
    assert_eq!(summary.snapshots_kept, 1);
    // The warehouse still gets the fresh data
    assert_eq!(summary.teams.links_inserted, 4);
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let server = standard_server().await;
    let harness = Harness::new(&server);

    harness.pipeline(Duration::ZERO).run().await.unwrap();
    let counts_first = harness.warehouse.table_counts().unwrap();
    let links_first = harness.warehouse.links().unwrap();
    let csv_first = read(&harness.output().summary_csv());

    let second = harness.pipeline(Duration::ZERO).run().await.unwrap();

    assert_eq!(harness.warehouse.table_counts().unwrap(), counts_first);
    assert_eq!(harness.warehouse.links().unwrap(), links_first);
    assert_eq!(read(&harness.output().summary_csv()), csv_first);

    assert_eq!(second.competitions.inserted, 0);
    assert_eq!(second.competitions.existing, 2);
    assert_eq!(second.teams.links_inserted, 0);
    assert_eq!(second.teams.links_existing, 4);
    assert_eq!(second.snapshots_kept, 2);
}

#[tokio::test]
async fn test_failed_team_fetch_does_not_stop_later_competitions() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v4/competitions",
        200,
        json!({
            "competitions": [
                {"id": 1, "name": "A", "code": "AAA"},
                {"id": 2, "name": "B", "code": "BBB"},
                {"id": 3, "name": "C", "code": "CCC"}
            ]
        }),
    )
    .await;
    mount_json(
        &server,
        "/v4/competitions/AAA/teams",
        500,
        json!({"message": "boom"}),
    )
    .await;
    mount_json(&server, "/v4/competitions/BBB/teams", 200, teams_fixture(&[20, 21])).await;
    mount_json(
        &server,
        "/v4/competitions/CCC/teams",
        429,
        json!({"message": "slow down"}),
    )
    .await;

    let harness = Harness::new(&server);
    let summary = harness.pipeline(Duration::ZERO).run().await.unwrap();

    assert_eq!(summary.team_fetches_failed, 2);
    assert_eq!(
        read(&harness.output().summary_csv()),
        "Competition,Number of Teams\r\nB,2\r\n"
    );
    assert!(!harness.output().teams_snapshot("AAA").exists());
    // Every competition is still recorded as a dimension
    assert_eq!(harness.warehouse.table_counts().unwrap().competitions, 3);
}

#[tokio::test]
async fn test_competition_without_code_is_skipped() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v4/competitions",
        200,
        json!({
            "competitions": [
                {"id": 1, "name": "A", "code": null},
                {"id": 2, "name": "B", "code": "BBB"}
            ]
        }),
    )
    .await;
    mount_json(&server, "/v4/competitions/BBB/teams", 200, teams_fixture(&[13])).await;

    let harness = Harness::new(&server);
    let summary = harness.pipeline(Duration::ZERO).run().await.unwrap();

    assert_eq!(summary.competitions_without_code, 1);
    assert_eq!(
        read(&harness.output().summary_csv()),
        "Competition,Number of Teams\r\nB,1\r\n"
    );
}

#[tokio::test]
async fn test_unavailable_competitions_listing_aborts() {
    let server = MockServer::start().await;
    mount_json(&server, "/v4/competitions", 403, json!({"message": "denied"})).await;

    let harness = Harness::new(&server);
    let err = harness.pipeline(Duration::ZERO).run().await.unwrap_err();

    assert!(matches!(err, EtlError::Status { status: 403, .. }));
    assert!(!harness.output().summary_csv().exists());
}

#[tokio::test]
async fn test_throttle_pauses_between_competitions() {
    let server = standard_server().await;
    let harness = Harness::new(&server);

    let started = Instant::now();
    harness
        .pipeline(Duration::from_millis(150))
        .run()
        .await
        .unwrap();

    // Two competitions means one pause
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn test_skipped_competition_adds_no_pause() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v4/competitions",
        200,
        json!({
            "competitions": [
                {"id": 1, "name": "A", "code": "AAA"},
                {"id": 2, "name": "X", "code": null},
                {"id": 3, "name": "B", "code": "BBB"}
            ]
        }),
    )
    .await;
    mount_json(&server, "/v4/competitions/AAA/teams", 200, teams_fixture(&[10])).await;
    mount_json(&server, "/v4/competitions/BBB/teams", 200, teams_fixture(&[13])).await;

    let harness = Harness::new(&server);
    let started = Instant::now();
    let summary = harness
        .pipeline(Duration::from_millis(300))
        .run()
        .await
        .unwrap();
    let elapsed = started.elapsed();

    // Two team requests means one pause, the skipped competition adds none
    assert_eq!(summary.competitions_without_code, 1);
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(600), "paused twice: {elapsed:?}");
}

#[tokio::test]
async fn test_undecodable_team_listing_does_not_stop_later_competitions() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v4/competitions",
        200,
        json!({
            "competitions": [
                {"id": 1, "name": "A", "code": "AAA"},
                {"id": 2, "name": "X", "code": null},
                {"id": 3, "name": "B", "code": "BBB"}
            ]
        }),
    )
    .await;
    mount_json(
        &server,
        "/v4/competitions/AAA/teams",
        200,
        json!({"teams": [{"id": "oops", "name": "Bad"}]}),
    )
    .await;
    mount_json(&server, "/v4/competitions/BBB/teams", 200, teams_fixture(&[13])).await;

    let harness = Harness::new(&server);
    let summary = harness.pipeline(Duration::ZERO).run().await.unwrap();

    assert_eq!(summary.team_fetches_failed, 1);
    assert_eq!(summary.competitions_without_code, 1);
    assert_eq!(summary.teams.links_inserted, 1);
    assert_eq!(
        read(&harness.output().summary_csv()),
        "Competition,Number of Teams\r\nB,1\r\n"
    );
    assert!(!harness.output().teams_snapshot("AAA").exists());
    assert!(harness.output().teams_snapshot("BBB").is_file());
}
