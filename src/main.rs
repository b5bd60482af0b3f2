//! Entry point: parse CLI, set up logging, dispatch.

use anyhow::Context as _;
use clap::Parser;
use football_etl::{
    cli::{Commands, FootballEtl, GlobalArgs},
    config::resolve_output_dir,
    write_summary, ApiClient, DatabaseConfig, EtlConfig, OutputPaths, Pipeline, Warehouse,
};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn open_warehouse(global: &GlobalArgs) -> anyhow::Result<Warehouse> {
    let config = DatabaseConfig::resolve(global.database.clone(), env_lookup)?;
    Warehouse::open(&config)
        .with_context(|| format!("failed to open warehouse at {}", config.path.display()))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FootballEtl::parse();

    let default_level = if app.global.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    match app.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = EtlConfig::from_env(app.global.overrides())
                .context("invalid configuration")?;
            let mut warehouse = Warehouse::open(&config.database).with_context(|| {
                format!(
                    "failed to open warehouse at {}",
                    config.database.path.display()
                )
            })?;
            warehouse
                .create_tables()
                .context("failed to create warehouse tables")?;

            let client = ApiClient::new(&config.api).context("failed to set up API client")?;
            let pipeline = Pipeline::from_config(&client, &warehouse, &config);
            let summary = pipeline.run().await.context("pipeline aborted")?;

            info!(
                path = %pipeline.paths().summary_csv().display(),
                rows = summary.summary_rows,
                "done"
            );
        }

        Commands::CreateTables => {
            let mut warehouse = open_warehouse(&app.global)?;
            warehouse.create_tables()?;
        }

        Commands::DropTables => {
            let mut warehouse = open_warehouse(&app.global)?;
            warehouse.drop_tables()?;
        }

        Commands::Summary => {
            let warehouse = open_warehouse(&app.global)?;
            let paths = OutputPaths::new(resolve_output_dir(
                app.global.output_dir.clone(),
                env_lookup,
            ));
            write_summary(&warehouse, &paths.summary_csv())
                .context("failed to write summary")?;
        }

        Commands::Status => {
            let warehouse = open_warehouse(&app.global)?;
            if !warehouse.table_exists("fact_competitions")? {
                println!("warehouse tables have not been created");
                return Ok(());
            }
            let counts = warehouse.table_counts()?;
            println!("dim_competitions: {}", counts.competitions);
            println!("dim_teams: {}", counts.teams);
            println!("fact_competitions: {}", counts.links);
        }
    }

    Ok(())
}
