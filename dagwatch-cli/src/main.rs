//! Dagwatch CLI
//!
//! Command-line monitor for Airflow DAG runs: fetches recent runs and their
//! task instances, reports statistics, and exports charts and CSV.

mod commands;
mod config;
mod display;
mod export;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dagwatch")]
#[command(about = "Airflow DAG task monitor", long_about = None)]
struct Cli {
    /// Airflow webserver URL
    #[arg(long, global = true, env = "AIRFLOW_URL", default_value = "http://localhost:8080")]
    airflow_url: String,

    /// DAG to monitor
    #[arg(short, long, global = true, env = "DAGWATCH_DAG_ID", default_value = "")]
    dag_id: String,

    /// Time period to analyze (5m, 15m, 30m, 1h, 6h, 12h, 1d, 2d, 7d, 14d, 1mo)
    #[arg(short, long, global = true, env = "DAGWATCH_PERIOD", default_value = "1h")]
    period: String,

    /// Task states to include (repeat or comma-separate); all states when omitted
    #[arg(
        short,
        long = "state",
        global = true,
        env = "DAGWATCH_STATES",
        value_delimiter = ','
    )]
    states: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "DAGWATCH_REQUEST_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Maximum number of DAG runs to fetch
    #[arg(long, global = true, env = "DAGWATCH_MAX_DAG_RUNS", default_value_t = 100)]
    limit: usize,

    /// Directory for charts and CSV exports
    #[arg(long, global = true, env = "DAGWATCH_OUTPUT_DIR", default_value = "/tmp")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dagwatch_cli=info,dagwatch_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        airflow_url: cli.airflow_url,
        dag_id: cli.dag_id,
        period: cli.period,
        states: (!cli.states.is_empty()).then_some(cli.states),
        request_timeout: Duration::from_secs(cli.timeout),
        max_dag_runs: cli.limit,
        output_dir: cli.output_dir,
    };

    handle_command(cli.command, &config).await
}
