//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod labels;
mod report;
mod runs;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use dagwatch_client::{AirflowClient, TaskDataFetcher};
use dagwatch_core::table::TaskTable;
use tracing::debug;

use crate::config::{Config, Selection};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch task data and print statistics
    Report {
        /// Also list DAG runs with zero skipped tasks
        #[arg(long)]
        no_skipped: bool,

        /// Write HTML charts to the output directory
        #[arg(long)]
        charts: bool,

        /// Write the task table as CSV to the output directory
        #[arg(long)]
        csv: bool,
    },
    /// Summarize every DAG run in the period
    Runs,
    /// List valid time period labels
    Periods,
    /// List valid task state labels
    States,
}

/// Handle a CLI command
///
/// Commands that talk to Airflow validate the configuration first, so a bad
/// DAG id or label fails before any request is made.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Report {
            no_skipped,
            charts,
            csv,
        } => {
            let selection = config.validate()?;
            report::handle_report(config, &selection, no_skipped, charts, csv).await
        }
        Commands::Runs => {
            let selection = config.validate()?;
            runs::handle_runs(config, &selection).await
        }
        Commands::Periods => {
            labels::print_periods();
            Ok(())
        }
        Commands::States => {
            labels::print_states();
            Ok(())
        }
    }
}

/// Fetch the task table for a validated selection
async fn fetch_table(config: &Config, selection: &Selection) -> TaskTable {
    let client = AirflowClient::with_timeout(&config.airflow_url, config.request_timeout);
    debug!(
        "Using Airflow at {} with a {:?} request timeout",
        client.base_url(),
        client.request_timeout()
    );
    let fetcher = TaskDataFetcher::new(client).with_run_limit(config.max_dag_runs);

    fetcher
        .fetch_task_data(&config.dag_id, selection.period, &selection.states)
        .await
}

/// Print the header shown before a fetch
fn print_banner(config: &Config, selection: &Selection) {
    println!("{}", "Airflow DAG Task Monitor".bold());
    println!("{}", "═".repeat(60).dimmed());
    println!("  DAG ID:      {}", config.dag_id.cyan());
    println!("  Period:      {}", selection.period);
    println!("  Task States: {}", selection.states);
    println!("  Airflow URL: {}", config.airflow_url.dimmed());
    println!();
}

/// Print hints for an empty result
fn print_no_data() {
    println!("{}", "No data found for the specified criteria".yellow());
    println!("Please check:");
    println!("  • the DAG id exists and is spelled correctly");
    println!("  • the Airflow URL is reachable");
    println!("  • the time period contains DAG runs");
    println!("  • the selected task states exist in the data");
}
