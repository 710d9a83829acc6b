//! Report command handler
//!
//! Fetches the task table, prints statistics and optionally the zero-skipped
//! runs, then writes the requested artifacts.

use anyhow::Result;
use colored::*;
use dagwatch_core::analysis::{compute_statistics, find_runs_without_skipped_tasks};
use tracing::error;

use super::{fetch_table, print_banner, print_no_data};
use crate::config::{Config, Selection};
use crate::display::{print_no_skipped_runs, print_statistics};
use crate::export::{chart, csv_file};

/// Run a full report
///
/// Artifact write failures are reported but do not fail the command.
pub async fn handle_report(
    config: &Config,
    selection: &Selection,
    no_skipped: bool,
    charts: bool,
    write_csv: bool,
) -> Result<()> {
    print_banner(config, selection);

    let table = fetch_table(config, selection).await;

    let Some(stats) = compute_statistics(&table) else {
        print_no_data();
        return Ok(());
    };

    print_statistics(&stats);

    if no_skipped {
        let runs = find_runs_without_skipped_tasks(&table);
        print_no_skipped_runs(&runs);
    }

    if charts {
        println!();
        println!("{}", "Generating charts...".bold());
        let saved = chart::save_charts(&chart::build_charts(&table, &stats), &config.output_dir);
        if saved.is_empty() {
            println!("{}", "✗ No charts were saved".red());
        } else {
            println!("{}", format!("✓ {} chart(s) saved", saved.len()).green());
            for path in saved {
                println!("  {}", path.display().to_string().dimmed());
            }
        }
    }

    if write_csv {
        let path = config
            .output_dir
            .join(csv_file::file_name(&config.dag_id, selection.period, table.len()));
        match csv_file::write_table(&table, &path) {
            Ok(()) => println!(
                "{}",
                format!("✓ Task data saved to: {}", path.display()).green()
            ),
            Err(e) => {
                error!("Error saving data: {:#}", e);
                println!("{}", format!("✗ Error saving data: {:#}", e).red());
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✓ Processed {} task instance(s) from {} DAG run(s)",
            stats.total_tasks, stats.unique_dag_runs
        )
        .green()
        .bold()
    );

    Ok(())
}
