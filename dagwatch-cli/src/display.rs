//! Console output
//!
//! Colored rendering of statistics and run summaries.

use colored::*;
use dagwatch_core::analysis::{RunSummary, Statistics};

/// Colorize a task or DAG state label
pub fn colorize_state(state: &str) -> ColoredString {
    match state {
        "success" => state.green(),
        "failed" | "upstream_failed" => state.red(),
        "skipped" => state.yellow(),
        "running" => state.cyan(),
        "up_for_retry" | "up_for_reschedule" => state.magenta(),
        "" => "(none)".dimmed(),
        _ => state.dimmed(),
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "═".repeat(60).dimmed());
}

/// Print overall task statistics
pub fn print_statistics(stats: &Statistics) {
    section("Task Execution Statistics");
    println!("  Total Task Instances: {}", stats.total_tasks);
    println!("  Unique DAG Runs:      {}", stats.unique_dag_runs);
    println!("  Unique Task Types:    {}", stats.unique_task_types);
    println!();
    println!("  {}", "Task State Breakdown:".bold());
    for state in &stats.state_breakdown {
        println!(
            "    {} {}: {} ({:.1}%)",
            "•".dimmed(),
            colorize_state(&state.task_state),
            state.count,
            stats.percentage(state)
        );
    }
}

/// Print the runs that finished without skipping any task
pub fn print_no_skipped_runs(runs: &[RunSummary]) {
    section("DAG Runs With Zero Skipped Tasks");

    if runs.is_empty() {
        println!(
            "{}",
            "No DAG runs found with zero skipped tasks in the specified time period".yellow()
        );
        return;
    }

    println!(
        "{}",
        format!("Found {} DAG run(s) with no skipped tasks:", runs.len()).bold()
    );
    println!();
    for run in runs {
        println!("  {} {}", "▸".cyan(), run.dag_run_id);
        println!(
            "    Success:        {}/{} tasks ({:.1}%)",
            run.success_count,
            run.total_tasks,
            run.success_rate()
        );
        println!("    Failed:         {} tasks", run.failed_count);
        println!("    Total Duration: {:.2}s", run.total_duration);
        println!("    Run Type:       {}", run.run_type.dimmed());
        println!("    Logical Date:   {}", format_date(run));
        println!();
    }
}

/// Print one line per run
pub fn print_run_summaries(runs: &[RunSummary]) {
    section("DAG Run Summary");
    println!(
        "  {:<45} {:<10} {:>7} {:>6} {:>7} {:>5} {:>10}",
        "RUN", "STATE", "SUCCESS", "FAILED", "SKIPPED", "TOTAL", "DURATION"
    );
    for run in runs {
        println!(
            "  {:<45} {:<10} {:>7} {:>6} {:>7} {:>5} {:>9.2}s",
            run.dag_run_id,
            colorize_state(&run.dag_state),
            run.success_count,
            run.failed_count,
            run.skipped_count,
            run.total_tasks,
            run.total_duration
        );
    }
}

fn format_date(run: &RunSummary) -> String {
    run.logical_date
        .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}
