//! Runs command handler

use anyhow::Result;
use dagwatch_core::analysis::summarize_runs;

use super::{fetch_table, print_banner, print_no_data};
use crate::config::{Config, Selection};
use crate::display::print_run_summaries;

/// Summarize every run in the period, newest first
pub async fn handle_runs(config: &Config, selection: &Selection) -> Result<()> {
    print_banner(config, selection);

    let table = fetch_table(config, selection).await;
    if table.is_empty() {
        print_no_data();
        return Ok(());
    }

    print_run_summaries(&summarize_runs(&table));

    Ok(())
}
