//! CSV export of the task table

use anyhow::{Context, Result};
use dagwatch_core::domain::period::TimePeriod;
use dagwatch_core::table::TaskTable;
use std::path::Path;

/// File name for an exported table, e.g. `airflow_tasks_etl_1h_42_records.csv`
pub fn file_name(dag_id: &str, period: TimePeriod, rows: usize) -> String {
    format!("airflow_tasks_{}_{}_{}_records.csv", dag_id, period.label(), rows)
}

/// Write every row of the table, with a header, to `path`
///
/// Missing timestamps are written as empty fields.
pub fn write_table(table: &TaskTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    for row in table {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row for task {}", row.task_id))?;
    }

    writer.flush().context("Failed to flush CSV file")?;
    Ok(())
}
