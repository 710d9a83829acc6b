//! Task table analysis
//!
//! Pure functions over a materialized [`TaskTable`]: overall statistics and
//! per-run aggregation, including the zero-skipped report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::domain::state::TaskState;
use crate::table::{TaskRow, TaskTable};

/// Aggregate counts over a whole table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_tasks: usize,
    pub unique_dag_runs: usize,
    pub unique_task_types: usize,
    /// Sorted by count, highest first
    pub state_breakdown: Vec<StateCount>,
}

/// Number of rows carrying one literal state string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub task_state: String,
    pub count: usize,
}

impl Statistics {
    /// Share of all rows in the given state, 0-100
    pub fn percentage(&self, state: &StateCount) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        state.count as f64 / self.total_tasks as f64 * 100.0
    }
}

/// Computes overall statistics, or `None` for an empty table
///
/// States are grouped by the string present in the data. Equal counts keep
/// the order in which the state was first seen.
pub fn compute_statistics(table: &TaskTable) -> Option<Statistics> {
    if table.is_empty() {
        return None;
    }

    let mut runs = HashSet::new();
    let mut task_ids = HashSet::new();
    let mut breakdown: Vec<StateCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in table {
        runs.insert(row.dag_run_id.as_str());
        task_ids.insert(row.task_id.as_str());

        match index.get(row.task_state.as_str()) {
            Some(&i) => breakdown[i].count += 1,
            None => {
                index.insert(row.task_state.as_str(), breakdown.len());
                breakdown.push(StateCount {
                    task_state: row.task_state.clone(),
                    count: 1,
                });
            }
        }
    }

    breakdown.sort_by(|a, b| b.count.cmp(&a.count));

    Some(Statistics {
        total_tasks: table.len(),
        unique_dag_runs: runs.len(),
        unique_task_types: task_ids.len(),
        state_breakdown: breakdown,
    })
}

/// Per-run tally of task states and durations
///
/// `run_type`, `logical_date` and `dag_state` are taken from the first row of
/// the run encountered in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub dag_run_id: String,
    pub run_type: String,
    pub logical_date: Option<DateTime<Utc>>,
    pub dag_state: String,
    pub success_count: usize,
    pub failed_count: usize,
    pub skipped_count: usize,
    pub total_tasks: usize,
    /// Seconds
    pub total_duration: f64,
}

impl RunSummary {
    fn start(row: &TaskRow) -> Self {
        Self {
            dag_run_id: row.dag_run_id.clone(),
            run_type: row.run_type.clone(),
            logical_date: row.logical_date,
            dag_state: row.dag_state.clone(),
            success_count: 0,
            failed_count: 0,
            skipped_count: 0,
            total_tasks: 0,
            total_duration: 0.0,
        }
    }

    fn add(&mut self, row: &TaskRow) {
        match row.task_state.parse::<TaskState>() {
            Ok(TaskState::Success) => self.success_count += 1,
            Ok(TaskState::Failed) => self.failed_count += 1,
            Ok(TaskState::Skipped) => self.skipped_count += 1,
            _ => {}
        }
        self.total_tasks += 1;
        self.total_duration += row.duration;
    }

    /// Share of successful tasks, 0-100
    pub fn success_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.total_tasks as f64 * 100.0
    }
}

/// Groups the table by run identifier
///
/// Sorted by logical date, newest first. Runs without a logical date sort
/// last, and ties keep the order in which the run was first seen.
pub fn summarize_runs(table: &TaskTable) -> Vec<RunSummary> {
    let mut summaries: Vec<RunSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in table {
        let i = *index.entry(row.dag_run_id.as_str()).or_insert_with(|| {
            summaries.push(RunSummary::start(row));
            summaries.len() - 1
        });
        summaries[i].add(row);
    }

    summaries.sort_by(|a, b| newest_first(a.logical_date, b.logical_date));
    summaries
}

/// Runs in which no task was skipped, newest first
pub fn find_runs_without_skipped_tasks(table: &TaskTable) -> Vec<RunSummary> {
    summarize_runs(table)
        .into_iter()
        .filter(|run| run.skipped_count == 0)
        .collect()
}

fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
