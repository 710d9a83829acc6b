//! Flattened task table
//!
//! A fetch produces one [`TaskRow`] per (run, task instance) pair. Run-level
//! columns are repeated on every row of the same run.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::run::DagRun;
use crate::domain::task::TaskInstance;

/// One task instance joined with the run it belongs to
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    pub dag_id: String,
    pub dag_run_id: String,
    pub run_type: String,
    pub logical_date: Option<DateTime<Utc>>,
    pub dag_start_date: Option<DateTime<Utc>>,
    pub dag_end_date: Option<DateTime<Utc>>,
    pub dag_state: String,
    pub task_id: String,
    pub task_state: String,
    pub task_start_date: Option<DateTime<Utc>>,
    pub task_end_date: Option<DateTime<Utc>>,
    pub duration: f64,
    pub try_number: i64,
    pub max_tries: i64,
    pub operator: String,
    pub priority_weight: i64,
}

impl TaskRow {
    /// Joins a run and one of its task instances into a row
    ///
    /// Missing numbers become 0, missing strings become empty, and timestamps
    /// that fail to parse become `None`.
    pub fn flatten(dag_id: &str, run: &DagRun, task: &TaskInstance) -> Self {
        Self {
            dag_id: dag_id.to_string(),
            dag_run_id: run.dag_run_id.clone(),
            run_type: run.run_type.clone().unwrap_or_default(),
            logical_date: parse_optional(run.logical_date.as_deref()),
            dag_start_date: parse_optional(run.start_date.as_deref()),
            dag_end_date: parse_optional(run.end_date.as_deref()),
            dag_state: run.state.clone().unwrap_or_default(),
            task_id: task.task_id.clone(),
            task_state: task.state.clone().unwrap_or_default(),
            task_start_date: parse_optional(task.start_date.as_deref()),
            task_end_date: parse_optional(task.end_date.as_deref()),
            duration: task.duration.unwrap_or(0.0),
            try_number: task.try_number.unwrap_or(0),
            max_tries: task.max_tries.unwrap_or(0),
            operator: task.operator.clone().unwrap_or_default(),
            priority_weight: task.priority_weight.unwrap_or(0),
        }
    }
}

/// Parses an Airflow timestamp without failing
///
/// Accepts RFC 3339 (`Z` or an offset, optional fractional seconds) and the
/// offset-less `YYYY-MM-DDTHH:MM:SS[.f]` form, read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_optional(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_timestamp)
}

/// Ordered collection of flattened rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskTable {
    rows: Vec<TaskRow>,
}

impl TaskTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: TaskRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRow> {
        self.rows.iter()
    }
}

impl FromIterator<TaskRow> for TaskTable {
    fn from_iter<I: IntoIterator<Item = TaskRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskTable {
    type Item = &'a TaskRow;
    type IntoIter = std::slice::Iter<'a, TaskRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();

        assert_eq!(parse_timestamp("2025-03-01T12:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T12:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T14:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T12:30:00"), Some(expected));

        let fractional = parse_timestamp("2025-03-01T12:30:00.250000Z").unwrap();
        assert_eq!(fractional.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_timestamp_is_lenient() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2025-13-01T00:00:00Z"), None);
    }

    #[test]
    fn test_flatten_applies_defaults() {
        let run = DagRun::new("manual__1");
        let task = TaskInstance {
            state: None,
            ..TaskInstance::new("extract", "")
        };

        let row = TaskRow::flatten("etl", &run, &task);
        assert_eq!(row.dag_id, "etl");
        assert_eq!(row.dag_run_id, "manual__1");
        assert_eq!(row.run_type, "");
        assert_eq!(row.dag_state, "");
        assert_eq!(row.task_state, "");
        assert_eq!(row.logical_date, None);
        assert_eq!(row.duration, 0.0);
        assert_eq!(row.try_number, 0);
        assert_eq!(row.max_tries, 0);
        assert_eq!(row.operator, "");
        assert_eq!(row.priority_weight, 0);
    }

    #[test]
    fn test_flatten_copies_run_and_task_fields() {
        let run = DagRun {
            run_type: Some("scheduled".to_string()),
            logical_date: Some("2025-03-01T00:00:00Z".to_string()),
            start_date: Some("not a date".to_string()),
            state: Some("success".to_string()),
            ..DagRun::new("scheduled__1")
        };
        let task = TaskInstance {
            duration: Some(4.25),
            try_number: Some(2),
            max_tries: Some(3),
            operator: Some("BashOperator".to_string()),
            priority_weight: Some(7),
            end_date: Some("2025-03-01T00:01:00Z".to_string()),
            ..TaskInstance::new("load", "success")
        };

        let row = TaskRow::flatten("etl", &run, &task);
        assert_eq!(row.run_type, "scheduled");
        assert_eq!(
            row.logical_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(row.dag_start_date, None);
        assert_eq!(row.dag_state, "success");
        assert_eq!(row.task_state, "success");
        assert_eq!(
            row.task_end_date,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 1, 0).unwrap())
        );
        assert_eq!(row.duration, 4.25);
        assert_eq!(row.try_number, 2);
        assert_eq!(row.max_tries, 3);
        assert_eq!(row.operator, "BashOperator");
        assert_eq!(row.priority_weight, 7);
    }

    #[test]
    fn test_table_preserves_insertion_order() {
        let run = DagRun::new("r1");
        let table: TaskTable = ["a", "b", "c"]
            .iter()
            .map(|id| TaskRow::flatten("etl", &run, &TaskInstance::new(*id, "success")))
            .collect();

        let ids: Vec<&str> = table.iter().map(|row| row.task_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert!(TaskTable::new().is_empty());
    }
}
