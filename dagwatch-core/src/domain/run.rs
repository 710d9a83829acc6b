//! DAG run domain types

use serde::{Deserialize, Serialize};

use crate::utils::serde::deserialize_lenient_option;

/// One execution of a DAG as reported by the Airflow API
///
/// Only `dag_run_id` is required. Timestamps stay in their wire form here and
/// are parsed when the run is flattened into a table. Optional fields holding
/// a value of the wrong type read as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagRun {
    pub dag_run_id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub run_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub logical_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub state: Option<String>,
}

impl DagRun {
    /// Creates a run record with only an identifier set
    pub fn new(dag_run_id: impl Into<String>) -> Self {
        Self {
            dag_run_id: dag_run_id.into(),
            run_type: None,
            logical_date: None,
            start_date: None,
            end_date: None,
            state: None,
        }
    }
}
