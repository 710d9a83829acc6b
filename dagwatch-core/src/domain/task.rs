//! Task instance domain types

use serde::{Deserialize, Serialize};

use crate::utils::serde::deserialize_lenient_option;

/// One task's execution record within a DAG run
///
/// `state` is kept as the raw string the API sent so that states outside the
/// known enumeration survive into statistics. Optional fields holding a value
/// of the wrong type read as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInstance {
    pub task_id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub end_date: Option<String>,
    /// Seconds
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub try_number: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub max_tries: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub operator: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub priority_weight: Option<i64>,
}

impl TaskInstance {
    /// Creates a task instance with an identifier and state
    pub fn new(task_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            state: Some(state.into()),
            start_date: None,
            end_date: None,
            duration: None,
            try_number: None,
            max_tries: None,
            operator: None,
            priority_weight: None,
        }
    }
}
