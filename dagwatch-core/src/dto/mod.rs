//! Data Transfer Objects for the Airflow REST API
//!
//! Response envelopes of the `/api/v2` list endpoints. A missing list field
//! deserializes as empty, matching how the client treats a failed call.

use serde::{Deserialize, Serialize};

use crate::domain::run::DagRun;
use crate::domain::task::TaskInstance;

/// Body of `GET /api/v2/dags/{dag_id}/dagRuns`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunCollection {
    #[serde(default)]
    pub dag_runs: Vec<DagRun>,
    #[serde(default)]
    pub total_entries: Option<u64>,
}

/// Body of `GET /api/v2/dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceCollection {
    #[serde(default)]
    pub task_instances: Vec<TaskInstance>,
    #[serde(default)]
    pub total_entries: Option<u64>,
}
