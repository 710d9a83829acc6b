//! At-most-effort Airflow API
//!
//! The contract the fetcher is written against. Each call is a single request
//! with no retry. A failed call is logged and yields an empty list, so "no
//! data" and "fetch failed" look the same to callers.

use async_trait::async_trait;
use dagwatch_core::domain::run::DagRun;
use dagwatch_core::domain::task::TaskInstance;
use tracing::error;

use crate::{AirflowClient, ClientError};

/// Read-only view of a DAG's runs and task instances
#[async_trait]
pub trait AirflowApi: Send + Sync {
    /// Runs of `dag_id` started at or after `start_date_gte`, newest first,
    /// at most `limit` of them
    async fn list_runs(&self, dag_id: &str, start_date_gte: &str, limit: usize) -> Vec<DagRun>;

    /// Task instances of one run, in API order
    async fn list_task_instances(&self, dag_id: &str, dag_run_id: &str) -> Vec<TaskInstance>;
}

#[async_trait]
impl AirflowApi for AirflowClient {
    async fn list_runs(&self, dag_id: &str, start_date_gte: &str, limit: usize) -> Vec<DagRun> {
        match self.get_dag_runs(dag_id, start_date_gte, limit).await {
            Ok(collection) => collection.dag_runs,
            Err(e) => {
                log_failure(&format!("DAG runs for {}", dag_id), &e);
                Vec::new()
            }
        }
    }

    async fn list_task_instances(&self, dag_id: &str, dag_run_id: &str) -> Vec<TaskInstance> {
        match self.get_task_instances(dag_id, dag_run_id).await {
            Ok(collection) => collection.task_instances,
            Err(e) => {
                log_failure(&format!("task instances for {}", dag_run_id), &e);
                Vec::new()
            }
        }
    }
}

fn log_failure(what: &str, e: &ClientError) {
    if e.is_transport() {
        error!("Could not reach Airflow fetching {}: {}", what, e);
    } else if e.is_not_found() {
        error!("Airflow has no {}: {}", what, e);
    } else {
        error!("Error fetching {}: {}", what, e);
    }
}
