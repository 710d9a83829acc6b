//! Task instance endpoints

use crate::AirflowClient;
use crate::error::Result;
use dagwatch_core::dto::TaskInstanceCollection;

impl AirflowClient {
    // =============================================================================
    // Task Instances
    // =============================================================================

    /// List the task instances of one DAG run
    ///
    /// # Arguments
    /// * `dag_id` - The DAG identifier
    /// * `dag_run_id` - The run identifier
    pub async fn get_task_instances(
        &self,
        dag_id: &str,
        dag_run_id: &str,
    ) -> Result<TaskInstanceCollection> {
        let url = format!(
            "{}/api/v2/dags/{}/dagRuns/{}/taskInstances",
            self.base_url, dag_id, dag_run_id
        );
        let response = self.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::AirflowClient;
    use crate::test_server::respond_once;

    #[tokio::test]
    async fn test_get_task_instances() {
        let body = r#"{"task_instances": [
            {"task_id": "extract", "state": "success", "duration": 2.5},
            {"task_id": "load", "state": "skipped"}
        ]}"#;
        let (url, request) = respond_once(200, body).await;
        let client = AirflowClient::new(format!("{}/", url));

        let tasks = client.get_task_instances("etl", "run_1").await.unwrap();
        assert_eq!(tasks.task_instances.len(), 2);
        assert_eq!(tasks.task_instances[0].duration, Some(2.5));
        assert_eq!(tasks.task_instances[1].state.as_deref(), Some("skipped"));

        let head = request.await.unwrap();
        assert!(head.starts_with("GET /api/v2/dags/etl/dagRuns/run_1/taskInstances "));
    }
}
