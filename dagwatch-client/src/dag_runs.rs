//! DAG run endpoints

use crate::AirflowClient;
use crate::error::Result;
use dagwatch_core::dto::DagRunCollection;

impl AirflowClient {
    // =============================================================================
    // DAG Runs
    // =============================================================================

    /// List runs of a DAG that started at or after a point in time
    ///
    /// Runs are requested newest first and capped at `limit`; no further pages
    /// are fetched.
    ///
    /// # Arguments
    /// * `dag_id` - The DAG identifier
    /// * `start_date_gte` - Lower bound on the run start date, ISO 8601
    /// * `limit` - Maximum number of runs to return
    ///
    /// # Example
    /// ```no_run
    /// # use dagwatch_client::AirflowClient;
    /// # async fn example() -> dagwatch_client::Result<()> {
    /// let client = AirflowClient::new("http://localhost:8080");
    /// let runs = client
    ///     .get_dag_runs("etl", "2025-01-01T00:00:00.000000Z", 100)
    ///     .await?;
    /// println!("{} runs", runs.dag_runs.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_dag_runs(
        &self,
        dag_id: &str,
        start_date_gte: &str,
        limit: usize,
    ) -> Result<DagRunCollection> {
        let url = format!("{}/api/v2/dags/{}/dagRuns", self.base_url, dag_id);
        let limit = limit.to_string();
        let response = self
            .get(&url)
            .query(&[
                ("start_date_gte", start_date_gte),
                ("limit", limit.as_str()),
                ("order_by", "-start_date"),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
