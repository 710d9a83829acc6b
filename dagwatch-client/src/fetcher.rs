//! Task data fetcher
//!
//! Walks the runs of a DAG inside a recent time window and flattens every
//! accepted task instance into a [`TaskTable`].

use chrono::{DateTime, SecondsFormat, Utc};
use dagwatch_core::domain::period::TimePeriod;
use dagwatch_core::domain::state::StateFilter;
use dagwatch_core::table::{TaskRow, TaskTable};
use tracing::{debug, info};

use crate::api::AirflowApi;

/// Runs requested per fetch when no limit is configured
pub const DEFAULT_RUN_LIMIT: usize = 100;

/// Fetches and flattens task data through an [`AirflowApi`]
pub struct TaskDataFetcher<A> {
    api: A,
    run_limit: usize,
}

impl<A: AirflowApi> TaskDataFetcher<A> {
    /// Creates a fetcher with the default run limit
    pub fn new(api: A) -> Self {
        Self {
            api,
            run_limit: DEFAULT_RUN_LIMIT,
        }
    }

    /// Caps the number of runs requested per fetch
    pub fn with_run_limit(mut self, run_limit: usize) -> Self {
        self.run_limit = run_limit;
        self
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    /// Fetches task data for the window ending now
    pub async fn fetch_task_data(
        &self,
        dag_id: &str,
        period: TimePeriod,
        states: &StateFilter,
    ) -> TaskTable {
        self.fetch_task_data_at(dag_id, period, states, Utc::now()).await
    }

    /// Fetches task data for the window `[now - period, now]`
    ///
    /// Rows follow run order as returned by the API, then task order within
    /// each run. Task instances are requested one run at a time and nothing
    /// is deduplicated.
    pub async fn fetch_task_data_at(
        &self,
        dag_id: &str,
        period: TimePeriod,
        states: &StateFilter,
        now: DateTime<Utc>,
    ) -> TaskTable {
        let start = now - period.duration();
        let start_date_gte = start.to_rfc3339_opts(SecondsFormat::Micros, true);

        info!(
            "Fetching DAG runs from {} to {}",
            start_date_gte,
            now.to_rfc3339_opts(SecondsFormat::Micros, true)
        );

        let runs = self
            .api
            .list_runs(dag_id, &start_date_gte, self.run_limit)
            .await;

        if runs.is_empty() {
            info!("No DAG runs found in the specified time period");
            return TaskTable::new();
        }

        info!("Found {} DAG runs", runs.len());

        let mut table = TaskTable::new();
        for run in &runs {
            let tasks = self.api.list_task_instances(dag_id, &run.dag_run_id).await;
            debug!("Run {} has {} task instances", run.dag_run_id, tasks.len());

            for task in &tasks {
                let state = task.state.as_deref().unwrap_or_default();
                if states.accepts(state) {
                    table.push(TaskRow::flatten(dag_id, run, task));
                }
            }
        }

        if table.is_empty() {
            info!("No matching tasks found");
        } else {
            info!("Collected {} task instances", table.len());
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use dagwatch_core::analysis::{
        compute_statistics, find_runs_without_skipped_tasks, summarize_runs,
    };
    use dagwatch_core::domain::run::DagRun;
    use dagwatch_core::domain::state::TaskState;
    use dagwatch_core::domain::task::TaskInstance;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory API that records the calls made against it
    #[derive(Default)]
    struct FakeApi {
        runs: Vec<DagRun>,
        tasks: HashMap<String, Vec<TaskInstance>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with_run(mut self, run_id: &str, logical_date: &str, tasks: &[(&str, &str)]) -> Self {
            self.runs.push(DagRun {
                run_type: Some("scheduled".to_string()),
                logical_date: Some(logical_date.to_string()),
                state: Some("success".to_string()),
                ..DagRun::new(run_id)
            });
            self.tasks.insert(
                run_id.to_string(),
                tasks
                    .iter()
                    .map(|(id, state)| TaskInstance::new(*id, *state))
                    .collect(),
            );
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AirflowApi for FakeApi {
        async fn list_runs(&self, dag_id: &str, start_date_gte: &str, limit: usize) -> Vec<DagRun> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("runs {} {} {}", dag_id, start_date_gte, limit));
            self.runs.iter().take(limit).cloned().collect()
        }

        async fn list_task_instances(&self, dag_id: &str, dag_run_id: &str) -> Vec<TaskInstance> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("tasks {} {}", dag_id, dag_run_id));
            self.tasks.get(dag_run_id).cloned().unwrap_or_default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn sample_api() -> FakeApi {
        FakeApi::default()
            .with_run(
                "r2",
                "2025-03-01T11:30:00Z",
                &[("extract", "success"), ("load", "failed")],
            )
            .with_run(
                "r1",
                "2025-03-01T11:00:00Z",
                &[("extract", "success"), ("load", "skipped"), ("notify", "success")],
            )
    }

    #[tokio::test]
    async fn test_no_runs_returns_empty_table() {
        let fetcher = TaskDataFetcher::new(FakeApi::default());
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &StateFilter::All, now())
            .await;

        assert!(table.is_empty());
        assert!(compute_statistics(&table).is_none());
        assert!(find_runs_without_skipped_tasks(&table).is_empty());
        assert_eq!(fetcher.api().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_window_start_and_limit() {
        let fetcher = TaskDataFetcher::new(FakeApi::default()).with_run_limit(7);
        fetcher
            .fetch_task_data_at("etl", TimePeriod::Last6Hours, &StateFilter::All, now())
            .await;

        assert_eq!(
            fetcher.api().calls(),
            vec!["runs etl 2025-03-01T06:00:00.000000Z 7".to_string()]
        );
    }

    #[tokio::test]
    async fn test_all_states_keeps_every_task() {
        let fetcher = TaskDataFetcher::new(sample_api());
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &StateFilter::All, now())
            .await;

        assert_eq!(table.len(), 5);
        let order: Vec<(&str, &str)> = table
            .iter()
            .map(|row| (row.dag_run_id.as_str(), row.task_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("r2", "extract"),
                ("r2", "load"),
                ("r1", "extract"),
                ("r1", "load"),
                ("r1", "notify"),
            ]
        );
        let calls = fetcher.api().calls();
        assert_eq!(
            &calls[1..],
            &["tasks etl r2".to_string(), "tasks etl r1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_run_between_runs_keeps_later_runs() {
        let api = FakeApi::default()
            .with_run("r3", "2025-03-01T11:45:00Z", &[("extract", "success")])
            .with_run("r2", "2025-03-01T11:30:00Z", &[])
            .with_run(
                "r1",
                "2025-03-01T11:00:00Z",
                &[("extract", "success"), ("load", "failed")],
            );
        let fetcher = TaskDataFetcher::new(api);
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &StateFilter::All, now())
            .await;

        let order: Vec<(&str, &str)> = table
            .iter()
            .map(|row| (row.dag_run_id.as_str(), row.task_id.as_str()))
            .collect();
        assert_eq!(order, vec![("r3", "extract"), ("r1", "extract"), ("r1", "load")]);
        let calls = fetcher.api().calls();
        assert_eq!(
            &calls[1..],
            &[
                "tasks etl r3".to_string(),
                "tasks etl r2".to_string(),
                "tasks etl r1".to_string(),
            ]
        );

        let summaries = summarize_runs(&table);
        let ids: Vec<&str> = summaries.iter().map(|s| s.dag_run_id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1"]);
    }

    #[tokio::test]
    async fn test_state_filter_excludes_other_states() {
        let fetcher = TaskDataFetcher::new(sample_api());
        let only_success = StateFilter::from_states([TaskState::Success]);
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &only_success, now())
            .await;

        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|row| row.task_state == "success"));
    }

    #[tokio::test]
    async fn test_full_state_set_behaves_like_no_filter() {
        let api = FakeApi::default().with_run(
            "r1",
            "2025-03-01T11:00:00Z",
            &[("a", "success"), ("b", "scheduled")],
        );
        let fetcher = TaskDataFetcher::new(api);
        let every_state = StateFilter::from_states(TaskState::ALL);
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &every_state, now())
            .await;

        assert_eq!(table.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_runs_are_not_deduplicated() {
        let api = FakeApi::default()
            .with_run("r1", "2025-03-01T11:00:00Z", &[("a", "success")])
            .with_run("r1", "2025-03-01T11:00:00Z", &[("a", "success")]);
        let fetcher = TaskDataFetcher::new(api);
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &StateFilter::All, now())
            .await;

        assert_eq!(table.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_then_analyze() {
        let fetcher = TaskDataFetcher::new(sample_api());
        let table = fetcher
            .fetch_task_data_at("etl", TimePeriod::Last1Hour, &StateFilter::All, now())
            .await;

        let stats = compute_statistics(&table).unwrap();
        assert_eq!(stats.total_tasks, 5);
        assert_eq!(stats.unique_dag_runs, 2);
        assert_eq!(stats.unique_task_types, 3);

        let clean = find_runs_without_skipped_tasks(&table);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].dag_run_id, "r2");
        assert_eq!(clean[0].failed_count, 1);
    }
}
