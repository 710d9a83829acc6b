//! Configuration module
//!
//! Handles CLI configuration: where Airflow lives, what to analyze, and where
//! artifacts are written.

use anyhow::Result;
use dagwatch_core::domain::period::TimePeriod;
use dagwatch_core::domain::state::StateFilter;
use dagwatch_core::validation;
use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Airflow webserver
    pub airflow_url: String,

    /// DAG to monitor
    pub dag_id: String,

    /// Time period label, e.g. "1h"
    pub period: String,

    /// Task state labels to keep; `None` keeps every state
    pub states: Option<Vec<String>>,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Maximum number of DAG runs fetched per invocation
    pub max_dag_runs: usize,

    /// Directory charts and CSV files are written to
    pub output_dir: PathBuf,
}

/// Validated analysis parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub period: TimePeriod,
    pub states: StateFilter,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(dag_id: impl Into<String>) -> Self {
        Self {
            airflow_url: "http://localhost:8080".to_string(),
            dag_id: dag_id.into(),
            period: "1h".to_string(),
            states: None,
            request_timeout: Duration::from_secs(30),
            max_dag_runs: 100,
            output_dir: PathBuf::from("/tmp"),
        }
    }

    /// Validates the configuration
    ///
    /// Runs before any network activity. Returns the typed period and state
    /// filter on success.
    pub fn validate(&self) -> Result<Selection> {
        let (period, states) =
            validation::validate(&self.dag_id, &self.period, self.states.as_deref())?;

        if !self.airflow_url.starts_with("http://") && !self.airflow_url.starts_with("https://") {
            anyhow::bail!("airflow_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.max_dag_runs == 0 {
            anyhow::bail!("max_dag_runs must be greater than 0");
        }

        Ok(Selection { period, states })
    }
}
