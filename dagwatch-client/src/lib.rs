//! Dagwatch HTTP Client
//!
//! A small, typed client for the read-only parts of the Airflow REST API
//! (`/api/v2`) that the monitor needs, plus the fetcher that turns their
//! responses into a flattened [`TaskTable`](dagwatch_core::table::TaskTable).
//!
//! Two layers are exposed:
//! - [`AirflowClient`] methods return `Result` and surface every failure
//! - [`AirflowApi`] is the at-most-effort contract used by the fetcher: a
//!   failed call is logged and reads as an empty list
//!
//! # Example
//!
//! ```no_run
//! use dagwatch_client::{AirflowClient, TaskDataFetcher};
//! use dagwatch_core::domain::period::TimePeriod;
//! use dagwatch_core::domain::state::StateFilter;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AirflowClient::new("http://localhost:8080");
//!     let fetcher = TaskDataFetcher::new(client);
//!
//!     let table = fetcher
//!         .fetch_task_data("etl", TimePeriod::Last1Hour, &StateFilter::All)
//!         .await;
//!
//!     println!("Fetched {} task instances", table.len());
//! }
//! ```

pub mod api;
mod dag_runs;
pub mod error;
pub mod fetcher;
mod task_instances;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use api::AirflowApi;
pub use error::{ClientError, Result};
pub use fetcher::TaskDataFetcher;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout applied to every request unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Airflow REST API
///
/// Every request carries `accept: application/json` and the same timeout.
#[derive(Debug, Clone)]
pub struct AirflowClient {
    /// Base URL of the Airflow webserver (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Per-request timeout
    timeout: Duration,
}

impl AirflowClient {
    /// Create a new client with the default timeout
    ///
    /// # Example
    /// ```
    /// use dagwatch_client::AirflowClient;
    ///
    /// let client = AirflowClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(base_url, Client::new()).timeout(timeout)
    }

    /// Create a new client around a pre-configured reqwest client
    ///
    /// This allows you to configure proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the base URL of the Airflow webserver
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
