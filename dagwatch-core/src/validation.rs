//! Configuration validation
//!
//! Turns user-supplied labels into typed values before any request is made.

use thiserror::Error;

use crate::domain::period::TimePeriod;
use crate::domain::state::{StateFilter, TaskState};

/// Invalid monitor configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DAG id is required and cannot be empty")]
    EmptyDagId,

    #[error("Invalid time period '{value}'. Valid options: {}", .valid.join(", "))]
    InvalidTimePeriod {
        value: String,
        valid: Vec<&'static str>,
    },

    #[error("Invalid task state '{value}'. Valid options: {}", .valid.join(", "))]
    InvalidTaskState {
        value: String,
        valid: Vec<&'static str>,
    },
}

/// Validates a DAG id, period label and optional state labels
///
/// `None` and an empty list both select every state.
pub fn validate(
    dag_id: &str,
    period_label: &str,
    state_labels: Option<&[String]>,
) -> Result<(TimePeriod, StateFilter), ConfigError> {
    if dag_id.trim().is_empty() {
        return Err(ConfigError::EmptyDagId);
    }

    let period = period_label
        .parse::<TimePeriod>()
        .map_err(|_| ConfigError::InvalidTimePeriod {
            value: period_label.to_string(),
            valid: TimePeriod::labels(),
        })?;

    let states = state_labels
        .unwrap_or_default()
        .iter()
        .map(|label| {
            label
                .parse::<TaskState>()
                .map_err(|_| ConfigError::InvalidTaskState {
                    value: label.clone(),
                    valid: TaskState::labels(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((period, StateFilter::from_states(states)))
}
