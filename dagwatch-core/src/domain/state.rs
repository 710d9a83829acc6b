//! Task state domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Airflow task instance state
///
/// The closed set of states a task instance can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Success,
    Failed,
    Skipped,
    Running,
    Queued,
    UpForRetry,
    UpForReschedule,
    UpstreamFailed,
    Deferred,
    Removed,
}

impl TaskState {
    /// Every state, in canonical order
    pub const ALL: [TaskState; 10] = [
        TaskState::Success,
        TaskState::Failed,
        TaskState::Skipped,
        TaskState::Running,
        TaskState::Queued,
        TaskState::UpForRetry,
        TaskState::UpForReschedule,
        TaskState::UpstreamFailed,
        TaskState::Deferred,
        TaskState::Removed,
    ];

    /// Canonical label as used by the Airflow API
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Success => "success",
            TaskState::Failed => "failed",
            TaskState::Skipped => "skipped",
            TaskState::Running => "running",
            TaskState::Queued => "queued",
            TaskState::UpForRetry => "up_for_retry",
            TaskState::UpForReschedule => "up_for_reschedule",
            TaskState::UpstreamFailed => "upstream_failed",
            TaskState::Deferred => "deferred",
            TaskState::Removed => "removed",
        }
    }

    /// All canonical labels, for error messages and help output
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(TaskState::as_str).collect()
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not a known task state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTaskState(pub String);

impl fmt::Display for UnknownTaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task state '{}'", self.0)
    }
}

impl std::error::Error for UnknownTaskState {}

impl FromStr for TaskState {
    type Err = UnknownTaskState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownTaskState(s.to_string()))
    }
}

/// Which task states a fetch keeps
///
/// An empty selection and a selection of every state are the same filter,
/// so both collapse to `All` on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    Only(BTreeSet<TaskState>),
}

impl StateFilter {
    /// Builds a filter from a selection of states
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = TaskState>,
    {
        let set: BTreeSet<TaskState> = states.into_iter().collect();
        if set.is_empty() || set.len() == TaskState::ALL.len() {
            StateFilter::All
        } else {
            StateFilter::Only(set)
        }
    }

    /// Returns true if this filter keeps everything
    pub fn is_all(&self) -> bool {
        matches!(self, StateFilter::All)
    }

    /// Checks a raw state string as received from the API
    ///
    /// `Only` rejects states outside the enumeration, including a missing state.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(set) => raw
                .parse::<TaskState>()
                .map(|state| set.contains(&state))
                .unwrap_or(false),
        }
    }

    /// The selected states, in canonical order
    pub fn states(&self) -> Vec<TaskState> {
        match self {
            StateFilter::All => TaskState::ALL.to_vec(),
            StateFilter::Only(set) => set.iter().copied().collect(),
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFilter::All => f.write_str("all states"),
            StateFilter::Only(set) => {
                let labels: Vec<&str> = set.iter().map(TaskState::as_str).collect();
                f.write_str(&labels.join(", "))
            }
        }
    }
}
