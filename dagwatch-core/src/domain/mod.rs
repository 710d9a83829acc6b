//! Core domain types
//!
//! This module contains the domain structures shared by the client and CLI.
//! Run and task records mirror what the Airflow API returns; the state and
//! period enumerations are closed sets with canonical string labels.

pub mod period;
pub mod run;
pub mod state;
pub mod task;
