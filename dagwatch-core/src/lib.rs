//! Dagwatch Core
//!
//! Core types and analysis for the dagwatch Airflow monitor.
//!
//! This crate contains:
//! - Domain types: Closed enumerations and the run/task records returned by Airflow
//! - DTOs: Response envelopes of the Airflow REST API
//! - Table: The flattened one-row-per-task-instance view of a fetch
//! - Analysis: Statistics and per-run aggregation over a table
//! - Validation: Checking user configuration before any network activity
//! - Utils: Lenient deserialization of optional record fields

pub mod analysis;
pub mod domain;
pub mod dto;
pub mod table;
pub mod utils;
pub mod validation;
