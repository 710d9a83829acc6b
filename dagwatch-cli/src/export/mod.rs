//! Artifact export
//!
//! Files written next to a report: the task table as CSV and standalone HTML
//! charts.

pub mod chart;
pub mod csv_file;
