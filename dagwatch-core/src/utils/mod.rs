//! Shared helpers for the core types

pub mod serde;
