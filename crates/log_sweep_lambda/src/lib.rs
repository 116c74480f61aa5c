//! AWS-oriented adapters and handler for the orphaned log-group sweep.
//!
//! This crate owns runtime integration details (registry adapter traits and
//! the Lambda handler) on top of the naming and contract primitives in
//! `log_sweep_core`.

pub mod adapters;
pub mod handlers;
