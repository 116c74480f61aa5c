//! Shared log-group sweep domain primitives.
//!
//! This crate owns the log-group naming convention, the per-group retention
//! decision, and the reconciliation result contract. It intentionally
//! excludes AWS SDK and Lambda runtime concerns; those live in
//! `crates/log_sweep_lambda`.

pub mod contract;
pub mod naming;
