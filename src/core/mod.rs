// src/core/mod.rs

/// Data structures shared by every probe: port, HTTPS and header reports,
/// the score summary and the aggregated `ScanResult`.
pub mod models;

/// Transport failure classes recorded by the probes.
pub mod error;

/// The probes and the orchestrator that runs them concurrently.
pub mod scanner;

/// Point assignment over the probe reports.
pub mod scoring;

/// Host normalization for user-supplied targets.
pub mod target;
