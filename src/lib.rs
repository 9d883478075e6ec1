//! Network and web-transport security posture scanner.
//!
//! `core::scanner::run_full_scan` probes a host's sensitive TCP ports, HTTPS
//! availability with HSTS, and security response headers concurrently, then
//! folds the results into a single percentage score.
pub mod config;
pub mod core;
pub mod logging;
pub mod report;
