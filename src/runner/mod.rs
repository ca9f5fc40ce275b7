//! Preflight orchestration.

pub mod preflight;

pub use preflight::{CheckReport, Preflight, PreflightReport, RunProgress};
