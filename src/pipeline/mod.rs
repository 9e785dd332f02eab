/// Batch orchestrator.
pub mod batch;
/// Batch configuration.
pub mod config;
/// Batch outcome report.
pub mod report;
/// Single-asset adapter.
pub mod single;
