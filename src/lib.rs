//! batchctl library
//!
//! Cost estimation and sample-job tooling for AWS Batch workloads.

pub mod aws_utils;
pub mod config;
pub mod error;
pub mod estimator;
pub mod job;
pub mod pricing;
pub mod report;

// Re-export commonly used types
pub use estimator::{CostBreakdown, CostEstimator, CostOptions, WorkloadSpec};
pub use pricing::InstanceClass;
