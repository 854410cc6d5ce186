//! Static pricing data for cost estimation
//!
//! Simplified us-east-1 pricing (would use the AWS Pricing API in production).
//! The instance table is ordered smallest/cheapest first; instance selection
//! is first-fit in declaration order, so the order here is load-bearing.

/// A named EC2 instance class with fixed capacity and hourly rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceClass {
    pub name: &'static str,
    pub vcpu: u32,
    pub memory_mb: u32,
    /// On-demand price per hour (USD)
    pub on_demand: f64,
    /// Spot price per hour (USD)
    pub spot: f64,
}

/// EC2 pricing table (us-east-1, as of Nov 2025)
pub const EC2_PRICING: &[InstanceClass] = &[
    InstanceClass { name: "t3.small", vcpu: 2, memory_mb: 2048, on_demand: 0.0208, spot: 0.0062 },
    InstanceClass { name: "t3.medium", vcpu: 2, memory_mb: 4096, on_demand: 0.0416, spot: 0.0125 },
    InstanceClass { name: "t3.large", vcpu: 2, memory_mb: 8192, on_demand: 0.0832, spot: 0.0250 },
    InstanceClass { name: "t3.xlarge", vcpu: 4, memory_mb: 16384, on_demand: 0.1664, spot: 0.0499 },
    InstanceClass { name: "c5.large", vcpu: 2, memory_mb: 4096, on_demand: 0.085, spot: 0.0255 },
    InstanceClass { name: "c5.xlarge", vcpu: 4, memory_mb: 8192, on_demand: 0.17, spot: 0.051 },
    InstanceClass { name: "c5.2xlarge", vcpu: 8, memory_mb: 16384, on_demand: 0.34, spot: 0.102 },
    InstanceClass { name: "r5.large", vcpu: 2, memory_mb: 16384, on_demand: 0.126, spot: 0.0378 },
    InstanceClass { name: "r5.xlarge", vcpu: 4, memory_mb: 32768, on_demand: 0.252, spot: 0.0756 },
];

/// Class used when no table entry satisfies the workload requirements
pub const FALLBACK_INSTANCE: &str = "c5.2xlarge";

// Storage pricing (per GB-month)
pub const ECR_STORAGE_GB_MONTH: f64 = 0.10;
pub const S3_STORAGE_GB_MONTH: f64 = 0.023;
pub const CLOUDWATCH_LOGS_GB_MONTH: f64 = 0.50;

// NAT Gateway pricing
pub const NAT_GATEWAY_HOURLY: f64 = 0.045;
pub const NAT_DATA_PROCESSING_PER_GB: f64 = 0.045;

// VPC endpoint pricing: S3 gateway endpoint is free, the flat base covers the
// ECR interface endpoint.
pub const VPC_ENDPOINT_MONTHLY_BASE: f64 = 7.0;
pub const VPC_ENDPOINT_DATA_PER_GB: f64 = 0.01;

/// Average hours in a month, used for always-on NAT gateway billing
pub const HOURS_PER_MONTH: f64 = 730.0;

// On-premises baseline for the savings comparison. Two independent constants,
// not derived from each other.
pub const ONPREM_BASELINE_MONTHLY: f64 = 260.0;
pub const ONPREM_BASELINE_ANNUAL: f64 = 3120.0;

/// Look up an instance class by name
pub fn lookup(name: &str) -> Option<&'static InstanceClass> {
    EC2_PRICING.iter().find(|c| c.name == name)
}

/// The fallback class record
pub fn fallback() -> &'static InstanceClass {
    // FALLBACK_INSTANCE is always present in the table
    lookup(FALLBACK_INSTANCE).unwrap_or(&EC2_PRICING[EC2_PRICING.len() - 1])
}
