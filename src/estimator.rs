//! AWS Batch cost estimation
//!
//! Pure, synchronous computation from a workload shape to a cost breakdown.
//! No I/O, no shared state; every invocation is independent, so callers may
//! build and use estimators from multiple threads without coordination.
//!
//! Instance selection happens once at construction: first entry in the
//! pricing table whose vCPU and memory capacity both cover the workload wins.
//! If nothing fits, the largest class is used as a fallback.

use crate::pricing::{self, InstanceClass};
use serde::Serialize;

/// Resource requirements and usage volume for a batch workload
#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpec {
    pub jobs_per_day: u32,
    pub duration_minutes: f64,
    pub vcpu: u32,
    pub memory_mb: u32,
}

/// Cost-model options supplied alongside the workload
#[derive(Debug, Clone, Copy)]
pub struct CostOptions {
    /// Bill compute at the spot rate instead of on-demand
    pub use_spot: bool,
    /// VPC-endpoint network model instead of NAT gateway
    pub use_vpc_endpoints: bool,
    /// ECR image storage (GB)
    pub ecr_gb: f64,
    /// S3 storage (GB)
    pub s3_gb: f64,
    /// CloudWatch logs ingested per month (GB)
    pub log_gb: f64,
    /// Data transferred per month (GB)
    pub data_transfer_gb: f64,
}

impl Default for CostOptions {
    fn default() -> Self {
        Self {
            use_spot: true,
            use_vpc_endpoints: true,
            ecr_gb: 2.0,
            s3_gb: 100.0,
            log_gb: 5.0,
            data_transfer_gb: 50.0,
        }
    }
}

/// A monthly cost and its annual projection
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostPair {
    pub monthly: f64,
    pub annual: f64,
}

impl CostPair {
    /// Annual is always monthly x 12; never computed independently.
    pub fn from_monthly(monthly: f64) -> Self {
        Self { monthly, annual: monthly * 12.0 }
    }
}

/// Savings relative to the fixed on-premises baseline; negative when the
/// workload costs more than the baseline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Savings {
    pub monthly: f64,
    pub annual: f64,
    pub percentage: f64,
}

/// The inputs the estimate was computed from, echoed for reporting
#[derive(Debug, Clone, Serialize)]
pub struct EstimateInputs {
    pub instance_type: String,
    pub vcpu: u32,
    pub memory_mb: u32,
    pub jobs_per_day: u32,
    pub duration_minutes: f64,
    pub use_spot: bool,
    pub use_vpc_endpoints: bool,
}

/// Full cost breakdown for one estimate
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub configuration: EstimateInputs,
    pub compute: CostPair,
    pub storage: CostPair,
    pub network: CostPair,
    pub total: CostPair,
    pub savings_vs_onpremise: Savings,
}

/// Cost estimator bound to a workload and its selected instance class
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator {
    spec: WorkloadSpec,
    instance: &'static InstanceClass,
}

impl CostEstimator {
    /// Build an estimator, selecting the instance class for the workload.
    /// Selection is performed here and reused by every later computation.
    pub fn new(spec: WorkloadSpec) -> Self {
        let instance = select_instance(&spec);
        Self { spec, instance }
    }

    /// The instance class selected at construction
    pub fn instance(&self) -> &'static InstanceClass {
        self.instance
    }

    /// Monthly/annual compute cost at the spot or on-demand rate.
    /// Uses a uniform 30-day month; annual is monthly x 12.
    pub fn compute_cost(&self, use_spot: bool) -> CostPair {
        let hourly_rate = if use_spot { self.instance.spot } else { self.instance.on_demand };
        let hours_per_month =
            (self.spec.jobs_per_day as f64 * self.spec.duration_minutes / 60.0) * 30.0;
        CostPair::from_monthly(hours_per_month * hourly_rate)
    }

    /// Full breakdown: compute + storage + network, total, and savings
    /// against the on-premises baseline.
    pub fn estimate(&self, opts: &CostOptions) -> CostBreakdown {
        let compute = self.compute_cost(opts.use_spot);
        let storage = storage_cost(opts.ecr_gb, opts.s3_gb, opts.log_gb);
        let network = network_cost(opts.use_vpc_endpoints, opts.data_transfer_gb);

        let total = CostPair::from_monthly(compute.monthly + storage.monthly + network.monthly);

        let savings_monthly = pricing::ONPREM_BASELINE_MONTHLY - total.monthly;
        let savings = Savings {
            monthly: savings_monthly,
            annual: pricing::ONPREM_BASELINE_ANNUAL - total.annual,
            percentage: savings_monthly / pricing::ONPREM_BASELINE_MONTHLY * 100.0,
        };

        CostBreakdown {
            configuration: EstimateInputs {
                instance_type: self.instance.name.to_string(),
                vcpu: self.spec.vcpu,
                memory_mb: self.spec.memory_mb,
                jobs_per_day: self.spec.jobs_per_day,
                duration_minutes: self.spec.duration_minutes,
                use_spot: opts.use_spot,
                use_vpc_endpoints: opts.use_vpc_endpoints,
            },
            compute,
            storage,
            network,
            total,
            savings_vs_onpremise: savings,
        }
    }
}

/// First-fit selection in table declaration order; requirements of zero match
/// the first entry trivially. Falls back to the largest class when nothing in
/// the table is big enough.
fn select_instance(spec: &WorkloadSpec) -> &'static InstanceClass {
    pricing::EC2_PRICING
        .iter()
        .find(|c| c.vcpu >= spec.vcpu && c.memory_mb >= spec.memory_mb)
        .unwrap_or_else(pricing::fallback)
}

/// Flat per-GB-month storage cost across ECR, S3, and CloudWatch logs
pub fn storage_cost(ecr_gb: f64, s3_gb: f64, log_gb: f64) -> CostPair {
    let monthly = ecr_gb * pricing::ECR_STORAGE_GB_MONTH
        + s3_gb * pricing::S3_STORAGE_GB_MONTH
        + log_gb * pricing::CLOUDWATCH_LOGS_GB_MONTH;
    CostPair::from_monthly(monthly)
}

/// Network cost in one of two mutually exclusive modes: flat-base VPC
/// endpoints, or an always-on NAT gateway billed per hour plus per GB.
pub fn network_cost(use_vpc_endpoints: bool, data_transfer_gb: f64) -> CostPair {
    let monthly = if use_vpc_endpoints {
        pricing::VPC_ENDPOINT_MONTHLY_BASE + data_transfer_gb * pricing::VPC_ENDPOINT_DATA_PER_GB
    } else {
        pricing::HOURS_PER_MONTH * pricing::NAT_GATEWAY_HOURLY
            + data_transfer_gb * pricing::NAT_DATA_PROCESSING_PER_GB
    };
    CostPair::from_monthly(monthly)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(jobs: u32, duration: f64, vcpu: u32, memory: u32) -> WorkloadSpec {
        WorkloadSpec {
            jobs_per_day: jobs,
            duration_minutes: duration,
            vcpu,
            memory_mb: memory,
        }
    }

    #[test]
    fn test_selection_skips_undersized_memory() {
        // t3.small has 2048 MB and is skipped; t3.medium is the first fit.
        let est = CostEstimator::new(spec(2, 30.0, 2, 4096));
        assert_eq!(est.instance().name, "t3.medium");
    }

    #[test]
    fn test_selection_zero_requirements_take_first_entry() {
        let est = CostEstimator::new(spec(1, 10.0, 0, 0));
        assert_eq!(est.instance().name, "t3.small");
    }

    #[test]
    fn test_selection_oversized_falls_back_to_largest() {
        let est = CostEstimator::new(spec(1, 10.0, 100, 4096));
        assert_eq!(est.instance().name, "c5.2xlarge");

        let est = CostEstimator::new(spec(1, 10.0, 2, 1_048_576));
        assert_eq!(est.instance().name, "c5.2xlarge");
    }

    #[test]
    fn test_compute_cost_spot_reference_values() {
        // (2 jobs x 30 min / 60) x 30 days = 30 hours x $0.0125 = $0.375/month
        let est = CostEstimator::new(spec(2, 30.0, 2, 4096));
        let cost = est.compute_cost(true);
        assert!((cost.monthly - 0.375).abs() < 1e-9);
        assert_eq!(cost.annual, cost.monthly * 12.0);
    }

    #[test]
    fn test_compute_cost_on_demand_uses_higher_rate() {
        let est = CostEstimator::new(spec(2, 30.0, 2, 4096));
        let spot = est.compute_cost(true);
        let on_demand = est.compute_cost(false);
        assert!(on_demand.monthly > spot.monthly);
        assert!((on_demand.monthly - 30.0 * 0.0416).abs() < 1e-9);
    }

    #[test]
    fn test_network_cost_modes() {
        let endpoint = network_cost(true, 50.0);
        assert!((endpoint.monthly - 7.50).abs() < 1e-9);

        let nat = network_cost(false, 50.0);
        assert!((nat.monthly - 35.10).abs() < 1e-9);
    }

    #[test]
    fn test_storage_cost_flat_rates() {
        let cost = storage_cost(2.0, 100.0, 5.0);
        // 2 x 0.10 + 100 x 0.023 + 5 x 0.50 = 5.00
        assert!((cost.monthly - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let est = CostEstimator::new(spec(4, 45.0, 2, 8192));
        let breakdown = est.estimate(&CostOptions::default());
        assert_eq!(
            breakdown.total.monthly,
            breakdown.compute.monthly + breakdown.storage.monthly + breakdown.network.monthly
        );
        assert_eq!(breakdown.total.annual, breakdown.total.monthly * 12.0);
    }

    #[test]
    fn test_savings_negative_when_above_baseline() {
        // 720 on-demand c5.2xlarge hours plus NAT pushes past $260/month.
        let est = CostEstimator::new(spec(24, 60.0, 8, 16384));
        let opts = CostOptions { use_spot: false, use_vpc_endpoints: false, ..Default::default() };
        let breakdown = est.estimate(&opts);
        assert!(breakdown.total.monthly > 260.0);
        assert!(breakdown.savings_vs_onpremise.monthly < 0.0);
        assert!(breakdown.savings_vs_onpremise.percentage < 0.0);
    }

    #[test]
    fn test_savings_reference_relationship() {
        let est = CostEstimator::new(spec(2, 30.0, 2, 4096));
        let breakdown = est.estimate(&CostOptions::default());
        let s = breakdown.savings_vs_onpremise;
        assert!((s.monthly - (260.0 - breakdown.total.monthly)).abs() < 1e-9);
        assert!((s.annual - (3120.0 - breakdown.total.annual)).abs() < 1e-9);
        assert!((s.percentage - s.monthly / 260.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_configuration_echoes_inputs() {
        let est = CostEstimator::new(spec(2, 30.0, 2, 4096));
        let breakdown = est.estimate(&CostOptions::default());
        let cfg = &breakdown.configuration;
        assert_eq!(cfg.instance_type, "t3.medium");
        assert_eq!(cfg.jobs_per_day, 2);
        assert_eq!(cfg.memory_mb, 4096);
        assert!(cfg.use_spot);
    }
}
