//! Property-based tests for the cost estimator
//!
//! Verifies the structural invariants of the breakdown over arbitrary
//! workloads and cost-model options.

use batchctl::estimator::{CostEstimator, CostOptions, WorkloadSpec};
use batchctl::pricing::EC2_PRICING;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_annual_is_always_monthly_times_twelve(
        jobs in 0u32..1000,
        duration in 0.0f64..1440.0,
        vcpu in 0u32..16,
        memory in 0u32..65536,
        use_spot in any::<bool>(),
        use_vpc_endpoints in any::<bool>(),
    ) {
        let est = CostEstimator::new(WorkloadSpec {
            jobs_per_day: jobs,
            duration_minutes: duration,
            vcpu,
            memory_mb: memory,
        });
        let opts = CostOptions { use_spot, use_vpc_endpoints, ..Default::default() };
        let b = est.estimate(&opts);

        // Annual figures are monthly x 12 by construction, never an
        // independently computed sum.
        prop_assert_eq!(b.compute.annual, b.compute.monthly * 12.0);
        prop_assert_eq!(b.storage.annual, b.storage.monthly * 12.0);
        prop_assert_eq!(b.network.annual, b.network.monthly * 12.0);
        prop_assert_eq!(b.total.annual, b.total.monthly * 12.0);
    }

    #[test]
    fn test_total_is_sum_of_components(
        jobs in 0u32..1000,
        duration in 0.0f64..1440.0,
        ecr_gb in 0.0f64..1000.0,
        s3_gb in 0.0f64..10000.0,
        log_gb in 0.0f64..1000.0,
        data_transfer_gb in 0.0f64..10000.0,
    ) {
        let est = CostEstimator::new(WorkloadSpec {
            jobs_per_day: jobs,
            duration_minutes: duration,
            vcpu: 2,
            memory_mb: 4096,
        });
        let opts = CostOptions {
            use_spot: true,
            use_vpc_endpoints: true,
            ecr_gb,
            s3_gb,
            log_gb,
            data_transfer_gb,
        };
        let b = est.estimate(&opts);
        prop_assert_eq!(
            b.total.monthly,
            b.compute.monthly + b.storage.monthly + b.network.monthly
        );
    }

    #[test]
    fn test_selected_instance_always_satisfies_or_is_fallback(
        vcpu in 0u32..32,
        memory in 0u32..131072,
    ) {
        let est = CostEstimator::new(WorkloadSpec {
            jobs_per_day: 1,
            duration_minutes: 10.0,
            vcpu,
            memory_mb: memory,
        });
        let selected = est.instance();

        let any_fits = EC2_PRICING.iter().any(|c| c.vcpu >= vcpu && c.memory_mb >= memory);
        if any_fits {
            // First-fit: the selection fits, and no earlier entry does
            prop_assert!(selected.vcpu >= vcpu && selected.memory_mb >= memory);
            let index = EC2_PRICING.iter().position(|c| c.name == selected.name).unwrap();
            for earlier in &EC2_PRICING[..index] {
                prop_assert!(earlier.vcpu < vcpu || earlier.memory_mb < memory);
            }
        } else {
            prop_assert_eq!(selected.name, "c5.2xlarge");
        }
    }

    #[test]
    fn test_spot_never_costs_more_than_on_demand(
        jobs in 1u32..1000,
        duration in 1.0f64..1440.0,
        vcpu in 0u32..16,
        memory in 0u32..65536,
    ) {
        let est = CostEstimator::new(WorkloadSpec {
            jobs_per_day: jobs,
            duration_minutes: duration,
            vcpu,
            memory_mb: memory,
        });
        let spot = est.compute_cost(true);
        let on_demand = est.compute_cost(false);
        prop_assert!(spot.monthly <= on_demand.monthly);
    }
}
