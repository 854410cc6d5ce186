use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod aws_utils;
mod config;
mod error;
mod estimator;
mod job;
mod pricing;
mod report;

use crate::config::Config;
use crate::estimator::{CostEstimator, CostOptions, WorkloadSpec};

#[derive(Parser)]
#[command(name = "batchctl")]
#[command(
    about = "Cost estimation and sample-job tooling for AWS Batch workloads",
    long_about = "batchctl helps teams running batch compute on AWS.\n\nCommands:\n  - estimate: project monthly/annual spend for a batch workload\n  - job: run the sample batch job template\n\nThe estimator selects an EC2 instance class for your workload shape and\nbreaks down compute, storage, and network costs against an on-premise\nbaseline."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    output: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate monthly and annual AWS Batch costs for a workload
    Estimate {
        /// Number of jobs per day
        #[arg(long, default_value_t = 2)]
        jobs: u32,
        /// Job duration in minutes
        #[arg(long, default_value_t = 30.0)]
        duration: f64,
        /// Number of vCPUs required
        #[arg(long, default_value_t = 2)]
        vcpu: u32,
        /// Memory required in MB
        #[arg(long, default_value_t = 4096)]
        memory: u32,
        /// Use on-demand instances instead of spot
        #[arg(long)]
        no_spot: bool,
        /// Use NAT Gateway instead of VPC endpoints
        #[arg(long)]
        no_vpc_endpoints: bool,
        /// ECR storage in GB
        #[arg(long, default_value_t = 2.0)]
        ecr_gb: f64,
        /// S3 storage in GB
        #[arg(long, default_value_t = 100.0)]
        s3_gb: f64,
        /// CloudWatch logs in GB per month
        #[arg(long, default_value_t = 5.0)]
        log_gb: f64,
        /// Data transfer in GB per month
        #[arg(long, default_value_t = 50.0)]
        data_transfer_gb: f64,
    },
    /// Run or inspect the sample batch job
    Job {
        #[command(subcommand)]
        subcommand: job::JobCommands,
    },
    /// Initialize batchctl configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = ".batchctl.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging - suppress INFO by default, only show warnings and errors
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config
    let config = Config::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Estimate {
            jobs,
            duration,
            vcpu,
            memory,
            no_spot,
            no_vpc_endpoints,
            ecr_gb,
            s3_gb,
            log_gb,
            data_transfer_gb,
        } => {
            let spec = WorkloadSpec {
                jobs_per_day: jobs,
                duration_minutes: duration,
                vcpu,
                memory_mb: memory,
            };
            let opts = CostOptions {
                use_spot: !no_spot && config.estimator.use_spot,
                use_vpc_endpoints: !no_vpc_endpoints && config.estimator.use_vpc_endpoints,
                ecr_gb,
                s3_gb,
                log_gb,
                data_transfer_gb,
            };
            let breakdown = CostEstimator::new(spec).estimate(&opts);
            report::print_estimate(&breakdown, &cli.output)?;
        }
        Commands::Job { subcommand } => {
            job::handle_command(subcommand, &config).await?;
        }
        Commands::Init { output } => {
            config::init_config(&output)?;
        }
    }

    Ok(())
}
