//! Sample batch job
//!
//! Template worker for AWS Batch: configuration comes from the environment
//! variables Batch injects (plus a few custom ones), work runs as a single
//! straight-line pass, and status/metrics go to CloudWatch at the end.
//! Intended as a starting point for real jobs; the processing loop is
//! simulated and its size/delay come from the `[job]` config section.

use crate::aws_utils;
use crate::config::Config;
use crate::error::Result;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cloudwatch::types::StandardUnit;
use chrono::Utc;
use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Subcommand, Clone)]
pub enum JobCommands {
    /// Run the sample batch job once
    ///
    /// Reads AWS Batch environment variables (AWS_BATCH_JOB_ID, INPUT_PATH,
    /// OUTPUT_PATH, PROCESSING_MODE, ...) and falls back to local-test
    /// defaults when they are absent, so the job can be exercised outside
    /// of Batch.
    Run,
}

/// Job configuration resolved from the environment
///
/// AWS Batch sets `AWS_BATCH_JOB_ID`, `AWS_BATCH_JOB_NAME`, and
/// `AWS_BATCH_JQ_NAME` on every container; the remaining variables are
/// supplied at job submission. Every field has a local default so the job
/// also runs on a developer machine.
#[derive(Debug, Clone)]
pub struct JobContext {
    pub job_id: String,
    pub job_name: String,
    pub job_queue: String,
    pub environment: String,
    pub project_name: String,
    pub aws_region: String,
    pub input_path: String,
    pub output_path: String,
    pub processing_mode: String,
}

impl JobContext {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a context from an arbitrary variable source. Tests use this to
    /// avoid mutating process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            job_id: var("AWS_BATCH_JOB_ID", "local-job"),
            job_name: var("AWS_BATCH_JOB_NAME", "local-test"),
            job_queue: var("AWS_BATCH_JQ_NAME", "unknown"),
            environment: var("ENVIRONMENT", "dev"),
            project_name: var("PROJECT_NAME", "batch-jobs"),
            aws_region: var("AWS_REGION", "us-east-1"),
            input_path: var("INPUT_PATH", ""),
            output_path: var("OUTPUT_PATH", ""),
            processing_mode: var("PROCESSING_MODE", "standard"),
        }
    }

    /// CloudWatch namespace for this job's custom metrics
    pub fn metric_namespace(&self) -> String {
        format!("{}/BatchJobs", self.project_name)
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobMetrics {
    pub records_processed: u64,
    pub records_failed: u64,
    pub processing_time_secs: f64,
}

/// Result document uploaded to OUTPUT_PATH when one is configured
#[derive(Debug, Serialize)]
pub struct JobResult {
    pub job_id: String,
    pub timestamp: String,
    pub records_processed: u64,
    pub status: String,
}

pub async fn handle_command(cmd: JobCommands, config: &Config) -> Result<()> {
    match cmd {
        JobCommands::Run => run(config).await,
    }
}

/// Execute the batch job: validate, process, publish metrics.
/// Errors propagate to the CLI boundary, which exits nonzero.
pub async fn run(config: &Config) -> Result<()> {
    let mut ctx = JobContext::from_env();

    // Config-level project name applies only when the environment is silent
    if std::env::var("PROJECT_NAME").is_err() {
        if let Some(name) = config
            .aws
            .as_ref()
            .and_then(|a| a.default_project_name.clone())
        {
            ctx.project_name = name;
        }
    }

    info!(
        job_id = %ctx.job_id,
        job_name = %ctx.job_name,
        environment = %ctx.environment,
        processing_mode = %ctx.processing_mode,
        "Starting batch job"
    );

    validate_configuration(&ctx);

    let metrics = process_data(&ctx, config).await?;

    if config.job.publish_metrics {
        publish_metrics(&ctx, &metrics).await;
    }

    info!(
        job_id = %ctx.job_id,
        records_processed = metrics.records_processed,
        processing_time_secs = metrics.processing_time_secs,
        "Batch job completed successfully"
    );

    Ok(())
}

/// Warn about missing optional settings; the job never fails validation,
/// it just degrades (no input download, no output upload).
fn validate_configuration(ctx: &JobContext) {
    if ctx.input_path.is_empty() {
        warn!("INPUT_PATH not provided, skipping input download");
    }
    if ctx.output_path.is_empty() {
        warn!("OUTPUT_PATH not provided, will skip output");
    }
}

/// SDK configuration pinned to the region the job context resolved
async fn sdk_config(ctx: &JobContext) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(ctx.aws_region.clone()))
        .load()
        .await
}

/// Main data processing pass: optional S3 input, a simulated record loop,
/// optional S3 result upload.
async fn process_data(ctx: &JobContext, config: &Config) -> Result<JobMetrics> {
    info!(mode = %ctx.processing_mode, "Starting data processing");
    let start = Instant::now();
    let mut metrics = JobMetrics::default();

    let aws_config = sdk_config(ctx).await;

    if !ctx.input_path.is_empty() {
        info!("Downloading input from: {}", ctx.input_path);
        let data = aws_utils::download_from_s3(&aws_config, &ctx.input_path).await?;
        info!("Downloaded {} bytes", data.len());
    }

    let pb = ProgressBar::new(config.job.records);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Processing records...");

    for _ in 0..config.job.records {
        // Replace with real per-record work
        tokio::time::sleep(Duration::from_millis(config.job.record_delay_ms)).await;
        metrics.records_processed += 1;
        pb.inc(1);
    }
    pb.finish_with_message("Processing complete");

    if !ctx.output_path.is_empty() {
        info!("Uploading results to: {}", ctx.output_path);
        let result = JobResult {
            job_id: ctx.job_id.clone(),
            timestamp: Utc::now().to_rfc3339(),
            records_processed: metrics.records_processed,
            status: "completed".to_string(),
        };
        let body = serde_json::to_vec(&result)?;
        aws_utils::upload_to_s3(&aws_config, &ctx.output_path, body, Some("application/json"))
            .await?;
        info!("Results uploaded successfully");
    }

    metrics.processing_time_secs = start.elapsed().as_secs_f64();

    info!(
        records_processed = metrics.records_processed,
        processing_time_secs = metrics.processing_time_secs,
        "Data processing completed"
    );

    Ok(metrics)
}

/// Publish run counters to CloudWatch. Metric failures are logged and
/// swallowed so a finished job is not failed over observability.
async fn publish_metrics(ctx: &JobContext, metrics: &JobMetrics) {
    info!("Publishing metrics to CloudWatch");
    let aws_config = sdk_config(ctx).await;
    let namespace = ctx.metric_namespace();
    let environment = ctx.environment.as_str();

    publish_metrics_with(metrics, |name, value, unit| {
        let aws_config = &aws_config;
        let namespace = namespace.as_str();
        async move {
            aws_utils::put_metric(
                aws_config,
                namespace,
                name,
                value,
                unit,
                &[("Environment", environment)],
            )
            .await
        }
    })
    .await;
}

/// Send each run counter through the given sink, warning and continuing when
/// one fails. Split from `publish_metrics` so the swallow-on-failure behavior
/// can be exercised without CloudWatch. Returns the number of metrics the
/// sink accepted.
async fn publish_metrics_with<F, Fut>(metrics: &JobMetrics, send: F) -> usize
where
    F: Fn(&'static str, f64, StandardUnit) -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let mut published = 0;
    for (name, value, unit) in [
        ("RecordsProcessed", metrics.records_processed as f64, StandardUnit::Count),
        ("ProcessingTime", metrics.processing_time_secs, StandardUnit::Seconds),
    ] {
        match send(name, value, unit).await {
            Ok(()) => published += 1,
            Err(e) => warn!("Error publishing {}: {}", name, e),
        }
    }
    published
}
