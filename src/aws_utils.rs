//! Thin wrappers around the AWS collaborators the sample job uses
//!
//! Each function is a single SDK call returning an explicit `Result`; SDK
//! errors are mapped to the string variants in `crate::error` with the
//! service name preserved. The cost estimator never calls anything here.

use crate::error::{BatchctlError, Result};
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};
use aws_sdk_cloudwatch::Client as CloudWatchClient;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_secretsmanager::Client as SecretsClient;
use aws_sdk_ssm::Client as SsmClient;
use tracing::{debug, info};

/// Parse an `s3://bucket/key` path into (bucket, key)
pub fn parse_s3_path(s3_path: &str) -> Result<(String, String)> {
    let stripped = s3_path
        .strip_prefix("s3://")
        .ok_or_else(|| BatchctlError::Validation {
            field: "s3_path".to_string(),
            reason: format!("Invalid S3 path: {}", s3_path),
        })?;

    match stripped.split_once('/') {
        Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => {
            Ok((bucket.to_string(), key.to_string()))
        }
        _ => Err(BatchctlError::Validation {
            field: "s3_path".to_string(),
            reason: format!("Invalid S3 path format: {}", s3_path),
        }),
    }
}

/// Retrieve a secret from Secrets Manager and decode its JSON string value
pub async fn get_secret(aws_config: &SdkConfig, secret_name: &str) -> Result<serde_json::Value> {
    let client = SecretsClient::new(aws_config);

    let response = client
        .get_secret_value()
        .secret_id(secret_name)
        .send()
        .await
        .map_err(|e| {
            BatchctlError::SecretsManager(format!("Failed to retrieve {}: {}", secret_name, e))
        })?;

    let secret_string = response.secret_string().ok_or_else(|| {
        BatchctlError::SecretsManager(format!("Secret {} has no string value", secret_name))
    })?;

    Ok(serde_json::from_str(secret_string)?)
}

/// Retrieve a parameter from SSM Parameter Store
pub async fn get_parameter(
    aws_config: &SdkConfig,
    parameter_name: &str,
    with_decryption: bool,
) -> Result<String> {
    let client = SsmClient::new(aws_config);

    let response = client
        .get_parameter()
        .name(parameter_name)
        .with_decryption(with_decryption)
        .send()
        .await
        .map_err(|e| {
            BatchctlError::Ssm(format!("Failed to retrieve {}: {}", parameter_name, e))
        })?;

    response
        .parameter()
        .and_then(|p| p.value())
        .map(|v| v.to_string())
        .ok_or_else(|| BatchctlError::Ssm(format!("Parameter {} has no value", parameter_name)))
}

/// Publish a single custom metric to CloudWatch
pub async fn put_metric(
    aws_config: &SdkConfig,
    namespace: &str,
    metric_name: &str,
    value: f64,
    unit: StandardUnit,
    dimensions: &[(&str, &str)],
) -> Result<()> {
    let client = CloudWatchClient::new(aws_config);

    let mut datum = MetricDatum::builder()
        .metric_name(metric_name)
        .value(value)
        .unit(unit);
    for (name, dim_value) in dimensions {
        datum = datum.dimensions(Dimension::builder().name(*name).value(*dim_value).build());
    }

    client
        .put_metric_data()
        .namespace(namespace)
        .metric_data(datum.build())
        .send()
        .await
        .map_err(|e| {
            BatchctlError::CloudWatch(format!("Failed to publish {}: {}", metric_name, e))
        })?;

    debug!("Published metric {}={} to {}", metric_name, value, namespace);
    Ok(())
}

/// Download an S3 object into memory
pub async fn download_from_s3(aws_config: &SdkConfig, s3_path: &str) -> Result<Vec<u8>> {
    let (bucket, key) = parse_s3_path(s3_path)?;
    let client = S3Client::new(aws_config);

    let response = client
        .get_object()
        .bucket(&bucket)
        .key(&key)
        .send()
        .await
        .map_err(|e| BatchctlError::S3(format!("Failed to download {}: {}", s3_path, e)))?;

    let data = response
        .body
        .collect()
        .await
        .map_err(|e| BatchctlError::S3(format!("Failed to read body of {}: {}", s3_path, e)))?
        .into_bytes()
        .to_vec();

    info!("Downloaded {} ({} bytes)", s3_path, data.len());
    Ok(data)
}

/// Upload a byte buffer to S3
pub async fn upload_to_s3(
    aws_config: &SdkConfig,
    s3_path: &str,
    data: Vec<u8>,
    content_type: Option<&str>,
) -> Result<()> {
    let (bucket, key) = parse_s3_path(s3_path)?;
    let client = S3Client::new(aws_config);
    let len = data.len();

    client
        .put_object()
        .bucket(&bucket)
        .key(&key)
        .body(ByteStream::from(data))
        .set_content_type(content_type.map(String::from))
        .send()
        .await
        .map_err(|e| BatchctlError::S3(format!("Failed to upload {}: {}", s3_path, e)))?;

    info!("Uploaded {} bytes to {}", len, s3_path);
    Ok(())
}
