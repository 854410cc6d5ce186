use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub aws: Option<AwsConfig>,
    pub estimator: EstimatorConfig,
    pub job: JobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    pub s3_bucket: Option<String>,
    /// Default project name used for metric namespaces (env PROJECT_NAME wins)
    pub default_project_name: Option<String>,
}

/// Defaults applied when estimate flags are not given on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub use_spot: bool,
    pub use_vpc_endpoints: bool,
}

/// Settings for the sample batch job's simulated workload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Records to process per run
    pub records: u64,
    /// Simulated per-record processing delay
    pub record_delay_ms: u64,
    /// Publish CloudWatch metrics after the run
    pub publish_metrics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws: Some(AwsConfig {
                region: "us-east-1".to_string(),
                s3_bucket: None,
                default_project_name: None,
            }),
            estimator: EstimatorConfig {
                use_spot: true,
                use_vpc_endpoints: true,
            },
            job: JobConfig {
                records: 10,
                record_delay_ms: 1000,
                publish_metrics: true,
            },
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            // Try .batchctl.toml in current dir, then ~/.config/batchctl/config.toml
            let local = PathBuf::from(".batchctl.toml");
            if local.exists() {
                local
            } else {
                dirs::config_dir()
                    .map(|d| d.join("batchctl").join("config.toml"))
                    .unwrap_or_else(|| PathBuf::from(".batchctl.toml"))
            }
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ConfigError::ParseError(format!(
                    "{}: {} (run 'batchctl init' to regenerate a valid config)",
                    config_path.display(),
                    e
                ))
            })?;
            Ok(config)
        } else {
            // Missing files fall back to defaults; only mention it when the
            // user asked for a specific path.
            if path.is_some() {
                eprintln!(
                    "WARNING: no config file at {}, using built-in defaults",
                    config_path.display()
                );
            }
            Ok(Config::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn init_config(output: &Path) -> Result<()> {
    let config = Config::default();
    config.save(output)?;
    println!("Wrote default config to {}", output.display());
    Ok(())
}
