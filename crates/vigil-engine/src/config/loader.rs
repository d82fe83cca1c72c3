use super::schema::VigilConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./vigil.yaml
    /// 2. ~/.vigil/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<VigilConfig, ConfigError> {
        Self::load_first(&Self::default_paths()).await
    }

    /// Candidate config files, highest priority first.
    pub fn default_paths() -> Vec<PathBuf> {
        // Working directory wins over the user's home
        let mut paths = vec![PathBuf::from("./vigil.yaml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".vigil").join("config.yaml"));
        }
        paths
    }

    /// Load the first of `paths` that exists. Later candidates are never
    /// read, even when the chosen one fails to parse.
    pub async fn load_first(paths: &[PathBuf]) -> Result<VigilConfig, ConfigError> {
        for path in paths {
            if tokio::fs::try_exists(path).await? {
                return Self::load_from(path).await;
            }
            tracing::trace!(path = %path.display(), "no config file");
        }

        // Nothing on disk
        tracing::debug!("using default config");
        Ok(VigilConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<VigilConfig, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: VigilConfig = serde_yaml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            timeout_ms = config.wait.timeout_ms,
            snapshots = config.snapshots.enabled,
            "loaded config"
        );
        Ok(config)
    }
}
