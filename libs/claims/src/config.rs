//! Manager configuration
//!
//! Loading for the small amount of deployment configuration the engine
//! needs: the identity of the staking authority whose hooks are trusted,
//! and the log level an embedder should run at. Supports a TOML file with a
//! `TENTACLE_`-prefixed environment override layer.

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use types::ModuleAddress;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Identity of the staking authority; hook calls from anyone else are
    /// rejected, and unlock queries naming anyone else fail open.
    pub authority: ModuleAddress,

    /// Suggested tracing filter for the embedding service.
    pub log_level: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            authority: ModuleAddress::ZERO,
            log_level: "info".to_string(),
        }
    }
}

/// Load configuration from an optional TOML file, then apply `TENTACLE_*`
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<ManagerConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path.to_path_buf()));
    }
    builder = builder.add_source(Environment::with_prefix("TENTACLE"));

    let settings = builder
        .build()
        .context("failed to read tentacle configuration")?;
    let config: ManagerConfig = settings
        .try_deserialize()
        .context("malformed tentacle configuration")?;

    debug!(authority = %config.authority, log_level = %config.log_level, "loaded configuration");
    Ok(config)
}
