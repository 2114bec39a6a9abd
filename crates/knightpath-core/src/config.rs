//! Configuration for knightpath
//!
//! Stored in `<config dir>/knightpath/config.toml`. A missing file means
//! defaults; an explicitly requested file must exist.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{KnightError, Result};
use crate::format::OutputFormat;
use crate::graph::SearchLimits;

pub use types::{Config, SearchConfig};

const CONFIG_DIR: &str = "knightpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "KNIGHTPATH_CONFIG_DIR";

impl Config {
    /// Default location of the config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    KnightError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| KnightError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&content).map_err(|e| KnightError::InvalidConfig {
            path: path.to_path_buf(),
            reason: match e {
                KnightError::Toml(inner) => inner.to_string(),
                other => other.to_string(),
            },
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.search.max_nodes == Some(0) {
            bail_invalid!("search.max_nodes", 0);
        }
        self.output_format()?;
        Ok(())
    }

    /// Configured output format, or the default when unset
    pub fn output_format(&self) -> Result<OutputFormat> {
        match &self.format {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    /// Search limits, with `max_nodes_override` taking precedence over the file
    pub fn search_limits(&self, max_nodes_override: Option<usize>) -> SearchLimits {
        SearchLimits {
            max_nodes: max_nodes_override.or(self.search.max_nodes),
        }
    }
}
