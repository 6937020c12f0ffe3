//! Vellum configuration
//!
//! Configuration lives in a TOML document, usually `vellum.toml`:
//!
//! ```toml
//! [path]
//! precision = 3
//! ```
//!
//! Every section and key is optional; anything left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Largest supported number of decimal digits for path operands
pub const MAX_PRECISION: u32 = 15;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct VellumConfig {
    #[serde(default)]
    pub path: PathConfig,
}

/// Path serialization settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PathConfig {
    /// Decimal digits kept for path operands
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_precision() -> u32 {
    2
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl VellumConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: VellumConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded vellum config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.path.precision > MAX_PRECISION {
            return Err(CoreError::InvalidConfig(format!(
                "path.precision must be at most {MAX_PRECISION}, got {}",
                self.path.precision
            )));
        }
        Ok(())
    }
}
