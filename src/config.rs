//! # Response Configuration
//!
//! Commit-time options for [`crate::HxResponse`], loaded from environment
//! variables or YAML.
//!
//! ## Environment Variables
//!
//! ### `HXKIT_AUTO_VARY`
//!
//! When truthy, every commit also writes `Vary: HX-Request`, so shared
//! caches keep fragment responses apart from full-page responses for the
//! same URL.
//!
//! ### `HXKIT_TRACE_HEADERS`
//!
//! When truthy, every emitted header is logged at `debug` level.
//!
//! Truthy values are `1`, `true`, `yes` and `on` (any case); anything else,
//! including an unset variable, is false.
//!
//! ## YAML
//!
//! ```yaml
//! auto_vary: true
//! trace_headers: false
//! ```

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::error::HxError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HxConfig {
    /// Add `Vary: HX-Request` on commit
    pub auto_vary: bool,
    /// Log each emitted header at `debug`
    pub trace_headers: bool,
}

fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(val) => matches!(
            val.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => false,
    }
}

impl HxConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        HxConfig {
            auto_vary: env_flag("HXKIT_AUTO_VARY"),
            trace_headers: env_flag("HXKIT_TRACE_HEADERS"),
        }
    }

    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(source: &str) -> Result<Self, HxError> {
        serde_yaml::from_str(source).map_err(|e| HxError::Config {
            message: e.to_string(),
        })
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, HxError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| HxError::Config {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_yaml_str(&source)
    }
}
