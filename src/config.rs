//! Command-line configuration.
//!
//! An optional `config.toml`, passed with `--config`, supplies defaults for the
//! command-line front end. Flags given on the command line override it.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! size = 256            # Output side length in pixels
//! margin = 0.08         # Fraction of size kept empty on each side, [0, 0.5)
//! transparent = false   # Leave the background transparent instead of gray
//! stroke = false        # Grow foreground cells by stroke_size pixels
//! stroke_size = 1
//! hash = "md5"          # md5 | sha1 | sha256 | sha512
//!
//! [limits]
//! max_text_len = 4096   # Longer text is truncated, in bytes
//! max_salt_len = 1024   # Longer salt is truncated, in bytes
//! max_size = 4096       # Larger sizes are rejected
//! ```
//!
//! These defaults are those of the command-line tool (a large opaque PNG),
//! not of [`Options::default`], which keeps the library's small transparent
//! stroked icon.
//!
//! Unknown keys are rejected to catch typos early.

use crate::options::{HashAlgorithm, Limits, Options};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Defaults for the command-line front end, loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdenticonConfig {
    pub size: u32,
    pub margin: f64,
    pub transparent: bool,
    pub stroke: bool,
    pub stroke_size: u32,
    pub hash: HashAlgorithm,
    pub limits: Limits,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            size: 256,
            margin: 0.08,
            transparent: false,
            stroke: false,
            stroke_size: 1,
            hash: HashAlgorithm::Md5,
            limits: Limits::default(),
        }
    }
}

impl IdenticonConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Validation("size must be non-zero".into()));
        }
        if self.size > self.limits.max_size {
            return Err(ConfigError::Validation(format!(
                "size {} exceeds limits.max_size {}",
                self.size, self.limits.max_size
            )));
        }
        if !(0.0..0.5).contains(&self.margin) {
            return Err(ConfigError::Validation(
                "margin must be in [0, 0.5)".into(),
            ));
        }
        if self.limits.max_text_len == 0 || self.limits.max_salt_len == 0 {
            return Err(ConfigError::Validation(
                "limits.max_text_len and limits.max_salt_len must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Options carrying this config's values, with empty text and salt.
    pub fn to_options(&self) -> Options {
        Options::default()
            .with_limits(self.limits)
            .with_size(self.size)
            .with_margin(self.margin)
            .with_transparent(self.transparent)
            .with_stroke(self.stroke)
            .with_stroke_size(self.stroke_size)
            .with_hash_algorithm(self.hash)
    }
}

/// Parse and validate config text.
pub fn parse_config(content: &str) -> Result<IdenticonConfig, ConfigError> {
    let config: IdenticonConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a file. A missing file is an error: the path was asked for.
pub fn load_config(path: &Path) -> Result<IdenticonConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load config from `path` if given, otherwise the stock defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<IdenticonConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(IdenticonConfig::default()),
    }
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Identicon Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Pass this file with --config. Command-line flags override it.
# Unknown keys will cause an error.

# Output side length in pixels.
size = 256

# Fraction of the size kept empty on each side of the 5x5 grid.
# Must be at least 0 and below 0.5.
margin = 0.08

# true: background pixels stay fully transparent.
# false: background is painted opaque gray (240, 240, 240).
transparent = false

# Grow every foreground cell by stroke_size pixels on each side,
# as long as the grown cell still fits on the canvas.
stroke = false
stroke_size = 1

# Hash used to derive the picture: "md5", "sha1", "sha256" or "sha512".
hash = "md5"

# ---------------------------------------------------------------------------
# Input limits
# ---------------------------------------------------------------------------
[limits]
# Text and salt longer than this many bytes are truncated.
max_text_len = 4096
max_salt_len = 1024

# Sizes above this are rejected.
max_size = 4096
"##
}
