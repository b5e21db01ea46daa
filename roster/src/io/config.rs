//! Roster configuration stored in `roster.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::GradePolicy;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "roster.toml";

/// Roster configuration (TOML).
///
/// Every field is optional in the file; missing fields keep the fixed-path
/// defaults (`input.txt` -> `output.txt`, non-numeric grades recorded as 0).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    /// Student list to read.
    pub input_path: PathBuf,

    /// Report destination. Replaced atomically.
    pub output_path: PathBuf,

    pub grade_policy: GradePolicy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input.txt"),
            output_path: PathBuf::from("output.txt"),
            grade_policy: GradePolicy::Lenient,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(anyhow!("input_path must not be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(anyhow!("output_path must not be empty"));
        }
        if self.input_path == self.output_path {
            return Err(anyhow!(
                "input_path and output_path must differ (both {})",
                self.input_path.display()
            ));
        }
        Ok(())
    }
}

/// Command-line overrides applied on top of the file config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub grade_policy: Option<GradePolicy>,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = RosterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Apply overrides to a loaded config and re-validate.
pub fn apply_overrides(mut base: RosterConfig, overrides: &ConfigOverrides) -> Result<RosterConfig> {
    if let Some(input_path) = &overrides.input_path {
        base.input_path = input_path.clone();
    }
    if let Some(output_path) = &overrides.output_path {
        base.output_path = output_path.clone();
    }
    if let Some(grade_policy) = overrides.grade_policy {
        base.grade_policy = grade_policy;
    }
    base.validate()?;
    Ok(base)
}
