//! CLI configuration.
//!
//! Loaded from `quarry.toml`:
//!
//! ```toml
//! dialect = "MySQL"
//! log_level = "warn"
//! format = "text"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{QuarryError, QuarryResult};
use crate::transpiler::Dialect;

pub const CONFIG_FILE: &str = "quarry.toml";

/// How compiled queries are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialect used when none is given on the command line.
    pub dialect: Dialect,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            log_level: "warn".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> QuarryResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> QuarryResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| QuarryError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Candidate locations, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("quarry").join(CONFIG_FILE));
        }
        paths
    }

    /// Load the explicit path if given, else the first existing search path,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>) -> QuarryResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
