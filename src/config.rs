//! Module configuration.
//!
//! Read from the JSON file named by `PPP_FRENCHPARSER_CONFIG`:
//!
//! ```json
//! {"class_path": "stanford-postagger-full-2014-10-26/stanford-postagger.jar"}
//! ```
//!
//! Every other field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tagger::{default_interpreters, TaggerConfig};
use crate::{Error, Result};

/// Environment variable holding the config file path.
pub const CONFIG_PATH_VARIABLE: &str = "PPP_FRENCHPARSER_CONFIG";

pub const DEFAULT_CLASS_PATH: &str = "stanford-postagger-full-2014-10-26/stanford-postagger.jar";
pub const DEFAULT_MODEL: &str = "stanford-postagger-full-2014-10-26/models/french.tagger";
pub const DEFAULT_MEMORY: &str = "-mx300m";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Class path of the tagger jar.
    pub class_path: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// JVM heap flag.
    #[serde(default = "default_memory")]
    pub memory: String,
    #[serde(default = "default_interpreters")]
    pub interpreters: Vec<PathBuf>,
    #[serde(default = "default_fallback")]
    pub fallback: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

fn default_model() -> String { DEFAULT_MODEL.into() }
fn default_memory() -> String { DEFAULT_MEMORY.into() }
fn default_fallback() -> Vec<String> { vec!["/usr/bin/env".into(), "java".into()] }
fn default_cache_size() -> usize { crate::cache::DEFAULT_CAPACITY }

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_PATH_VARIABLE`].
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_VARIABLE)
            .ok_or_else(|| Error::Config(format!("{CONFIG_PATH_VARIABLE} is not set")))?;
        Self::from_path(path)
    }

    fn validate(&self) -> Result<()> {
        if self.class_path.trim().is_empty() {
            return Err(Error::Config("class_path must not be empty".into()));
        }
        if self.interpreters.is_empty() && self.fallback.is_empty() {
            return Err(Error::Config("no interpreter and no fallback command".into()));
        }
        Ok(())
    }

    /// Process settings for the tagger.
    pub fn tagger(&self) -> TaggerConfig {
        let mut tagger = TaggerConfig::stanford(&self.class_path, &self.model, &self.memory);
        tagger.interpreters = self.interpreters.clone();
        tagger.fallback = self.fallback.clone();
        tagger.current_dir = self.working_dir.clone();
        tagger
    }
}
