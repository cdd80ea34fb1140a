//! # Tagger Trait
//!
//! The contract between the parser and a part-of-speech tagger: one line
//! of French in, one line of `surface_TAG` units out.
//!
//! ## Implementations
//!
//! | Tagger | Module | Description |
//! |--------|--------|-------------|
//! | `ProcessTagger` | `process` | Supervised external tagger process (Stanford POS tagger) |
//! | `MemoryTagger` | `memory` | Fixed sentence → tagged-line table for testing/embedding |

pub mod memory;
pub mod process;

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;

pub use memory::MemoryTagger;
pub use process::ProcessTagger;

/// Part-of-speech tagging.
///
/// Implementations must be safe to call from several threads; each call is
/// one complete request/response exchange.
pub trait Tagger: Send + Sync {
    /// Tag one sentence. Fails with `Error::TaggerUnavailable` when no
    /// working tagger can be reached.
    fn tag(&self, text: &str) -> Result<String>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Result<String> {
        (**self).tag(text)
    }
}

impl<T: Tagger + ?Sized> Tagger for Arc<T> {
    fn tag(&self, text: &str) -> Result<String> {
        (**self).tag(text)
    }
}

// ============================================================================
// Process configuration
// ============================================================================

/// Main class of the Stanford tagger.
pub const STANFORD_MAIN_CLASS: &str = "edu.stanford.nlp.tagger.maxent.MaxentTagger";

/// How to launch the tagger process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Interpreter executables, probed in order; the first existing file wins.
    pub interpreters: Vec<PathBuf>,
    /// Command (program + leading arguments) used when no interpreter exists.
    pub fallback: Vec<String>,
    /// Arguments passed after the interpreter or fallback command.
    pub args: Vec<String>,
    /// Working directory of the process (relative class paths resolve here).
    #[serde(default)]
    pub current_dir: Option<PathBuf>,
}

impl TaggerConfig {
    /// Java invocation of the Stanford French tagger.
    pub fn stanford(class_path: &str, model: &str, memory: &str) -> Self {
        Self {
            interpreters: default_interpreters(),
            fallback: vec!["/usr/bin/env".into(), "java".into()],
            args: vec![
                memory.into(),
                "-classpath".into(),
                class_path.into(),
                STANFORD_MAIN_CLASS.into(),
                "-model".into(),
                model.into(),
            ],
            current_dir: None,
        }
    }
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self::stanford(
            crate::config::DEFAULT_CLASS_PATH,
            crate::config::DEFAULT_MODEL,
            crate::config::DEFAULT_MEMORY,
        )
    }
}

/// Java locations probed before falling back to `env java`.
pub fn default_interpreters() -> Vec<PathBuf> {
    [
        "/usr/lib/jvm/java-8-openjdk-amd64/jre/bin/java",
        "/usr/lib/jvm/java-8-oracle/bin/java",
        "/usr/local/bin/java",
        "/usr/bin/java",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stanford_args() {
        let config = TaggerConfig::stanford("tagger.jar", "french.tagger", "-mx300m");
        assert_eq!(config.args, vec![
            "-mx300m",
            "-classpath",
            "tagger.jar",
            STANFORD_MAIN_CLASS,
            "-model",
            "french.tagger",
        ]);
        assert_eq!(config.interpreters.len(), 4);
        assert_eq!(config.fallback, vec!["/usr/bin/env", "java"]);
    }

    #[test]
    fn test_config_json() {
        let config = TaggerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: TaggerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
