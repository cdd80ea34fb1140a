//! In-memory tagger.
//!
//! Answers from a fixed sentence → tagged-line table. Used to exercise the
//! grammar and resolver without a Java runtime, and to count how often the
//! pipeline actually reaches the tagger.

use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;

use crate::{Error, Result};
use super::Tagger;

#[derive(Debug, Default)]
pub struct MemoryTagger {
    sentences: HashMap<String, String>,
    calls: AtomicU64,
}

impl MemoryTagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sentence: impl Into<String>, tagged: impl Into<String>) {
        self.sentences.insert(sentence.into(), tagged.into());
    }

    pub fn with_sentence(mut self, sentence: impl Into<String>, tagged: impl Into<String>) -> Self {
        self.insert(sentence, tagged);
        self
    }

    /// Number of `tag` calls served or refused so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Tagger for MemoryTagger {
    fn tag(&self, text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.sentences
            .get(text)
            .cloned()
            .ok_or_else(|| Error::TaggerUnavailable(format!("no tagging known for '{text}'")))
    }
}
