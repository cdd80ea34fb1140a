//! # Lexicon Trait
//!
//! The contract between the resolver and a lexical knowledge base that maps
//! surface words to canonical predicate names.
//!
//! | Lexicon | Description |
//! |---------|-------------|
//! | `MemoryLexicon` | In-memory word table, built in code or loaded from JSON |

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Grammatical category of a looked-up word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCategory {
    Noun,
    Verb,
}

/// Lexical lookup.
///
/// Returns the known base forms synonymous with `word` in `language`
/// (ISO 639-3, e.g. `"fra"`), best candidate first. An unknown word yields
/// an empty list.
pub trait Lexicon: Send + Sync {
    fn base_forms(&self, word: &str, category: WordCategory, language: &str) -> Vec<String>;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn base_forms(&self, word: &str, category: WordCategory, language: &str) -> Vec<String> {
        (**self).base_forms(word, category, language)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    fn base_forms(&self, word: &str, category: WordCategory, language: &str) -> Vec<String> {
        (**self).base_forms(word, category, language)
    }
}

// ============================================================================
// MemoryLexicon
// ============================================================================

/// In-memory lexicon for a single language.
///
/// Words are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    language: String,
    entries: HashMap<(WordCategory, String), Vec<String>>,
}

/// On-disk layout:
///
/// ```json
/// {"language": "fra", "nouns": {"âge": ["âge"]}, "verbs": {"écrire": ["auteur"]}}
/// ```
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    nouns: HashMap<String, Vec<String>>,
    #[serde(default)]
    verbs: HashMap<String, Vec<String>>,
}

fn default_language() -> String {
    super::TARGET_LANGUAGE.to_string()
}

impl MemoryLexicon {
    /// Empty lexicon for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: language.into(), entries: HashMap::new() }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Append candidates for a word.
    pub fn insert<I, S>(&mut self, category: WordCategory, word: &str, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry((category, word.to_lowercase()))
            .or_default()
            .extend(forms.into_iter().map(Into::into));
    }

    pub fn with_entry<I, S>(mut self, category: WordCategory, word: &str, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, word, forms);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a lexicon from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: LexiconFile = serde_json::from_reader(reader)?;
        let mut lexicon = Self::new(file.language);
        for (word, forms) in file.nouns {
            lexicon.insert(WordCategory::Noun, &word, forms);
        }
        for (word, forms) in file.verbs {
            lexicon.insert(WordCategory::Verb, &word, forms);
        }
        Ok(lexicon)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl Lexicon for MemoryLexicon {
    fn base_forms(&self, word: &str, category: WordCategory, language: &str) -> Vec<String> {
        if language != self.language {
            return Vec::new();
        }
        self.entries
            .get(&(category, word.to_lowercase()))
            .cloned()
            .unwrap_or_default()
    }
}
