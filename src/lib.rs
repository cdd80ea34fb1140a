//! # french-parser: French questions to semantic triples
//!
//! Turns a French question into a triple whose object is the value being
//! asked for:
//!
//! ```text
//! "Qui est la femme du président des États-Unis ?"
//!   → ((États-Unis, président, ?), femme, ?)
//! ```
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `Tagger` and `Lexicon` are the contracts with the
//!    external POS tagger and lexical knowledge base
//! 2. **Grammar owns nothing**: tagged string → AST is a pure function
//! 3. **No globals**: the tagger process and the result cache belong to a
//!    `FrenchParser` instance
//!
//! ## Quick Start
//!
//! ```rust
//! use french_parser::{FrenchParser, MemoryLexicon, MemoryTagger, Tree};
//!
//! # fn example() -> french_parser::Result<()> {
//! let tagger = MemoryTagger::new()
//!     .with_sentence("Quel est ton nom ?", "Quel_ADJWH est_V ton_DET nom_NC ?_PUNC");
//! let parser = FrenchParser::new(tagger, MemoryLexicon::new("fra"));
//!
//! let tree = parser.parse("Quel est ton nom ?")?;
//! assert_eq!(tree, Tree::ask("toi".into(), "nom".into()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Taggers
//!
//! | Tagger | Description |
//! |--------|-------------|
//! | `ProcessTagger` | Supervised Stanford POS tagger process |
//! | `MemoryTagger` | Fixed sentence table for testing/embedding |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod grammar;
pub mod semantics;
pub mod tagger;
pub mod cache;
pub mod config;
pub mod handler;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Tree, Pronoun};
pub use grammar::ast::{Question, NominalGroup};
pub use semantics::{Lexicon, MemoryLexicon, WordCategory};
pub use tagger::{Tagger, TaggerConfig, ProcessTagger, MemoryTagger};
pub use cache::ResultCache;
pub use config::Config;
pub use handler::{Request, Response, TraceItem};

// ============================================================================
// Top-level parser handle
// ============================================================================

/// The primary entry point. A `FrenchParser` owns a tagger, a lexicon and a
/// result cache, and runs the whole pipeline.
pub struct FrenchParser<T: Tagger, L: Lexicon> {
    tagger: T,
    lexicon: L,
    cache: ResultCache,
}

impl<T: Tagger, L: Lexicon> FrenchParser<T, L> {
    /// Parser with a cache of default capacity.
    pub fn new(tagger: T, lexicon: L) -> Self {
        Self { tagger, lexicon, cache: ResultCache::default() }
    }

    pub fn with_cache_capacity(tagger: T, lexicon: L, capacity: usize) -> Self {
        Self { tagger, lexicon, cache: ResultCache::new(capacity) }
    }

    /// Parse a raw French question.
    pub fn parse(&self, sentence: &str) -> Result<Tree> {
        if let Some(tree) = self.cache.get(sentence) {
            return Ok(tree);
        }

        // Phase 1: Tag
        let mut tagged = self.tagger.tag(sentence)?;
        tagged.push(' ');

        // Phase 2: Parse + resolve
        let tree = self.parse_tagged(&tagged)?;

        self.cache.insert(sentence, tree.clone());
        Ok(tree)
    }

    /// Parse already-tagged text. Bypasses the tagger and the cache.
    pub fn parse_tagged(&self, tagged: &str) -> Result<Tree> {
        let question = grammar::parse(tagged)?;
        semantics::resolve(&question, &self.lexicon)
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }
}

/// Parser backed by the Stanford tagger process.
impl<L: Lexicon> FrenchParser<ProcessTagger, L> {
    pub fn from_config(config: &Config, lexicon: L) -> Result<Self> {
        let tagger = ProcessTagger::start(config.tagger())?;
        Ok(Self::with_cache_capacity(tagger, lexicon, config.cache_size))
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tagger unavailable: {0}")]
    TaggerUnavailable(String),

    #[error("Unrecognized tagger output at position {position}: '{fragment}'")]
    LexError { position: usize, fragment: String },

    #[error("Syntax error at position {position}: {message}")]
    SyntaxError { position: usize, message: String },

    #[error("Unsupported question word: {0}")]
    UnsupportedQuestionWord(String),

    #[error("Unsupported verb mood: {0}")]
    UnsupportedVerbMood(String),

    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The engine broke one of its own invariants.
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::Invariant(_))
    }

    /// The input is outside what the grammar covers.
    pub fn is_coverage_gap(&self) -> bool {
        matches!(
            self,
            Error::LexError { .. }
                | Error::SyntaxError { .. }
                | Error::UnsupportedQuestionWord(_)
                | Error::UnsupportedVerbMood(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
