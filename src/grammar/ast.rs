//! Question AST
//!
//! These types represent parsed questions. They are pure data:
//! no lexicon lookups, no output-tree construction.

/// A complete question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// `Quel est ton nom ?`: interrogative, verb, nominal group.
    VerbFirst {
        interrogative: String,
        verb: String,
        group: NominalGroup,
    },
    /// `Quel âge as-tu ?`: interrogative, noun, inverted verb and subject.
    NounFirst {
        interrogative: String,
        noun: String,
        verb: String,
        subject: String,
    },
}

impl Question {
    pub fn interrogative(&self) -> &str {
        match self {
            Question::VerbFirst { interrogative, .. }
            | Question::NounFirst { interrogative, .. } => interrogative,
        }
    }

    pub fn verb(&self) -> &str {
        match self {
            Question::VerbFirst { verb, .. } | Question::NounFirst { verb, .. } => verb,
        }
    }
}

/// Noun phrase: `la femme du président`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalGroup {
    pub article: Option<String>,
    /// Nested complement groups; at most one is built by the parser.
    pub complements: Vec<NominalGroup>,
    pub noun: String,
}

impl NominalGroup {
    /// Bare noun, no article.
    pub fn noun(noun: impl Into<String>) -> Self {
        Self { article: None, complements: Vec::new(), noun: noun.into() }
    }

    pub fn with_article(article: impl Into<String>, noun: impl Into<String>) -> Self {
        Self { article: Some(article.into()), complements: Vec::new(), noun: noun.into() }
    }

    pub fn with_complement(mut self, complement: NominalGroup) -> Self {
        self.complements.push(complement);
        self
    }

    pub fn complement(&self) -> Option<&NominalGroup> {
        self.complements.first()
    }

    /// No article and no complement.
    pub fn is_bare(&self) -> bool {
        self.article.is_none() && self.complements.is_empty()
    }

    /// Number of groups along the complement chain, this one included.
    pub fn chain_len(&self) -> usize {
        1 + self.complement().map_or(0, NominalGroup::chain_len)
    }
}
