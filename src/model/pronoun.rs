//! Grammatical person and its entity placeholder.

use serde::{Deserialize, Serialize};
use super::Tree;

/// Person referred to by a possessive determiner or a personal pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pronoun {
    First,
    Second,
    Third,
}

impl Pronoun {
    /// Resolve a determiner or pronoun (`ton`, `mes`, `tu`, `il`, …).
    /// Any other word (`le`, `la`, `des`, …) resolves to nothing.
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.to_lowercase().replace('’', "'");
        match word.as_str() {
            "mon" | "ma" | "mes" | "me" | "m'" | "je" | "moi" => Some(Pronoun::First),
            "ton" | "ta" | "tes" | "te" | "t'" | "tu" | "toi"
            | "votre" | "vos" | "vous" => Some(Pronoun::Second),
            "son" | "sa" | "ses" | "s'" | "lui" | "elle" | "il" | "iel" => Some(Pronoun::Third),
            _ => None,
        }
    }

    /// Canonical entity name.
    pub fn placeholder(self) -> &'static str {
        match self {
            Pronoun::First => "je",
            Pronoun::Second => "toi",
            Pronoun::Third => "iel",
        }
    }

    pub fn to_tree(self) -> Tree {
        Tree::resource(self.placeholder())
    }
}

impl std::fmt::Display for Pronoun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.placeholder())
    }
}
