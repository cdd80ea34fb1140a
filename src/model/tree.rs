//! Semantic tree produced by the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node of the question-answering datamodel.
///
/// Serialized with a `type` discriminant so the JSON shape matches what the
/// rest of the pipeline exchanges:
/// - `{"type": "resource", "value": "France"}`
/// - `{"type": "triple", "subject": .., "predicate": .., "object": ..}`
/// - `{"type": "missing"}`
/// - `{"type": "sentence", "value": "Où est la France ?"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tree {
    /// A named entity: a literal noun, a pronoun placeholder, or a
    /// lexically resolved predicate name.
    Resource { value: String },
    /// A binary relation. Trees built by this crate always carry
    /// [`Tree::Missing`] as object.
    Triple {
        subject: Box<Tree>,
        predicate: Box<Tree>,
        object: Box<Tree>,
    },
    /// The value the question asks for.
    Missing,
    /// Raw natural-language input, as carried by module requests.
    Sentence { value: String },
}

impl Tree {
    pub fn resource(value: impl Into<String>) -> Self {
        Tree::Resource { value: value.into() }
    }

    pub fn sentence(value: impl Into<String>) -> Self {
        Tree::Sentence { value: value.into() }
    }

    /// `(subject, predicate, ?)`
    pub fn ask(subject: Tree, predicate: Tree) -> Self {
        Tree::Triple {
            subject: Box::new(subject),
            predicate: Box::new(predicate),
            object: Box::new(Tree::Missing),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Tree::Resource { .. } => "resource",
            Tree::Triple { .. } => "triple",
            Tree::Missing => "missing",
            Tree::Sentence { .. } => "sentence",
        }
    }

    pub fn is_missing(&self) -> bool { matches!(self, Tree::Missing) }
    pub fn is_triple(&self) -> bool { matches!(self, Tree::Triple { .. }) }

    /// Resource or sentence text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tree::Resource { value } | Tree::Sentence { value } => Some(value),
            _ => None,
        }
    }

    pub fn subject(&self) -> Option<&Tree> {
        match self {
            Tree::Triple { subject, .. } => Some(subject),
            _ => None,
        }
    }

    pub fn predicate(&self) -> Option<&Tree> {
        match self {
            Tree::Triple { predicate, .. } => Some(predicate),
            _ => None,
        }
    }

    /// Number of nested triples along the subject chain.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Triple { subject, .. } => 1 + subject.depth(),
            _ => 0,
        }
    }
}

impl From<&str> for Tree {
    fn from(v: &str) -> Self { Tree::resource(v) }
}

impl From<String> for Tree {
    fn from(v: String) -> Self { Tree::Resource { value: v } }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Resource { value } => write!(f, "{value}"),
            Tree::Triple { subject, predicate, object } => {
                write!(f, "({subject}, {predicate}, {object})")
            }
            Tree::Missing => write!(f, "?"),
            Tree::Sentence { value } => write!(f, "\"{}\"", value.replace('"', "\\\"")),
        }
    }
}
