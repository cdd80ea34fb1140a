//! Module request handling.
//!
//! The question-answering pipeline sends every module the same request; this
//! module answers only French sentences and stays silent otherwise. A parse
//! failure is a non-answer, never an error for the caller.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn, Level};

use crate::model::Tree;
use crate::semantics::Lexicon;
use crate::tagger::Tagger;
use crate::{Error, FrenchParser};

/// Name recorded in the trace of every response.
pub const MODULE_NAME: &str = "PLYFrenchParser";

/// Language code this module answers.
pub const LANGUAGE: &str = "fr";

/// Named scores attached to a tree.
pub type Measures = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub language: String,
    pub tree: Tree,
    #[serde(default)]
    pub measures: Measures,
    #[serde(default)]
    pub trace: Vec<TraceItem>,
}

impl Request {
    /// Request carrying a raw sentence.
    pub fn sentence(id: impl Into<String>, language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            tree: Tree::sentence(text),
            measures: Measures::new(),
            trace: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceItem {
    pub module: String,
    pub tree: Tree,
    #[serde(default)]
    pub measures: Measures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub language: String,
    pub tree: Tree,
    pub measures: Measures,
    pub trace: Vec<TraceItem>,
}

impl<T: Tagger, L: Lexicon> FrenchParser<T, L> {
    /// Answer a module request: no response for foreign languages, for
    /// already-structured trees or for questions outside the grammar; one
    /// response otherwise.
    pub fn answer(&self, request: &Request) -> Vec<Response> {
        let Tree::Sentence { value } = &request.tree else {
            return Vec::new();
        };
        if request.language != LANGUAGE {
            return Vec::new();
        }

        let tree = match self.parse(value) {
            Ok(tree) => tree,
            Err(e) => {
                let level = failure_level(&e);
                if level == Level::ERROR {
                    error!(id = %request.id, sentence = %value, error = %e, "Parser invariant broken");
                } else if level == Level::WARN {
                    warn!(id = %request.id, sentence = %value, error = %e, "Parser unavailable");
                } else {
                    debug!(id = %request.id, sentence = %value, error = %e, "No parse");
                }
                return Vec::new();
            }
        };

        let measures = Measures::new();
        let mut trace = request.trace.clone();
        trace.push(TraceItem {
            module: MODULE_NAME.into(),
            tree: tree.clone(),
            measures: measures.clone(),
        });
        vec![Response { language: LANGUAGE.into(), tree, measures, trace }]
    }
}

/// Log level for a request that got no answer: defects are errors, an
/// unreachable tagger or bad setup is a warning, questions outside the
/// grammar are routine.
fn failure_level(error: &Error) -> Level {
    if error.is_defect() {
        Level::ERROR
    } else if error.is_coverage_gap() {
        Level::DEBUG
    } else {
        Level::WARN
    }
}
