//! # Question Grammar
//!
//! Tagged tagger output → question AST.
//! Pure functions without I/O or lexicon access.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod vocab;

use crate::Result;
use ast::Question;

/// Parse a tagged string (`Quel_ADJWH est_V ton_DET nom_NC ?_PUNC`) into a
/// question AST.
pub fn parse(tagged: &str) -> Result<Question> {
    let tokens = lexer::tokenize(tagged)?;
    parser::parse_question(&tokens)
}
