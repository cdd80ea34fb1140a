//! # Question-Answering Model
//!
//! Clean DTOs shared by the resolver, the cache and the request handler.
//!
//! Design rule: pure data, no I/O and no state.

pub mod tree;
pub mod pronoun;

pub use tree::Tree;
pub use pronoun::Pronoun;
