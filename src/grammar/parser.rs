//! Question recursive descent parser.
//!
//! ```text
//! question      → INTERROGATIVE verb nominal_group EOF
//!               | INTERROGATIVE NOUN VERB_SUBJECT EOF
//! verb          → VERB | VERB VERB
//! nominal_group → simple (PREPOSITION nominal_group)?
//! simple        → NOUN | ARTICLE NOUN
//! ```
//!
//! Complements attach to the right: `A de B de C` is `A(B(C))`.

use crate::{Error, Result};
use super::ast::*;
use super::lexer::{Token, TokenKind};
use super::vocab;

/// Parser state: a token slice and a cursor.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &'t Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> &'t Token {
        let tok = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("{kind:?}")))
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn unexpected(&self, expected: &str) -> Error {
        let tok = self.peek();
        Error::SyntaxError {
            position: tok.span.start,
            message: format!("unexpected '{}' ({:?}), expected {expected}", tok.text, tok.kind),
        }
    }
}

/// Parse a complete question from tokens. The slice must end with `Eof`.
pub fn parse_question(tokens: &[Token]) -> Result<Question> {
    if tokens.is_empty() {
        return Err(Error::SyntaxError { position: 0, message: "empty token stream".into() });
    }
    let mut p = Parser::new(tokens);

    let interrogative = p.expect(TokenKind::Interrogative)?.text.clone();

    let question = match p.peek_kind() {
        TokenKind::Verb => {
            let verb = parse_verb(&mut p)?;
            let group = parse_nominal_group(&mut p)?;
            Question::VerbFirst { interrogative, verb, group }
        }
        TokenKind::Noun => {
            let noun = p.advance().text.clone();
            let inverted = p.expect(TokenKind::VerbSubject)?;
            let subject = inverted.clitic.clone().ok_or_else(|| {
                Error::Invariant(format!("verb-subject token '{}' without subject", inverted.text))
            })?;
            Question::NounFirst { interrogative, noun, verb: inverted.text.clone(), subject }
        }
        _ => return Err(p.unexpected("Verb or Noun")),
    };

    if !p.at(TokenKind::Eof) {
        return Err(p.unexpected("end of question"));
    }

    Ok(question)
}

// ============================================================================
// Productions
// ============================================================================

/// A single verb, or auxiliary + participle collapsed to the participle.
fn parse_verb(p: &mut Parser) -> Result<String> {
    let first = p.expect(TokenKind::Verb)?;
    if !p.at(TokenKind::Verb) {
        return Ok(first.text.clone());
    }
    let second = p.advance();
    if vocab::is_auxiliary(&first.text) {
        Ok(second.text.clone())
    } else {
        Err(Error::SyntaxError {
            position: first.span.start,
            message: format!("'{} {}' is not a compound tense", first.text, second.text),
        })
    }
}

fn parse_nominal_group(p: &mut Parser) -> Result<NominalGroup> {
    let head = parse_simple_group(p)?;
    if !p.at(TokenKind::Preposition) {
        return Ok(head);
    }
    let preposition = p.advance();
    let complement = parse_nominal_group(p)?;
    Ok(attach_complement(head, &preposition.text, complement))
}

fn parse_simple_group(p: &mut Parser) -> Result<NominalGroup> {
    match p.peek_kind() {
        TokenKind::Noun => Ok(NominalGroup::noun(p.advance().text.clone())),
        TokenKind::Article => {
            let article = p.advance().text.clone();
            let noun = p.expect(TokenKind::Noun)?.text.clone();
            Ok(NominalGroup::with_article(article, noun))
        }
        _ => Err(p.unexpected("Article or Noun")),
    }
}

/// Attach `complement` to `head`.
///
/// A relational head (`date`, `lieu`, …) whose complement has its own
/// complement absorbs the complement noun: `date` + `de` + `naissance(X)`
/// becomes `date de naissance(X)`.
pub fn attach_complement(head: NominalGroup, preposition: &str, complement: NominalGroup) -> NominalGroup {
    if !vocab::is_relational_noun(&head.noun) || complement.complements.is_empty() {
        return head.with_complement(complement);
    }
    let separator = if preposition.ends_with('\'') { "" } else { " " };
    NominalGroup {
        article: head.article,
        complements: complement.complements,
        noun: format!("{} {preposition}{separator}{}", head.noun, complement.noun),
    }
}

// ============================================================================
// Tests
// ============================================================================
