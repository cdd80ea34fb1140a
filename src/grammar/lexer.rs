//! Tagged-token lexer: normalizes tagger output into grammar tokens.
//!
//! Input is one line of whitespace-separated `surface_TAG` units. Each unit
//! is matched against an ordered list of rules, most specific first:
//!
//! 1. quoted spans (`"_PUNC … "_PUNC`, `«_PUNC … »_PUNC`) → one `Noun`
//! 2. other punctuation → dropped
//! 3. interrogatives, determiners
//! 4. apostrophe contractions (`d’Obama_NPP`, `l'âge_ADJ`) → two tokens
//! 5. nouns
//! 6. inverted verbs with a clitic subject (`as-tu_VPP`)
//! 7. verbs, prepositions
//!
//! A unit that expands to two tokens queues the second one; `next_token`
//! replays it before scanning further.

use smallvec::SmallVec;

use crate::{Error, Result};
use super::vocab;

/// A grammar token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
    /// Subject pronoun of a `VerbSubject` token (`tu` in `as-tu`).
    pub clitic: Option<String>,
}

/// Byte span in the tagged string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Interrogative,
    Article,
    /// Introduces a complement (`de`, `du`, `des`, `d'`).
    Preposition,
    Noun,
    Verb,
    /// Inverted verb with its clitic subject (`as-tu`).
    VerbSubject,
    Eof,
}

/// One `surface_TAG` unit as produced by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub surface: &'a str,
    pub tag: &'a str,
    pub span: Span,
}

impl<'a> TaggedToken<'a> {
    /// Split a unit on its last underscore.
    pub fn parse(unit: &'a str, start: usize) -> Result<Self> {
        let span = Span { start, end: start + unit.len() };
        match unit.rsplit_once('_') {
            Some((surface, tag)) if !surface.is_empty() && !tag.is_empty() => {
                Ok(Self { surface, tag, span })
            }
            _ => Err(Error::LexError { position: start, fragment: unit.to_string() }),
        }
    }
}

/// Strip the `_TAG` suffix of a unit, if any.
fn detag(unit: &str) -> &str {
    unit.rsplit_once('_').map_or(unit, |(surface, _)| surface)
}

/// Streaming lexer over a tagged string.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// Tokens split off a unit, replayed back to front.
    pending: SmallVec<[Token; 2]>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0, pending: SmallVec::new() }
    }

    /// Next logical token, `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(tok) = self.pending.pop() {
            return Ok(Some(tok));
        }
        while let Some((start, unit)) = self.next_unit() {
            let tagged = TaggedToken::parse(unit, start)?;
            if let Some(tok) = self.scan(tagged)? {
                return Ok(Some(tok));
            }
        }
        Ok(None)
    }

    fn next_unit(&mut self) -> Option<(usize, &'a str)> {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            self.pos = self.input.len();
            return None;
        }
        let start = self.pos + (rest.len() - trimmed.len());
        let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        self.pos = start + len;
        Some((start, &self.input[start..start + len]))
    }

    fn scan(&mut self, unit: TaggedToken<'a>) -> Result<Option<Token>> {
        if unit.tag == "PUNC" {
            return match vocab::closing_quote(unit.surface) {
                Some(close) => self.quoted_span(unit, close).map(Some),
                None => Ok(None),
            };
        }

        let kind = match unit.tag {
            "ADVWH" | "ADJWH" | "PROWH" => TokenKind::Interrogative,
            "DET" => TokenKind::Article,
            "N" | "NC" | "NPP" | "ADJ" | "VINF" if elision(unit.surface).is_some() => {
                return self.contraction(unit).map(Some);
            }
            "N" | "NC" | "NPP" => TokenKind::Noun,
            "V" | "VPP" | "VS" | "VIMP" => {
                if let Some(tok) = verb_subject(unit) {
                    return Ok(Some(tok));
                }
                TokenKind::Verb
            }
            "P" | "P+D" => TokenKind::Preposition,
            _ => return Err(unit_error(unit)),
        };
        Ok(Some(word(kind, unit.span, unit.surface)))
    }

    /// Merge everything up to the closing quote into one noun.
    fn quoted_span(&mut self, open: TaggedToken<'a>, close: &str) -> Result<Token> {
        let mut words = Vec::new();
        while let Some((start, unit)) = self.next_unit() {
            let surface = detag(unit);
            if surface == close {
                let text = words.join(" ").trim().to_string();
                if text.is_empty() {
                    return Err(Error::LexError {
                        position: open.span.start,
                        fragment: self.input[open.span.start..start + unit.len()].to_string(),
                    });
                }
                let span = Span { start: open.span.start, end: start + unit.len() };
                return Ok(word(TokenKind::Noun, span, &text));
            }
            words.push(surface);
        }
        Err(Error::LexError {
            position: open.span.start,
            fragment: self.input[open.span.start..].trim_end().to_string(),
        })
    }

    /// `d’Obama` → `d'` + `Obama`; `l'âge` → `l'` + `âge`.
    ///
    /// A noun with a capitalized prefix is a name (`D'Artagnan`, `L'Oréal`)
    /// and stays whole.
    fn contraction(&mut self, unit: TaggedToken<'a>) -> Result<Token> {
        let (prefix, rest_at) = elision(unit.surface).ok_or_else(|| unit_error(unit))?;
        let is_noun = matches!(unit.tag, "N" | "NC" | "NPP");
        if is_noun && prefix.chars().any(char::is_uppercase) {
            return Ok(word(TokenKind::Noun, unit.span, unit.surface));
        }
        let kind = match prefix.to_lowercase().as_str() {
            "d" | "de" => TokenKind::Preposition,
            "l" => TokenKind::Article,
            _ if is_noun => return Ok(word(TokenKind::Noun, unit.span, unit.surface)),
            _ => return Err(unit_error(unit)),
        };
        let split = unit.span.start + rest_at;
        let text = match kind {
            TokenKind::Preposition => "d'".to_string(),
            _ => format!("{prefix}'"),
        };
        let head = word(kind, Span { start: unit.span.start, end: split }, &text);
        let noun = word(
            TokenKind::Noun,
            Span { start: split, end: unit.span.end },
            &unit.surface[rest_at..],
        );
        self.pending.push(noun);
        Ok(head)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Prefix before an apostrophe and the byte offset right after it, when
/// both sides are non-empty.
fn elision(surface: &str) -> Option<(&str, usize)> {
    let (at, apostrophe) = surface.char_indices().find(|&(_, c)| c == '\'' || c == '’')?;
    let rest_at = at + apostrophe.len_utf8();
    if at == 0 || rest_at == surface.len() {
        return None;
    }
    Some((&surface[..at], rest_at))
}

/// `as-tu` → verb `as`, subject `tu`; `a-t-il` → verb `a`, subject `il`.
fn verb_subject(unit: TaggedToken<'_>) -> Option<Token> {
    let (verb, subject) = unit.surface.rsplit_once('-')?;
    if verb.is_empty() || !vocab::is_clitic_subject(subject) {
        return None;
    }
    let verb = verb.strip_suffix("-t").unwrap_or(verb);
    Some(Token {
        kind: TokenKind::VerbSubject,
        span: unit.span,
        text: verb.to_string(),
        clitic: Some(subject.to_string()),
    })
}

fn word(kind: TokenKind, span: Span, text: &str) -> Token {
    Token { kind, span, text: text.to_string(), clitic: None }
}

fn unit_error(unit: TaggedToken<'_>) -> Error {
    Error::LexError {
        position: unit.span.start,
        fragment: format!("{}_{}", unit.surface, unit.tag),
    }
}

/// Tokenize a tagged string, appending `Eof`.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Lexer::new(input).collect::<Result<Vec<_>>>()?;
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { start: input.len(), end: input.len() },
        text: String::new(),
        clitic: None,
    });
    Ok(tokens)
}
