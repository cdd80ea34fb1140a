//! # Semantic Resolver
//!
//! Question AST → output [`Tree`].
//!
//! - nominal groups fold innermost complement first: `la femme du président
//!   des États-Unis` → `((États-Unis, président, ?), femme, ?)`
//! - possessive determiners become person placeholders: `ton nom` →
//!   `(toi, nom, ?)`
//! - a copular verb (`est`, `sont`) adds no predicate layer
//! - other verbs and inverted-question nouns go through the [`Lexicon`]

pub mod lexicon;

use tracing::trace;

use crate::grammar::ast::{NominalGroup, Question};
use crate::grammar::vocab;
use crate::model::{Pronoun, Tree};
use crate::{Error, Result};

pub use lexicon::{Lexicon, MemoryLexicon, WordCategory};

/// Language the lexicon is queried in.
pub const TARGET_LANGUAGE: &str = "fra";

/// Resolve a parsed question.
pub fn resolve<L: Lexicon + ?Sized>(question: &Question, lexicon: &L) -> Result<Tree> {
    match question {
        Question::VerbFirst { interrogative, verb, group } => {
            let subject = group_to_tree(group);
            if vocab::is_which_word(interrogative) {
                if vocab::is_etre(verb) {
                    Ok(subject)
                } else {
                    Ok(Tree::ask(subject, predicate(verb, WordCategory::Verb, lexicon)))
                }
            } else if vocab::is_where_word(interrogative) {
                if vocab::is_etre(verb) {
                    Ok(Tree::ask(subject, Tree::resource(vocab::LOCATION_PREDICATE)))
                } else {
                    Err(Error::UnsupportedVerbMood(format!(
                        "'{interrogative}' with non-copular verb '{verb}'"
                    )))
                }
            } else {
                Err(Error::UnsupportedQuestionWord(interrogative.clone()))
            }
        }
        Question::NounFirst { interrogative, noun, verb, subject } => {
            if !vocab::is_which_word(interrogative) {
                return Err(Error::UnsupportedQuestionWord(interrogative.clone()));
            }
            if !vocab::is_auxiliary(verb) {
                return Err(Error::UnsupportedVerbMood(format!(
                    "inverted verb '{verb}' is neither être nor avoir"
                )));
            }
            let person = Pronoun::from_word(subject).ok_or_else(|| {
                Error::Invariant(format!("clitic subject '{subject}' has no placeholder"))
            })?;
            Ok(Tree::ask(person.to_tree(), predicate(noun, WordCategory::Noun, lexicon)))
        }
    }
}

/// Person placeholder carried by the group's article, if any.
pub fn group_subject(group: &NominalGroup) -> Option<Pronoun> {
    group.article.as_deref().and_then(Pronoun::from_word)
}

/// Fold a nominal group into a tree.
pub fn group_to_tree(group: &NominalGroup) -> Tree {
    if let Some(complement) = group.complement() {
        Tree::ask(group_to_tree(complement), Tree::resource(&group.noun))
    } else if let Some(person) = group_subject(group) {
        Tree::ask(person.to_tree(), Tree::resource(&group.noun))
    } else {
        Tree::resource(&group.noun)
    }
}

/// Canonical predicate for a word: the lexicon's first candidate, else the
/// word itself.
// TODO: rank candidates once the lexicon exposes frequency data.
pub fn predicate<L: Lexicon + ?Sized>(word: &str, category: WordCategory, lexicon: &L) -> Tree {
    let candidates = lexicon.base_forms(word, category, TARGET_LANGUAGE);
    trace!(word, ?category, candidates = candidates.len(), "lexical lookup");
    match candidates.into_iter().next() {
        Some(form) => Tree::resource(form),
        None => Tree::resource(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty() -> MemoryLexicon {
        MemoryLexicon::new(TARGET_LANGUAGE)
    }

    fn verb_first(interrogative: &str, verb: &str, group: NominalGroup) -> Question {
        Question::VerbFirst { interrogative: interrogative.into(), verb: verb.into(), group }
    }

    fn noun_first(interrogative: &str, noun: &str, verb: &str, subject: &str) -> Question {
        Question::NounFirst {
            interrogative: interrogative.into(),
            noun: noun.into(),
            verb: verb.into(),
            subject: subject.into(),
        }
    }

    #[test]
    fn test_possessive_copular() {
        let q = verb_first("Quel", "est", NominalGroup::with_article("ton", "nom"));
        assert_eq!(resolve(&q, &empty()).unwrap(), Tree::ask("toi".into(), "nom".into()));
    }

    #[test]
    fn test_definite_article_has_no_subject() {
        let g = NominalGroup::with_article("le", "nom");
        assert_eq!(group_subject(&g), None);
        assert_eq!(group_to_tree(&g), Tree::resource("nom"));
    }

    #[test]
    fn test_nested_complements() {
        let g = NominalGroup::with_article("la", "femme").with_complement(
            NominalGroup::noun("président").with_complement(NominalGroup::noun("États-Unis")),
        );
        assert_eq!(
            group_to_tree(&g),
            Tree::ask(Tree::ask("États-Unis".into(), "président".into()), "femme".into()),
        );
    }

    #[test]
    fn test_complement_wins_over_possessive() {
        let g = NominalGroup::with_article("sa", "femme").with_complement(NominalGroup::noun("Obama"));
        assert_eq!(group_to_tree(&g), Tree::ask("Obama".into(), "femme".into()));
    }

    #[test]
    fn test_where() {
        let q = verb_first("Où", "est", NominalGroup::with_article("la", "France"));
        assert_eq!(resolve(&q, &empty()).unwrap(), Tree::ask("France".into(), "localisation".into()));
    }

    #[test]
    fn test_where_non_copular() {
        let q = verb_first("où", "habite", NominalGroup::noun("Obama"));
        assert!(matches!(resolve(&q, &empty()), Err(Error::UnsupportedVerbMood(_))));
    }

    #[test]
    fn test_non_copular_uses_lexicon() {
        let lex = empty().with_entry(WordCategory::Verb, "écrit", ["auteur", "écrivain"]);
        let q = verb_first("Qui", "écrit", NominalGroup::noun("Hamlet"));
        assert_eq!(resolve(&q, &lex).unwrap(), Tree::ask("Hamlet".into(), "auteur".into()));
    }

    #[test]
    fn test_non_copular_falls_back_to_surface() {
        let q = verb_first("Qui", "écrit", NominalGroup::noun("Hamlet"));
        assert_eq!(resolve(&q, &empty()).unwrap(), Tree::ask("Hamlet".into(), "écrit".into()));
    }

    #[test]
    fn test_unsupported_question_word() {
        let q = verb_first("Combien", "coûte", NominalGroup::with_article("la", "maison"));
        match resolve(&q, &empty()) {
            Err(Error::UnsupportedQuestionWord(word)) => assert_eq!(word, "Combien"),
            other => panic!("Expected UnsupportedQuestionWord, got {other:?}"),
        }
    }

    #[test]
    fn test_noun_first() {
        let q = noun_first("Quel", "âge", "as", "tu");
        assert_eq!(resolve(&q, &empty()).unwrap(), Tree::ask("toi".into(), "âge".into()));
    }

    #[test]
    fn test_noun_first_resolves_noun() {
        let lex = empty().with_entry(WordCategory::Noun, "taille", ["hauteur"]);
        let q = noun_first("Quelle", "taille", "fait", "il");
        assert!(matches!(resolve(&q, &lex), Err(Error::UnsupportedVerbMood(_))));
        let q = noun_first("Quelle", "taille", "a", "il");
        assert_eq!(resolve(&q, &lex).unwrap(), Tree::ask("iel".into(), "hauteur".into()));
    }

    #[test]
    fn test_noun_first_question_word() {
        let q = noun_first("Où", "âge", "as", "tu");
        assert!(matches!(resolve(&q, &empty()), Err(Error::UnsupportedQuestionWord(_))));
    }

    #[test]
    fn test_unresolvable_clitic_is_a_defect() {
        let q = noun_first("Quel", "âge", "ont", "ils");
        let err = resolve(&q, &empty()).unwrap_err();
        assert!(err.is_defect(), "{err}");
    }
}
