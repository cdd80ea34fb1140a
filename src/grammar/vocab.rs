//! Closed word classes the grammar and the resolver key on.
//!
//! All lookups are case-insensitive.

/// Present and imperfect forms of *être*.
pub const FORMS_ETRE: &[&str] = &[
    "suis", "es", "est", "sommes", "êtes", "sont",
    "étais", "était", "étions", "étiez", "étaient",
];

/// Present and imperfect forms of *avoir*.
pub const FORMS_AVOIR: &[&str] = &[
    "ai", "as", "a", "avons", "avez", "ont",
    "avais", "avait", "avions", "aviez", "avaient",
];

/// Pronouns that can follow an inverted verb (`as-tu`, `a-t-il`).
/// Every entry resolves to a [`Pronoun`](crate::model::Pronoun).
pub const CLITIC_SUBJECTS: &[&str] = &["je", "tu", "il", "elle", "iel", "vous"];

/// Head nouns that form a compound with their complement
/// (`date de naissance`, `lieu de décès`).
pub const RELATIONAL_NOUNS: &[&str] = &[
    "date", "lieu", "jour", "année", "heure", "ville", "pays", "cause",
];

/// Interrogatives asking for an entity.
pub const WHICH_WORDS: &[&str] = &["quel", "quelle", "quels", "quelles", "qui"];

/// Interrogatives asking for a location.
pub const WHERE_WORDS: &[&str] = &["où"];

/// Predicate used for `où` questions.
pub const LOCATION_PREDICATE: &str = "localisation";

/// Opening quote → closing quote.
const QUOTES: &[(&str, &str)] = &[("\"", "\""), ("«", "»")];

fn contains(set: &[&str], word: &str) -> bool {
    let word = word.to_lowercase();
    set.iter().any(|w| *w == word)
}

pub fn is_etre(verb: &str) -> bool { contains(FORMS_ETRE, verb) }
pub fn is_avoir(verb: &str) -> bool { contains(FORMS_AVOIR, verb) }

/// Auxiliary of compound tenses.
pub fn is_auxiliary(verb: &str) -> bool { is_etre(verb) || is_avoir(verb) }

pub fn is_clitic_subject(word: &str) -> bool { contains(CLITIC_SUBJECTS, word) }
pub fn is_relational_noun(noun: &str) -> bool { contains(RELATIONAL_NOUNS, noun) }
pub fn is_which_word(word: &str) -> bool { contains(WHICH_WORDS, word) }
pub fn is_where_word(word: &str) -> bool { contains(WHERE_WORDS, word) }

/// Closing sentinel for a quote opener, if `surface` opens a quoted span.
pub fn closing_quote(surface: &str) -> Option<&'static str> {
    QUOTES.iter().find(|(open, _)| *open == surface).map(|(_, close)| *close)
}
