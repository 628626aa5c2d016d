use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

pub const ARTICLES: &[&str] = &["a", "an", "the"];

pub const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "but", "for", "nor", "or", "so", "yet"];

pub const COMMON_PREPOSITIONS: &[&str] = &[
    "about", "beneath", "in", "regarding", "above", "beside", "inside", "round",
    "across", "between", "into", "since", "after", "beyond", "like", "through",
    "against", "by", "near", "to", "among", "concerning", "of", "toward",
    "around", "despite", "off", "under", "as", "down", "on", "unlike",
    "at", "during", "out", "until", "before", "except", "outside", "up",
    "behind", "for", "over", "upon", "below", "from", "past", "with", "via",
];

/// Abbreviations that stay lowercase when a dot follows them ("v.", "vs.").
pub const LATIN_ABBREVIATIONS: &[&str] = &["v", "vs", "id", "est"];

lazy_static! {
    static ref EXCEPTIONS: HashSet<&'static str> = ARTICLES
        .iter()
        .chain(COORDINATING_CONJUNCTIONS)
        .chain(COMMON_PREPOSITIONS)
        .copied()
        .collect();

    // A colon, dash, asterisk or at-sign, then only whitespace
    static ref TRANSITION_POINT: Regex = Regex::new(r"[:\-*@]\s*$").unwrap();

    static ref INTERNAL_SYMBOL: Regex = Regex::new(r#"^[^\w\s'"]$"#).unwrap();
}

/// Minor word from the built-in tables (articles, conjunctions, prepositions).
pub fn is_exception(word: &str) -> bool {
    EXCEPTIONS.contains(word)
}

pub fn is_always_lower(word: &str) -> bool {
    LATIN_ABBREVIATIONS.contains(&word)
}

/// A single symbol joining two words, like the `&` in `Q&A`.
pub fn is_internal_symbol(separator: &str) -> bool {
    INTERNAL_SYMBOL.is_match(separator)
}

/// A separator that opens a new clause, like `": "` or `" - "`.
pub fn is_transition_point(separator: &str) -> bool {
    TRANSITION_POINT.is_match(separator)
}
