pub mod exceptions;
pub mod rules;
pub mod tokenizer;

use crate::error::TitleCaseError;
use log::trace;
use rules::{Casing, Rule};
use std::collections::HashSet;
use tokenizer::{is_word_char, tokenize, Token};

/// Leading characters skipped when looking for the letter to capitalize.
const OPENING_PUNCTUATION: &[char] = &['\'', '"', '(', '['];

/// Title-cases strings against the built-in minor-word tables plus a set of
/// extra exceptions.
#[derive(Debug, Clone, Default)]
pub struct TitleCaser {
    extra_exceptions: HashSet<String>,
}

impl TitleCaser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a caser with extra minor words, rejecting entries that could
    /// never match a word token.
    pub fn with_exceptions<I, S>(words: I) -> Result<Self, TitleCaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extra_exceptions = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !word.chars().all(is_word_char) {
                return Err(TitleCaseError::InvalidException {
                    word: word.to_string(),
                });
            }
            extra_exceptions.insert(word.to_lowercase());
        }
        Ok(Self { extra_exceptions })
    }

    pub fn is_exception(&self, word: &str) -> bool {
        exceptions::is_exception(word) || self.extra_exceptions.contains(word)
    }

    /// The rule that decides the casing of `tokens[i]`.
    pub fn decide(&self, tokens: &[Token<'_>], i: usize) -> Rule {
        rules::decide(tokens, i, |w| self.is_exception(w))
    }

    pub fn convert(&self, input: &str) -> String {
        let tokens = tokenize(input);
        let mut output = String::with_capacity(input.len());

        for (i, token) in tokens.iter().enumerate() {
            let rule = self.decide(&tokens, i);
            if token.is_word() {
                trace!("token {} {:?}: {:?}", i, token.original, rule);
            }
            match rule.casing() {
                Casing::Original => output.push_str(token.original),
                Casing::Lower => output.push_str(&token.lower),
                Casing::Capitalize => output.push_str(&capitalize_lowercased(&token.lower)),
            }
        }

        output
    }

    /// True when converting `input` would leave it unchanged.
    pub fn is_title_case(&self, input: &str) -> bool {
        self.convert(input) == input
    }
}

/// Title-case `input`, treating `extra_exceptions` as additional minor words.
///
/// Never fails: extras are compared lowercased, and extras that are not a
/// single word simply never match.
pub fn titlecase(input: &str, extra_exceptions: &[&str]) -> String {
    let caser = TitleCaser {
        extra_exceptions: extra_exceptions.iter().map(|w| w.to_lowercase()).collect(),
    };
    caser.convert(input)
}

/// Lowercase `input` and uppercase its first letter, looking past any
/// leading quotes, parentheses or brackets.
pub fn capitalize_first_letter(input: &str) -> String {
    capitalize_lowercased(&input.to_lowercase())
}

fn capitalize_lowercased(lower: &str) -> String {
    let prefix_len = lower.len() - lower.trim_start_matches(OPENING_PUNCTUATION).len();
    let (prefix, rest) = lower.split_at(prefix_len);

    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if is_word_char(first) => {
            let mut out = String::with_capacity(lower.len());
            out.push_str(prefix);
            // Only a one-to-one mapping keeps the character count ("ß" stays)
            let mut upper = first.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => out.push(single),
                _ => out.push(first),
            }
            out.push_str(chars.as_str());
            out
        }
        _ => lower.to_string(),
    }
}
