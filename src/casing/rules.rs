use super::exceptions::{is_always_lower, is_internal_symbol, is_transition_point};
use super::tokenizer::Token;

/// How a token is rendered in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Original,
    Lower,
    Capitalize,
}

/// The rule that decided a token's casing, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Separators always pass through.
    Separator,
    /// Uppercase letter after the first character (`iTunes`, `CEO`).
    InternalCapital,
    /// Next to a bare `.` (`del.icio.us`).
    AdjacentDot,
    /// Next to a single joining symbol (`Q&A`).
    AdjacentSymbol,
    /// First or last token of the title.
    TitleBoundary,
    /// `v`, `vs`, `id`, `est` followed by a dot.
    LatinAbbreviation,
    /// Minor word opening a new clause after `:`, `-`, `*` or `@`.
    AfterTransition,
    /// Minor word, or the tail of an apostrophe compound (`'s`, `'t`).
    MinorWord,
    Default,
}

impl Rule {
    pub fn casing(self) -> Casing {
        match self {
            Rule::Separator | Rule::InternalCapital | Rule::AdjacentSymbol => Casing::Original,
            Rule::AdjacentDot | Rule::LatinAbbreviation | Rule::MinorWord => Casing::Lower,
            Rule::TitleBoundary | Rule::AfterTransition | Rule::Default => Casing::Capitalize,
        }
    }
}

/// Pick the first rule that matches the token at `i`.
///
/// `is_exception` answers whether a lowercase word is a minor word for this
/// invocation (built-in tables plus any extras).
pub fn decide<F>(tokens: &[Token<'_>], i: usize, is_exception: F) -> Rule
where
    F: Fn(&str) -> bool,
{
    let token = &tokens[i];
    if !token.is_word() {
        return Rule::Separator;
    }

    let word = token.lower.as_str();
    let prev = i.checked_sub(1).map(|p| tokens[p].lower.as_str());
    let next = tokens.get(i + 1).map(|t| t.lower.as_str());
    let neighbours = [prev, next];

    if has_internal_capital(token.original) {
        return Rule::InternalCapital;
    }
    if neighbours.contains(&Some(".")) {
        return Rule::AdjacentDot;
    }
    if neighbours.iter().flatten().any(|s| is_internal_symbol(s)) {
        return Rule::AdjacentSymbol;
    }
    if i == 0 || i == tokens.len() - 1 {
        return Rule::TitleBoundary;
    }
    if is_always_lower(word) && next.is_some_and(|n| n.starts_with('.')) {
        return Rule::LatinAbbreviation;
    }

    let exception = is_exception(word);
    if exception && prev.is_some_and(is_transition_point) {
        return Rule::AfterTransition;
    }
    if exception || is_apostrophe_tail(tokens, i) {
        return Rule::MinorWord;
    }

    Rule::Default
}

fn has_internal_capital(original: &str) -> bool {
    original.chars().skip(1).any(char::is_uppercase)
}

fn is_apostrophe_tail(tokens: &[Token<'_>], i: usize) -> bool {
    i > 1 && tokens[i - 1].lower == "'" && tokens[i - 2].is_word()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casing::exceptions::is_exception;
    use crate::casing::tokenizer::tokenize;

    fn rules_for(input: &str) -> Vec<(String, Rule)> {
        let tokens = tokenize(input);
        (0..tokens.len())
            .filter(|&i| tokens[i].is_word())
            .map(|i| (tokens[i].original.to_string(), decide(&tokens, i, is_exception)))
            .collect()
    }

    fn rule_of(input: &str, word: &str) -> Rule {
        rules_for(input)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, r)| r)
            .unwrap()
    }

    #[test]
    fn test_separators_pass_through() {
        let tokens = tokenize("a, b");
        assert_eq!(decide(&tokens, 1, is_exception), Rule::Separator);
        assert_eq!(Rule::Separator.casing(), Casing::Original);
    }

    #[test]
    fn test_internal_capital_wins_over_everything() {
        assert_eq!(rule_of("iTunes is amazing", "iTunes"), Rule::InternalCapital);
        assert_eq!(rule_of("AT&T fires CEO", "AT"), Rule::InternalCapital);
        assert_eq!(rule_of("AT&T fires CEO", "CEO"), Rule::InternalCapital);
        // also dot-adjacent, rule order keeps the original
        assert_eq!(rule_of("the eBay.com deal", "eBay"), Rule::InternalCapital);
    }

    #[test]
    fn test_adjacent_dot() {
        assert_eq!(rule_of("del.icio.us steals hearts", "del"), Rule::AdjacentDot);
        assert_eq!(rule_of("del.icio.us steals hearts", "icio"), Rule::AdjacentDot);
        assert_eq!(rule_of("del.icio.us steals hearts", "us"), Rule::AdjacentDot);
    }

    #[test]
    fn test_adjacent_symbol() {
        assert_eq!(rule_of("AT&T fires CEO", "T"), Rule::AdjacentSymbol);
        assert_eq!(rule_of("Q&A with bob", "Q"), Rule::AdjacentSymbol);
        assert_eq!(rule_of("Q&A with bob", "A"), Rule::AdjacentSymbol);
    }

    #[test]
    fn test_title_boundary_is_positional() {
        assert_eq!(rule_of("the big rabbit", "the"), Rule::TitleBoundary);
        assert_eq!(rule_of("the big rabbit", "rabbit"), Rule::TitleBoundary);
        // a trailing separator means the last word is not the last token
        assert_eq!(rule_of("\"afraid of?\"", "of"), Rule::MinorWord);
        // a lone "?" counts as a joining symbol
        assert_eq!(rule_of("afraid of?", "of"), Rule::AdjacentSymbol);
    }

    #[test]
    fn test_latin_abbreviation() {
        assert_eq!(rule_of("this v. that", "v"), Rule::LatinAbbreviation);
        assert_eq!(rule_of("this vs. that", "vs"), Rule::LatinAbbreviation);
        assert_eq!(rule_of("this vs that", "vs"), Rule::Default);
    }

    #[test]
    fn test_after_transition() {
        assert_eq!(rule_of("kids: a primer", "a"), Rule::AfterTransition);
        assert_eq!(rule_of("rock - the return", "the"), Rule::AfterTransition);
        assert_eq!(rule_of("quotes: 'a trick'", "a"), Rule::MinorWord);
    }

    #[test]
    fn test_minor_words_and_apostrophe_tails() {
        assert_eq!(rule_of("the big rabbit in town", "in"), Rule::MinorWord);
        assert_eq!(rule_of("what's the problem", "s"), Rule::MinorWord);
        assert_eq!(rule_of("what's the problem", "what"), Rule::TitleBoundary);
    }

    #[test]
    fn test_default() {
        assert_eq!(rule_of("the big rabbit", "big"), Rule::Default);
        assert_eq!(Rule::Default.casing(), Casing::Capitalize);
    }
}
