/// Whether `ch` belongs to a word token: alphanumeric or underscore.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// One piece of the input between two word boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub index: usize,
    pub original: &'a str,
    pub lower: String,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Split `input` at every word boundary.
///
/// Word runs and separator runs alternate; joining every token's `original`
/// reproduces the input exactly. Each token also carries its lowercased form.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (offset, ch) in input.char_indices() {
        let kind = if is_word_char(ch) {
            TokenKind::Word
        } else {
            TokenKind::Separator
        };

        match current {
            Some(prev) if prev != kind => {
                push_token(&mut tokens, &input[start..offset], prev);
                start = offset;
                current = Some(kind);
            }
            None => current = Some(kind),
            _ => {}
        }
    }

    if let Some(kind) = current {
        push_token(&mut tokens, &input[start..], kind);
    }

    tokens
}

fn push_token<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str, kind: TokenKind) {
    tokens.push(Token {
        index: tokens.len(),
        original: text,
        lower: text.to_lowercase(),
        kind,
    });
}
