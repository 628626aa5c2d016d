pub mod markdown;
pub mod plaintext;

use crate::Config;
use anyhow::Result;
use std::ops::Range;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    PlainText,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "md" | "mdx" | "markdown" => FileType::Markdown,
            _ => FileType::PlainText,
        }
    }

    /// Whether a directory walk should pick up files with this extension.
    pub fn is_supported(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref(),
            Some("md" | "mdx" | "markdown" | "txt")
        )
    }
}

/// A title found in a file.
///
/// `start..end` is the raw source of the title, markup included. `pieces`
/// are the byte ranges holding the title's own text, in order; `text` is
/// those pieces joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSpan {
    pub text: String,
    pub line: usize,
    pub column: usize, // 1-indexed, in grapheme clusters
    pub start: usize,  // Byte offset where the title starts
    pub end: usize,    // Byte offset where the title ends
    pub pieces: Vec<Range<usize>>,
}

impl TitleSpan {
    pub fn new(content: &str, start: usize, end: usize) -> Self {
        Self::from_pieces(content, start..end, vec![start..end])
    }

    /// A title whose text is spread over `pieces` inside `source`.
    pub fn from_pieces(content: &str, source: Range<usize>, pieces: Vec<Range<usize>>) -> Self {
        let (line, column) = line_and_column(content, source.start);
        let text = pieces.iter().map(|piece| &content[piece.clone()]).collect();
        Self {
            text,
            line,
            column,
            start: source.start,
            end: source.end,
            pieces,
        }
    }

    pub fn source<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    /// The raw source with `recased` (a recasing of `text`) written back
    /// into the pieces, markup left in place.
    ///
    /// Returns `None` when `recased` no longer lines up character for
    /// character with the pieces.
    pub fn recase_source(&self, content: &str, recased: &str) -> Option<String> {
        if self.pieces == [self.start..self.end] {
            return Some(recased.to_string());
        }
        if recased.chars().count() != self.text.chars().count() {
            return None;
        }

        let mut out = String::with_capacity(self.end - self.start);
        let mut chars = recased.chars();
        let mut cursor = self.start;
        for piece in &self.pieces {
            out.push_str(&content[cursor..piece.start]);
            let len = content[piece.clone()].chars().count();
            out.extend(chars.by_ref().take(len));
            cursor = piece.end;
        }
        out.push_str(&content[cursor..self.end]);
        Some(out)
    }
}

/// Extract the titles of a file
pub fn parse_file(path: &Path, content: &str, config: &Config) -> Result<Vec<TitleSpan>> {
    match FileType::from_path(path) {
        FileType::Markdown => markdown::parse(
            content,
            config.min_heading_level as usize..=config.max_heading_level as usize,
        ),
        FileType::PlainText => plaintext::parse(content),
    }
}

fn line_and_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.matches('\n').count() + 1;
    let column = before[line_start..].graphemes(true).count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(
            FileType::from_path(&PathBuf::from("README.md")),
            FileType::Markdown
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("post.MDX")),
            FileType::Markdown
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("titles.txt")),
            FileType::PlainText
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("noext")),
            FileType::PlainText
        );
    }

    #[test]
    fn test_supported_extensions() {
        assert!(FileType::is_supported(Path::new("a.md")));
        assert!(FileType::is_supported(Path::new("a.txt")));
        assert!(!FileType::is_supported(Path::new("a.rs")));
        assert!(!FileType::is_supported(Path::new("Makefile")));
    }

    #[test]
    fn test_span_position() {
        let content = "first\n  ünïcode title";
        let start = content.find("title").unwrap();
        let span = TitleSpan::new(content, start, content.len());
        assert_eq!(span.text, "title");
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 11);
        assert_eq!(span.pieces, vec![start..content.len()]);
    }

    #[test]
    fn test_recase_source_keeps_markup() {
        let content = "# war *and* peace";
        let span = TitleSpan::from_pieces(content, 2..17, vec![2..6, 7..10, 11..17]);
        assert_eq!(span.text, "war and peace");
        assert_eq!(span.source(content), "war *and* peace");
        assert_eq!(
            span.recase_source(content, "War and Peace").as_deref(),
            Some("War *and* Peace")
        );
        assert_eq!(span.recase_source(content, "War and Peace!"), None);
    }

    #[test]
    fn test_recase_source_single_piece() {
        let content = "the rabbit";
        let span = TitleSpan::new(content, 0, content.len());
        assert_eq!(
            span.recase_source(content, "The Rabbit").as_deref(),
            Some("The Rabbit")
        );
    }
}
