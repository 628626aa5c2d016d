use crate::parser::TitleSpan;
use anyhow::Result;

/// Every non-blank line of a plain text file is a title.
pub fn parse(content: &str) -> Result<Vec<TitleSpan>> {
    let mut spans = Vec::new();
    let mut line_start = 0;

    for line in content.split('\n') {
        let line_body = line.strip_suffix('\r').unwrap_or(line);
        let trimmed_start = line_body.trim_start();

        if !trimmed_start.trim_end().is_empty() {
            let start = line_start + (line_body.len() - trimmed_start.len());
            let end = start + trimmed_start.trim_end().len();
            spans.push(TitleSpan::new(content, start, end));
        }

        line_start += line.len() + 1;
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_parsing() {
        let content = "the big rabbit\n\n  kids: a primer  \nA Thing";
        let spans = parse(content).unwrap();

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "the big rabbit");
        assert_eq!(spans[0].line, 1);
        assert_eq!(spans[1].text, "kids: a primer");
        assert_eq!(spans[1].line, 3);
        assert_eq!(spans[1].column, 3);
        assert_eq!(spans[2].line, 4);
    }

    #[test]
    fn test_offsets_slice_back_into_content() {
        let content = "one\r\n\ttwo words\r\n";
        for span in parse(content).unwrap() {
            assert_eq!(&content[span.start..span.end], span.text);
        }
        assert_eq!(parse(content).unwrap()[1].text, "two words");
    }

    #[test]
    fn test_blank_content() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n   \n\t\n").unwrap().is_empty());
    }
}
