use crate::parser::TitleSpan;
use anyhow::Result;
use log::debug;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::ops::{Range, RangeInclusive};

struct OpenHeading {
    level: usize,
    content: Option<Range<usize>>,
    pieces: Vec<Range<usize>>,
    has_code: bool,
}

/// Parse markdown and extract heading titles within `levels`.
///
/// Only the heading's text events make up the title; emphasis and link
/// markup stay in the source around them. Headings containing inline code
/// or HTML are skipped, their text must not be recased.
pub fn parse(content: &str, levels: RangeInclusive<usize>) -> Result<Vec<TitleSpan>> {
    let mut spans = Vec::new();
    let mut heading: Option<OpenHeading> = None;

    for (event, range) in Parser::new(content).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(OpenHeading {
                    level: level as usize,
                    content: None,
                    pieces: Vec::new(),
                    has_code: false,
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some(open) = heading.take() else {
                    continue;
                };
                let Some(inner) = open.content else {
                    continue;
                };
                if open.has_code {
                    debug!("Skipping heading with inline code at byte {}", inner.start);
                } else if levels.contains(&open.level) && !open.pieces.is_empty() {
                    spans.push(TitleSpan::from_pieces(content, inner, open.pieces));
                }
            }
            event => {
                if let Some(open) = heading.as_mut() {
                    match event {
                        Event::Code(_) | Event::InlineHtml(_) | Event::Html(_) => {
                            open.has_code = true;
                        }
                        Event::Text(_) | Event::SoftBreak => open.pieces.push(range.clone()),
                        _ => {}
                    }
                    open.content = Some(match open.content.take() {
                        Some(inner) => inner.start.min(range.start)..inner.end.max(range.end),
                        None => range,
                    });
                }
            }
        }
    }

    Ok(spans)
}
