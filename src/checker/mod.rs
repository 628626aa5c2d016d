use crate::casing::TitleCaser;
use crate::error::TitleCaseError;
use crate::parser::{self, TitleSpan};
use crate::{CheckResult, Config, TitleError};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Finds and fixes titles that are not title-cased.
pub struct TitleChecker {
    caser: TitleCaser,
    ignore_patterns: Vec<Regex>,
    config: Config,
}

impl TitleChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let caser = TitleCaser::with_exceptions(&config.extra_exceptions)?;

        let ignore_patterns = config
            .ignore_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| TitleCaseError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            caser,
            ignore_patterns,
            config: config.clone(),
        })
    }

    pub fn caser(&self) -> &TitleCaser {
        &self.caser
    }

    pub fn check(&self, file_path: &Path) -> Result<CheckResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
        self.check_content(file_path, &content)
    }

    /// Report every title in `content` whose title-cased form differs.
    pub fn check_content(&self, file_path: &Path, content: &str) -> Result<CheckResult> {
        let errors: Vec<TitleError> = self
            .misfits(file_path, content)?
            .into_iter()
            .map(|(span, expected)| TitleError {
                title: span.source(content).to_string(),
                expected: span.recase_source(content, &expected).unwrap_or(expected),
                line: span.line,
                column: span.column,
            })
            .collect();

        info!(
            "Checked {}: {} titles need fixing",
            file_path.display(),
            errors.len()
        );

        Ok(CheckResult {
            error_count: errors.len(),
            fixed_count: 0,
            errors,
        })
    }

    pub fn fix(&self, file_path: &Path) -> Result<CheckResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let (new_content, fixed_count) = self.fix_content(file_path, &content)?;

        if fixed_count > 0 {
            fs::write(file_path, new_content)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
            info!("Fixed {} titles in {}", fixed_count, file_path.display());
        }

        Ok(CheckResult {
            error_count: 0,
            fixed_count,
            errors: Vec::new(),
        })
    }

    /// Replace every misfit title in `content`, returning the new content and
    /// the number of titles replaced.
    pub fn fix_content(&self, file_path: &Path, content: &str) -> Result<(String, usize)> {
        let mut new_content = content.to_string();
        let mut fixed_count = 0;

        // Back to front so earlier offsets stay valid
        for (span, expected) in self.misfits(file_path, content)?.iter().rev() {
            match span.recase_source(content, expected) {
                Some(replacement) => {
                    new_content.replace_range(span.start..span.end, &replacement);
                    fixed_count += 1;
                }
                None => warn!(
                    "{}:{}: cannot fix {:?} without touching its markup",
                    file_path.display(),
                    span.line,
                    span.source(content)
                ),
            }
        }

        Ok((new_content, fixed_count))
    }

    fn misfits(&self, file_path: &Path, content: &str) -> Result<Vec<(TitleSpan, String)>> {
        let spans = parser::parse_file(file_path, content, &self.config)?;

        Ok(spans
            .into_iter()
            .filter(|span| !self.should_ignore(&span.text))
            .filter_map(|span| {
                let expected = self.caser.convert(&span.text);
                if expected == span.text {
                    None
                } else {
                    debug!("{}:{} {:?} -> {:?}", span.line, span.column, span.text, expected);
                    Some((span, expected))
                }
            })
            .collect())
    }

    fn should_ignore(&self, title: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(title))
    }
}
