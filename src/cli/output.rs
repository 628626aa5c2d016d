use crate::CheckResult;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    file: String,
    line: usize,
    column: usize,
    title: String,
    expected: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    files_checked: usize,
    total_errors: usize,
    total_fixed: usize,
    errors: Vec<JsonError>,
}

/// Print converted titles, one per line in text mode.
pub fn print_conversions(conversions: &[(String, String)], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (_, output) in conversions {
                println!("{}", output);
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonConversion> = conversions
                .iter()
                .map(|(input, output)| JsonConversion {
                    input: input.clone(),
                    output: output.clone(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Print the findings of a check or fix run over several files.
pub fn print_report(
    reports: &[(PathBuf, CheckResult)],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (file_path, result) in reports {
                print_text_errors(file_path, result, colored_output);
            }
        }
        OutputFormat::Json => println!("{}", render_json(reports)?),
    }
    Ok(())
}

fn print_text_errors(file_path: &Path, result: &CheckResult, colored_output: bool) {
    if result.errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in &result.errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!("  {} {}", line_info.blue().bold(), error.title.red());
            println!("    {} {}", "→".dimmed(), error.expected.green());
        } else {
            println!("  {} {}", line_info, error.title);
            println!("    → {}", error.expected);
        }
    }
}

fn render_json(reports: &[(PathBuf, CheckResult)]) -> Result<String> {
    let errors: Vec<JsonError> = reports
        .iter()
        .flat_map(|(file_path, result)| {
            result.errors.iter().map(move |e| JsonError {
                file: file_path.display().to_string(),
                line: e.line,
                column: e.column,
                title: e.title.clone(),
                expected: e.expected.clone(),
            })
        })
        .collect();

    let output = JsonOutput {
        files_checked: reports.len(),
        total_errors: reports.iter().map(|(_, r)| r.error_count).sum(),
        total_fixed: reports.iter().map(|(_, r)| r.fixed_count).sum(),
        errors,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn print_check_summary(total_errors: usize, files: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ All titles are title-cased!".green().bold());
        } else {
            println!("✓ All titles are title-cased!");
        }
    } else {
        let title_word = if total_errors == 1 { "title" } else { "titles" };
        let file_word = if files == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} to fix in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                title_word,
                files,
                file_word
            );
        } else {
            println!(
                "✗ {} {} to fix in {} {}",
                total_errors, title_word, files, file_word
            );
        }
    }
}

pub fn print_fix_summary(total_fixed: usize, files: usize, colored: bool) {
    println!();
    if total_fixed == 0 {
        if colored {
            println!("{}", "No corrections needed!".green().bold());
        } else {
            println!("No corrections needed!");
        }
    } else {
        let title_word = if total_fixed == 1 { "title" } else { "titles" };
        let file_word = if files == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} fixed in {} {}",
                "✓".green().bold(),
                total_fixed.to_string().green().bold(),
                title_word,
                files,
                file_word
            );
        } else {
            println!(
                "✓ {} {} fixed in {} {}",
                total_fixed, title_word, files, file_word
            );
        }
    }
}
