use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use log::debug;
use rayon::prelude::*;
use std::io::{self, BufRead};
use std::path::PathBuf;
use titlecase::cli::output::{self, OutputFormat};
use titlecase::{cli, files, CheckResult, Config, TitleChecker};

#[derive(Parser, Debug)]
#[command(name = "titlecase")]
#[command(version, about = "Smart title casing for titles, text files and Markdown headings", long_about = None)]
struct Cli {
    /// Titles to convert (reads stdin lines when omitted or "-")
    #[arg(value_name = "TITLES", conflicts_with = "check")]
    titles: Vec<String>,

    /// Check the titles in these files or directories instead of converting
    #[arg(short, long, value_name = "PATHS", num_args = 1..)]
    check: Vec<PathBuf>,

    /// Rewrite checked titles in place
    #[arg(short, long, requires = "check")]
    fix: bool,

    /// Extra minor word to keep lowercase (repeatable)
    #[arg(short, long = "exception", value_name = "WORD")]
    exceptions: Vec<String>,

    /// Skip titles matching this pattern (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if titles need fixing
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "titlecase", &mut io::stdout());
        return Ok(());
    }

    let _logger = cli::init_logging(cli.verbose)?;

    let config = Config::load(cli.exceptions.clone(), cli.ignore_pattern.clone())?;
    let checker = TitleChecker::new(&config)?;

    if cli.check.is_empty() {
        convert_titles(&cli, &checker)
    } else {
        check_files(&cli, &checker)
    }
}

fn convert_titles(cli: &Cli, checker: &TitleChecker) -> Result<()> {
    let inputs = if cli.titles.is_empty() || cli.titles == ["-"] {
        read_stdin_titles()?
    } else {
        cli.titles.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No titles given. Use --help for usage information.");
    }

    let conversions: Vec<(String, String)> = inputs
        .into_iter()
        .map(|input| {
            let converted = checker.caser().convert(&input);
            (input, converted)
        })
        .collect();

    output::print_conversions(&conversions, cli.format)
}

fn read_stdin_titles() -> Result<Vec<String>> {
    let mut titles = Vec::new();
    for line in io::stdin().lock().lines() {
        titles.push(line?);
    }
    Ok(titles)
}

fn check_files(cli: &Cli, checker: &TitleChecker) -> Result<()> {
    let paths = files::collect_files(&cli.check)?;
    if paths.is_empty() {
        anyhow::bail!("No files to check. Use --help for usage information.");
    }
    debug!("Checking {} files", paths.len());

    let reports = paths
        .par_iter()
        .map(|path| -> Result<(PathBuf, CheckResult)> {
            let result = if cli.fix {
                checker.fix(path)?
            } else {
                checker.check(path)?
            };
            Ok((path.clone(), result))
        })
        .collect::<Result<Vec<_>>>()?;

    let colored = !cli.no_color;
    output::print_report(&reports, colored, cli.format)?;

    let total_errors: usize = reports.iter().map(|(_, r)| r.error_count).sum();
    let total_fixed: usize = reports.iter().map(|(_, r)| r.fixed_count).sum();

    if cli.format == OutputFormat::Text {
        if cli.fix {
            output::print_fix_summary(total_fixed, reports.len(), colored);
        } else {
            output::print_check_summary(total_errors, reports.len(), colored);
        }
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail && !cli.fix {
        std::process::exit(1);
    }

    Ok(())
}
