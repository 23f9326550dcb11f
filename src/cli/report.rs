//! Report formatting and printing utilities.
//!
//! Kept apart from the engine so the crate can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of missing translations listed without `-v`.
const MAX_MISSING_DISPLAY: usize = 20;

pub fn print(result: &CommandResult) {
    print_to(
        result,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract_to(summary, result.verbose, out, err),
        CommandSummary::Init(summary) => print_init_to(summary, out, err),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_extract_to<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if !summary.missing.is_empty() {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} - no locale tables written",
                plural(
                    summary.missing.len(),
                    "missing translation",
                    "missing translations"
                )
            )
            .red()
        );
        let shown = if verbose {
            summary.missing.len()
        } else {
            MAX_MISSING_DISPLAY
        };
        for missing in summary.missing.iter().take(shown) {
            let _ = writeln!(
                err,
                "  {} {}: {}",
                format!("[{}]", missing.locale).dimmed(),
                missing.file,
                missing.key.bold()
            );
        }
        if summary.missing.len() > shown {
            let _ = writeln!(
                err,
                "  ... and {} more (use {} to list all)",
                summary.missing.len() - shown,
                "-v".cyan()
            );
        }
        return;
    }

    for failure in &summary.write_failures {
        let _ = writeln!(err, "{} {}", FAILURE_MARK.red(), failure.to_string().red());
    }

    if !summary.written.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Wrote {} ({} from {})",
                plural(summary.written.len(), "locale table", "locale tables"),
                plural(summary.key_count, "key", "keys"),
                plural(summary.assets_scanned, "asset", "assets"),
            )
            .green()
        );
        for (locale, path) in &summary.written {
            let _ = writeln!(out, "  {} {}", format!("{:<6}", locale).cyan(), path.display());
        }
    }

    if verbose {
        let _ = writeln!(
            out,
            "  {} of {} loaded assets referenced a key",
            summary.assets_scanned, summary.assets_loaded
        );
    }

    if summary.assets_skipped > 0 {
        let _ = writeln!(
            err,
            "{} {} could not be read as text",
            "warning:".bold().yellow(),
            plural(summary.assets_skipped, "file", "files"),
        );
    }
}

fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
