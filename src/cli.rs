//! Command-line interface.
//!
//! ## Usage
//!
//! - `lexlint <file>` - analyze one source file and print the report
//! - `--no-color` - suppress ANSI escapes in the report
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. The dialect
//! is chosen from the file extension (`.py` is Python-like; `.ts` and
//! `.js` are TypeScript-like). Input handling returns `CliResult<T>`
//! instead of calling `process::exit`; only the top-level `run()` function
//! handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use thiserror::Error;

use crate::{Dialect, analyze, render};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that occur while loading the input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file '{0}' has no extension; expected .py, .ts, or .js")]
    MissingExtension(PathBuf),

    #[error("unsupported file extension '.{extension}'; expected .py, .ts, or .js")]
    UnsupportedExtension { extension: String },
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexical analyzer and heuristic linter for Python-like and
/// TypeScript-like sources
#[derive(Parser, Debug)]
#[command(name = "lexlint")]
#[command(version = VERSION)]
#[command(about = "Lexical analyzer for Python-like and TypeScript-like sources", long_about = None)]
pub struct Cli {
    /// Source file to analyze (.py, .ts, or .js)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// Map a file extension to the dialect the analyzers should assume.
pub fn dialect_for_path(path: &Path) -> Result<Dialect, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| InputError::MissingExtension(path.to_path_buf()))?;
    match extension {
        "py" => Ok(Dialect::PythonLike),
        "ts" | "js" => Ok(Dialect::TypeScriptLike),
        other => Err(InputError::UnsupportedExtension {
            extension: other.to_string(),
        }),
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All helpers
/// return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Load the file, run the pipeline, and print the report.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let dialect = dialect_for_path(&cli.file)?;
    let source = fs::read_to_string(&cli.file).map_err(|source| InputError::Read {
        path: cli.file.clone(),
        source,
    })?;

    let analysis = analyze(dialect, &source);

    if analysis.lex.truncated {
        tracing::warn!("token capacity reached; output is truncated");
    }
    if analysis.comments.truncated {
        tracing::warn!("comment capacity reached; later comments were dropped");
    }
    if analysis.report.truncated {
        tracing::warn!("diagnostic capacity reached; later findings were dropped");
    }

    let color = !cli.no_color && io::stdout().is_terminal();
    println!(
        "Analyzing file: {}\nDialect detected: {}",
        cli.file.display(),
        dialect.name()
    );
    print!("{}", render::report(&analysis, color));

    // Findings are reported on stdout but still fail the invocation, so
    // the tool composes with scripts and CI.
    if analysis.report.diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

// ============================================================================
// Tests
// ============================================================================
