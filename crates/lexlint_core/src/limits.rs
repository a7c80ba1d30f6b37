//! Capacity bounds for the analysis pipeline.
//!
//! Every core collection (tokens, comments, diagnostics, distinct symbols)
//! is bounded. Hitting a bound is never an error: the pipeline stops
//! accepting further items and reports the fact through a `truncated` flag
//! on its output, so callers can observe partial results instead of
//! silently receiving them.

/// Maximum number of tokens produced per analysis run.
pub const MAX_TOKENS: usize = 1000;

/// Maximum number of comment records per analysis run.
pub const MAX_COMMENTS: usize = 100;

/// Maximum number of diagnostics collected across all analyzers.
pub const MAX_DIAGNOSTICS: usize = 100;

/// Maximum number of distinct declared names tracked by the
/// undeclared-identifier analyzer.
pub const MAX_SYMBOLS: usize = 500;
