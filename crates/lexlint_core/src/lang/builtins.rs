//! Builtin allow-lists for the undeclared-identifier analyzer.
//!
//! Identifiers on these lists are considered ambient: they never need a
//! declaration in the analyzed source. The lists are small on purpose; this
//! is a heuristic pass, not an environment model.

use crate::Dialect;

/// Names the Python-like dialect treats as always-declared.
pub const PYTHON_BUILTINS: &[&str] = &["print", "len", "range", "input", "open", "type"];

/// Names the TypeScript-like dialect treats as always-declared.
///
/// `log` is listed on its own because the tokenizer splits `console.log`
/// into separate identifier tokens.
pub const TYPESCRIPT_BUILTINS: &[&str] = &["console", "log", "document", "window", "Math", "Array"];

/// The allow-list for a dialect.
pub fn allow_list(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::PythonLike => PYTHON_BUILTINS,
        Dialect::TypeScriptLike => TYPESCRIPT_BUILTINS,
    }
}

/// Whether `name` is exempt from declaration checking in `dialect`.
pub fn is_builtin(dialect: Dialect, name: &str) -> bool {
    allow_list(dialect).contains(&name)
}
