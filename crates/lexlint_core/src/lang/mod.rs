//! Canonical per-dialect language vocabulary.
//!
//! ## Modules
//!
//! - `keywords` - reserved-word registries
//! - `builtins` - builtin allow-lists for the undeclared-identifier pass
//! - `operators` - operator character set and known-invalid spellings
//! - `types` - annotation/literal compatibility helpers

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod types;
