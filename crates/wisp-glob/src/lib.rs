//! wisp-glob: Shell-style glob compilation and matching.
//!
//! Provides:
//! - **Glob**: a compiled, anchored matcher over single file names
//! - **glob_match**: one-shot pattern matching with brace alternation
//! - **contains_glob**: metacharacter detection for path arguments
//!
//! Patterns support `*`, `?`, `{a,b}` alternation, and backslash escapes.
//! Wildcards never match a leading dot, so dotfiles stay hidden unless the
//! pattern spells the dot out itself.

mod glob;

pub use glob::{contains_glob, glob_match, Glob};
