//! Source parsers.
//!
//! - `module`: compiled CSS-module source parser (uses swc for AST generation)

pub mod module;
