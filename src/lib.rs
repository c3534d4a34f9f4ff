//! cssdts - TypeScript declarations for compiled CSS modules
//!
//! cssdts reads the JavaScript a CSS loader emits for a CSS module, extracts
//! the exported class names from the `___CSS_LOADER_EXPORT___.locals = { ... }`
//! assignment, and keeps a sibling `<resource>.d.ts` file in sync, writing it
//! only when its content changes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (generate, check, emit, init)
//! - `config`: Configuration file loading and parsing
//! - `declaration`: Declaration rendering and on-disk reconciliation
//! - `extraction`: Export name extraction from the module AST
//! - `loader`: The per-module loader invocation and its build-tool context
//! - `parsers`: Source parsing (swc)
//! - `scanner`: Discovery of compiled modules for batch runs

pub mod cli;
pub mod config;
pub mod declaration;
pub mod extraction;
pub mod loader;
pub mod parsers;
pub mod scanner;
