//! Export name extraction for compiled CSS modules.
//!
//! The CSS loader emits a JavaScript module that assigns the class-name map to
//! `<sentinel>.locals`. Extraction parses that module, finds every such
//! assignment, and keeps the keys that can be used as TypeScript property
//! names without quoting.
//!
//! ## Module Structure
//!
//! - `export_names`: insertion-ordered set of extracted names
//! - `identifier`: identifier-name and reserved-word classification
//! - `visitor`: AST visitor recognizing the `<sentinel>.locals = { ... }` shape

pub mod export_names;
pub mod identifier;
pub mod visitor;


use anyhow::Result;
use swc_ecma_ast::Module;
use swc_ecma_visit::VisitWith;

use crate::parsers::module::parse_module_source;

pub use export_names::ExportNames;
pub use visitor::LocalsVisitor;

/// Identifier the CSS loader binds its export namespace object to.
pub const DEFAULT_EXPORT_SENTINEL: &str = "___CSS_LOADER_EXPORT___";

/// Property of the sentinel object that holds the class-name map.
pub const LOCALS_PROPERTY: &str = "locals";

/// Parse `source` and extract the exported class names.
///
/// `file_path` is only used in parse error messages.
pub fn extract_exports(source: &str, file_path: &str, sentinel: &str) -> Result<ExportNames> {
    let module = parse_module_source(source, file_path)?;
    Ok(collect_exports(&module, sentinel))
}

/// Extract exported class names from an already parsed module.
pub fn collect_exports(module: &Module, sentinel: &str) -> ExportNames {
    let mut visitor = LocalsVisitor::new(sentinel);
    module.visit_with(&mut visitor);
    visitor.into_names()
}
