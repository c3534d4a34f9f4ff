//! TypeScript declaration rendering and on-disk reconciliation.
//!
//! - `render`: declaration path derivation and the two declaration templates
//! - `reconcile`: async stat/read/write pipeline that only writes on mismatch

pub mod reconcile;
pub mod render;

pub use reconcile::{DeclarationStatus, WriteOutcome, inspect, reconcile};
pub use render::{
    DECLARATION_SUFFIX, EMPTY_MODULE_BINDING, LineEnding, STYLE_BINDING, STYLE_INTERFACE,
    declaration_path, render_declaration,
};
