//! TypeScript declaration generator.
//!
//! Pipeline: declarative type descriptions ([`schema`], loadable from JSON
//! manifests via [`manifest`]) are lowered to a TypeScript-side IR
//! ([`lower`], [`ir`]) and emitted as declaration source text ([`emit`]).
//! [`validate`] checks concrete JSON samples against the declared shapes so
//! the generated contract stays testable.

pub mod cli;
pub mod emit;
pub mod error;
pub mod ir;
pub mod lower;
pub mod manifest;
pub mod schema;
pub mod validate;

use crate::error::LowerError;
use crate::schema::Registry;

/// Generate declaration text for the given roots (every declaration in
/// registry order when `roots` is empty), including the generated-file
/// header.
pub fn generate_to_string(reg: &Registry, roots: &[String]) -> Result<String, LowerError> {
    let decls = if roots.is_empty() {
        lower::lower_all(reg)?
    } else {
        lower::lower(reg, roots)?
    };
    let mut cg = emit::Codegen::with_header();
    cg.emit_all(&decls);
    Ok(cg.into_string())
}
