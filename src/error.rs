//! Error types shared across the generation pipeline.

use thiserror::Error;

/// Errors raised while assembling a declaration registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate type declaration: {name}")]
    DuplicateDecl { name: String },
}

/// Errors raised while lowering declarations to TypeScript output.
#[derive(Debug, Error)]
pub enum LowerError {
    /// A root was requested that no manifest declares.
    #[error("unknown root type: {name}")]
    UnknownRoot { name: String },

    /// A `named` field reference did not resolve to any declaration.
    #[error("cannot map typescript type from {ty} (field {owner}.{field})")]
    UnresolvedRef {
        owner: String,
        field: String,
        ty: String,
    },
}
