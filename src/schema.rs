//! Declarative type descriptions: the source of truth for generation.
//!
//! Types are plain data (serde-loadable from a manifest or built in code),
//! not reflected from Rust definitions. A declaration set is the unit the
//! lowering and validation passes operate on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// ————————————————————————————————————————————————————————————————————————————
// DECLARATIONS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDecl {
    Struct(StructDecl),
    StringEnum(EnumDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Struct(s) => &s.name,
            TypeDecl::StringEnum(e) => &e.name,
        }
    }
}

/// A closed set of named string tags, e.g. `SomeEnumValA = "a"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared field name. Used verbatim on the wire unless renamed, so
    /// `Y` and `y` are distinct.
    pub name: String,

    /// Wire name override (the original schema's rename tag).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,

    /// Rendered as a `/** ... */` doc block above the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(rename = "type")]
    pub ty: FieldTy,

    /// Field may be entirely absent from a value instance (`| undefined`).
    #[serde(default)]
    pub optional: bool,

    /// Field may be explicitly set to null (`| null`).
    #[serde(default)]
    pub nullable: bool,

    /// Excluded from generated output and validation.
    #[serde(default)]
    pub skip: bool,
}

impl FieldDecl {
    /// The name this field has on the wire and in generated output.
    pub fn wire_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// FIELD TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTy {
    Scalar(Scalar),
    /// Reference to another declaration in the same registry. Must resolve;
    /// struct references nest structurally by value.
    Named(String),
    /// Explicit TypeScript type defined elsewhere. Emitted verbatim, never
    /// resolved or defined by this generator.
    Extern(String),
}

/// Scalar kinds, mirroring the source schema's primitive vocabulary.
/// Every integer width and float collapses to TypeScript `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Bool,
}

impl Scalar {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Scalar::Int
                | Scalar::Int8
                | Scalar::Int16
                | Scalar::Int32
                | Scalar::Int64
                | Scalar::Uint
                | Scalar::Uint8
                | Scalar::Uint16
                | Scalar::Uint32
                | Scalar::Uint64
        )
    }

    pub fn is_number(self) -> bool {
        self.is_integer() || matches!(self, Scalar::Float32 | Scalar::Float64)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// REGISTRY
// ————————————————————————————————————————————————————————————————————————————

/// All declarations known to a generation run, keyed by name.
/// Insertion order is declaration order; it drives default root order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    decls: IndexMap<String, TypeDecl>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration; duplicate names are an error.
    pub fn insert(&mut self, decl: TypeDecl) -> Result<(), SchemaError> {
        let name = decl.name().to_string();
        if self.decls.contains_key(&name) {
            return Err(SchemaError::DuplicateDecl { name });
        }
        self.decls.insert(name, decl);
        Ok(())
    }

    pub fn from_decls<I>(decls: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = TypeDecl>,
    {
        let mut reg = Self::new();
        for d in decls {
            reg.insert(d)?;
        }
        Ok(reg)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.decls.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.decls.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// BUILDERS (programmatic front-end)
// ————————————————————————————————————————————————————————————————————————————

impl StructDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), doc: None, fields: Vec::new() }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), doc: None, variants: Vec::new() }
    }

    pub fn variant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants.push(EnumVariant { name: name.into(), value: value.into() });
        self
    }
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: FieldTy) -> Self {
        Self {
            name: name.into(),
            rename: None,
            doc: None,
            ty,
            optional: false,
            nullable: false,
            skip: false,
        }
    }

    pub fn rename(mut self, wire: impl Into<String>) -> Self {
        self.rename = Some(wire.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn skip(mut self) -> Self {
        self.skip = true;
        self
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_duplicate_names() {
        let mut reg = Registry::new();
        reg.insert(TypeDecl::Struct(StructDecl::new("Inner"))).unwrap();
        let err = reg.insert(TypeDecl::Struct(StructDecl::new("Inner"))).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDecl { ref name } if name == "Inner"));
    }

    #[test]
    fn wire_name_prefers_rename() {
        let f = FieldDecl::new("InnerStuff", FieldTy::Named("Inner".into())).rename("inner");
        assert_eq!(f.wire_name(), "inner");
        let g = FieldDecl::new("Y", FieldTy::Scalar(Scalar::Uint64));
        assert_eq!(g.wire_name(), "Y");
    }

    #[test]
    fn field_decl_roundtrips_through_manifest_json() {
        let json = serde_json::json!({
            "name": "x",
            "type": { "scalar": "int" },
            "optional": true,
            "nullable": true
        });
        let f: FieldDecl = serde_json::from_value(json).unwrap();
        assert!(f.optional && f.nullable && !f.skip);
        assert!(matches!(f.ty, FieldTy::Scalar(Scalar::Int)));
    }

    #[test]
    fn scalar_kind_predicates() {
        assert!(Scalar::Uint64.is_integer());
        assert!(Scalar::Float32.is_number());
        assert!(!Scalar::Float32.is_integer());
        assert!(!Scalar::String.is_number());
        assert!(!Scalar::Bool.is_number());
    }
}
