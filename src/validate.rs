//! Structural validation of JSON values against declarations.
//!
//! The generated TypeScript is a contract about which value sets a shape
//! accepts; this module checks concrete samples against that contract so
//! the claim is testable without a TypeScript toolchain. Violations carry a
//! JSON-pointer-ish path. Unknown object keys are accepted (structural
//! typing), and `extern` fields are opaque.

use serde_json::Value;

use crate::schema::{FieldTy, Registry, Scalar, TypeDecl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field entirely absent from the object.
    MissingField { field: String },
    /// Null where the field is not nullable.
    UnexpectedNull,
    /// Value kind does not match the declared type.
    KindMismatch { expected: String, actual: String },
    /// String is not one of the enum's variant values.
    NotAVariant { value: String },
    /// Root type name not present in the registry.
    UnknownType { name: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ViolationKind::MissingField { field } => {
                write!(f, "{}: missing required field `{field}`", self.path)
            }
            ViolationKind::UnexpectedNull => {
                write!(f, "{}: null is not allowed here", self.path)
            }
            ViolationKind::KindMismatch { expected, actual } => {
                write!(f, "{}: expected {expected}, got {actual}", self.path)
            }
            ViolationKind::NotAVariant { value } => {
                write!(f, "{}: \"{value}\" is not a declared variant value", self.path)
            }
            ViolationKind::UnknownType { name } => {
                write!(f, "{}: unknown type `{name}`", self.path)
            }
        }
    }
}

/// Check `value` against the declaration named `type_name`.
/// Empty result means the value is accepted by the declared shape.
pub fn check_value(reg: &Registry, type_name: &str, value: &Value) -> Vec<Violation> {
    let mut out = Vec::new();
    match reg.get(type_name) {
        None => out.push(Violation {
            path: "/".to_string(),
            kind: ViolationKind::UnknownType { name: type_name.to_string() },
        }),
        Some(decl) => check_decl(reg, decl, value, "", &mut out),
    }
    out
}

fn check_decl(reg: &Registry, decl: &TypeDecl, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match decl {
        TypeDecl::StringEnum(e) => match value {
            Value::String(s) => {
                if !e.variants.iter().any(|v| v.value == *s) {
                    out.push(violation(path, ViolationKind::NotAVariant { value: s.clone() }));
                }
            }
            other => out.push(mismatch(path, "string", other)),
        },
        TypeDecl::Struct(s) => {
            let Value::Object(map) = value else {
                out.push(mismatch(path, "object", value));
                return;
            };
            for f in &s.fields {
                if f.skip {
                    continue;
                }
                let wire = f.wire_name();
                let field_path = format!("{path}/{wire}");
                match map.get(wire) {
                    None => {
                        if !f.optional {
                            out.push(violation(
                                path,
                                ViolationKind::MissingField { field: wire.to_string() },
                            ));
                        }
                    }
                    Some(Value::Null) => {
                        if !f.nullable {
                            out.push(violation(&field_path, ViolationKind::UnexpectedNull));
                        }
                    }
                    Some(v) => check_field_ty(reg, &f.ty, v, &field_path, out),
                }
            }
        }
    }
}

fn check_field_ty(reg: &Registry, ty: &FieldTy, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match ty {
        FieldTy::Scalar(sc) => check_scalar(*sc, value, path, out),
        // Opaque: the type lives outside this registry.
        FieldTy::Extern(_) => {}
        FieldTy::Named(target) => match reg.get(target) {
            None => out.push(violation(
                path,
                ViolationKind::UnknownType { name: target.clone() },
            )),
            Some(decl) => check_decl(reg, decl, value, path, out),
        },
    }
}

fn check_scalar(sc: Scalar, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match sc {
        Scalar::String => {
            if !value.is_string() {
                out.push(mismatch(path, "string", value));
            }
        }
        Scalar::Bool => {
            if !value.is_boolean() {
                out.push(mismatch(path, "boolean", value));
            }
        }
        // Integer widths require integral JSON numbers.
        _ if sc.is_integer() => {
            let integral = value.as_i64().is_some() || value.as_u64().is_some();
            if !integral {
                out.push(mismatch(path, "integer", value));
            }
        }
        _ => {
            if !value.is_number() {
                out.push(mismatch(path, "number", value));
            }
        }
    }
}

fn violation(path: &str, kind: ViolationKind) -> Violation {
    let path = if path.is_empty() { "/".to_string() } else { path.to_string() };
    Violation { path, kind }
}

fn mismatch(path: &str, expected: &str, actual: &Value) -> Violation {
    violation(
        path,
        ViolationKind::KindMismatch {
            expected: expected.to_string(),
            actual: json_kind(actual).to_string(),
        },
    )
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
