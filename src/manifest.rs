//! Manifest loading: JSON declaration files → [`Registry`].

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::schema::{Registry, TypeDecl};

/// On-disk manifest format: `{ "types": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub types: Vec<TypeDecl>,
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

pub fn parse_manifest(src: &str) -> anyhow::Result<Manifest> {
    from_str_with_path::<Manifest>(src).map_err(|msg| anyhow::anyhow!(msg))
}

/// Load and merge manifest files into one registry. Declaration order is
/// file order, then in-file order; duplicate names across files are errors.
pub fn load_merged<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Registry> {
    use anyhow::Context;

    let mut reg = Registry::new();
    for path in paths {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        let manifest = parse_manifest(&src)
            .with_context(|| format!("failed to parse manifest {}", path.display()))?;
        for decl in manifest.types {
            reg.insert(decl)
                .with_context(|| format!("in manifest {}", path.display()))?;
        }
    }
    Ok(reg)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldTy, Scalar};

    #[test]
    fn manifest_parses_structs_and_enums() {
        let src = serde_json::json!({
            "types": [
                {
                    "kind": "string_enum",
                    "name": "ExplicitEnum",
                    "variants": [
                        { "name": "SomeEnumValA", "value": "a" },
                        { "name": "SomeEnumValB", "value": "b" }
                    ]
                },
                {
                    "kind": "struct",
                    "name": "Inner",
                    "fields": [
                        { "name": "x", "type": { "scalar": "int" }, "optional": true, "nullable": true },
                        { "name": "y", "type": { "scalar": "int" }, "nullable": true }
                    ]
                }
            ]
        })
        .to_string();

        let m = parse_manifest(&src).unwrap();
        assert_eq!(m.types.len(), 2);
        let TypeDecl::Struct(inner) = &m.types[1] else { panic!("expected struct") };
        assert!(matches!(inner.fields[0].ty, FieldTy::Scalar(Scalar::Int)));
        assert!(inner.fields[0].optional && inner.fields[0].nullable);
        assert!(!inner.fields[1].optional && inner.fields[1].nullable);
    }

    #[test]
    fn parse_errors_carry_json_path_context() {
        let src = r#"{ "types": [ { "kind": "struct", "name": "S",
            "fields": [ { "name": "x", "type": { "scalar": "complex128" } } ] } ] }"#;
        let err = parse_manifest(src).unwrap_err().to_string();
        assert!(err.contains("at JSON path"), "{err}");
        assert!(err.contains("types"), "{err}");
    }
}
