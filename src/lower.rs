//! Lowering: declaration registry → TypeScript IR.
//!
//! Roots are lowered in the order given. A field that references another
//! declaration pulls that declaration into the output right after the
//! declaration that first referenced it, and every declaration is emitted
//! at most once regardless of how many fields reference it.

use std::collections::BTreeSet;

use crate::error::LowerError;
use crate::ir::{TsDecl, TsEnum, TsField, TsInterface, TsTy};
use crate::schema::{FieldTy, Registry, Scalar, StructDecl, TypeDecl};

/// Interface emission name: structs get an `I` prefix, enums stay bare.
pub fn emission_name(decl: &TypeDecl) -> String {
    match decl {
        TypeDecl::Struct(s) => format!("I{}", s.name),
        TypeDecl::StringEnum(e) => e.name.clone(),
    }
}

pub fn lower(reg: &Registry, roots: &[String]) -> Result<Vec<TsDecl>, LowerError> {
    let mut out = Vec::new();
    let mut emitted = BTreeSet::new();

    for root in roots {
        if reg.get(root).is_none() {
            return Err(LowerError::UnknownRoot { name: root.clone() });
        }
        lower_decl(reg, root, &mut emitted, &mut out)?;
    }

    Ok(out)
}

/// Lower every declaration in the registry, in declaration order.
pub fn lower_all(reg: &Registry) -> Result<Vec<TsDecl>, LowerError> {
    let roots: Vec<String> = reg.names().map(str::to_string).collect();
    lower(reg, &roots)
}

fn lower_decl(
    reg: &Registry,
    name: &str,
    emitted: &mut BTreeSet<String>,
    out: &mut Vec<TsDecl>,
) -> Result<(), LowerError> {
    // Already defined earlier, don't redefine. Marking before recursion also
    // terminates mutually recursive references.
    if !emitted.insert(name.to_string()) {
        return Ok(());
    }

    let decl = reg.get(name).expect("caller resolved the name");

    match decl {
        TypeDecl::StringEnum(e) => {
            out.push(TsDecl::Enum(TsEnum {
                name: e.name.clone(),
                doc: e.doc.clone(),
                variants: e.variants.iter().map(|v| (v.name.clone(), v.value.clone())).collect(),
            }));
            Ok(())
        }
        TypeDecl::Struct(s) => {
            let (iface, pending) = lower_struct(reg, s)?;
            out.push(TsDecl::Interface(iface));
            // Referenced declarations follow the declaration that first
            // needed them, in field order.
            for dep in pending {
                lower_decl(reg, &dep, emitted, out)?;
            }
            Ok(())
        }
    }
}

fn lower_struct(
    reg: &Registry,
    s: &StructDecl,
) -> Result<(TsInterface, Vec<String>), LowerError> {
    let mut fields = Vec::new();
    let mut pending = Vec::new();

    for f in &s.fields {
        if f.skip {
            continue;
        }

        let base = match &f.ty {
            FieldTy::Scalar(sc) => scalar_ty(*sc),
            FieldTy::Extern(ts_name) => TsTy::Ref(ts_name.clone()),
            FieldTy::Named(target) => {
                let target_decl =
                    reg.get(target).ok_or_else(|| LowerError::UnresolvedRef {
                        owner: s.name.clone(),
                        field: f.name.clone(),
                        ty: target.clone(),
                    })?;
                pending.push(target.clone());
                TsTy::Ref(emission_name(target_decl))
            }
        };

        let mut ty = base;
        if f.nullable {
            ty = TsTy::Nullable(Box::new(ty));
        }
        if f.optional {
            ty = TsTy::Undefinable(Box::new(ty));
        }

        fields.push(TsField {
            name: f.wire_name().to_string(),
            ty,
            doc: f.doc.clone(),
        });
    }

    let iface = TsInterface {
        name: format!("I{}", s.name),
        doc: s.doc.clone(),
        fields,
    };
    Ok((iface, pending))
}

fn scalar_ty(sc: Scalar) -> TsTy {
    match sc {
        Scalar::String => TsTy::String,
        Scalar::Bool => TsTy::Boolean,
        _ => TsTy::Number, // every integer width and float
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
