//! Builder-API walkthrough: declare the example schema in code and print
//! the generated TypeScript to stdout.
//!
//! Run with: `cargo run --example generate_types`

use ts_typegen::schema::{EnumDecl, FieldDecl, FieldTy, Registry, Scalar, StructDecl, TypeDecl};

fn main() -> anyhow::Result<()> {
    let reg = Registry::from_decls(vec![
        TypeDecl::StringEnum(
            EnumDecl::new("ExplicitEnum")
                .variant("SomeEnumValA", "a")
                .variant("SomeEnumValB", "b"),
        ),
        TypeDecl::Struct(
            StructDecl::new("SomeData")
                .field(FieldDecl::new("X", FieldTy::Scalar(Scalar::Int)).rename("x"))
                .field(FieldDecl::new("Y", FieldTy::Scalar(Scalar::Uint64)))
                .field(FieldDecl::new("Z", FieldTy::Scalar(Scalar::String)))
                .field(
                    FieldDecl::new("W", FieldTy::Named("ExplicitEnum".into()))
                        .doc("An explicitly typed enum we define somewhere else"),
                ),
        ),
        TypeDecl::Struct(
            StructDecl::new("Outer").field(
                FieldDecl::new("InnerStuff", FieldTy::Named("Inner".into())).rename("inner"),
            ),
        ),
        TypeDecl::Struct(
            StructDecl::new("Inner")
                .field(FieldDecl::new("x", FieldTy::Scalar(Scalar::Int)).optional().nullable())
                .field(FieldDecl::new("y", FieldTy::Scalar(Scalar::Int)).nullable()),
        ),
    ])?;

    // Roots in output order; `Inner` is included via the `Outer` reference.
    let roots = ["ExplicitEnum", "SomeData", "Outer"].map(String::from);
    let ts_src = ts_typegen::generate_to_string(&reg, &roots)?;
    print!("{ts_src}");
    Ok(())
}
