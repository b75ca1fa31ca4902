//! Emission: TypeScript IR → declaration source text.
//!
//! Output formatting is a contract: generated files are diffed and checked
//! in, so the text here is byte-stable for a given input. Tab indentation,
//! one blank line between declarations, trailing newline.

use std::fmt::Write as _;

use crate::ir::{TsDecl, TsEnum, TsInterface, TsTy};

/// Header written at the top of generated files.
pub const GENERATED_HEADER: &str = "/* THIS FILE IS GENERATED, DO NOT EDIT */\n\n";

pub struct Codegen {
    out: String,
    decls_emitted: usize,
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new(), decls_emitted: 0 }
    }

    pub fn with_header() -> Self {
        Self { out: GENERATED_HEADER.to_string(), decls_emitted: 0 }
    }

    pub fn emit(&mut self, decl: &TsDecl) {
        if self.decls_emitted > 0 {
            self.out.push('\n');
        }
        self.decls_emitted += 1;
        match decl {
            TsDecl::Interface(i) => self.emit_interface(i),
            TsDecl::Enum(e) => self.emit_enum(e),
        }
    }

    pub fn emit_all<'a, I>(&mut self, decls: I)
    where
        I: IntoIterator<Item = &'a TsDecl>,
    {
        for d in decls {
            self.emit(d);
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn emit_interface(&mut self, i: &TsInterface) {
        self.emit_doc(&i.doc, "");
        let _ = writeln!(self.out, "export interface {} {{", i.name);
        for f in &i.fields {
            self.emit_doc(&f.doc, "\t");
            let _ = writeln!(self.out, "\t{}: {};", f.name, ts_type_str(&f.ty));
        }
        self.out.push_str("}\n");
    }

    fn emit_enum(&mut self, e: &TsEnum) {
        self.emit_doc(&e.doc, "");
        let _ = writeln!(self.out, "export enum {} {{", e.name);
        for (name, value) in &e.variants {
            let _ = writeln!(self.out, "\t{} = \"{}\",", name, escape_string(value));
        }
        self.out.push_str("}\n");
    }

    /// `/** ... */` block, one line of text per ` * ` line.
    fn emit_doc(&mut self, doc: &Option<String>, indent: &str) {
        let Some(doc) = doc else { return };
        let _ = writeln!(self.out, "{indent}/**");
        for line in doc.lines() {
            let _ = writeln!(self.out, "{indent} * {line}");
        }
        let _ = writeln!(self.out, "{indent} */");
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ts_type_str(ty: &TsTy) -> String {
    match ty {
        TsTy::Number => "number".to_string(),
        TsTy::String => "string".to_string(),
        TsTy::Boolean => "boolean".to_string(),
        TsTy::Ref(name) => name.clone(),
        TsTy::Nullable(inner) => format!("{} | null", ts_type_str(inner)),
        TsTy::Undefinable(inner) => format!("{} | undefined", ts_type_str(inner)),
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TsField;

    #[test]
    fn empty_interface_is_two_lines() {
        let mut cg = Codegen::new();
        cg.emit(&TsDecl::Interface(TsInterface {
            name: "IMockStructEmpty".into(),
            doc: None,
            fields: Vec::new(),
        }));
        assert_eq!(cg.into_string(), "export interface IMockStructEmpty {\n}\n");
    }

    #[test]
    fn nullability_renders_null_before_undefined() {
        let ty = TsTy::Undefinable(Box::new(TsTy::Nullable(Box::new(TsTy::Number))));
        assert_eq!(ts_type_str(&ty), "number | null | undefined");
    }

    #[test]
    fn field_doc_renders_as_block_comment() {
        let mut cg = Codegen::new();
        cg.emit(&TsDecl::Interface(TsInterface {
            name: "ISomeData".into(),
            doc: None,
            fields: vec![TsField {
                name: "W".into(),
                ty: TsTy::Ref("ExplicitEnum".into()),
                doc: Some("An explicitly typed enum we define somewhere else".into()),
            }],
        }));
        let expected = "export interface ISomeData {\n\
                        \t/**\n\
                        \t * An explicitly typed enum we define somewhere else\n\
                        \t */\n\
                        \tW: ExplicitEnum;\n\
                        }\n";
        assert_eq!(cg.into_string(), expected);
    }

    #[test]
    fn enum_variants_render_with_string_values() {
        let mut cg = Codegen::new();
        cg.emit(&TsDecl::Enum(TsEnum {
            name: "ExplicitEnum".into(),
            doc: None,
            variants: vec![
                ("SomeEnumValA".into(), "a".into()),
                ("SomeEnumValB".into(), "b".into()),
            ],
        }));
        let expected = "export enum ExplicitEnum {\n\
                        \tSomeEnumValA = \"a\",\n\
                        \tSomeEnumValB = \"b\",\n\
                        }\n";
        assert_eq!(cg.into_string(), expected);
    }

    #[test]
    fn declarations_are_separated_by_one_blank_line() {
        let mut cg = Codegen::with_header();
        cg.emit(&TsDecl::Interface(TsInterface {
            name: "IA".into(),
            doc: None,
            fields: Vec::new(),
        }));
        cg.emit(&TsDecl::Interface(TsInterface {
            name: "IB".into(),
            doc: None,
            fields: Vec::new(),
        }));
        let text = cg.into_string();
        assert!(text.starts_with(GENERATED_HEADER));
        assert!(text.contains("}\n\nexport interface IB"));
        assert!(text.ends_with("}\n"));
    }
}
