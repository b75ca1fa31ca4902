// Strongly-typed TypeScript-side IR for emission. No schema types here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsTy {
    Number,
    String,
    Boolean,
    Ref(String),              // emission name, already I-prefixed for interfaces
    Nullable(Box<TsTy>),      // X | null
    Undefinable(Box<TsTy>),   // X | undefined
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsDecl {
    Interface(TsInterface),
    Enum(TsEnum),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsInterface {
    pub name: String,         // includes the I prefix
    pub doc: Option<String>,
    pub fields: Vec<TsField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsField {
    pub name: String,         // wire name, case-sensitive
    pub ty: TsTy,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsEnum {
    pub name: String,
    pub doc: Option<String>,
    pub variants: Vec<(String, String)>, // (variant name, string value)
}
