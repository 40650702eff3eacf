//! Dialect-1 package schema.
//!
//! Heavily interned: identifiers appear either inline (`*_str`, `*_dname`)
//! or as indices into the per-package string / dotted-name tables, depending
//! on the producing compiler's vintage. Every name therefore comes as a
//! oneof with both encodings.

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Unit {}

/// A dotted name spelled out inline (pre-interning encoding).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DottedName {
    #[prost(string, repeated, tag = "1")]
    pub segments: Vec<String>,
}

/// A dotted name as indices into the interned string table.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InternedDottedName {
    #[prost(int32, repeated, tag = "1")]
    pub segments_interned_str: Vec<i32>,
}

/// Reference to a package: the current one, or an id spelled inline or
/// interned.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageRef {
    #[prost(oneof = "package_ref::Sum", tags = "1, 2, 3")]
    pub sum: Option<package_ref::Sum>,
}

pub mod package_ref {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Self_(super::Unit),
        #[prost(string, tag = "2")]
        PackageIdStr(String),
        #[prost(int32, tag = "3")]
        PackageIdInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleRef {
    #[prost(message, optional, tag = "1")]
    pub package_ref: Option<PackageRef>,
    #[prost(oneof = "module_ref::ModuleName", tags = "2, 3")]
    pub module_name: Option<module_ref::ModuleName>,
}

pub mod module_ref {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ModuleName {
        #[prost(message, tag = "2")]
        ModuleNameDname(super::DottedName),
        #[prost(int32, tag = "3")]
        ModuleNameInternedDname(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeConName {
    #[prost(message, optional, tag = "1")]
    pub module: Option<ModuleRef>,
    #[prost(oneof = "type_con_name::Name", tags = "2, 3")]
    pub name: Option<type_con_name::Name>,
}

pub mod type_con_name {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Name {
        #[prost(message, tag = "2")]
        NameDname(super::DottedName),
        #[prost(int32, tag = "3")]
        NameInternedDname(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValName {
    #[prost(message, optional, tag = "1")]
    pub module: Option<ModuleRef>,
    #[prost(string, repeated, tag = "2")]
    pub name_dname: Vec<String>,
    #[prost(int32, tag = "3")]
    pub name_interned_dname: i32,
}

// --- Types ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PrimType {
    Unit = 0,
    Bool = 1,
    Int64 = 2,
    Decimal = 3,
    Text = 5,
    Timestamp = 6,
    Party = 8,
    List = 9,
    Update = 10,
    Scenario = 11,
    Date = 12,
    ContractId = 13,
    Optional = 14,
    Arrow = 15,
    Textmap = 16,
    Numeric = 17,
    Any = 18,
    TypeRep = 19,
    Genmap = 20,
    Bignumeric = 21,
    RoundingMode = 22,
    AnyException = 23,
}

impl PrimType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PrimType::Unit => "UNIT",
            PrimType::Bool => "BOOL",
            PrimType::Int64 => "INT64",
            PrimType::Decimal => "DECIMAL",
            PrimType::Text => "TEXT",
            PrimType::Timestamp => "TIMESTAMP",
            PrimType::Party => "PARTY",
            PrimType::List => "LIST",
            PrimType::Update => "UPDATE",
            PrimType::Scenario => "SCENARIO",
            PrimType::Date => "DATE",
            PrimType::ContractId => "CONTRACT_ID",
            PrimType::Optional => "OPTIONAL",
            PrimType::Arrow => "ARROW",
            PrimType::Textmap => "TEXTMAP",
            PrimType::Numeric => "NUMERIC",
            PrimType::Any => "ANY",
            PrimType::TypeRep => "TYPE_REP",
            PrimType::Genmap => "GENMAP",
            PrimType::Bignumeric => "BIGNUMERIC",
            PrimType::RoundingMode => "ROUNDING_MODE",
            PrimType::AnyException => "ANY_EXCEPTION",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Type {
    #[prost(oneof = "ty::Sum", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub sum: Option<ty::Sum>,
}

pub mod ty {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Var(super::TypeVar),
        #[prost(message, tag = "2")]
        Con(super::TypeCon),
        #[prost(message, tag = "3")]
        Prim(super::TypePrim),
        #[prost(message, tag = "4")]
        Forall(super::TypeForall),
        #[prost(message, tag = "5")]
        Struct(super::TypeStruct),
        #[prost(int64, tag = "6")]
        Nat(i64),
        #[prost(message, tag = "7")]
        Syn(super::TypeSyn),
        #[prost(int32, tag = "8")]
        Interned(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeVar {
    #[prost(oneof = "type_var::Var", tags = "1, 3")]
    pub var: Option<type_var::Var>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

pub mod type_var {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Var {
        #[prost(string, tag = "1")]
        VarStr(String),
        #[prost(int32, tag = "3")]
        VarInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeConName>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeSyn {
    #[prost(message, optional, tag = "1")]
    pub tysyn: Option<TypeConName>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypePrim {
    #[prost(enumeration = "PrimType", tag = "1")]
    pub prim: i32,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeForall {
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Type>>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TypeStruct {}

// --- Literals and atoms ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PrimCon {
    ConUnit = 0,
    ConFalse = 1,
    ConTrue = 2,
}

impl PrimCon {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PrimCon::ConUnit => "CON_UNIT",
            PrimCon::ConFalse => "CON_FALSE",
            PrimCon::ConTrue => "CON_TRUE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BuiltinFunction {
    AddInt64 = 0,
    SubInt64 = 1,
    MulInt64 = 2,
    DivInt64 = 3,
    ModInt64 = 4,
    ExpInt64 = 5,
    AddNumeric = 6,
    SubNumeric = 7,
    MulNumeric = 8,
    DivNumeric = 9,
    RoundNumeric = 10,
    CastNumeric = 11,
    AppendText = 12,
    ExplodeText = 13,
    ImplodeText = 14,
    Sha256Text = 15,
    PartyToText = 16,
    Error = 17,
    Equal = 18,
    Less = 19,
    LessEq = 20,
    Greater = 21,
    GreaterEq = 22,
    Foldl = 23,
    Foldr = 24,
    Cons = 25,
    Nil = 26,
}

impl BuiltinFunction {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BuiltinFunction::AddInt64 => "ADD_INT64",
            BuiltinFunction::SubInt64 => "SUB_INT64",
            BuiltinFunction::MulInt64 => "MUL_INT64",
            BuiltinFunction::DivInt64 => "DIV_INT64",
            BuiltinFunction::ModInt64 => "MOD_INT64",
            BuiltinFunction::ExpInt64 => "EXP_INT64",
            BuiltinFunction::AddNumeric => "ADD_NUMERIC",
            BuiltinFunction::SubNumeric => "SUB_NUMERIC",
            BuiltinFunction::MulNumeric => "MUL_NUMERIC",
            BuiltinFunction::DivNumeric => "DIV_NUMERIC",
            BuiltinFunction::RoundNumeric => "ROUND_NUMERIC",
            BuiltinFunction::CastNumeric => "CAST_NUMERIC",
            BuiltinFunction::AppendText => "APPEND_TEXT",
            BuiltinFunction::ExplodeText => "EXPLODE_TEXT",
            BuiltinFunction::ImplodeText => "IMPLODE_TEXT",
            BuiltinFunction::Sha256Text => "SHA256_TEXT",
            BuiltinFunction::PartyToText => "PARTY_TO_TEXT",
            BuiltinFunction::Error => "ERROR",
            BuiltinFunction::Equal => "EQUAL",
            BuiltinFunction::Less => "LESS",
            BuiltinFunction::LessEq => "LESS_EQ",
            BuiltinFunction::Greater => "GREATER",
            BuiltinFunction::GreaterEq => "GREATER_EQ",
            BuiltinFunction::Foldl => "FOLDL",
            BuiltinFunction::Foldr => "FOLDR",
            BuiltinFunction::Cons => "CONS",
            BuiltinFunction::Nil => "NIL",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrimLit {
    #[prost(oneof = "prim_lit::Sum", tags = "1, 2, 4, 5, 7, 8, 9, 10, 11, 12")]
    pub sum: Option<prim_lit::Sum>,
}

pub mod prim_lit {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum RoundingMode {
        Up = 0,
        Down = 1,
        Ceiling = 2,
        Floor = 3,
        HalfUp = 4,
        HalfDown = 5,
        HalfEven = 6,
        Unnecessary = 7,
    }

    impl RoundingMode {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                RoundingMode::Up => "UP",
                RoundingMode::Down => "DOWN",
                RoundingMode::Ceiling => "CEILING",
                RoundingMode::Floor => "FLOOR",
                RoundingMode::HalfUp => "HALF_UP",
                RoundingMode::HalfDown => "HALF_DOWN",
                RoundingMode::HalfEven => "HALF_EVEN",
                RoundingMode::Unnecessary => "UNNECESSARY",
            }
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(int64, tag = "1")]
        Int64(i64),
        #[prost(string, tag = "2")]
        DecimalStr(String),
        #[prost(string, tag = "4")]
        TextStr(String),
        /// Microseconds since epoch.
        #[prost(sfixed64, tag = "5")]
        Timestamp(i64),
        #[prost(string, tag = "7")]
        PartyStr(String),
        /// Days since epoch.
        #[prost(int32, tag = "8")]
        Date(i32),
        #[prost(int32, tag = "9")]
        TextInternedStr(i32),
        #[prost(int32, tag = "10")]
        NumericInternedStr(i32),
        #[prost(int32, tag = "11")]
        PartyInternedStr(i32),
        #[prost(enumeration = "RoundingMode", tag = "12")]
        RoundingMode(i32),
    }
}

// --- Source locations ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(message, optional, tag = "1")]
    pub module: Option<ModuleRef>,
    #[prost(message, optional, tag = "2")]
    pub range: Option<location::Range>,
}

pub mod location {
    /// 0-indexed source range; IR lowering shifts to 1-indexed.
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Range {
        #[prost(int32, tag = "1")]
        pub start_line: i32,
        #[prost(int32, tag = "2")]
        pub start_col: i32,
        #[prost(int32, tag = "3")]
        pub end_line: i32,
        #[prost(int32, tag = "4")]
        pub end_col: i32,
    }
}

// --- Expressions ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VarWithType {
    #[prost(oneof = "var_with_type::Var", tags = "1, 3")]
    pub var: Option<var_with_type::Var>,
    #[prost(message, optional, tag = "2")]
    pub r#type: Option<Type>,
}

pub mod var_with_type {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Var {
        #[prost(string, tag = "1")]
        VarStr(String),
        #[prost(int32, tag = "3")]
        VarInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Binding {
    #[prost(message, optional, tag = "1")]
    pub binder: Option<VarWithType>,
    #[prost(message, optional, tag = "2")]
    pub bound: Option<Expr>,
}

/// Shared by `let`, `update.block` and `scenario.block`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    #[prost(message, repeated, tag = "1")]
    pub bindings: Vec<Binding>,
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldWithExpr {
    #[prost(oneof = "field_with_expr::Field", tags = "1, 3")]
    pub field: Option<field_with_expr::Field>,
    #[prost(message, optional, tag = "2")]
    pub expr: Option<Expr>,
}

pub mod field_with_expr {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "1")]
        FieldStr(String),
        #[prost(int32, tag = "3")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeCon>,
    #[prost(message, repeated, tag = "2")]
    pub fields: Vec<FieldWithExpr>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecProj {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeCon>,
    #[prost(oneof = "rec_proj::Field", tags = "2, 5")]
    pub field: Option<rec_proj::Field>,
    #[prost(message, optional, boxed, tag = "3")]
    pub record: Option<Box<Expr>>,
}

pub mod rec_proj {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "2")]
        FieldStr(String),
        #[prost(int32, tag = "5")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecUpd {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeCon>,
    #[prost(oneof = "rec_upd::Field", tags = "2, 5")]
    pub field: Option<rec_upd::Field>,
    #[prost(message, optional, boxed, tag = "3")]
    pub record: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub update: Option<Box<Expr>>,
}

pub mod rec_upd {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "2")]
        FieldStr(String),
        #[prost(int32, tag = "5")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VariantCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeConName>,
    #[prost(oneof = "variant_con::VariantCon", tags = "2, 4")]
    pub variant_con: Option<variant_con::VariantCon>,
    #[prost(message, optional, boxed, tag = "3")]
    pub variant_arg: Option<Box<Expr>>,
}

pub mod variant_con {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum VariantCon {
        #[prost(string, tag = "2")]
        VariantConStr(String),
        #[prost(int32, tag = "4")]
        VariantConInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeConName>,
    #[prost(oneof = "enum_con::EnumCon", tags = "2, 3")]
    pub enum_con: Option<enum_con::EnumCon>,
}

pub mod enum_con {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EnumCon {
        #[prost(string, tag = "2")]
        EnumConStr(String),
        #[prost(int32, tag = "3")]
        EnumConInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructCon {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<FieldWithExpr>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructProj {
    #[prost(oneof = "struct_proj::Field", tags = "1, 3")]
    pub field: Option<struct_proj::Field>,
    #[prost(message, optional, boxed, tag = "2")]
    pub r#struct: Option<Box<Expr>>,
}

pub mod struct_proj {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "1")]
        FieldStr(String),
        #[prost(int32, tag = "3")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructUpd {
    #[prost(oneof = "struct_upd::Field", tags = "1, 4")]
    pub field: Option<struct_upd::Field>,
    #[prost(message, optional, boxed, tag = "2")]
    pub r#struct: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub update: Option<Box<Expr>>,
}

pub mod struct_upd {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "1")]
        FieldStr(String),
        #[prost(int32, tag = "4")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct App {
    #[prost(message, optional, boxed, tag = "1")]
    pub fun: Option<Box<Expr>>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Expr>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TyApp {
    #[prost(message, optional, boxed, tag = "1")]
    pub expr: Option<Box<Expr>>,
    #[prost(message, repeated, tag = "2")]
    pub types: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Abs {
    #[prost(message, repeated, tag = "1")]
    pub param: Vec<VarWithType>,
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TyAbs {
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Case {
    #[prost(message, optional, boxed, tag = "1")]
    pub scrut: Option<Box<Expr>>,
    #[prost(message, repeated, tag = "2")]
    pub alts: Vec<CaseAlt>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAlt {
    #[prost(oneof = "case_alt::Sum", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub sum: Option<case_alt::Sum>,
    #[prost(message, optional, tag = "9")]
    pub body: Option<Expr>,
}

pub mod case_alt {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Default(super::Unit),
        #[prost(message, tag = "2")]
        Variant(super::CaseAltVariant),
        #[prost(enumeration = "super::PrimCon", tag = "3")]
        PrimCon(i32),
        #[prost(message, tag = "4")]
        Nil(super::Unit),
        #[prost(message, tag = "5")]
        Cons(super::CaseAltCons),
        #[prost(message, tag = "6")]
        OptionalNone(super::Unit),
        #[prost(message, tag = "7")]
        OptionalSome(super::CaseAltOptionalSome),
        #[prost(message, tag = "8")]
        Enum(super::CaseAltEnum),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltVariant {
    #[prost(message, optional, tag = "1")]
    pub con: Option<TypeConName>,
    #[prost(oneof = "case_alt_variant::Variant", tags = "2, 4")]
    pub variant: Option<case_alt_variant::Variant>,
    #[prost(oneof = "case_alt_variant::Binder", tags = "3, 5")]
    pub binder: Option<case_alt_variant::Binder>,
}

pub mod case_alt_variant {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Variant {
        #[prost(string, tag = "2")]
        VariantStr(String),
        #[prost(int32, tag = "4")]
        VariantInternedStr(i32),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Binder {
        #[prost(string, tag = "3")]
        BinderStr(String),
        #[prost(int32, tag = "5")]
        BinderInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltCons {
    #[prost(oneof = "case_alt_cons::VarHead", tags = "1, 3")]
    pub var_head: Option<case_alt_cons::VarHead>,
    #[prost(oneof = "case_alt_cons::VarTail", tags = "2, 4")]
    pub var_tail: Option<case_alt_cons::VarTail>,
}

pub mod case_alt_cons {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum VarHead {
        #[prost(string, tag = "1")]
        VarHeadStr(String),
        #[prost(int32, tag = "3")]
        VarHeadInternedStr(i32),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum VarTail {
        #[prost(string, tag = "2")]
        VarTailStr(String),
        #[prost(int32, tag = "4")]
        VarTailInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltOptionalSome {
    #[prost(oneof = "case_alt_optional_some::VarBody", tags = "1, 2")]
    pub var_body: Option<case_alt_optional_some::VarBody>,
}

pub mod case_alt_optional_some {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum VarBody {
        #[prost(string, tag = "1")]
        VarBodyStr(String),
        #[prost(int32, tag = "2")]
        VarBodyInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltEnum {
    #[prost(message, optional, tag = "1")]
    pub con: Option<TypeConName>,
    #[prost(oneof = "case_alt_enum::Constructor", tags = "2, 3")]
    pub constructor: Option<case_alt_enum::Constructor>,
}

pub mod case_alt_enum {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Constructor {
        #[prost(string, tag = "2")]
        ConstructorStr(String),
        #[prost(int32, tag = "3")]
        ConstructorInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Nil {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cons {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, repeated, tag = "2")]
    pub front: Vec<Expr>,
    #[prost(message, optional, boxed, tag = "3")]
    pub tail: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OptionalNone {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OptionalSome {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToAny {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromAny {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToAnyException {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromAnyException {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Throw {
    #[prost(message, optional, tag = "1")]
    pub return_type: Option<Type>,
    #[prost(message, optional, tag = "2")]
    pub exception_type: Option<Type>,
    #[prost(message, optional, boxed, tag = "3")]
    pub exception_expr: Option<Box<Expr>>,
}

// --- Interface operations ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConName>,
    #[prost(message, optional, tag = "2")]
    pub template_type: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "3")]
    pub template_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConName>,
    #[prost(message, optional, tag = "2")]
    pub template_type: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "3")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsafeFromInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConName>,
    #[prost(message, optional, tag = "2")]
    pub template_type: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "3")]
    pub contract_id_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CallInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConName>,
    #[prost(int32, tag = "2")]
    pub method_interned_name: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ViewInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignatoryInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObserverInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterfaceTemplateTypeRep {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToRequiredInterface {
    #[prost(message, optional, tag = "1")]
    pub required_interface: Option<TypeConName>,
    #[prost(message, optional, tag = "2")]
    pub requiring_interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "3")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromRequiredInterface {
    #[prost(message, optional, tag = "1")]
    pub required_interface: Option<TypeConName>,
    #[prost(message, optional, tag = "2")]
    pub requiring_interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "3")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsafeFromRequiredInterface {
    #[prost(message, optional, tag = "1")]
    pub required_interface: Option<TypeConName>,
    #[prost(message, optional, tag = "2")]
    pub requiring_interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "3")]
    pub contract_id_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChoiceController {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(int32, tag = "2")]
    pub choice_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub contract_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub choice_arg_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChoiceObserver {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(int32, tag = "2")]
    pub choice_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub contract_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub choice_arg_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Experimental {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub r#type: Option<Type>,
}

// --- Updates and scenarios ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pure {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Create {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Exercise {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(oneof = "exercise::Choice", tags = "2, 3")]
    pub choice: Option<exercise::Choice>,
    #[prost(message, optional, boxed, tag = "4")]
    pub cid: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "5")]
    pub arg: Option<Box<Expr>>,
}

pub mod exercise {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(string, tag = "2")]
        ChoiceStr(String),
        #[prost(int32, tag = "3")]
        ChoiceInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExerciseByKey {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(oneof = "exercise_by_key::Choice", tags = "2, 3")]
    pub choice: Option<exercise_by_key::Choice>,
    #[prost(message, optional, boxed, tag = "4")]
    pub key: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "5")]
    pub arg: Option<Box<Expr>>,
}

pub mod exercise_by_key {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(string, tag = "2")]
        ChoiceStr(String),
        #[prost(int32, tag = "3")]
        ChoiceInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoftExercise {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(oneof = "soft_exercise::Choice", tags = "2, 3")]
    pub choice: Option<soft_exercise::Choice>,
    #[prost(message, optional, boxed, tag = "4")]
    pub cid: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "5")]
    pub arg: Option<Box<Expr>>,
}

pub mod soft_exercise {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Choice {
        #[prost(string, tag = "2")]
        ChoiceStr(String),
        #[prost(int32, tag = "3")]
        ChoiceInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DynamicExercise {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(int32, tag = "2")]
    pub choice_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub cid: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub arg: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExerciseInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(int32, tag = "2")]
    pub choice_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub cid: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub arg: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "5")]
    pub guard: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Fetch {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub cid: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoftFetch {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub cid: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FetchInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub cid: Option<Box<Expr>>,
}

/// `lookup_by_key` and `fetch_by_key` share this shape.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RetrieveByKey {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConName>,
    #[prost(message, optional, boxed, tag = "2")]
    pub key: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmbedExpr {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TryCatch {
    #[prost(message, optional, tag = "1")]
    pub return_type: Option<Type>,
    #[prost(int32, tag = "2")]
    pub var_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub try_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub catch_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Update {
    #[prost(
        oneof = "update::Sum",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17"
    )]
    pub sum: Option<update::Sum>,
}

pub mod update {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Pure(Box<super::Pure>),
        #[prost(message, tag = "2")]
        Block(Box<super::Block>),
        #[prost(message, tag = "3")]
        Create(Box<super::Create>),
        #[prost(message, tag = "4")]
        Exercise(Box<super::Exercise>),
        #[prost(message, tag = "5")]
        ExerciseByKey(Box<super::ExerciseByKey>),
        #[prost(message, tag = "6")]
        Fetch(Box<super::Fetch>),
        #[prost(message, tag = "7")]
        GetTime(super::Unit),
        #[prost(message, tag = "8")]
        LookupByKey(Box<super::RetrieveByKey>),
        #[prost(message, tag = "9")]
        FetchByKey(Box<super::RetrieveByKey>),
        #[prost(message, tag = "10")]
        EmbedExpr(Box<super::EmbedExpr>),
        #[prost(message, tag = "11")]
        TryCatch(Box<super::TryCatch>),
        #[prost(message, tag = "12")]
        CreateInterface(Box<super::CreateInterface>),
        #[prost(message, tag = "13")]
        ExerciseInterface(Box<super::ExerciseInterface>),
        #[prost(message, tag = "14")]
        FetchInterface(Box<super::FetchInterface>),
        #[prost(message, tag = "15")]
        DynamicExercise(Box<super::DynamicExercise>),
        #[prost(message, tag = "16")]
        SoftFetch(Box<super::SoftFetch>),
        #[prost(message, tag = "17")]
        SoftExercise(Box<super::SoftExercise>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Commit {
    #[prost(message, optional, boxed, tag = "1")]
    pub party: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
    #[prost(message, optional, tag = "3")]
    pub ret_type: Option<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Scenario {
    #[prost(oneof = "scenario::Sum", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub sum: Option<scenario::Sum>,
}

pub mod scenario {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Pure(Box<super::Pure>),
        #[prost(message, tag = "2")]
        Block(Box<super::Block>),
        #[prost(message, tag = "3")]
        Commit(Box<super::Commit>),
        #[prost(message, tag = "4")]
        MustFailAt(Box<super::Commit>),
        #[prost(message, tag = "5")]
        Pass(Box<super::Expr>),
        #[prost(message, tag = "6")]
        GetTime(super::Unit),
        #[prost(message, tag = "7")]
        GetParty(Box<super::Expr>),
        #[prost(message, tag = "8")]
        EmbedExpr(Box<super::EmbedExpr>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Expr {
    #[prost(message, optional, tag = "1")]
    pub location: Option<Location>,
    #[prost(
        oneof = "expr::Sum",
        tags = "2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, \
                24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, \
                44, 45, 46, 47"
    )]
    pub sum: Option<expr::Sum>,
}

pub mod expr {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(string, tag = "2")]
        VarStr(String),
        #[prost(int32, tag = "3")]
        VarInternedStr(i32),
        #[prost(message, tag = "4")]
        Val(super::ValName),
        #[prost(enumeration = "super::BuiltinFunction", tag = "5")]
        Builtin(i32),
        #[prost(enumeration = "super::PrimCon", tag = "6")]
        PrimCon(i32),
        #[prost(message, tag = "7")]
        PrimLit(super::PrimLit),
        #[prost(message, tag = "8")]
        RecCon(super::RecCon),
        #[prost(message, tag = "9")]
        RecProj(Box<super::RecProj>),
        #[prost(message, tag = "10")]
        RecUpd(Box<super::RecUpd>),
        #[prost(message, tag = "11")]
        VariantCon(Box<super::VariantCon>),
        #[prost(message, tag = "12")]
        EnumCon(super::EnumCon),
        #[prost(message, tag = "13")]
        StructCon(super::StructCon),
        #[prost(message, tag = "14")]
        StructProj(Box<super::StructProj>),
        #[prost(message, tag = "15")]
        StructUpd(Box<super::StructUpd>),
        #[prost(message, tag = "16")]
        App(Box<super::App>),
        #[prost(message, tag = "17")]
        TyApp(Box<super::TyApp>),
        #[prost(message, tag = "18")]
        Abs(Box<super::Abs>),
        #[prost(message, tag = "19")]
        TyAbs(Box<super::TyAbs>),
        #[prost(message, tag = "20")]
        Case(Box<super::Case>),
        #[prost(message, tag = "21")]
        Let(Box<super::Block>),
        #[prost(message, tag = "22")]
        Nil(super::Nil),
        #[prost(message, tag = "23")]
        Cons(Box<super::Cons>),
        #[prost(message, tag = "24")]
        Update(Box<super::Update>),
        #[prost(message, tag = "25")]
        Scenario(Box<super::Scenario>),
        #[prost(message, tag = "26")]
        OptionalNone(super::OptionalNone),
        #[prost(message, tag = "27")]
        OptionalSome(Box<super::OptionalSome>),
        #[prost(message, tag = "28")]
        ToAny(Box<super::ToAny>),
        #[prost(message, tag = "29")]
        FromAny(Box<super::FromAny>),
        #[prost(message, tag = "30")]
        TypeRep(super::Type),
        #[prost(message, tag = "31")]
        ToAnyException(Box<super::ToAnyException>),
        #[prost(message, tag = "32")]
        FromAnyException(Box<super::FromAnyException>),
        #[prost(message, tag = "33")]
        Throw(Box<super::Throw>),
        #[prost(message, tag = "34")]
        ToInterface(Box<super::ToInterface>),
        #[prost(message, tag = "35")]
        FromInterface(Box<super::FromInterface>),
        #[prost(message, tag = "36")]
        UnsafeFromInterface(Box<super::UnsafeFromInterface>),
        #[prost(message, tag = "37")]
        CallInterface(Box<super::CallInterface>),
        #[prost(message, tag = "38")]
        ViewInterface(Box<super::ViewInterface>),
        #[prost(message, tag = "39")]
        SignatoryInterface(Box<super::SignatoryInterface>),
        #[prost(message, tag = "40")]
        ObserverInterface(Box<super::ObserverInterface>),
        #[prost(message, tag = "41")]
        InterfaceTemplateTypeRep(Box<super::InterfaceTemplateTypeRep>),
        #[prost(message, tag = "42")]
        ToRequiredInterface(Box<super::ToRequiredInterface>),
        #[prost(message, tag = "43")]
        FromRequiredInterface(Box<super::FromRequiredInterface>),
        #[prost(message, tag = "44")]
        UnsafeFromRequiredInterface(Box<super::UnsafeFromRequiredInterface>),
        #[prost(message, tag = "45")]
        ChoiceController(Box<super::ChoiceController>),
        #[prost(message, tag = "46")]
        ChoiceObserver(Box<super::ChoiceObserver>),
        #[prost(message, tag = "47")]
        Experimental(super::Experimental),
    }
}

// --- Template keys ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExpr {
    #[prost(oneof = "key_expr::Sum", tags = "1, 2")]
    pub sum: Option<key_expr::Sum>,
}

pub mod key_expr {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Projections(super::KeyExprProjections),
        #[prost(message, tag = "2")]
        Record(super::KeyExprRecord),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExprProjection {
    #[prost(oneof = "key_expr_projection::Field", tags = "2, 3")]
    pub field: Option<key_expr_projection::Field>,
}

pub mod key_expr_projection {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "2")]
        FieldStr(String),
        #[prost(int32, tag = "3")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExprProjections {
    #[prost(message, repeated, tag = "1")]
    pub projections: Vec<KeyExprProjection>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExprRecordField {
    #[prost(oneof = "key_expr_record_field::Field", tags = "1, 3")]
    pub field: Option<key_expr_record_field::Field>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<KeyExpr>>,
}

pub mod key_expr_record_field {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Field {
        #[prost(string, tag = "1")]
        FieldStr(String),
        #[prost(int32, tag = "3")]
        FieldInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExprRecord {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<KeyExprRecordField>,
}

// --- Definitions ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefKey {
    #[prost(message, optional, tag = "1")]
    pub r#type: Option<Type>,
    #[prost(oneof = "def_key::KeyExpr", tags = "2, 4")]
    pub key_expr: Option<def_key::KeyExpr>,
    #[prost(message, optional, tag = "3")]
    pub maintainers: Option<Expr>,
}

pub mod def_key {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum KeyExpr {
        #[prost(message, tag = "2")]
        Key(super::KeyExpr),
        #[prost(message, tag = "4")]
        ComplexKey(super::Expr),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TemplateChoice {
    #[prost(oneof = "template_choice::Name", tags = "1, 2")]
    pub name: Option<template_choice::Name>,
    #[prost(bool, tag = "3")]
    pub consuming: bool,
    #[prost(message, optional, tag = "4")]
    pub controllers: Option<Expr>,
    #[prost(message, optional, tag = "5")]
    pub observers: Option<Expr>,
    #[prost(message, optional, tag = "6")]
    pub arg_binder: Option<VarWithType>,
    #[prost(message, optional, tag = "7")]
    pub ret_type: Option<Type>,
    #[prost(message, optional, tag = "8")]
    pub update: Option<Expr>,
    #[prost(message, optional, tag = "9")]
    pub location: Option<Location>,
    #[prost(message, optional, tag = "12")]
    pub authorizers: Option<Expr>,
}

pub mod template_choice {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Name {
        #[prost(string, tag = "1")]
        NameStr(String),
        #[prost(int32, tag = "2")]
        NameInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefTemplate {
    #[prost(oneof = "def_template::Tycon", tags = "1, 2")]
    pub tycon: Option<def_template::Tycon>,
    #[prost(oneof = "def_template::Param", tags = "3, 4")]
    pub param: Option<def_template::Param>,
    #[prost(message, optional, tag = "5")]
    pub precond: Option<Expr>,
    #[prost(message, optional, tag = "6")]
    pub signatories: Option<Expr>,
    #[prost(message, optional, tag = "7")]
    pub observers: Option<Expr>,
    #[prost(message, repeated, tag = "9")]
    pub choices: Vec<TemplateChoice>,
    #[prost(message, optional, tag = "10")]
    pub location: Option<Location>,
    #[prost(message, optional, tag = "11")]
    pub key: Option<DefKey>,
}

pub mod def_template {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Tycon {
        #[prost(message, tag = "1")]
        TyconDname(super::DottedName),
        #[prost(int32, tag = "2")]
        TyconInternedDname(i32),
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Param {
        #[prost(string, tag = "3")]
        ParamStr(String),
        #[prost(int32, tag = "4")]
        ParamInternedStr(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefValueNameWithType {
    #[prost(string, repeated, tag = "1")]
    pub name_dname: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub r#type: Option<Type>,
    #[prost(int32, tag = "3")]
    pub name_interned_dname: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefValue {
    #[prost(message, optional, tag = "1")]
    pub name_with_type: Option<DefValueNameWithType>,
    #[prost(message, optional, tag = "2")]
    pub expr: Option<Expr>,
    #[prost(message, optional, tag = "5")]
    pub location: Option<Location>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Module {
    #[prost(oneof = "module::Name", tags = "1, 2")]
    pub name: Option<module::Name>,
    #[prost(message, repeated, tag = "5")]
    pub values: Vec<DefValue>,
    #[prost(message, repeated, tag = "6")]
    pub templates: Vec<DefTemplate>,
}

pub mod module {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Name {
        #[prost(message, tag = "1")]
        NameDname(super::DottedName),
        #[prost(int32, tag = "2")]
        NameInternedDname(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageMetadata {
    #[prost(int32, tag = "1")]
    pub name_interned_str: i32,
    #[prost(int32, tag = "2")]
    pub version_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Package {
    #[prost(message, repeated, tag = "1")]
    pub modules: Vec<Module>,
    #[prost(string, repeated, tag = "2")]
    pub interned_strings: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub interned_dotted_names: Vec<InternedDottedName>,
    #[prost(message, optional, tag = "4")]
    pub metadata: Option<PackageMetadata>,
    #[prost(message, repeated, tag = "5")]
    pub interned_types: Vec<Type>,
}
