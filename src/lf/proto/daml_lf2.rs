//! Dialect-2 package schema.
//!
//! Same concepts as dialect 1 with a stricter encoding: identifiers are
//! always interned (no inline string forms), scenarios are gone, package
//! references gain a third form through the per-package imports table, and
//! kinds/expressions get interning tables of their own.

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Unit {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InternedDottedName {
    #[prost(int32, repeated, tag = "1")]
    pub segments_interned_str: Vec<i32>,
}

/// Reference to a package: self, an interned package id, or an index into
/// the imports table.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelfOrImportedPackageId {
    #[prost(oneof = "self_or_imported_package_id::Sum", tags = "1, 2, 3")]
    pub sum: Option<self_or_imported_package_id::Sum>,
}

pub mod self_or_imported_package_id {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        SelfPackageId(super::Unit),
        #[prost(int32, tag = "2")]
        ImportedPackageIdInternedStr(i32),
        #[prost(int32, tag = "3")]
        PackageImportId(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleId {
    #[prost(message, optional, tag = "1")]
    pub package_id: Option<SelfOrImportedPackageId>,
    #[prost(int32, tag = "2")]
    pub module_name_interned_dname: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeConId {
    #[prost(message, optional, tag = "1")]
    pub module: Option<ModuleId>,
    #[prost(int32, tag = "2")]
    pub name_interned_dname: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueId {
    #[prost(message, optional, tag = "1")]
    pub module: Option<ModuleId>,
    #[prost(int32, tag = "2")]
    pub name_interned_dname: i32,
}

// --- Kinds (interned but not otherwise consumed by the scanner) ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Kind {
    #[prost(oneof = "kind::Sum", tags = "1, 2")]
    pub sum: Option<kind::Sum>,
}

pub mod kind {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Star(super::Unit),
        #[prost(message, tag = "2")]
        Nat(super::Unit),
    }
}

// --- Types ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BuiltinType {
    Unit = 0,
    Bool = 1,
    Int64 = 2,
    Text = 3,
    Timestamp = 4,
    Party = 5,
    List = 6,
    Update = 7,
    Date = 8,
    ContractId = 9,
    Optional = 10,
    Arrow = 11,
    Textmap = 12,
    Numeric = 13,
    Any = 14,
    TypeRep = 15,
    Genmap = 16,
    Bignumeric = 17,
    RoundingMode = 18,
    AnyException = 19,
    FailureCategory = 20,
}

impl BuiltinType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BuiltinType::Unit => "UNIT",
            BuiltinType::Bool => "BOOL",
            BuiltinType::Int64 => "INT64",
            BuiltinType::Text => "TEXT",
            BuiltinType::Timestamp => "TIMESTAMP",
            BuiltinType::Party => "PARTY",
            BuiltinType::List => "LIST",
            BuiltinType::Update => "UPDATE",
            BuiltinType::Date => "DATE",
            BuiltinType::ContractId => "CONTRACT_ID",
            BuiltinType::Optional => "OPTIONAL",
            BuiltinType::Arrow => "ARROW",
            BuiltinType::Textmap => "TEXTMAP",
            BuiltinType::Numeric => "NUMERIC",
            BuiltinType::Any => "ANY",
            BuiltinType::TypeRep => "TYPE_REP",
            BuiltinType::Genmap => "GENMAP",
            BuiltinType::Bignumeric => "BIGNUMERIC",
            BuiltinType::RoundingMode => "ROUNDING_MODE",
            BuiltinType::AnyException => "ANY_EXCEPTION",
            BuiltinType::FailureCategory => "FAILURE_CATEGORY",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Type {
    #[prost(oneof = "ty::Sum", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9")]
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
        Builtin(super::TypeBuiltin),
        #[prost(message, tag = "4")]
        Forall(super::TypeForall),
        #[prost(message, tag = "5")]
        Struct(super::TypeStruct),
        #[prost(int64, tag = "6")]
        Nat(i64),
        #[prost(message, tag = "7")]
        Syn(super::TypeSyn),
        #[prost(message, tag = "8")]
        Tapp(Box<super::TypeApp>),
        #[prost(int32, tag = "9")]
        InternedType(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeVar {
    #[prost(int32, tag = "1")]
    pub var_interned_str: i32,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeConId>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeSyn {
    #[prost(message, optional, tag = "1")]
    pub tysyn: Option<TypeConId>,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeBuiltin {
    #[prost(enumeration = "BuiltinType", tag = "1")]
    pub builtin: i32,
    #[prost(message, repeated, tag = "2")]
    pub args: Vec<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypeApp {
    #[prost(message, optional, boxed, tag = "1")]
    pub lhs: Option<Box<Type>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub rhs: Option<Box<Type>>,
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
pub enum BuiltinCon {
    ConUnit = 0,
    ConFalse = 1,
    ConTrue = 2,
}

impl BuiltinCon {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BuiltinCon::ConUnit => "CON_UNIT",
            BuiltinCon::ConFalse => "CON_FALSE",
            BuiltinCon::ConTrue => "CON_TRUE",
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
    FailWithStatus = 27,
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
            BuiltinFunction::FailWithStatus => "FAIL_WITH_STATUS",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuiltinLit {
    #[prost(oneof = "builtin_lit::Sum", tags = "1, 2, 3, 4, 5, 6, 7, 8")]
    pub sum: Option<builtin_lit::Sum>,
}

pub mod builtin_lit {
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

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum FailureCategory {
        InvalidIndependentOfSystemState = 0,
        InvalidGivenCurrentSystemStateOther = 1,
    }

    impl FailureCategory {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                FailureCategory::InvalidIndependentOfSystemState => {
                    "INVALID_INDEPENDENT_OF_SYSTEM_STATE"
                }
                FailureCategory::InvalidGivenCurrentSystemStateOther => {
                    "INVALID_GIVEN_CURRENT_SYSTEM_STATE_OTHER"
                }
            }
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(int64, tag = "1")]
        Int64(i64),
        /// Microseconds since epoch.
        #[prost(sfixed64, tag = "2")]
        Timestamp(i64),
        /// Days since epoch.
        #[prost(int32, tag = "3")]
        Date(i32),
        #[prost(int32, tag = "4")]
        TextInternedStr(i32),
        #[prost(int32, tag = "5")]
        NumericInternedStr(i32),
        #[prost(int32, tag = "6")]
        PartyInternedStr(i32),
        #[prost(enumeration = "RoundingMode", tag = "7")]
        RoundingMode(i32),
        #[prost(enumeration = "FailureCategory", tag = "8")]
        FailureCategory(i32),
    }
}

// --- Source locations ---

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(message, optional, tag = "1")]
    pub module: Option<ModuleId>,
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
    #[prost(int32, tag = "1")]
    pub var_interned_str: i32,
    #[prost(message, optional, tag = "2")]
    pub r#type: Option<Type>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Binding {
    #[prost(message, optional, tag = "1")]
    pub binder: Option<VarWithType>,
    #[prost(message, optional, tag = "2")]
    pub bound: Option<Expr>,
}

/// Shared by `let` and `update.block`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    #[prost(message, repeated, tag = "1")]
    pub bindings: Vec<Binding>,
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldWithExpr {
    #[prost(int32, tag = "1")]
    pub field_interned_str: i32,
    #[prost(message, optional, tag = "2")]
    pub expr: Option<Expr>,
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
    #[prost(int32, tag = "2")]
    pub field_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub record: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecUpd {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeCon>,
    #[prost(int32, tag = "2")]
    pub field_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub record: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub update: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VariantCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub variant_con_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub variant_arg: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumCon {
    #[prost(message, optional, tag = "1")]
    pub tycon: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub enum_con_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructCon {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<FieldWithExpr>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructProj {
    #[prost(int32, tag = "1")]
    pub field_interned_str: i32,
    #[prost(message, optional, boxed, tag = "2")]
    pub r#struct: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructUpd {
    #[prost(int32, tag = "1")]
    pub field_interned_str: i32,
    #[prost(message, optional, boxed, tag = "2")]
    pub r#struct: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub update: Option<Box<Expr>>,
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
        #[prost(enumeration = "super::BuiltinCon", tag = "3")]
        BuiltinCon(i32),
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
    pub con: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub variant_interned_str: i32,
    #[prost(int32, tag = "3")]
    pub binder_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltCons {
    #[prost(int32, tag = "1")]
    pub var_head_interned_str: i32,
    #[prost(int32, tag = "2")]
    pub var_tail_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltOptionalSome {
    #[prost(int32, tag = "1")]
    pub var_body_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaseAltEnum {
    #[prost(message, optional, tag = "1")]
    pub con: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub constructor_interned_str: i32,
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
    pub value: Option<Box<Expr>>,
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
    pub interface_type: Option<TypeConId>,
    #[prost(message, optional, tag = "2")]
    pub template_type: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "3")]
    pub template_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConId>,
    #[prost(message, optional, tag = "2")]
    pub template_type: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "3")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsafeFromInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConId>,
    #[prost(message, optional, tag = "2")]
    pub template_type: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "3")]
    pub contract_id_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CallInterface {
    #[prost(message, optional, tag = "1")]
    pub interface_type: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub method_interned_name: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ViewInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignatoryInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObserverInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterfaceTemplateTypeRep {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToRequiredInterface {
    #[prost(message, optional, tag = "1")]
    pub required_interface: Option<TypeConId>,
    #[prost(message, optional, tag = "2")]
    pub requiring_interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "3")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FromRequiredInterface {
    #[prost(message, optional, tag = "1")]
    pub required_interface: Option<TypeConId>,
    #[prost(message, optional, tag = "2")]
    pub requiring_interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "3")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsafeFromRequiredInterface {
    #[prost(message, optional, tag = "1")]
    pub required_interface: Option<TypeConId>,
    #[prost(message, optional, tag = "2")]
    pub requiring_interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "3")]
    pub contract_id_expr: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub interface_expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChoiceController {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConId>,
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
    pub template: Option<TypeConId>,
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

// --- Updates ---

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
    pub template: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Exercise {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub choice_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub cid: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub arg: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExerciseByKey {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConId>,
    #[prost(int32, tag = "2")]
    pub choice_interned_str: i32,
    #[prost(message, optional, boxed, tag = "3")]
    pub key: Option<Box<Expr>>,
    #[prost(message, optional, boxed, tag = "4")]
    pub arg: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExerciseInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
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
    pub template: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub cid: Option<Box<Expr>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FetchInterface {
    #[prost(message, optional, tag = "1")]
    pub interface: Option<TypeConId>,
    #[prost(message, optional, boxed, tag = "2")]
    pub cid: Option<Box<Expr>>,
}

/// `lookup_by_key` and `fetch_by_key` carry only the template here; the key
/// itself is supplied by the surrounding expression.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RetrieveByKey {
    #[prost(message, optional, tag = "1")]
    pub template: Option<TypeConId>,
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
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15"
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
        LookupByKey(super::RetrieveByKey),
        #[prost(message, tag = "9")]
        FetchByKey(super::RetrieveByKey),
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
        /// `ledgerTimeLT bound`: true iff ledger time is before `bound`.
        #[prost(message, tag = "15")]
        LedgerTimeLt(Box<super::Expr>),
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
                44, 45, 46"
    )]
    pub sum: Option<expr::Sum>,
}

pub mod expr {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(int32, tag = "2")]
        VarInternedStr(i32),
        #[prost(message, tag = "3")]
        Val(super::ValueId),
        #[prost(enumeration = "super::BuiltinFunction", tag = "4")]
        Builtin(i32),
        #[prost(enumeration = "super::BuiltinCon", tag = "5")]
        BuiltinCon(i32),
        #[prost(message, tag = "6")]
        BuiltinLit(super::BuiltinLit),
        #[prost(message, tag = "7")]
        RecCon(super::RecCon),
        #[prost(message, tag = "8")]
        RecProj(Box<super::RecProj>),
        #[prost(message, tag = "9")]
        RecUpd(Box<super::RecUpd>),
        #[prost(message, tag = "10")]
        VariantCon(Box<super::VariantCon>),
        #[prost(message, tag = "11")]
        EnumCon(super::EnumCon),
        #[prost(message, tag = "12")]
        StructCon(super::StructCon),
        #[prost(message, tag = "13")]
        StructProj(Box<super::StructProj>),
        #[prost(message, tag = "14")]
        StructUpd(Box<super::StructUpd>),
        #[prost(message, tag = "15")]
        App(Box<super::App>),
        #[prost(message, tag = "16")]
        TyApp(Box<super::TyApp>),
        #[prost(message, tag = "17")]
        Abs(Box<super::Abs>),
        #[prost(message, tag = "18")]
        TyAbs(Box<super::TyAbs>),
        #[prost(message, tag = "19")]
        Case(Box<super::Case>),
        #[prost(message, tag = "20")]
        Let(Box<super::Block>),
        #[prost(message, tag = "21")]
        Nil(super::Nil),
        #[prost(message, tag = "22")]
        Cons(Box<super::Cons>),
        #[prost(message, tag = "23")]
        Update(Box<super::Update>),
        #[prost(message, tag = "24")]
        OptionalNone(super::OptionalNone),
        #[prost(message, tag = "25")]
        OptionalSome(Box<super::OptionalSome>),
        #[prost(message, tag = "26")]
        ToAny(Box<super::ToAny>),
        #[prost(message, tag = "27")]
        FromAny(Box<super::FromAny>),
        #[prost(message, tag = "28")]
        TypeRep(super::Type),
        #[prost(message, tag = "29")]
        ToAnyException(Box<super::ToAnyException>),
        #[prost(message, tag = "30")]
        FromAnyException(Box<super::FromAnyException>),
        #[prost(message, tag = "31")]
        Throw(Box<super::Throw>),
        #[prost(message, tag = "32")]
        ToInterface(Box<super::ToInterface>),
        #[prost(message, tag = "33")]
        FromInterface(Box<super::FromInterface>),
        #[prost(message, tag = "34")]
        UnsafeFromInterface(Box<super::UnsafeFromInterface>),
        #[prost(message, tag = "35")]
        CallInterface(Box<super::CallInterface>),
        #[prost(message, tag = "36")]
        ViewInterface(Box<super::ViewInterface>),
        #[prost(message, tag = "37")]
        SignatoryInterface(Box<super::SignatoryInterface>),
        #[prost(message, tag = "38")]
        ObserverInterface(Box<super::ObserverInterface>),
        #[prost(message, tag = "39")]
        InterfaceTemplateTypeRep(Box<super::InterfaceTemplateTypeRep>),
        #[prost(message, tag = "40")]
        ToRequiredInterface(Box<super::ToRequiredInterface>),
        #[prost(message, tag = "41")]
        FromRequiredInterface(Box<super::FromRequiredInterface>),
        #[prost(message, tag = "42")]
        UnsafeFromRequiredInterface(Box<super::UnsafeFromRequiredInterface>),
        #[prost(message, tag = "43")]
        ChoiceController(Box<super::ChoiceController>),
        #[prost(message, tag = "44")]
        ChoiceObserver(Box<super::ChoiceObserver>),
        #[prost(message, tag = "45")]
        Experimental(super::Experimental),
        #[prost(int32, tag = "46")]
        InternedExpr(i32),
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
    #[prost(int32, tag = "2")]
    pub field_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExprProjections {
    #[prost(message, repeated, tag = "1")]
    pub projections: Vec<KeyExprProjection>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyExprRecordField {
    #[prost(int32, tag = "1")]
    pub field_interned_str: i32,
    #[prost(message, optional, boxed, tag = "2")]
    pub expr: Option<Box<KeyExpr>>,
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
    #[prost(int32, tag = "1")]
    pub name_interned_str: i32,
    #[prost(bool, tag = "2")]
    pub consuming: bool,
    #[prost(message, optional, tag = "3")]
    pub controllers: Option<Expr>,
    #[prost(message, optional, tag = "4")]
    pub observers: Option<Expr>,
    #[prost(message, optional, tag = "5")]
    pub arg_binder: Option<VarWithType>,
    #[prost(message, optional, tag = "6")]
    pub ret_type: Option<Type>,
    #[prost(message, optional, tag = "7")]
    pub update: Option<Expr>,
    #[prost(message, optional, tag = "8")]
    pub location: Option<Location>,
    #[prost(message, optional, tag = "9")]
    pub authorizers: Option<Expr>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefTemplate {
    #[prost(int32, tag = "1")]
    pub tycon_interned_dname: i32,
    #[prost(int32, tag = "2")]
    pub param_interned_str: i32,
    #[prost(message, optional, tag = "3")]
    pub precond: Option<Expr>,
    #[prost(message, optional, tag = "4")]
    pub signatories: Option<Expr>,
    #[prost(message, optional, tag = "5")]
    pub observers: Option<Expr>,
    #[prost(message, repeated, tag = "6")]
    pub choices: Vec<TemplateChoice>,
    #[prost(message, optional, tag = "7")]
    pub location: Option<Location>,
    #[prost(message, optional, tag = "8")]
    pub key: Option<DefKey>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefValueNameWithType {
    #[prost(int32, tag = "1")]
    pub name_interned_dname: i32,
    #[prost(message, optional, tag = "2")]
    pub r#type: Option<Type>,
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
    #[prost(int32, tag = "1")]
    pub name_interned_dname: i32,
    #[prost(message, repeated, tag = "5")]
    pub values: Vec<DefValue>,
    #[prost(message, repeated, tag = "6")]
    pub templates: Vec<DefTemplate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageMetadata {
    #[prost(int32, tag = "1")]
    pub name_interned_str: i32,
    #[prost(int32, tag = "2")]
    pub version_interned_str: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageImports {
    #[prost(string, repeated, tag = "1")]
    pub imported_packages: Vec<String>,
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
    #[prost(message, repeated, tag = "6")]
    pub interned_kinds: Vec<Kind>,
    #[prost(message, repeated, tag = "7")]
    pub interned_exprs: Vec<Expr>,
    #[prost(oneof = "package::ImportsSum", tags = "8")]
    pub imports_sum: Option<package::ImportsSum>,
}

pub mod package {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ImportsSum {
        #[prost(message, tag = "8")]
        PackageImports(super::PackageImports),
    }
}
