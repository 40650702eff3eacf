//! Language-agnostic intermediate representation.
//!
//! Both wire dialects lower into this single IR:
//! `Program → Package → Module → (Template, ValueDef)`, with every
//! expression a uniform [`Expr`] node tagged by [`ExprKind`]. The lowering
//! stage is the only producer; everything downstream (analyses, rules,
//! reports) reads the IR and never mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A source span, 1-indexed (the wire format is 0-indexed; lowering shifts).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub file: Option<String>,
    pub start_line: Option<u32>,
    pub start_col: Option<u32>,
    pub end_line: Option<u32>,
    pub end_col: Option<u32>,
}

/// Where in the scanned package something lives: module, definition label,
/// and an optional source span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub module: String,
    pub definition: String,
    pub span: Option<SourceSpan>,
}

impl Location {
    pub fn new(module: &str, definition: &str) -> Self {
        Self {
            module: module.to_string(),
            definition: definition.to_string(),
            span: None,
        }
    }
}

/// A lowered type. Only the shape rules care about survives lowering:
/// constructors, variables, synonyms, lists, optionals and a handful of
/// structural markers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Type {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub args: Vec<Type>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TypeKind {
    Con,
    Var,
    Syn,
    List,
    Optional,
    Struct,
    Forall,
    App,
    Nat,
    #[default]
    Unknown,
}

impl Type {
    pub fn con(name: &str) -> Self {
        Type {
            kind: TypeKind::Con,
            name: Some(name.to_string()),
            args: Vec::new(),
        }
    }

    pub fn list_of(elem: Type) -> Self {
        Type {
            kind: TypeKind::List,
            name: None,
            args: vec![elem],
        }
    }

    pub fn optional_of(elem: Type) -> Self {
        Type {
            kind: TypeKind::Optional,
            name: None,
            args: vec![elem],
        }
    }

    pub fn unknown() -> Self {
        Type::default()
    }

    /// `Party` is semantically distinguished: the over-broad-observer rule
    /// keys off `list(Party)`-typed variables.
    pub fn is_party(&self) -> bool {
        self.kind == TypeKind::Con && self.name.as_deref() == Some("Party")
    }

    pub fn is_party_list(&self) -> bool {
        self.kind == TypeKind::List && self.args.len() == 1 && self.args[0].is_party()
    }
}

/// Closed vocabulary of expression tags.
///
/// Analyses and rules match on these, so the spelling returned by
/// [`ExprKind::as_str`] is part of the crate contract. Wire cases without a
/// counterpart here are preserved as [`ExprKind::Opaque`] (`expr.<case>`,
/// `update.<case>`, …) and never crash the walker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    // Literals
    Party,
    Text,
    Decimal,
    Numeric,
    Int64,
    Date,
    Timestamp,
    RoundingMode,
    FailureCategory,
    // Atoms
    PrimCon,
    Builtin,
    Var,
    ValRef,
    // Data
    Record,
    RecordProj,
    RecordUpd,
    Variant,
    Enum,
    Struct,
    StructProj,
    StructUpd,
    // Core calculus
    App,
    TyApp,
    Lam,
    TyAbs,
    Case,
    Let,
    Binding,
    List,
    Cons,
    Optional,
    // Any / exceptions
    ToAny,
    FromAny,
    TypeRep,
    Throw,
    ToAnyException,
    FromAnyException,
    // Interface polymorphism
    ToInterface,
    FromInterface,
    UnsafeFromInterface,
    CallInterface,
    ViewInterface,
    SignatoryInterface,
    ObserverInterface,
    InterfaceTemplateTypeRep,
    ToRequiredInterface,
    FromRequiredInterface,
    UnsafeFromRequiredInterface,
    ChoiceController,
    ChoiceObserver,
    Experimental,
    // Template keys
    KeyProjections,
    KeyRecord,
    KeyUnknown,
    Field,
    // Ledger updates
    UpdatePure,
    UpdateBlock,
    UpdateCreate,
    UpdateCreateInterface,
    UpdateExercise,
    UpdateExerciseByKey,
    UpdateExerciseInterface,
    UpdateDynamicExercise,
    UpdateSoftExercise,
    UpdateFetch,
    UpdateSoftFetch,
    UpdateFetchInterface,
    UpdateLookupByKey,
    UpdateFetchByKey,
    UpdateEmbedExpr,
    UpdateTryCatch,
    UpdateGetTime,
    UpdateLedgerTimeLt,
    // Scenarios (dialect 1 only)
    ScenarioPure,
    ScenarioBlock,
    ScenarioCommit,
    ScenarioMustFailAt,
    ScenarioPass,
    ScenarioGetTime,
    ScenarioGetParty,
    ScenarioEmbedExpr,
    /// Escape hatch for wire cases outside the vocabulary, keeping the
    /// original oneof name (`expr.unknown`, `update.<case>`, `lit.<case>`).
    Opaque(String),
}

impl ExprKind {
    pub fn as_str(&self) -> &str {
        match self {
            ExprKind::Party => "party",
            ExprKind::Text => "text",
            ExprKind::Decimal => "decimal",
            ExprKind::Numeric => "numeric",
            ExprKind::Int64 => "int64",
            ExprKind::Date => "date",
            ExprKind::Timestamp => "timestamp",
            ExprKind::RoundingMode => "rounding_mode",
            ExprKind::FailureCategory => "failure_category",
            ExprKind::PrimCon => "prim_con",
            ExprKind::Builtin => "builtin",
            ExprKind::Var => "var",
            ExprKind::ValRef => "val_ref",
            ExprKind::Record => "record",
            ExprKind::RecordProj => "record_proj",
            ExprKind::RecordUpd => "record_upd",
            ExprKind::Variant => "variant",
            ExprKind::Enum => "enum",
            ExprKind::Struct => "struct",
            ExprKind::StructProj => "struct_proj",
            ExprKind::StructUpd => "struct_upd",
            ExprKind::App => "app",
            ExprKind::TyApp => "ty_app",
            ExprKind::Lam => "lam",
            ExprKind::TyAbs => "ty_abs",
            ExprKind::Case => "case",
            ExprKind::Let => "let",
            ExprKind::Binding => "binding",
            ExprKind::List => "list",
            ExprKind::Cons => "cons",
            ExprKind::Optional => "optional",
            ExprKind::ToAny => "to_any",
            ExprKind::FromAny => "from_any",
            ExprKind::TypeRep => "type_rep",
            ExprKind::Throw => "throw",
            ExprKind::ToAnyException => "to_any_exception",
            ExprKind::FromAnyException => "from_any_exception",
            ExprKind::ToInterface => "to_interface",
            ExprKind::FromInterface => "from_interface",
            ExprKind::UnsafeFromInterface => "unsafe_from_interface",
            ExprKind::CallInterface => "call_interface",
            ExprKind::ViewInterface => "view_interface",
            ExprKind::SignatoryInterface => "signatory_interface",
            ExprKind::ObserverInterface => "observer_interface",
            ExprKind::InterfaceTemplateTypeRep => "interface_template_type_rep",
            ExprKind::ToRequiredInterface => "to_required_interface",
            ExprKind::FromRequiredInterface => "from_required_interface",
            ExprKind::UnsafeFromRequiredInterface => "unsafe_from_required_interface",
            ExprKind::ChoiceController => "choice_controller",
            ExprKind::ChoiceObserver => "choice_observer",
            ExprKind::Experimental => "experimental",
            ExprKind::KeyProjections => "key.projections",
            ExprKind::KeyRecord => "key.record",
            ExprKind::KeyUnknown => "key.unknown",
            ExprKind::Field => "field",
            ExprKind::UpdatePure => "update.pure",
            ExprKind::UpdateBlock => "update.block",
            ExprKind::UpdateCreate => "update.create",
            ExprKind::UpdateCreateInterface => "update.create_interface",
            ExprKind::UpdateExercise => "update.exercise",
            ExprKind::UpdateExerciseByKey => "update.exercise_by_key",
            ExprKind::UpdateExerciseInterface => "update.exercise_interface",
            ExprKind::UpdateDynamicExercise => "update.dynamic_exercise",
            ExprKind::UpdateSoftExercise => "update.soft_exercise",
            ExprKind::UpdateFetch => "update.fetch",
            ExprKind::UpdateSoftFetch => "update.soft_fetch",
            ExprKind::UpdateFetchInterface => "update.fetch_interface",
            ExprKind::UpdateLookupByKey => "update.lookup_by_key",
            ExprKind::UpdateFetchByKey => "update.fetch_by_key",
            ExprKind::UpdateEmbedExpr => "update.embed_expr",
            ExprKind::UpdateTryCatch => "update.try_catch",
            ExprKind::UpdateGetTime => "update.get_time",
            ExprKind::UpdateLedgerTimeLt => "update.ledger_time_lt",
            ExprKind::ScenarioPure => "scenario.pure",
            ExprKind::ScenarioBlock => "scenario.block",
            ExprKind::ScenarioCommit => "scenario.commit",
            ExprKind::ScenarioMustFailAt => "scenario.mustFailAt",
            ExprKind::ScenarioPass => "scenario.pass",
            ExprKind::ScenarioGetTime => "scenario.get_time",
            ExprKind::ScenarioGetParty => "scenario.get_party",
            ExprKind::ScenarioEmbedExpr => "scenario.embed_expr",
            ExprKind::Opaque(s) => s,
        }
    }

    /// True for ledger-update nodes, including opaque `update.*` escapes.
    pub fn is_update(&self) -> bool {
        self.as_str().starts_with("update.")
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One alternative pattern of a `case` expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CasePattern {
    Default,
    Variant {
        ty: String,
        variant: String,
        binder: Option<String>,
    },
    PrimCon(String),
    Nil,
    Cons {
        head: Option<String>,
        tail: Option<String>,
    },
    OptionalNone,
    OptionalSome { binder: Option<String> },
    Enum { ty: String, constructor: String },
    Other(String),
}

/// Variant-specific payload of an [`Expr`] node.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprValue {
    /// A literal value, field name, variable name, builtin name,
    /// fully-qualified value/template name, or enum constructor.
    Name(String),
    /// int64 / date / timestamp literal payloads.
    Int(i64),
    /// A single nested type (`to_any`, `type_rep`, embed, …).
    Type(Type),
    /// Type arguments of a `ty_app`.
    Types(Vec<Type>),
    /// Exercise-family payload.
    TemplateChoice { template: String, choice: String },
    /// `to_interface` / `from_interface` / `unsafe_from_interface`.
    InterfacePair { interface: String, template: String },
    /// `to_required_interface` family.
    RequiredPair { required: String, requiring: String },
    /// `call_interface`.
    InterfaceMethod { interface: String, method: String },
    /// `throw`.
    ThrowInfo {
        return_type: Type,
        exception_type: Type,
    },
    /// `update.try_catch`.
    TryCatchInfo { return_type: Type, var: String },
    /// `experimental`.
    ExperimentalInfo { name: String, typ: Type },
    /// `case` alternative patterns, in alternative order.
    CasePatterns(Vec<CasePattern>),
}

impl ExprValue {
    /// The plain-name payload, if this value carries one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            ExprValue::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Template name for lifecycle summaries: plain names (create/fetch)
    /// and the template half of exercise payloads.
    pub fn template(&self) -> Option<&str> {
        match self {
            ExprValue::Name(s) => Some(s),
            ExprValue::TemplateChoice { template, .. } => Some(template),
            _ => None,
        }
    }

    /// Choice name of an exercise-family payload.
    pub fn choice(&self) -> Option<&str> {
        match self {
            ExprValue::TemplateChoice { choice, .. } => Some(choice),
            _ => None,
        }
    }
}

/// A uniform expression tree node.
///
/// Child order is significant and fixed per kind: `let` is
/// `[binding*, body]`, `case` is `[scrutinee, alt*]`, `app` is
/// `[fun, arg*]`, `cons` is `[head*, tail]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub value: Option<ExprValue>,
    pub children: Vec<Expr>,
    /// Type ascription, attached mainly to `var` and literal nodes.
    pub typ: Option<Type>,
    pub location: Option<Location>,
    /// Opaque stable handle into the source payload, used as finding evidence.
    pub lf_ref: Option<String>,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
            typ: None,
            location: None,
            lf_ref: None,
        }
    }

    pub fn with_value(mut self, value: ExprValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_children(mut self, children: Vec<Expr>) -> Self {
        self.children = children;
        self
    }

    pub fn with_typ(mut self, typ: Type) -> Self {
        self.typ = Some(typ);
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }
}

/// A template key: key type, the expression producing the key, and the
/// expression producing the maintainer party set.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateKey {
    pub typ: Type,
    pub body: Expr,
    pub maintainers: Expr,
    pub location: Option<Location>,
    pub lf_ref: Option<String>,
}

/// A named, controlled operation on a template.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    pub name: String,
    pub consuming: bool,
    pub controllers: Expr,
    pub observers: Option<Expr>,
    pub authorizers: Option<Expr>,
    pub return_type: Option<Type>,
    pub update: Expr,
    pub location: Option<Location>,
    pub lf_ref: Option<String>,
}

/// A contract template with its authorization and lifecycle expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    /// Fully qualified `Module.TyCon` name.
    pub name: String,
    /// Implicit self-parameter names (a single entry today).
    pub params: Vec<String>,
    pub signatories: Expr,
    pub observers: Expr,
    pub precond: Option<Expr>,
    pub key: Option<TemplateKey>,
    pub choices: Vec<Choice>,
    pub location: Option<Location>,
    pub lf_ref: Option<String>,
}

/// A top-level value definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueDef {
    pub name: String,
    pub typ: Option<Type>,
    pub body: Expr,
    pub location: Option<Location>,
    pub lf_ref: Option<String>,
}

/// A module: templates and value definitions in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub name: String,
    pub templates: Vec<Template>,
    pub values: Vec<ValueDef>,
    pub location: Option<Location>,
    pub lf_ref: Option<String>,
}

/// A compiled package, identified by the SHA-256 of its payload bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub package_id: String,
    pub name: String,
    pub version: String,
    /// Wire dialect major version (1 or 2).
    pub lf_major: u32,
    pub modules: Vec<Module>,
    pub lf_ref: Option<String>,
}

/// The whole decoded program: one package per payload blob.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub packages: Vec<Package>,
}
