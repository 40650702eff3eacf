//! Rule framework.
//!
//! A rule implements [`Rule`] with any subset of the five visit hooks and
//! emits findings through the sink passed to each hook. Hooks are total
//! functions: there is no failure channel, and rules must not panic.

pub mod auth;
pub mod determinism;
pub mod key;
pub mod lifecycle;
pub mod privacy;
pub mod registry;

use crate::ir::{Choice, Expr, Module, Package, Template};
use crate::model::{Confidence, Finding, Severity};

/// Static metadata describing a rule, used by reports and the registry.
#[derive(Clone, Debug)]
pub struct RuleMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub confidence: Confidence,
    pub category: &'static str,
    pub rationale: &'static str,
    pub tags: &'static [&'static str],
}

/// Which role roots the expression currently being visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprOwner {
    TemplateSignatories,
    TemplateObservers,
    TemplateKeyBody,
    TemplateKeyMaintainers,
    TemplatePrecond,
    ChoiceControllers,
    ChoiceObservers,
    ChoiceAuthorizers,
    ChoiceUpdate,
    ValueBody,
}

impl ExprOwner {
    pub fn as_str(self) -> &'static str {
        match self {
            ExprOwner::TemplateSignatories => "template_signatories",
            ExprOwner::TemplateObservers => "template_observers",
            ExprOwner::TemplateKeyBody => "template_key_body",
            ExprOwner::TemplateKeyMaintainers => "template_key_maintainers",
            ExprOwner::TemplatePrecond => "template_precond",
            ExprOwner::ChoiceControllers => "choice_controllers",
            ExprOwner::ChoiceObservers => "choice_observers",
            ExprOwner::ChoiceAuthorizers => "choice_authorizers",
            ExprOwner::ChoiceUpdate => "choice_update",
            ExprOwner::ValueBody => "value_body",
        }
    }
}

/// Immutable visiting context. `derive` produces an updated copy; the
/// original is never touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ctx {
    pub package_id: String,
    pub module_name: String,
    pub template_name: Option<String>,
    pub choice_name: Option<String>,
    pub path: Vec<String>,
}

impl Ctx {
    pub fn new(package_id: &str, module_name: &str) -> Self {
        Self {
            package_id: package_id.to_string(),
            module_name: module_name.to_string(),
            template_name: None,
            choice_name: None,
            path: Vec::new(),
        }
    }

    pub fn derive(
        &self,
        template_name: Option<&str>,
        choice_name: Option<&str>,
        path_append: Option<&str>,
    ) -> Ctx {
        let mut next = self.clone();
        if let Some(t) = template_name {
            next.template_name = Some(t.to_string());
        }
        if let Some(c) = choice_name {
            next.choice_name = Some(c.to_string());
        }
        if let Some(p) = path_append {
            next.path.push(p.to_string());
        }
        next
    }
}

/// Finding sink handed to every hook.
pub type Emit<'a> = &'a mut dyn FnMut(Finding);

/// A scanner rule. Default hook implementations do nothing, so a rule only
/// overrides the granularity it cares about.
pub trait Rule {
    fn meta(&self) -> &RuleMeta;

    fn visit_package(&self, _ctx: &Ctx, _pkg: &Package, _emit: Emit) {}

    fn visit_module(&self, _ctx: &Ctx, _module: &Module, _emit: Emit) {}

    fn visit_template(&self, _ctx: &Ctx, _template: &Template, _emit: Emit) {}

    fn visit_choice(&self, _ctx: &Ctx, _template: &Template, _choice: &Choice, _emit: Emit) {}

    fn visit_expr(&self, _ctx: &Ctx, _owner: ExprOwner, _expr: &Expr, _emit: Emit) {}
}

/// Shared helper: the finding location for an expression, falling back to
/// the context module and a role label when the expression is unlocated.
pub(crate) fn location_from(
    expr: Option<&Expr>,
    ctx: &Ctx,
    default_definition: &str,
) -> crate::ir::Location {
    if let Some(loc) = expr.and_then(|e| e.location.clone()) {
        return loc;
    }
    let module = if ctx.module_name.is_empty() {
        "<unknown>"
    } else {
        ctx.module_name.as_str()
    };
    crate::ir::Location::new(module, default_definition)
}

/// Shared helper: build a finding from a rule's metadata.
pub(crate) fn finding_from_meta(
    meta: &RuleMeta,
    message: &str,
    location: crate::ir::Location,
) -> Finding {
    Finding::new(
        meta.id,
        meta.title,
        meta.severity,
        meta.confidence,
        meta.category,
        message,
        location,
    )
}
