//! Determinism rules (DAML-DET-001).

use crate::analysis::{collect_update_ops, UpdateOpKind};
use crate::ir::{Choice, Expr, ExprKind, Template};
use crate::model::{Confidence, Evidence, Severity};
use crate::rules::{finding_from_meta, location_from, Ctx, Emit, Rule, RuleMeta};

fn contains_get_time(expr: &Expr) -> bool {
    if collect_update_ops(expr)
        .iter()
        .any(|op| op.kind == UpdateOpKind::GetTime)
    {
        return true;
    }
    if expr.kind == ExprKind::Builtin
        && expr.value.as_ref().and_then(|v| v.as_name()) == Some("getTime")
    {
        return true;
    }
    expr.children.iter().any(contains_get_time)
}

/// DAML-DET-001: ledger time referenced in authorization or key logic.
pub struct TimeInAuthLogic;

static TIME_IN_AUTH_META: RuleMeta = RuleMeta {
    id: "DAML-DET-001",
    title: "Ledger time used in authorization/key logic",
    description: "Ledger time is referenced in authorization or key logic.",
    severity: Severity::Low,
    confidence: Confidence::Low,
    category: "determinism",
    rationale: "Time-dependent auth or keys can be brittle and replay-sensitive.",
    tags: &["determinism"],
};

impl TimeInAuthLogic {
    fn check(&self, ctx: &Ctx, owner: &str, expr: &Expr, emit: Emit) {
        if !contains_get_time(expr) {
            return;
        }
        let location = location_from(Some(expr), ctx, &format!("{} expression", owner));
        let finding = finding_from_meta(
            self.meta(),
            &format!("Ledger time referenced in {} logic.", owner),
            location,
        )
        .with_evidence(Evidence::new(
            "expr",
            &format!("{} expression", owner),
            expr.lf_ref.clone(),
        ))
        .with_metadata("owner", owner)
        .with_metadata("template", ctx.template_name.as_deref().unwrap_or(""));
        emit(finding);
    }
}

impl Rule for TimeInAuthLogic {
    fn meta(&self) -> &RuleMeta {
        &TIME_IN_AUTH_META
    }

    fn visit_template(&self, ctx: &Ctx, template: &Template, emit: Emit) {
        self.check(ctx, "template signatories", &template.signatories, emit);
        self.check(ctx, "template observers", &template.observers, emit);
        if let Some(key) = &template.key {
            self.check(ctx, "key body", &key.body, emit);
            self.check(ctx, "key maintainers", &key.maintainers, emit);
        }
    }

    fn visit_choice(&self, ctx: &Ctx, _template: &Template, choice: &Choice, emit: Emit) {
        self.check(ctx, "choice controllers", &choice.controllers, emit);
        if let Some(observers) = &choice.observers {
            self.check(ctx, "choice observers", observers, emit);
        }
    }
}
