//! Contract-lifecycle summary.
//!
//! A pure tree walk collecting every ledger-update operation under an
//! expression, in source order. Rules use the summaries to reason about
//! what a choice body actually does without re-matching node shapes.

use crate::ir::{Expr, ExprKind};

/// Kind tag of one collected lifecycle operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOpKind {
    Create,
    CreateInterface,
    Exercise,
    ExerciseByKey,
    ExerciseInterface,
    DynamicExercise,
    SoftExercise,
    Fetch,
    SoftFetch,
    FetchInterface,
    LookupByKey,
    FetchByKey,
    LedgerTimeLt,
    GetTime,
}

impl UpdateOpKind {
    /// True for the exercise family (used by the forwarding-choice rule).
    pub fn is_exercise(self) -> bool {
        matches!(
            self,
            UpdateOpKind::Exercise
                | UpdateOpKind::ExerciseByKey
                | UpdateOpKind::ExerciseInterface
                | UpdateOpKind::DynamicExercise
                | UpdateOpKind::SoftExercise
        )
    }
}

/// One lifecycle operation found under an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOp {
    pub kind: UpdateOpKind,
    pub template: Option<String>,
    pub choice: Option<String>,
}

impl UpdateOp {
    fn of(kind: UpdateOpKind) -> Self {
        Self {
            kind,
            template: None,
            choice: None,
        }
    }

    fn with_template(kind: UpdateOpKind, expr: &Expr) -> Self {
        Self {
            kind,
            template: expr.value.as_ref().and_then(|v| v.template()).map(String::from),
            choice: None,
        }
    }

    fn with_template_choice(kind: UpdateOpKind, expr: &Expr) -> Self {
        Self {
            kind,
            template: expr.value.as_ref().and_then(|v| v.template()).map(String::from),
            choice: expr.value.as_ref().and_then(|v| v.choice()).map(String::from),
        }
    }
}

/// Collect every update op under `expr`, in source order.
pub fn collect_update_ops(expr: &Expr) -> Vec<UpdateOp> {
    let mut ops = Vec::new();
    walk(expr, &mut ops);
    ops
}

fn walk(expr: &Expr, ops: &mut Vec<UpdateOp>) {
    match &expr.kind {
        ExprKind::UpdateCreate => ops.push(UpdateOp::with_template(UpdateOpKind::Create, expr)),
        ExprKind::UpdateCreateInterface => {
            ops.push(UpdateOp::with_template(UpdateOpKind::CreateInterface, expr))
        }
        ExprKind::UpdateExercise => {
            ops.push(UpdateOp::with_template_choice(UpdateOpKind::Exercise, expr))
        }
        ExprKind::UpdateExerciseByKey => ops.push(UpdateOp::with_template_choice(
            UpdateOpKind::ExerciseByKey,
            expr,
        )),
        ExprKind::UpdateExerciseInterface => ops.push(UpdateOp::with_template_choice(
            UpdateOpKind::ExerciseInterface,
            expr,
        )),
        ExprKind::UpdateDynamicExercise => ops.push(UpdateOp::with_template_choice(
            UpdateOpKind::DynamicExercise,
            expr,
        )),
        ExprKind::UpdateSoftExercise => ops.push(UpdateOp::with_template_choice(
            UpdateOpKind::SoftExercise,
            expr,
        )),
        ExprKind::UpdateFetch => ops.push(UpdateOp::with_template(UpdateOpKind::Fetch, expr)),
        ExprKind::UpdateSoftFetch => {
            ops.push(UpdateOp::with_template(UpdateOpKind::SoftFetch, expr))
        }
        ExprKind::UpdateFetchInterface => {
            ops.push(UpdateOp::with_template(UpdateOpKind::FetchInterface, expr))
        }
        ExprKind::UpdateLookupByKey => {
            ops.push(UpdateOp::with_template(UpdateOpKind::LookupByKey, expr))
        }
        ExprKind::UpdateFetchByKey => {
            ops.push(UpdateOp::with_template(UpdateOpKind::FetchByKey, expr))
        }
        ExprKind::UpdateLedgerTimeLt => ops.push(UpdateOp::of(UpdateOpKind::LedgerTimeLt)),
        ExprKind::UpdateGetTime => ops.push(UpdateOp::of(UpdateOpKind::GetTime)),
        _ => {}
    }
    for child in &expr.children {
        walk(child, ops);
    }
}
