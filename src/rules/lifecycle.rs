//! Lifecycle rules (DAML-LIFE-001/002).

use crate::analysis::{collect_update_ops, UpdateOpKind};
use crate::ir::{Choice, Template};
use crate::model::{Confidence, Evidence, Severity};
use crate::rules::{finding_from_meta, location_from, Ctx, Emit, Rule, RuleMeta};

/// DAML-LIFE-001: a non-consuming choice that creates another instance of
/// its own template.
pub struct SelfReplicatingChoice;

static SELF_REPLICATING_META: RuleMeta = RuleMeta {
    id: "DAML-LIFE-001",
    title: "Nonconsuming choice creates new contract",
    description: "Nonconsuming choices that re-create their own template can duplicate assets.",
    severity: Severity::High,
    confidence: Confidence::Medium,
    category: "lifecycle",
    rationale: "Every exercise leaves the original contract active and mints another copy.",
    tags: &["lifecycle", "asset"],
};

impl Rule for SelfReplicatingChoice {
    fn meta(&self) -> &RuleMeta {
        &SELF_REPLICATING_META
    }

    fn visit_choice(&self, ctx: &Ctx, template: &Template, choice: &Choice, emit: Emit) {
        if choice.consuming {
            return;
        }
        let ops = collect_update_ops(&choice.update);
        let self_create = ops.iter().any(|op| {
            op.kind == UpdateOpKind::Create
                && op.template.as_deref() == Some(template.name.as_str())
        });
        if self_create {
            let location = location_from(
                Some(&choice.update),
                ctx,
                &format!("Choice {}", choice.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Nonconsuming choice creates a new contract of the same template.",
                location,
            )
            .with_evidence(Evidence::new(
                "update",
                "create of same template",
                choice.update.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name)
            .with_metadata("choice", &choice.name);
            emit(finding);
        }
    }
}

/// DAML-LIFE-002: a non-consuming choice that creates contracts of a
/// different template.
pub struct NonconsumingCreate;

static NONCONSUMING_CREATE_META: RuleMeta = RuleMeta {
    id: "DAML-LIFE-002",
    title: "Nonconsuming choice creates other contracts",
    description: "Nonconsuming choices creating contracts of other templates can inflate state.",
    severity: Severity::Medium,
    confidence: Confidence::Medium,
    category: "lifecycle",
    rationale: "Repeated exercises silently accumulate contracts nobody archives.",
    tags: &["lifecycle"],
};

impl Rule for NonconsumingCreate {
    fn meta(&self) -> &RuleMeta {
        &NONCONSUMING_CREATE_META
    }

    fn visit_choice(&self, ctx: &Ctx, template: &Template, choice: &Choice, emit: Emit) {
        if choice.consuming {
            return;
        }
        let ops = collect_update_ops(&choice.update);
        let other_create = ops.iter().any(|op| {
            matches!(op.kind, UpdateOpKind::Create | UpdateOpKind::CreateInterface)
                && op
                    .template
                    .as_deref()
                    .is_some_and(|t| t != template.name)
        });
        if other_create {
            let location = location_from(
                Some(&choice.update),
                ctx,
                &format!("Choice {}", choice.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Nonconsuming choice creates contracts of a different template.",
                location,
            )
            .with_evidence(Evidence::new(
                "update",
                "create of other template",
                choice.update.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name)
            .with_metadata("choice", &choice.name);
            emit(finding);
        }
    }
}
