//! Key rules (DAML-KEY-001).

use crate::analysis::infer_party_set;
use crate::ir::Template;
use crate::model::{Confidence, Evidence, Severity};
use crate::rules::{finding_from_meta, location_from, Ctx, Emit, Rule, RuleMeta};

/// DAML-KEY-001: key maintainers provably outside signatories.
pub struct MaintainerAlignment;

static MAINTAINER_ALIGNMENT_META: RuleMeta = RuleMeta {
    id: "DAML-KEY-001",
    title: "Key maintainers not aligned with signatories",
    description: "Key maintainers are not a subset of template signatories.",
    severity: Severity::Medium,
    confidence: Confidence::Medium,
    category: "key",
    rationale: "Misaligned maintainers can enable unexpected key lookups or disclosure.",
    tags: &["key", "authorization"],
};

impl Rule for MaintainerAlignment {
    fn meta(&self) -> &RuleMeta {
        &MAINTAINER_ALIGNMENT_META
    }

    fn visit_template(&self, ctx: &Ctx, template: &Template, emit: Emit) {
        let Some(key) = &template.key else {
            return;
        };
        let maintainers = infer_party_set(&key.maintainers);
        let signatories = infer_party_set(&template.signatories);
        if maintainers.is_definitely_not_subset_of(&signatories) {
            let location = location_from(
                Some(&key.maintainers),
                ctx,
                &format!("Template {}", template.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Key maintainers are not a subset of signatories.",
                location,
            )
            .with_evidence(Evidence::new(
                "key",
                "maintainers expression",
                key.maintainers.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name);
            emit(finding);
        }
    }
}
