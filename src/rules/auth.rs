//! Authorization rules (DAML-AUTH-001..004).

use crate::analysis::{collect_update_ops, infer_party_set, PartySet};
use crate::ir::{Choice, Template};
use crate::model::{Confidence, Evidence, Severity};
use crate::rules::{finding_from_meta, location_from, Ctx, Emit, Rule, RuleMeta};

/// The party set a choice's controllers must stay within: signatories,
/// plus key maintainers when the template has a key.
fn allowed_controllers(template: &Template) -> PartySet {
    let signatories = infer_party_set(&template.signatories);
    match &template.key {
        Some(key) => signatories.union(&infer_party_set(&key.maintainers)),
        None => signatories,
    }
}

/// DAML-AUTH-001: controllers provably outside signatories/maintainers.
pub struct ControllerAlignment;

static CONTROLLER_ALIGNMENT_META: RuleMeta = RuleMeta {
    id: "DAML-AUTH-001",
    title: "Controller not aligned with signatories",
    description: "Choice controllers are not a subset of template signatories or key maintainers.",
    severity: Severity::Medium,
    confidence: Confidence::Medium,
    category: "auth",
    rationale: "Controllers who are not signatories/maintainers can exercise choices without authorization.",
    tags: &["authorization"],
};

impl Rule for ControllerAlignment {
    fn meta(&self) -> &RuleMeta {
        &CONTROLLER_ALIGNMENT_META
    }

    fn visit_choice(&self, ctx: &Ctx, template: &Template, choice: &Choice, emit: Emit) {
        let controllers = infer_party_set(&choice.controllers);
        if controllers.is_definitely_not_subset_of(&allowed_controllers(template)) {
            let location = location_from(
                Some(&choice.controllers),
                ctx,
                &format!("Choice {}", choice.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Choice controllers are not a subset of signatories/maintainers.",
                location,
            )
            .with_evidence(Evidence::new(
                "choice",
                "controllers expression",
                choice.controllers.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name)
            .with_metadata("choice", &choice.name);
            emit(finding);
        }
    }
}

/// DAML-AUTH-002: controllers that cannot be statically determined.
pub struct UncontrolledControllers;

static UNCONTROLLED_CONTROLLERS_META: RuleMeta = RuleMeta {
    id: "DAML-AUTH-002",
    title: "Statically unresolvable controllers",
    description: "Choice controllers cannot be resolved to a definite party set.",
    severity: Severity::Medium,
    confidence: Confidence::Low,
    category: "auth",
    rationale: "Controllers computed at runtime evade static authorization review.",
    tags: &["authorization"],
};

impl Rule for UncontrolledControllers {
    fn meta(&self) -> &RuleMeta {
        &UNCONTROLLED_CONTROLLERS_META
    }

    fn visit_choice(&self, ctx: &Ctx, template: &Template, choice: &Choice, emit: Emit) {
        if infer_party_set(&choice.controllers).unknown {
            let location = location_from(
                Some(&choice.controllers),
                ctx,
                &format!("Choice {}", choice.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Choice controllers cannot be resolved to a definite party set.",
                location,
            )
            .with_evidence(Evidence::new(
                "choice",
                "controllers expression",
                choice.controllers.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name)
            .with_metadata("choice", &choice.name);
            emit(finding);
        }
    }
}

/// DAML-AUTH-003: a template with a provably empty signatory set.
pub struct EmptySignatories;

static EMPTY_SIGNATORIES_META: RuleMeta = RuleMeta {
    id: "DAML-AUTH-003",
    title: "Template without signatories",
    description: "Template signatories resolve to a definite empty party set.",
    severity: Severity::High,
    confidence: Confidence::High,
    category: "auth",
    rationale: "A contract without signatories has no accountable party and can be created freely.",
    tags: &["authorization"],
};

impl Rule for EmptySignatories {
    fn meta(&self) -> &RuleMeta {
        &EMPTY_SIGNATORIES_META
    }

    fn visit_template(&self, ctx: &Ctx, template: &Template, emit: Emit) {
        let signatories = infer_party_set(&template.signatories);
        if !signatories.unknown && signatories.known.is_empty() {
            let location = location_from(
                Some(&template.signatories),
                ctx,
                &format!("Template {}", template.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Template signatories resolve to an empty party set.",
                location,
            )
            .with_evidence(Evidence::new(
                "template",
                "signatories expression",
                template.signatories.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name);
            emit(finding);
        }
    }
}

/// DAML-AUTH-004: a non-consuming choice whose whole body is forwarding
/// exercises.
pub struct ForwardingChoice;

static FORWARDING_CHOICE_META: RuleMeta = RuleMeta {
    id: "DAML-AUTH-004",
    title: "Non-consuming forwarding choice",
    description: "A non-consuming choice whose update only exercises other choices.",
    severity: Severity::Medium,
    confidence: Confidence::Medium,
    category: "auth",
    rationale: "Forwarding choices can launder authorization from the forwarder's signatories.",
    tags: &["authorization", "delegation"],
};

impl Rule for ForwardingChoice {
    fn meta(&self) -> &RuleMeta {
        &FORWARDING_CHOICE_META
    }

    fn visit_choice(&self, ctx: &Ctx, template: &Template, choice: &Choice, emit: Emit) {
        if choice.consuming {
            return;
        }
        let ops = collect_update_ops(&choice.update);
        if ops.is_empty() || !ops.iter().all(|op| op.kind.is_exercise()) {
            return;
        }
        let location = location_from(
            Some(&choice.update),
            ctx,
            &format!("Choice {}", choice.name),
        );
        let finding = finding_from_meta(
            self.meta(),
            "Non-consuming choice only forwards exercises to other choices.",
            location,
        )
        .with_evidence(Evidence::new(
            "update",
            "exercise-only update",
            choice.update.lf_ref.clone(),
        ))
        .with_metadata("template", &template.name)
        .with_metadata("choice", &choice.name);
        emit(finding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run;
    use crate::ir::{Expr, ExprKind, ExprValue, Module, Package, Program, Template};

    fn party_list(names: &[&str]) -> Expr {
        Expr::new(ExprKind::List).with_children(
            names
                .iter()
                .map(|n| Expr::new(ExprKind::Party).with_value(ExprValue::Name(n.to_string())))
                .collect(),
        )
    }

    fn choice(name: &str, consuming: bool, controllers: Expr, update: Expr) -> Choice {
        Choice {
            name: name.to_string(),
            consuming,
            controllers,
            observers: None,
            authorizers: None,
            return_type: None,
            update,
            location: None,
            lf_ref: None,
        }
    }

    fn template(name: &str, signatories: Expr, choices: Vec<Choice>) -> Template {
        Template {
            name: name.to_string(),
            params: vec!["this".to_string()],
            signatories,
            observers: Expr::new(ExprKind::List),
            precond: None,
            key: None,
            choices,
            location: None,
            lf_ref: None,
        }
    }

    fn program(templates: Vec<Template>) -> Program {
        Program {
            packages: vec![Package {
                package_id: "pkg".to_string(),
                name: "demo".to_string(),
                version: "0".to_string(),
                lf_major: 1,
                modules: vec![Module {
                    name: "Main".to_string(),
                    templates,
                    values: vec![],
                    location: None,
                    lf_ref: None,
                }],
                lf_ref: None,
            }],
        }
    }

    fn pure_unit() -> Expr {
        Expr::new(ExprKind::UpdatePure).with_children(vec![Expr::new(ExprKind::PrimCon)
            .with_value(ExprValue::Name("CON_UNIT".to_string()))])
    }

    #[test]
    fn test_auth_001_misaligned_controllers() {
        let t = template(
            "Main.TAuth",
            party_list(&["Alice"]),
            vec![choice("Transfer", true, party_list(&["Bob"]), pure_unit())],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ControllerAlignment)];
        let findings = run(&rules, &program(vec![t]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "DAML-AUTH-001");
        assert_eq!(findings[0].metadata["template"], "Main.TAuth");
        assert_eq!(findings[0].metadata["choice"], "Transfer");
    }

    #[test]
    fn test_auth_001_silent_when_aligned_or_unknown() {
        let aligned = template(
            "Main.T",
            party_list(&["Alice"]),
            vec![choice("Do", true, party_list(&["Alice"]), pure_unit())],
        );
        let unknown = template(
            "Main.U",
            party_list(&["Alice"]),
            vec![choice(
                "Do",
                true,
                Expr::new(ExprKind::Var).with_value(ExprValue::Name("arg".to_string())),
                pure_unit(),
            )],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ControllerAlignment)];
        assert!(run(&rules, &program(vec![aligned, unknown])).is_empty());
    }

    #[test]
    fn test_auth_001_empty_controllers_are_a_subset() {
        let t = template(
            "Main.T",
            party_list(&["Alice"]),
            vec![choice("Do", true, party_list(&[]), pure_unit())],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ControllerAlignment)];
        assert!(run(&rules, &program(vec![t])).is_empty());
    }

    #[test]
    fn test_auth_002_unknown_controllers() {
        let t = template(
            "Main.T",
            party_list(&["Alice"]),
            vec![choice(
                "Do",
                true,
                Expr::new(ExprKind::Var).with_value(ExprValue::Name("arg".to_string())),
                pure_unit(),
            )],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(UncontrolledControllers)];
        let findings = run(&rules, &program(vec![t]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "DAML-AUTH-002");
    }

    #[test]
    fn test_auth_003_empty_signatories() {
        let t = template("Main.T", party_list(&[]), vec![]);
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(EmptySignatories)];
        let findings = run(&rules, &program(vec![t]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "DAML-AUTH-003");
        assert_eq!(findings[0].severity, Severity::High);
    }

    #[test]
    fn test_auth_003_unknown_signatories_do_not_fire() {
        let t = template(
            "Main.T",
            Expr::new(ExprKind::Var).with_value(ExprValue::Name("whoever".to_string())),
            vec![],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(EmptySignatories)];
        assert!(run(&rules, &program(vec![t])).is_empty());
    }

    #[test]
    fn test_auth_004_forwarding_choice() {
        let exercise = Expr::new(ExprKind::UpdateExercise).with_value(ExprValue::TemplateChoice {
            template: "Main.Other".to_string(),
            choice: "Go".to_string(),
        });
        let t = template(
            "Main.T",
            party_list(&["Alice"]),
            vec![choice("Forward", false, party_list(&["Alice"]), exercise)],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ForwardingChoice)];
        let findings = run(&rules, &program(vec![t]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "DAML-AUTH-004");
    }

    #[test]
    fn test_auth_004_silent_on_mixed_or_empty_updates() {
        let exercise = Expr::new(ExprKind::UpdateExercise).with_value(ExprValue::TemplateChoice {
            template: "Main.Other".to_string(),
            choice: "Go".to_string(),
        });
        let create =
            Expr::new(ExprKind::UpdateCreate).with_value(ExprValue::Name("Main.X".to_string()));
        let mixed = Expr::new(ExprKind::UpdateBlock).with_children(vec![exercise, create]);
        let t = template(
            "Main.T",
            party_list(&["Alice"]),
            vec![
                choice("Mixed", false, party_list(&["Alice"]), mixed),
                choice("Pure", false, party_list(&["Alice"]), pure_unit()),
                choice(
                    "Consuming",
                    true,
                    party_list(&["Alice"]),
                    Expr::new(ExprKind::UpdateExercise).with_value(ExprValue::TemplateChoice {
                        template: "Main.Other".to_string(),
                        choice: "Go".to_string(),
                    }),
                ),
            ],
        );
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ForwardingChoice)];
        assert!(run(&rules, &program(vec![t])).is_empty());
    }
}
