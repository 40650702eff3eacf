//! Privacy rules (DAML-PRIV-001).

use crate::ir::{Choice, Expr, ExprKind, Template};
use crate::model::{Confidence, Evidence, Severity};
use crate::rules::{finding_from_meta, location_from, Ctx, Emit, Rule, RuleMeta};

fn is_direct_party_list_var(expr: &Expr) -> bool {
    expr.kind == ExprKind::Var && expr.typ.as_ref().is_some_and(|t| t.is_party_list())
}

/// DAML-PRIV-001: observers taken verbatim from a `[Party]`-typed variable.
pub struct OverbroadObservers;

static OVERBROAD_OBSERVERS_META: RuleMeta = RuleMeta {
    id: "DAML-PRIV-001",
    title: "Over-broad observers",
    description: "Observers derived directly from a party list variable may be too permissive.",
    severity: Severity::Medium,
    confidence: Confidence::Low,
    category: "privacy",
    rationale: "Unfiltered party lists in observers can cause unintended divulgence.",
    tags: &["privacy", "divulgence"],
};

impl Rule for OverbroadObservers {
    fn meta(&self) -> &RuleMeta {
        &OVERBROAD_OBSERVERS_META
    }

    fn visit_template(&self, ctx: &Ctx, template: &Template, emit: Emit) {
        if is_direct_party_list_var(&template.observers) {
            let location = location_from(
                Some(&template.observers),
                ctx,
                &format!("Template {}", template.name),
            );
            let finding = finding_from_meta(
                self.meta(),
                "Template observers derived directly from a party list variable.",
                location,
            )
            .with_evidence(Evidence::new(
                "template",
                "observers expression",
                template.observers.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name);
            emit(finding);
        }
    }

    fn visit_choice(&self, ctx: &Ctx, template: &Template, choice: &Choice, emit: Emit) {
        let Some(observers) = &choice.observers else {
            return;
        };
        if is_direct_party_list_var(observers) {
            let location =
                location_from(Some(observers), ctx, &format!("Choice {}", choice.name));
            let finding = finding_from_meta(
                self.meta(),
                "Choice observers derived directly from a party list variable.",
                location,
            )
            .with_evidence(Evidence::new(
                "choice",
                "observers expression",
                observers.lf_ref.clone(),
            ))
            .with_metadata("template", &template.name)
            .with_metadata("choice", &choice.name);
            emit(finding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run;
    use crate::ir::{ExprValue, Module, Package, Program, Type};

    fn party_list_var(name: &str) -> Expr {
        let mut var = Expr::new(ExprKind::Var).with_value(ExprValue::Name(name.to_string()));
        var.typ = Some(Type::list_of(Type::con("Party")));
        var
    }

    fn template(observers: Expr) -> Template {
        Template {
            name: "Main.T".to_string(),
            params: vec!["this".to_string()],
            signatories: Expr::new(ExprKind::List),
            observers,
            precond: None,
            key: None,
            choices: vec![],
            location: None,
            lf_ref: None,
        }
    }

    fn program(t: Template) -> Program {
        Program {
            packages: vec![Package {
                package_id: "pkg".to_string(),
                name: "demo".to_string(),
                version: "0".to_string(),
                lf_major: 1,
                modules: vec![Module {
                    name: "Main".to_string(),
                    templates: vec![t],
                    values: vec![],
                    location: None,
                    lf_ref: None,
                }],
                lf_ref: None,
            }],
        }
    }

    #[test]
    fn test_template_observer_party_list_var_fires() {
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(OverbroadObservers)];
        let findings = run(&rules, &program(template(party_list_var("everyone"))));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "DAML-PRIV-001");
    }

    #[test]
    fn test_untyped_var_does_not_fire() {
        let var = Expr::new(ExprKind::Var).with_value(ExprValue::Name("everyone".to_string()));
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(OverbroadObservers)];
        assert!(run(&rules, &program(template(var))).is_empty());
    }

    #[test]
    fn test_single_party_var_does_not_fire() {
        let mut var = Expr::new(ExprKind::Var).with_value(ExprValue::Name("owner".to_string()));
        var.typ = Some(Type::con("Party"));
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(OverbroadObservers)];
        assert!(run(&rules, &program(template(var))).is_empty());
    }

    #[test]
    fn test_choice_observers_checked_too() {
        let mut t = template(Expr::new(ExprKind::List));
        t.choices.push(Choice {
            name: "Do".to_string(),
            consuming: true,
            controllers: Expr::new(ExprKind::List),
            observers: Some(party_list_var("audience")),
            authorizers: None,
            return_type: None,
            update: Expr::new(ExprKind::UpdatePure),
            location: None,
            lf_ref: None,
        });
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(OverbroadObservers)];
        let findings = run(&rules, &program(t));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].metadata["choice"], "Do");
    }
}
