//! Deterministic IR traversal.
//!
//! Fixed order: package → modules → templates (role expressions, then
//! choices with their role expressions) → values, everything in source
//! order. Expression trees are visited pre-order: the rule hooks fire on a
//! node before its children. Findings therefore come out in a stable order
//! that depends only on the program and the rule list.

use crate::ir::{Expr, Program};
use crate::model::Finding;
use crate::rules::{Ctx, ExprOwner, Rule};

/// Walk the whole program, invoking every rule's hooks.
pub fn walk_program(program: &Program, rules: &[Box<dyn Rule>], emit: &mut dyn FnMut(Finding)) {
    for pkg in &program.packages {
        let pkg_ctx = Ctx::new(&pkg.package_id, "");
        for rule in rules {
            rule.visit_package(&pkg_ctx, pkg, emit);
        }
        for module in &pkg.modules {
            let mod_ctx = Ctx::new(&pkg.package_id, &module.name);
            for rule in rules {
                rule.visit_module(&mod_ctx, module, emit);
            }
            for template in &module.templates {
                let t_ctx = mod_ctx.derive(
                    Some(template.name.as_str()),
                    None,
                    Some(&format!("template:{}", template.name)),
                );
                for rule in rules {
                    rule.visit_template(&t_ctx, template, emit);
                }
                walk_expr(
                    &template.signatories,
                    &t_ctx,
                    ExprOwner::TemplateSignatories,
                    rules,
                    emit,
                );
                walk_expr(
                    &template.observers,
                    &t_ctx,
                    ExprOwner::TemplateObservers,
                    rules,
                    emit,
                );
                if let Some(precond) = &template.precond {
                    walk_expr(precond, &t_ctx, ExprOwner::TemplatePrecond, rules, emit);
                }
                if let Some(key) = &template.key {
                    walk_expr(&key.body, &t_ctx, ExprOwner::TemplateKeyBody, rules, emit);
                    walk_expr(
                        &key.maintainers,
                        &t_ctx,
                        ExprOwner::TemplateKeyMaintainers,
                        rules,
                        emit,
                    );
                }
                for choice in &template.choices {
                    let c_ctx = t_ctx.derive(
                        None,
                        Some(choice.name.as_str()),
                        Some(&format!("choice:{}", choice.name)),
                    );
                    for rule in rules {
                        rule.visit_choice(&c_ctx, template, choice, emit);
                    }
                    walk_expr(
                        &choice.controllers,
                        &c_ctx,
                        ExprOwner::ChoiceControllers,
                        rules,
                        emit,
                    );
                    if let Some(observers) = &choice.observers {
                        walk_expr(observers, &c_ctx, ExprOwner::ChoiceObservers, rules, emit);
                    }
                    if let Some(authorizers) = &choice.authorizers {
                        walk_expr(
                            authorizers,
                            &c_ctx,
                            ExprOwner::ChoiceAuthorizers,
                            rules,
                            emit,
                        );
                    }
                    walk_expr(&choice.update, &c_ctx, ExprOwner::ChoiceUpdate, rules, emit);
                }
            }
            for value in &module.values {
                let v_ctx = mod_ctx.derive(None, None, Some(&format!("value:{}", value.name)));
                walk_expr(&value.body, &v_ctx, ExprOwner::ValueBody, rules, emit);
            }
        }
    }
}

fn walk_expr(
    expr: &Expr,
    ctx: &Ctx,
    owner: ExprOwner,
    rules: &[Box<dyn Rule>],
    emit: &mut dyn FnMut(Finding),
) {
    for rule in rules {
        rule.visit_expr(ctx, owner, expr, emit);
    }
    for child in &expr.children {
        walk_expr(child, ctx, owner, rules, emit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ExprKind, ExprValue, Location, Module, Package, Template};
    use crate::model::{Confidence, Severity};
    use crate::rules::{finding_from_meta, RuleMeta};

    struct RecordingRule;

    static RECORDING_META: RuleMeta = RuleMeta {
        id: "TEST-000",
        title: "recorder",
        description: "records visits",
        severity: Severity::Low,
        confidence: Confidence::Low,
        category: "test",
        rationale: "test only",
        tags: &[],
    };

    impl Rule for RecordingRule {
        fn meta(&self) -> &RuleMeta {
            &RECORDING_META
        }

        fn visit_expr(&self, ctx: &Ctx, owner: ExprOwner, expr: &Expr, emit: Emit) {
            let mut f = finding_from_meta(
                self.meta(),
                expr.kind.as_str(),
                Location::new(&ctx.module_name, "d"),
            );
            f.metadata
                .insert("owner".to_string(), owner.as_str().to_string());
            emit(f);
        }
    }

    use crate::rules::Emit;

    fn one_template_program() -> Program {
        let signatories = Expr::new(ExprKind::List).with_children(vec![
            Expr::new(ExprKind::Party).with_value(ExprValue::Name("Alice".to_string())),
        ]);
        let observers = Expr::new(ExprKind::List);
        let template = Template {
            name: "Main.T".to_string(),
            params: vec!["this".to_string()],
            signatories,
            observers,
            precond: None,
            key: None,
            choices: vec![],
            location: None,
            lf_ref: None,
        };
        Program {
            packages: vec![Package {
                package_id: "pkg".to_string(),
                name: "demo".to_string(),
                version: "1.0.0".to_string(),
                lf_major: 1,
                modules: vec![Module {
                    name: "Main".to_string(),
                    templates: vec![template],
                    values: vec![],
                    location: None,
                    lf_ref: None,
                }],
                lf_ref: None,
            }],
        }
    }

    #[test]
    fn test_preorder_and_owner_tags() {
        let program = one_template_program();
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(RecordingRule)];
        let mut seen = Vec::new();
        walk_program(&program, &rules, &mut |f| {
            seen.push((f.message.clone(), f.metadata["owner"].clone()))
        });

        // Signatories subtree first (parent before child), then observers.
        assert_eq!(
            seen,
            vec![
                ("list".to_string(), "template_signatories".to_string()),
                ("party".to_string(), "template_signatories".to_string()),
                ("list".to_string(), "template_observers".to_string()),
            ]
        );
    }

    #[test]
    fn test_walk_is_deterministic() {
        let program = one_template_program();
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(RecordingRule)];
        let mut first = Vec::new();
        let mut second = Vec::new();
        walk_program(&program, &rules, &mut |f| first.push(f));
        walk_program(&program, &rules, &mut |f| second.push(f));
        assert_eq!(first, second);
    }
}
