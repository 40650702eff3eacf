//! Dialect-1 lowering.

use tracing::debug;

use crate::ir::{
    CasePattern, Choice, Expr, ExprKind, ExprValue, Location, Module, SourceSpan, Template,
    TemplateKey, Type, TypeKind, ValueDef,
};
use crate::lf::decoder::LfPackage;
use crate::lf::proto::daml_lf1 as p;
use crate::lf::resolve::Resolver1;
use crate::lower::TypeEnv;

/// Lower all modules of a dialect-1 package.
pub fn lower_modules(pkg: &LfPackage, wire: &p::Package) -> Vec<Module> {
    let lowerer = Lowerer {
        resolver: Resolver1::new(&pkg.package_id, &pkg.interned),
        interned_types: &wire.interned_types,
    };
    wire.modules
        .iter()
        .map(|m| lowerer.lower_module(m))
        .collect()
}

struct Lowerer<'a> {
    resolver: Resolver1<'a>,
    interned_types: &'a [p::Type],
}

impl<'a> Lowerer<'a> {
    fn lower_module(&self, module: &p::Module) -> Module {
        let name = self.module_name(module);
        debug!(module = %name, "lowering dialect-1 module");
        let templates = module
            .templates
            .iter()
            .map(|t| self.lower_template(t, &name))
            .collect();
        let values = module
            .values
            .iter()
            .map(|v| self.lower_value(v, &name))
            .collect();
        Module {
            lf_ref: Some(format!("mod:{}", name)),
            name,
            templates,
            values,
            location: None,
        }
    }

    fn module_name(&self, module: &p::Module) -> String {
        match &module.name {
            Some(p::module::Name::NameDname(dname)) => dname.segments.join("."),
            Some(p::module::Name::NameInternedDname(i)) => self.resolver.base.interned_dname(*i),
            None => "<module>".to_string(),
        }
    }

    fn lower_template(&self, tmpl: &p::DefTemplate, module_name: &str) -> Template {
        let tycon = match &tmpl.tycon {
            Some(p::def_template::Tycon::TyconDname(dname)) => dname.segments.join("."),
            Some(p::def_template::Tycon::TyconInternedDname(i)) => {
                self.resolver.base.interned_dname(*i)
            }
            None => "<template>".to_string(),
        };
        let template_name = format!("{}.{}", module_name, tycon);

        let param_name = match &tmpl.param {
            Some(p::def_template::Param::ParamStr(s)) => s.clone(),
            Some(p::def_template::Param::ParamInternedStr(i)) => {
                self.resolver.base.interned_str(*i)
            }
            None => "<id>".to_string(),
        };
        let mut env = TypeEnv::new();
        env.insert(param_name.clone(), Type::con(&template_name));

        let signatories = self.lower_opt_expr(tmpl.signatories.as_ref(), &env, module_name);
        let observers = self.lower_opt_expr(tmpl.observers.as_ref(), &env, module_name);
        let precond = tmpl
            .precond
            .as_ref()
            .map(|e| self.lower_expr(e, &env, module_name));
        let key = tmpl
            .key
            .as_ref()
            .map(|k| self.lower_key(k, &env, module_name));
        let choices = tmpl
            .choices
            .iter()
            .map(|c| self.lower_choice(c, &env, module_name, &template_name))
            .collect();

        let location = self.lower_location(
            tmpl.location.as_ref(),
            module_name,
            &format!("Template {}", template_name),
        );
        Template {
            lf_ref: Some(format!("tmpl:{}", template_name)),
            name: template_name,
            params: vec![param_name],
            signatories,
            observers,
            precond,
            key,
            choices,
            location: Some(location),
        }
    }

    fn lower_key(&self, key: &p::DefKey, env: &TypeEnv, module_name: &str) -> TemplateKey {
        let typ = self.lower_type(key.r#type.as_ref());
        let body = match &key.key_expr {
            Some(p::def_key::KeyExpr::ComplexKey(e)) => self.lower_expr(e, env, module_name),
            Some(p::def_key::KeyExpr::Key(ke)) => self.lower_keyexpr(ke),
            None => Expr::new(ExprKind::KeyUnknown),
        };
        let maintainers = self.lower_opt_expr(key.maintainers.as_ref(), env, module_name);
        TemplateKey {
            typ,
            body,
            maintainers,
            location: None,
            lf_ref: None,
        }
    }

    fn lower_keyexpr(&self, key_expr: &p::KeyExpr) -> Expr {
        match &key_expr.sum {
            Some(p::key_expr::Sum::Projections(projections)) => {
                let fields = projections
                    .projections
                    .iter()
                    .map(|proj| {
                        let name = match &proj.field {
                            Some(p::key_expr_projection::Field::FieldStr(s)) => s.clone(),
                            Some(p::key_expr_projection::Field::FieldInternedStr(i)) => {
                                self.resolver.base.interned_str(*i)
                            }
                            None => "<id>".to_string(),
                        };
                        Expr::new(ExprKind::Field).with_value(ExprValue::Name(name))
                    })
                    .collect();
                Expr::new(ExprKind::KeyProjections).with_children(fields)
            }
            Some(p::key_expr::Sum::Record(record)) => {
                let fields = record
                    .fields
                    .iter()
                    .map(|fld| {
                        let name = match &fld.field {
                            Some(p::key_expr_record_field::Field::FieldStr(s)) => s.clone(),
                            Some(p::key_expr_record_field::Field::FieldInternedStr(i)) => {
                                self.resolver.base.interned_str(*i)
                            }
                            None => "<id>".to_string(),
                        };
                        let children = match fld.expr.as_deref() {
                            Some(inner) => vec![self.lower_keyexpr(inner)],
                            None => vec![Expr::new(ExprKind::KeyUnknown)],
                        };
                        Expr::new(ExprKind::Field)
                            .with_value(ExprValue::Name(name))
                            .with_children(children)
                    })
                    .collect();
                Expr::new(ExprKind::KeyRecord).with_children(fields)
            }
            None => Expr::new(ExprKind::KeyUnknown),
        }
    }

    fn lower_choice(
        &self,
        choice: &p::TemplateChoice,
        env: &TypeEnv,
        module_name: &str,
        template_name: &str,
    ) -> Choice {
        let name = match &choice.name {
            Some(p::template_choice::Name::NameStr(s)) => s.clone(),
            Some(p::template_choice::Name::NameInternedStr(i)) => {
                self.resolver.base.interned_str(*i)
            }
            None => "<choice>".to_string(),
        };

        let mut env_with_arg = env.clone();
        if let Some(binder) = &choice.arg_binder {
            let arg_name = self.var_name(binder);
            let arg_type = self.lower_type(binder.r#type.as_ref());
            env_with_arg.insert(arg_name, arg_type);
        }

        let controllers =
            self.lower_opt_expr(choice.controllers.as_ref(), &env_with_arg, module_name);
        let observers = choice
            .observers
            .as_ref()
            .map(|e| self.lower_expr(e, &env_with_arg, module_name));
        let authorizers = choice
            .authorizers
            .as_ref()
            .map(|e| self.lower_expr(e, &env_with_arg, module_name));
        let update = self.lower_opt_expr(choice.update.as_ref(), &env_with_arg, module_name);
        let return_type = self.lower_type(choice.ret_type.as_ref());

        let location = self.lower_location(
            choice.location.as_ref(),
            module_name,
            &format!("Choice {}", name),
        );
        Choice {
            lf_ref: Some(format!("choice:{}:{}", template_name, name)),
            name,
            consuming: choice.consuming,
            controllers,
            observers,
            authorizers,
            return_type: Some(return_type),
            update,
            location: Some(location),
        }
    }

    fn lower_value(&self, val: &p::DefValue, module_name: &str) -> ValueDef {
        let (name, typ) = match &val.name_with_type {
            Some(nwt) => {
                let name = if !nwt.name_dname.is_empty() {
                    nwt.name_dname.join(".")
                } else {
                    self.resolver.base.interned_dname(nwt.name_interned_dname)
                };
                (name, self.lower_type(nwt.r#type.as_ref()))
            }
            None => ("<value>".to_string(), Type::unknown()),
        };
        let body = self.lower_opt_expr(val.expr.as_ref(), &TypeEnv::new(), module_name);
        ValueDef {
            lf_ref: Some(format!("val:{}", name)),
            name: format!("{}.{}", module_name, name),
            typ: Some(typ),
            body,
            location: None,
        }
    }

    // --- Locations ---

    fn lower_location(
        &self,
        loc: Option<&p::Location>,
        module_name: &str,
        definition: &str,
    ) -> Location {
        let mut location = Location::new(module_name, definition);
        let Some(loc) = loc else {
            return location;
        };
        if loc.module.is_some() {
            location.module = self.resolver.resolve_module_ref(loc.module.as_ref()).module;
        }
        if let Some(range) = &loc.range {
            location.span = Some(SourceSpan {
                file: None,
                start_line: Some(range.start_line as u32 + 1),
                start_col: Some(range.start_col as u32 + 1),
                end_line: Some(range.end_line as u32 + 1),
                end_col: Some(range.end_col as u32 + 1),
            });
        }
        location
    }

    fn expr_location(&self, expr: &p::Expr, module_name: &str) -> Option<Location> {
        expr.location
            .as_ref()
            .map(|loc| self.lower_location(Some(loc), module_name, "expr"))
    }

    // --- Types ---

    fn lower_type(&self, typ: Option<&p::Type>) -> Type {
        let Some(typ) = typ else {
            return Type::unknown();
        };
        match &typ.sum {
            Some(p::ty::Sum::Interned(idx)) => match usize::try_from(*idx) {
                Ok(i) if i < self.interned_types.len() => {
                    self.lower_type(Some(&self.interned_types[i]))
                }
                _ => Type::unknown(),
            },
            Some(p::ty::Sum::Var(var)) => {
                let name = match &var.var {
                    Some(p::type_var::Var::VarStr(s)) => s.clone(),
                    Some(p::type_var::Var::VarInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                Type {
                    kind: TypeKind::Var,
                    name: Some(name),
                    args: var.args.iter().map(|a| self.lower_type(Some(a))).collect(),
                }
            }
            Some(p::ty::Sum::Con(con)) => {
                let name = self.tycon_fqn(con.tycon.as_ref());
                Type {
                    kind: TypeKind::Con,
                    name: Some(name),
                    args: con.args.iter().map(|a| self.lower_type(Some(a))).collect(),
                }
            }
            Some(p::ty::Sum::Syn(syn)) => {
                let name = self.tycon_fqn(syn.tysyn.as_ref());
                Type {
                    kind: TypeKind::Syn,
                    name: Some(name),
                    args: syn.args.iter().map(|a| self.lower_type(Some(a))).collect(),
                }
            }
            Some(p::ty::Sum::Prim(prim)) => {
                let args: Vec<Type> = prim
                    .args
                    .iter()
                    .map(|a| self.lower_type(Some(a)))
                    .collect();
                match p::PrimType::try_from(prim.prim) {
                    Ok(p::PrimType::List) => Type {
                        kind: TypeKind::List,
                        name: None,
                        args,
                    },
                    Ok(p::PrimType::Optional) => Type {
                        kind: TypeKind::Optional,
                        name: None,
                        args,
                    },
                    Ok(p::PrimType::Party) => Type::con("Party"),
                    Ok(other) => Type {
                        kind: TypeKind::Con,
                        name: Some(other.as_str_name().to_string()),
                        args,
                    },
                    Err(_) => Type {
                        kind: TypeKind::Con,
                        name: Some(format!("<prim:{}>", prim.prim)),
                        args,
                    },
                }
            }
            Some(p::ty::Sum::Struct(_)) => Type {
                kind: TypeKind::Struct,
                name: None,
                args: Vec::new(),
            },
            Some(p::ty::Sum::Forall(_)) => Type {
                kind: TypeKind::Forall,
                name: None,
                args: Vec::new(),
            },
            Some(p::ty::Sum::Nat(n)) => Type {
                kind: TypeKind::Nat,
                name: Some(n.to_string()),
                args: Vec::new(),
            },
            None => Type::unknown(),
        }
    }

    // --- Expressions ---

    /// A required child that is absent on the wire lowers to an opaque node
    /// instead of failing; malformed inputs degrade, rules keep running.
    fn lower_opt_expr(&self, expr: Option<&p::Expr>, env: &TypeEnv, module_name: &str) -> Expr {
        match expr {
            Some(e) => self.lower_expr(e, env, module_name),
            None => Expr::new(ExprKind::Opaque("expr.unknown".to_string())),
        }
    }

    fn lower_expr(&self, expr: &p::Expr, env: &TypeEnv, module_name: &str) -> Expr {
        use p::expr::Sum;

        let location = self.expr_location(expr, module_name);
        let Some(sum) = &expr.sum else {
            return Expr::new(ExprKind::Opaque("expr.unknown".to_string()))
                .with_location(location);
        };

        match sum {
            Sum::VarStr(name) => {
                let mut node = Expr::new(ExprKind::Var).with_value(ExprValue::Name(name.clone()));
                node.typ = env.get(name).cloned();
                node.with_location(location)
            }
            Sum::VarInternedStr(idx) => {
                let name = self.resolver.base.interned_str(*idx);
                let mut node =
                    Expr::new(ExprKind::Var).with_value(ExprValue::Name(name.clone()));
                node.typ = env.get(&name).cloned();
                node.with_location(location)
            }
            Sum::Val(val) => {
                let resolved = self.resolver.resolve_val_name(val);
                let fqn = self.resolver.base.fqn_with_package(
                    &resolved.package_id,
                    &resolved.module,
                    &resolved.name,
                );
                Expr::new(ExprKind::ValRef)
                    .with_value(ExprValue::Name(fqn))
                    .with_location(location)
            }
            Sum::Builtin(raw) => {
                let name = match p::BuiltinFunction::try_from(*raw) {
                    Ok(b) => b.as_str_name().to_string(),
                    Err(_) => format!("<builtin:{}>", raw),
                };
                Expr::new(ExprKind::Builtin)
                    .with_value(ExprValue::Name(name))
                    .with_location(location)
            }
            Sum::PrimCon(raw) => {
                let name = match p::PrimCon::try_from(*raw) {
                    Ok(c) => c.as_str_name().to_string(),
                    Err(_) => format!("<prim_con:{}>", raw),
                };
                Expr::new(ExprKind::PrimCon)
                    .with_value(ExprValue::Name(name))
                    .with_location(location)
            }
            Sum::PrimLit(lit) => self.lower_prim_lit(lit, location),
            Sum::RecCon(rec) => {
                let fields = rec
                    .fields
                    .iter()
                    .map(|f| self.lower_field_with_expr(f, env, module_name))
                    .collect();
                let tycon = self.type_con_fqn(rec.tycon.as_ref());
                Expr::new(ExprKind::Record)
                    .with_value(ExprValue::Name(tycon))
                    .with_children(fields)
                    .with_location(location)
            }
            Sum::RecProj(proj) => {
                let field = match &proj.field {
                    Some(p::rec_proj::Field::FieldStr(s)) => s.clone(),
                    Some(p::rec_proj::Field::FieldInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                let record = self.lower_opt_expr(proj.record.as_deref(), env, module_name);
                Expr::new(ExprKind::RecordProj)
                    .with_value(ExprValue::Name(field))
                    .with_children(vec![record])
                    .with_location(location)
            }
            Sum::RecUpd(upd) => {
                let field = match &upd.field {
                    Some(p::rec_upd::Field::FieldStr(s)) => s.clone(),
                    Some(p::rec_upd::Field::FieldInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                let record = self.lower_opt_expr(upd.record.as_deref(), env, module_name);
                let update = self.lower_opt_expr(upd.update.as_deref(), env, module_name);
                Expr::new(ExprKind::RecordUpd)
                    .with_value(ExprValue::Name(field))
                    .with_children(vec![record, update])
                    .with_location(location)
            }
            Sum::VariantCon(variant) => {
                let name = match &variant.variant_con {
                    Some(p::variant_con::VariantCon::VariantConStr(s)) => s.clone(),
                    Some(p::variant_con::VariantCon::VariantConInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                let arg = self.lower_opt_expr(variant.variant_arg.as_deref(), env, module_name);
                Expr::new(ExprKind::Variant)
                    .with_value(ExprValue::Name(name))
                    .with_children(vec![arg])
                    .with_location(location)
            }
            Sum::EnumCon(enum_con) => {
                let tycon = match &enum_con.tycon {
                    Some(t) => self.resolver.resolve_type_con(t).fqn(),
                    None => "<tycon>".to_string(),
                };
                let ctor = match &enum_con.enum_con {
                    Some(p::enum_con::EnumCon::EnumConStr(s)) => s.clone(),
                    Some(p::enum_con::EnumCon::EnumConInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                Expr::new(ExprKind::Enum)
                    .with_value(ExprValue::Name(format!("{}.{}", tycon, ctor)))
                    .with_location(location)
            }
            Sum::StructCon(strct) => {
                let fields = strct
                    .fields
                    .iter()
                    .map(|f| self.lower_field_with_expr(f, env, module_name))
                    .collect();
                Expr::new(ExprKind::Struct)
                    .with_children(fields)
                    .with_location(location)
            }
            Sum::StructProj(proj) => {
                let field = match &proj.field {
                    Some(p::struct_proj::Field::FieldStr(s)) => s.clone(),
                    Some(p::struct_proj::Field::FieldInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                let inner = self.lower_opt_expr(proj.r#struct.as_deref(), env, module_name);
                Expr::new(ExprKind::StructProj)
                    .with_value(ExprValue::Name(field))
                    .with_children(vec![inner])
                    .with_location(location)
            }
            Sum::StructUpd(upd) => {
                let field = match &upd.field {
                    Some(p::struct_upd::Field::FieldStr(s)) => s.clone(),
                    Some(p::struct_upd::Field::FieldInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                let inner = self.lower_opt_expr(upd.r#struct.as_deref(), env, module_name);
                let update = self.lower_opt_expr(upd.update.as_deref(), env, module_name);
                Expr::new(ExprKind::StructUpd)
                    .with_value(ExprValue::Name(field))
                    .with_children(vec![inner, update])
                    .with_location(location)
            }
            Sum::App(app) => {
                let fun = self.lower_opt_expr(app.fun.as_deref(), env, module_name);
                let mut children = vec![fun];
                children.extend(app.args.iter().map(|a| self.lower_expr(a, env, module_name)));
                Expr::new(ExprKind::App)
                    .with_children(children)
                    .with_location(location)
            }
            Sum::TyApp(ty_app) => {
                let body = self.lower_opt_expr(ty_app.expr.as_deref(), env, module_name);
                let types = ty_app
                    .types
                    .iter()
                    .map(|t| self.lower_type(Some(t)))
                    .collect();
                Expr::new(ExprKind::TyApp)
                    .with_value(ExprValue::Types(types))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::Abs(abs) => {
                let mut body = self.lower_opt_expr(abs.body.as_deref(), env, module_name);
                for param in abs.param.iter().rev() {
                    let name = self.var_name(param);
                    body = Expr::new(ExprKind::Lam)
                        .with_value(ExprValue::Name(name))
                        .with_children(vec![body])
                        .with_location(location.clone());
                }
                body
            }
            Sum::TyAbs(ty_abs) => {
                let body = self.lower_opt_expr(ty_abs.body.as_deref(), env, module_name);
                Expr::new(ExprKind::TyAbs)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::Case(case) => {
                let scrut = self.lower_opt_expr(case.scrut.as_deref(), env, module_name);
                let patterns = case.alts.iter().map(|alt| self.case_pattern(alt)).collect();
                let mut children = vec![scrut];
                children.extend(
                    case.alts
                        .iter()
                        .map(|alt| self.lower_opt_expr(alt.body.as_ref(), env, module_name)),
                );
                Expr::new(ExprKind::Case)
                    .with_value(ExprValue::CasePatterns(patterns))
                    .with_children(children)
                    .with_location(location)
            }
            Sum::Let(block) => {
                let children = self.lower_block(block, env, module_name);
                Expr::new(ExprKind::Let)
                    .with_children(children)
                    .with_location(location)
            }
            Sum::Nil(nil) => {
                let elem = self.lower_type(nil.r#type.as_ref());
                Expr::new(ExprKind::List)
                    .with_typ(Type::list_of(elem))
                    .with_location(location)
            }
            Sum::Cons(cons) => match self.flatten_list(cons, env, module_name) {
                Some(items) => Expr::new(ExprKind::List)
                    .with_children(items)
                    .with_location(location),
                None => {
                    let mut children: Vec<Expr> = cons
                        .front
                        .iter()
                        .map(|e| self.lower_expr(e, env, module_name))
                        .collect();
                    children.push(self.lower_opt_expr(cons.tail.as_deref(), env, module_name));
                    Expr::new(ExprKind::Cons)
                        .with_children(children)
                        .with_location(location)
                }
            },
            Sum::Update(update) => self.lower_update(update, env, module_name, location),
            Sum::Scenario(scenario) => self.lower_scenario(scenario, env, module_name, location),
            Sum::OptionalNone(none) => {
                let elem = self.lower_type(none.r#type.as_ref());
                Expr::new(ExprKind::Optional)
                    .with_typ(Type::optional_of(elem))
                    .with_location(location)
            }
            Sum::OptionalSome(some) => {
                let child = self.lower_opt_expr(some.body.as_deref(), env, module_name);
                let elem = self.lower_type(some.r#type.as_ref());
                Expr::new(ExprKind::Optional)
                    .with_children(vec![child])
                    .with_typ(Type::optional_of(elem))
                    .with_location(location)
            }
            Sum::ToAny(to_any) => {
                let typ = self.lower_type(to_any.r#type.as_ref());
                let body = self.lower_opt_expr(to_any.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ToAny)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::FromAny(from_any) => {
                let typ = self.lower_type(from_any.r#type.as_ref());
                let body = self.lower_opt_expr(from_any.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::FromAny)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::TypeRep(typ) => {
                let typ = self.lower_type(Some(typ));
                Expr::new(ExprKind::TypeRep)
                    .with_value(ExprValue::Type(typ))
                    .with_location(location)
            }
            Sum::ToAnyException(node) => {
                let typ = self.lower_type(node.r#type.as_ref());
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ToAnyException)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::FromAnyException(node) => {
                let typ = self.lower_type(node.r#type.as_ref());
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::FromAnyException)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::Throw(throw) => {
                let value = ExprValue::ThrowInfo {
                    return_type: self.lower_type(throw.return_type.as_ref()),
                    exception_type: self.lower_type(throw.exception_type.as_ref()),
                };
                let body = self.lower_opt_expr(throw.exception_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::Throw)
                    .with_value(value)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::ToInterface(node) => {
                let value = ExprValue::InterfacePair {
                    interface: self.tycon_fqn(node.interface_type.as_ref()),
                    template: self.tycon_fqn(node.template_type.as_ref()),
                };
                let body = self.lower_opt_expr(node.template_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ToInterface)
                    .with_value(value)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::FromInterface(node) => {
                let value = ExprValue::InterfacePair {
                    interface: self.tycon_fqn(node.interface_type.as_ref()),
                    template: self.tycon_fqn(node.template_type.as_ref()),
                };
                let body = self.lower_opt_expr(node.interface_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::FromInterface)
                    .with_value(value)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::UnsafeFromInterface(node) => {
                let value = ExprValue::InterfacePair {
                    interface: self.tycon_fqn(node.interface_type.as_ref()),
                    template: self.tycon_fqn(node.template_type.as_ref()),
                };
                let cid = self.lower_opt_expr(node.contract_id_expr.as_deref(), env, module_name);
                let body = self.lower_opt_expr(node.interface_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::UnsafeFromInterface)
                    .with_value(value)
                    .with_children(vec![cid, body])
                    .with_location(location)
            }
            Sum::CallInterface(node) => {
                let value = ExprValue::InterfaceMethod {
                    interface: self.tycon_fqn(node.interface_type.as_ref()),
                    method: self.resolver.base.interned_str(node.method_interned_name),
                };
                let body = self.lower_opt_expr(node.interface_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::CallInterface)
                    .with_value(value)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::ViewInterface(node) => {
                let interface = self.tycon_fqn(node.interface.as_ref());
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ViewInterface)
                    .with_value(ExprValue::Name(interface))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::SignatoryInterface(node) => {
                let interface = self.tycon_fqn(node.interface.as_ref());
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::SignatoryInterface)
                    .with_value(ExprValue::Name(interface))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::ObserverInterface(node) => {
                let interface = self.tycon_fqn(node.interface.as_ref());
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ObserverInterface)
                    .with_value(ExprValue::Name(interface))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::InterfaceTemplateTypeRep(node) => {
                let interface = self.tycon_fqn(node.interface.as_ref());
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::InterfaceTemplateTypeRep)
                    .with_value(ExprValue::Name(interface))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::ToRequiredInterface(node) => {
                let value = ExprValue::RequiredPair {
                    required: self.tycon_fqn(node.required_interface.as_ref()),
                    requiring: self.tycon_fqn(node.requiring_interface.as_ref()),
                };
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ToRequiredInterface)
                    .with_value(value)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::FromRequiredInterface(node) => {
                let value = ExprValue::RequiredPair {
                    required: self.tycon_fqn(node.required_interface.as_ref()),
                    requiring: self.tycon_fqn(node.requiring_interface.as_ref()),
                };
                let body = self.lower_opt_expr(node.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::FromRequiredInterface)
                    .with_value(value)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::UnsafeFromRequiredInterface(node) => {
                let value = ExprValue::RequiredPair {
                    required: self.tycon_fqn(node.required_interface.as_ref()),
                    requiring: self.tycon_fqn(node.requiring_interface.as_ref()),
                };
                let cid = self.lower_opt_expr(node.contract_id_expr.as_deref(), env, module_name);
                let body = self.lower_opt_expr(node.interface_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::UnsafeFromRequiredInterface)
                    .with_value(value)
                    .with_children(vec![cid, body])
                    .with_location(location)
            }
            Sum::ChoiceController(node) => {
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(node.template.as_ref()),
                    choice: self.resolver.base.interned_str(node.choice_interned_str),
                };
                let contract =
                    self.lower_opt_expr(node.contract_expr.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(node.choice_arg_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ChoiceController)
                    .with_value(value)
                    .with_children(vec![contract, arg])
                    .with_location(location)
            }
            Sum::ChoiceObserver(node) => {
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(node.template.as_ref()),
                    choice: self.resolver.base.interned_str(node.choice_interned_str),
                };
                let contract =
                    self.lower_opt_expr(node.contract_expr.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(node.choice_arg_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ChoiceObserver)
                    .with_value(value)
                    .with_children(vec![contract, arg])
                    .with_location(location)
            }
            Sum::Experimental(node) => {
                let value = ExprValue::ExperimentalInfo {
                    name: node.name.clone(),
                    typ: self.lower_type(node.r#type.as_ref()),
                };
                Expr::new(ExprKind::Experimental)
                    .with_value(value)
                    .with_location(location)
            }
        }
    }

    fn lower_field_with_expr(
        &self,
        field: &p::FieldWithExpr,
        env: &TypeEnv,
        module_name: &str,
    ) -> Expr {
        let name = match &field.field {
            Some(p::field_with_expr::Field::FieldStr(s)) => s.clone(),
            Some(p::field_with_expr::Field::FieldInternedStr(i)) => {
                self.resolver.base.interned_str(*i)
            }
            None => "<id>".to_string(),
        };
        let child = self.lower_opt_expr(field.expr.as_ref(), env, module_name);
        Expr::new(ExprKind::Field)
            .with_value(ExprValue::Name(name))
            .with_children(vec![child])
    }

    /// Lower a block's bindings and body into `[binding*, body]` children,
    /// extending the environment left to right.
    fn lower_block(&self, block: &p::Block, env: &TypeEnv, module_name: &str) -> Vec<Expr> {
        let mut local = env.clone();
        let mut children = Vec::with_capacity(block.bindings.len() + 1);
        for binding in &block.bindings {
            let (name, typ) = match &binding.binder {
                Some(binder) => (self.var_name(binder), self.lower_type(binder.r#type.as_ref())),
                None => ("<id>".to_string(), Type::unknown()),
            };
            let bound = self.lower_opt_expr(binding.bound.as_ref(), &local, module_name);
            local.insert(name.clone(), typ);
            children.push(
                Expr::new(ExprKind::Binding)
                    .with_value(ExprValue::Name(name))
                    .with_children(vec![bound]),
            );
        }
        children.push(self.lower_opt_expr(block.body.as_deref(), &local, module_name));
        children
    }

    fn flatten_list(
        &self,
        cons: &p::Cons,
        env: &TypeEnv,
        module_name: &str,
    ) -> Option<Vec<Expr>> {
        let mut items: Vec<Expr> = cons
            .front
            .iter()
            .map(|e| self.lower_expr(e, env, module_name))
            .collect();
        match cons.tail.as_deref().and_then(|t| t.sum.as_ref()) {
            Some(p::expr::Sum::Nil(_)) => Some(items),
            Some(p::expr::Sum::Cons(inner)) => {
                items.extend(self.flatten_list(inner, env, module_name)?);
                Some(items)
            }
            _ => None,
        }
    }

    fn lower_prim_lit(&self, lit: &p::PrimLit, location: Option<Location>) -> Expr {
        use p::prim_lit::Sum;
        let node = match &lit.sum {
            Some(Sum::PartyStr(s)) => {
                Expr::new(ExprKind::Party).with_value(ExprValue::Name(s.clone()))
            }
            Some(Sum::PartyInternedStr(i)) => Expr::new(ExprKind::Party)
                .with_value(ExprValue::Name(self.resolver.base.interned_str(*i))),
            Some(Sum::TextStr(s)) => {
                Expr::new(ExprKind::Text).with_value(ExprValue::Name(s.clone()))
            }
            Some(Sum::TextInternedStr(i)) => Expr::new(ExprKind::Text)
                .with_value(ExprValue::Name(self.resolver.base.interned_str(*i))),
            Some(Sum::DecimalStr(s)) => {
                Expr::new(ExprKind::Decimal).with_value(ExprValue::Name(s.clone()))
            }
            Some(Sum::NumericInternedStr(i)) => Expr::new(ExprKind::Numeric)
                .with_value(ExprValue::Name(self.resolver.base.interned_str(*i))),
            Some(Sum::Int64(v)) => Expr::new(ExprKind::Int64).with_value(ExprValue::Int(*v)),
            Some(Sum::Timestamp(v)) => {
                Expr::new(ExprKind::Timestamp).with_value(ExprValue::Int(*v))
            }
            Some(Sum::Date(v)) => {
                Expr::new(ExprKind::Date).with_value(ExprValue::Int(i64::from(*v)))
            }
            Some(Sum::RoundingMode(raw)) => {
                let name = match p::prim_lit::RoundingMode::try_from(*raw) {
                    Ok(m) => m.as_str_name().to_string(),
                    Err(_) => format!("<rounding_mode:{}>", raw),
                };
                Expr::new(ExprKind::RoundingMode).with_value(ExprValue::Name(name))
            }
            None => Expr::new(ExprKind::Opaque("lit.unknown".to_string())),
        };
        node.with_location(location)
    }

    fn lower_update(
        &self,
        update: &p::Update,
        env: &TypeEnv,
        module_name: &str,
        location: Option<Location>,
    ) -> Expr {
        use p::update::Sum;
        let Some(sum) = &update.sum else {
            return Expr::new(ExprKind::Opaque("update.unknown".to_string()))
                .with_location(location);
        };
        match sum {
            Sum::Pure(pure) => {
                let body = self.lower_opt_expr(pure.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdatePure)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::Block(block) => {
                let children = self.lower_block(block, env, module_name);
                Expr::new(ExprKind::UpdateBlock)
                    .with_children(children)
                    .with_location(location)
            }
            Sum::Create(create) => {
                let template = self.tycon_fqn(create.template.as_ref());
                let body = self.lower_opt_expr(create.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateCreate)
                    .with_value(ExprValue::Name(template))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::CreateInterface(create) => {
                let interface = self.tycon_fqn(create.interface.as_ref());
                let body = self.lower_opt_expr(create.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateCreateInterface)
                    .with_value(ExprValue::Name(interface))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::Exercise(ex) => {
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(ex.template.as_ref()),
                    choice: self.exercise_choice_name(&ex.choice),
                };
                let cid = self.lower_opt_expr(ex.cid.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(ex.arg.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateExercise)
                    .with_value(value)
                    .with_children(vec![cid, arg])
                    .with_location(location)
            }
            Sum::ExerciseByKey(ex) => {
                let choice = match &ex.choice {
                    Some(p::exercise_by_key::Choice::ChoiceStr(s)) => s.clone(),
                    Some(p::exercise_by_key::Choice::ChoiceInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<choice>".to_string(),
                };
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(ex.template.as_ref()),
                    choice,
                };
                let key = self.lower_opt_expr(ex.key.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(ex.arg.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateExerciseByKey)
                    .with_value(value)
                    .with_children(vec![key, arg])
                    .with_location(location)
            }
            Sum::SoftExercise(ex) => {
                let choice = match &ex.choice {
                    Some(p::soft_exercise::Choice::ChoiceStr(s)) => s.clone(),
                    Some(p::soft_exercise::Choice::ChoiceInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<choice>".to_string(),
                };
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(ex.template.as_ref()),
                    choice,
                };
                let cid = self.lower_opt_expr(ex.cid.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(ex.arg.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateSoftExercise)
                    .with_value(value)
                    .with_children(vec![cid, arg])
                    .with_location(location)
            }
            Sum::DynamicExercise(ex) => {
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(ex.template.as_ref()),
                    choice: self.resolver.base.interned_str(ex.choice_interned_str),
                };
                let cid = self.lower_opt_expr(ex.cid.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(ex.arg.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateDynamicExercise)
                    .with_value(value)
                    .with_children(vec![cid, arg])
                    .with_location(location)
            }
            Sum::ExerciseInterface(ex) => {
                let value = ExprValue::TemplateChoice {
                    template: self.tycon_fqn(ex.interface.as_ref()),
                    choice: self.resolver.base.interned_str(ex.choice_interned_str),
                };
                let cid = self.lower_opt_expr(ex.cid.as_deref(), env, module_name);
                let arg = self.lower_opt_expr(ex.arg.as_deref(), env, module_name);
                let mut children = vec![cid, arg];
                if let Some(guard) = ex.guard.as_deref() {
                    children.push(self.lower_expr(guard, env, module_name));
                }
                Expr::new(ExprKind::UpdateExerciseInterface)
                    .with_value(value)
                    .with_children(children)
                    .with_location(location)
            }
            Sum::Fetch(fetch) => {
                let template = self.tycon_fqn(fetch.template.as_ref());
                let cid = self.lower_opt_expr(fetch.cid.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateFetch)
                    .with_value(ExprValue::Name(template))
                    .with_children(vec![cid])
                    .with_location(location)
            }
            Sum::SoftFetch(fetch) => {
                let template = self.tycon_fqn(fetch.template.as_ref());
                let cid = self.lower_opt_expr(fetch.cid.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateSoftFetch)
                    .with_value(ExprValue::Name(template))
                    .with_children(vec![cid])
                    .with_location(location)
            }
            Sum::FetchInterface(fetch) => {
                let interface = self.tycon_fqn(fetch.interface.as_ref());
                let cid = self.lower_opt_expr(fetch.cid.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateFetchInterface)
                    .with_value(ExprValue::Name(interface))
                    .with_children(vec![cid])
                    .with_location(location)
            }
            Sum::GetTime(_) => Expr::new(ExprKind::UpdateGetTime).with_location(location),
            Sum::LookupByKey(retrieve) => {
                let template = self.tycon_fqn(retrieve.template.as_ref());
                let key = self.lower_opt_expr(retrieve.key.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateLookupByKey)
                    .with_value(ExprValue::Name(template))
                    .with_children(vec![key])
                    .with_location(location)
            }
            Sum::FetchByKey(retrieve) => {
                let template = self.tycon_fqn(retrieve.template.as_ref());
                let key = self.lower_opt_expr(retrieve.key.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateFetchByKey)
                    .with_value(ExprValue::Name(template))
                    .with_children(vec![key])
                    .with_location(location)
            }
            Sum::EmbedExpr(embed) => {
                let typ = self.lower_type(embed.r#type.as_ref());
                let body = self.lower_opt_expr(embed.body.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateEmbedExpr)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::TryCatch(tc) => {
                let value = ExprValue::TryCatchInfo {
                    return_type: self.lower_type(tc.return_type.as_ref()),
                    var: self.resolver.base.interned_str(tc.var_interned_str),
                };
                let try_expr = self.lower_opt_expr(tc.try_expr.as_deref(), env, module_name);
                let catch_expr = self.lower_opt_expr(tc.catch_expr.as_deref(), env, module_name);
                Expr::new(ExprKind::UpdateTryCatch)
                    .with_value(value)
                    .with_children(vec![try_expr, catch_expr])
                    .with_location(location)
            }
        }
    }

    fn lower_scenario(
        &self,
        scenario: &p::Scenario,
        env: &TypeEnv,
        module_name: &str,
        location: Option<Location>,
    ) -> Expr {
        use p::scenario::Sum;
        let Some(sum) = &scenario.sum else {
            return Expr::new(ExprKind::Opaque("scenario.unknown".to_string()))
                .with_location(location);
        };
        match sum {
            Sum::Pure(pure) => {
                let typ = self.lower_type(pure.r#type.as_ref());
                let body = self.lower_opt_expr(pure.expr.as_deref(), env, module_name);
                Expr::new(ExprKind::ScenarioPure)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::Block(block) => {
                let children = self.lower_block(block, env, module_name);
                Expr::new(ExprKind::ScenarioBlock)
                    .with_children(children)
                    .with_location(location)
            }
            Sum::Commit(commit) | Sum::MustFailAt(commit) => {
                let kind = if matches!(sum, Sum::Commit(_)) {
                    ExprKind::ScenarioCommit
                } else {
                    ExprKind::ScenarioMustFailAt
                };
                let party = self.lower_opt_expr(commit.party.as_deref(), env, module_name);
                let body = self.lower_opt_expr(commit.expr.as_deref(), env, module_name);
                Expr::new(kind)
                    .with_value(ExprValue::Type(self.lower_type(commit.ret_type.as_ref())))
                    .with_children(vec![party, body])
                    .with_location(location)
            }
            Sum::Pass(body) => {
                let body = self.lower_expr(body, env, module_name);
                Expr::new(ExprKind::ScenarioPass)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::GetTime(_) => Expr::new(ExprKind::ScenarioGetTime).with_location(location),
            Sum::GetParty(body) => {
                let body = self.lower_expr(body, env, module_name);
                Expr::new(ExprKind::ScenarioGetParty)
                    .with_children(vec![body])
                    .with_location(location)
            }
            Sum::EmbedExpr(embed) => {
                let typ = self.lower_type(embed.r#type.as_ref());
                let body = self.lower_opt_expr(embed.body.as_deref(), env, module_name);
                Expr::new(ExprKind::ScenarioEmbedExpr)
                    .with_value(ExprValue::Type(typ))
                    .with_children(vec![body])
                    .with_location(location)
            }
        }
    }

    fn case_pattern(&self, alt: &p::CaseAlt) -> CasePattern {
        use p::case_alt::Sum;
        match &alt.sum {
            Some(Sum::Default(_)) => CasePattern::Default,
            Some(Sum::Variant(variant)) => {
                let ty = match &variant.con {
                    Some(con) => self.resolver.resolve_type_con(con).fqn(),
                    None => "<tycon>".to_string(),
                };
                let name = match &variant.variant {
                    Some(p::case_alt_variant::Variant::VariantStr(s)) => s.clone(),
                    Some(p::case_alt_variant::Variant::VariantInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                let binder = match &variant.binder {
                    Some(p::case_alt_variant::Binder::BinderStr(s)) => Some(s.clone()),
                    Some(p::case_alt_variant::Binder::BinderInternedStr(i)) => {
                        Some(self.resolver.base.interned_str(*i))
                    }
                    None => None,
                };
                CasePattern::Variant {
                    ty,
                    variant: name,
                    binder,
                }
            }
            Some(Sum::PrimCon(raw)) => {
                let name = match p::PrimCon::try_from(*raw) {
                    Ok(c) => c.as_str_name().to_string(),
                    Err(_) => format!("<prim_con:{}>", raw),
                };
                CasePattern::PrimCon(name)
            }
            Some(Sum::Nil(_)) => CasePattern::Nil,
            Some(Sum::Cons(cons)) => {
                let head = match &cons.var_head {
                    Some(p::case_alt_cons::VarHead::VarHeadStr(s)) => Some(s.clone()),
                    Some(p::case_alt_cons::VarHead::VarHeadInternedStr(i)) => {
                        Some(self.resolver.base.interned_str(*i))
                    }
                    None => None,
                };
                let tail = match &cons.var_tail {
                    Some(p::case_alt_cons::VarTail::VarTailStr(s)) => Some(s.clone()),
                    Some(p::case_alt_cons::VarTail::VarTailInternedStr(i)) => {
                        Some(self.resolver.base.interned_str(*i))
                    }
                    None => None,
                };
                CasePattern::Cons { head, tail }
            }
            Some(Sum::OptionalNone(_)) => CasePattern::OptionalNone,
            Some(Sum::OptionalSome(some)) => {
                let binder = match &some.var_body {
                    Some(p::case_alt_optional_some::VarBody::VarBodyStr(s)) => Some(s.clone()),
                    Some(p::case_alt_optional_some::VarBody::VarBodyInternedStr(i)) => {
                        Some(self.resolver.base.interned_str(*i))
                    }
                    None => None,
                };
                CasePattern::OptionalSome { binder }
            }
            Some(Sum::Enum(enum_alt)) => {
                let ty = match &enum_alt.con {
                    Some(con) => self.resolver.resolve_type_con(con).fqn(),
                    None => "<tycon>".to_string(),
                };
                let constructor = match &enum_alt.constructor {
                    Some(p::case_alt_enum::Constructor::ConstructorStr(s)) => s.clone(),
                    Some(p::case_alt_enum::Constructor::ConstructorInternedStr(i)) => {
                        self.resolver.base.interned_str(*i)
                    }
                    None => "<id>".to_string(),
                };
                CasePattern::Enum { ty, constructor }
            }
            None => CasePattern::Other("unknown".to_string()),
        }
    }

    // --- Name helpers ---

    fn var_name(&self, var: &p::VarWithType) -> String {
        match &var.var {
            Some(p::var_with_type::Var::VarStr(s)) => s.clone(),
            Some(p::var_with_type::Var::VarInternedStr(i)) => self.resolver.base.interned_str(*i),
            None => "<id>".to_string(),
        }
    }

    fn tycon_fqn(&self, tycon: Option<&p::TypeConName>) -> String {
        match tycon {
            Some(t) => {
                let resolved = self.resolver.resolve_type_con(t);
                self.resolver.base.fqn_with_package(
                    &resolved.package_id,
                    &resolved.module,
                    &resolved.name,
                )
            }
            None => "<tycon>".to_string(),
        }
    }

    fn type_con_fqn(&self, con: Option<&p::TypeCon>) -> String {
        self.tycon_fqn(con.and_then(|c| c.tycon.as_ref()))
    }

    fn exercise_choice_name(&self, choice: &Option<p::exercise::Choice>) -> String {
        match choice {
            Some(p::exercise::Choice::ChoiceStr(s)) => s.clone(),
            Some(p::exercise::Choice::ChoiceInternedStr(i)) => {
                self.resolver.base.interned_str(*i)
            }
            None => "<choice>".to_string(),
        }
    }
}
