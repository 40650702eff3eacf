//! Shared builders for scenario tests: construct tiny DARs in memory with
//! the same wire schemas the scanner decodes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use prost::Message;
use sha2::{Digest, Sha256};
use zip::write::SimpleFileOptions;

use daml_sast::lf::proto::daml_lf::{archive_payload, Archive, ArchivePayload, HashFunction};
use daml_sast::lf::proto::{daml_lf1 as v1, daml_lf2 as v2};

/// Interns strings and dotted names while a test package is assembled.
#[derive(Default)]
pub struct Interner {
    strings: Vec<String>,
    string_idx: HashMap<String, i32>,
    dnames: Vec<Vec<i32>>,
    dname_idx: HashMap<String, i32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn s(&mut self, value: &str) -> i32 {
        if let Some(&idx) = self.string_idx.get(value) {
            return idx;
        }
        let idx = self.strings.len() as i32;
        self.strings.push(value.to_string());
        self.string_idx.insert(value.to_string(), idx);
        idx
    }

    pub fn dname(&mut self, value: &str) -> i32 {
        if let Some(&idx) = self.dname_idx.get(value) {
            return idx;
        }
        let segments = value
            .split('.')
            .map(|seg| self.s(seg))
            .collect::<Vec<i32>>();
        let idx = self.dnames.len() as i32;
        self.dnames.push(segments);
        self.dname_idx.insert(value.to_string(), idx);
        idx
    }

    pub fn strings(&self) -> Vec<String> {
        self.strings.clone()
    }

    pub fn dotted_names_v1(&self) -> Vec<v1::InternedDottedName> {
        self.dnames
            .iter()
            .map(|segments| v1::InternedDottedName {
                segments_interned_str: segments.clone(),
            })
            .collect()
    }

    pub fn dotted_names_v2(&self) -> Vec<v2::InternedDottedName> {
        self.dnames
            .iter()
            .map(|segments| v2::InternedDottedName {
                segments_interned_str: segments.clone(),
            })
            .collect()
    }
}

// --- Dialect-1 building blocks ---

pub fn ty_party() -> v1::Type {
    v1::Type {
        sum: Some(v1::ty::Sum::Prim(v1::TypePrim {
            prim: v1::PrimType::Party as i32,
            args: vec![],
        })),
    }
}

pub fn ty_party_list() -> v1::Type {
    v1::Type {
        sum: Some(v1::ty::Sum::Prim(v1::TypePrim {
            prim: v1::PrimType::List as i32,
            args: vec![ty_party()],
        })),
    }
}

pub fn ty_unit() -> v1::Type {
    v1::Type {
        sum: Some(v1::ty::Sum::Prim(v1::TypePrim {
            prim: v1::PrimType::Unit as i32,
            args: vec![],
        })),
    }
}

fn expr(sum: v1::expr::Sum) -> v1::Expr {
    v1::Expr {
        location: None,
        sum: Some(sum),
    }
}

pub fn expr_var(interner: &mut Interner, name: &str) -> v1::Expr {
    let idx = interner.s(name);
    expr(v1::expr::Sum::VarInternedStr(idx))
}

pub fn expr_party_lit(interner: &mut Interner, party: &str) -> v1::Expr {
    let idx = interner.s(party);
    expr(v1::expr::Sum::PrimLit(v1::PrimLit {
        sum: Some(v1::prim_lit::Sum::PartyInternedStr(idx)),
    }))
}

pub fn expr_nil_party() -> v1::Expr {
    expr(v1::expr::Sum::Nil(v1::Nil {
        r#type: Some(ty_party()),
    }))
}

/// `[p1, .., pn]` as a cons chain over a party nil (the shape compilers
/// emit; lowering flattens it back into a `list` node).
pub fn expr_party_list(interner: &mut Interner, parties: &[&str]) -> v1::Expr {
    if parties.is_empty() {
        return expr_nil_party();
    }
    let front = parties
        .iter()
        .map(|p| expr_party_lit(interner, p))
        .collect();
    expr(v1::expr::Sum::Cons(Box::new(v1::Cons {
        r#type: Some(ty_party()),
        front,
        tail: Some(Box::new(expr_nil_party())),
    })))
}

pub fn expr_unit() -> v1::Expr {
    expr(v1::expr::Sum::PrimCon(v1::PrimCon::ConUnit as i32))
}

pub fn expr_update_pure_unit() -> v1::Expr {
    expr(v1::expr::Sum::Update(Box::new(v1::Update {
        sum: Some(v1::update::Sum::Pure(Box::new(v1::Pure {
            r#type: Some(ty_unit()),
            expr: Some(Box::new(expr_unit())),
        }))),
    })))
}

pub fn tcn_self(module_dn: i32, name_dn: i32) -> v1::TypeConName {
    v1::TypeConName {
        module: Some(v1::ModuleRef {
            package_ref: Some(v1::PackageRef {
                sum: Some(v1::package_ref::Sum::Self_(v1::Unit {})),
            }),
            module_name: Some(v1::module_ref::ModuleName::ModuleNameInternedDname(
                module_dn,
            )),
        }),
        name: Some(v1::type_con_name::Name::NameInternedDname(name_dn)),
    }
}

pub fn expr_update_create(module_dn: i32, template_dn: i32) -> v1::Expr {
    expr(v1::expr::Sum::Update(Box::new(v1::Update {
        sum: Some(v1::update::Sum::Create(Box::new(v1::Create {
            template: Some(tcn_self(module_dn, template_dn)),
            expr: Some(Box::new(expr_unit())),
        }))),
    })))
}

pub fn expr_update_exercise(
    interner: &mut Interner,
    module_dn: i32,
    template_dn: i32,
    choice: &str,
) -> v1::Expr {
    let choice_idx = interner.s(choice);
    expr(v1::expr::Sum::Update(Box::new(v1::Update {
        sum: Some(v1::update::Sum::Exercise(Box::new(v1::Exercise {
            template: Some(tcn_self(module_dn, template_dn)),
            choice: Some(v1::exercise::Choice::ChoiceInternedStr(choice_idx)),
            cid: Some(Box::new(expr_unit())),
            arg: Some(Box::new(expr_unit())),
        }))),
    })))
}

pub fn expr_update_get_time() -> v1::Expr {
    expr(v1::expr::Sum::Update(Box::new(v1::Update {
        sum: Some(v1::update::Sum::GetTime(v1::Unit {})),
    })))
}

/// `let name : [Party] = [parties..] in name`
pub fn expr_let_party_list(interner: &mut Interner, name: &str, parties: &[&str]) -> v1::Expr {
    let bound = expr_party_list(interner, parties);
    let name_idx = interner.s(name);
    expr(v1::expr::Sum::Let(Box::new(v1::Block {
        bindings: vec![v1::Binding {
            binder: Some(v1::VarWithType {
                var: Some(v1::var_with_type::Var::VarInternedStr(name_idx)),
                r#type: Some(ty_party_list()),
            }),
            bound: Some(bound),
        }],
        body: Some(Box::new(expr(v1::expr::Sum::VarInternedStr(name_idx)))),
    })))
}

pub struct ChoiceSpec {
    pub name: &'static str,
    pub consuming: bool,
    pub controllers: v1::Expr,
    pub observers: Option<v1::Expr>,
    pub update: v1::Expr,
    pub arg_type: v1::Type,
}

impl ChoiceSpec {
    pub fn new(
        name: &'static str,
        consuming: bool,
        controllers: v1::Expr,
        update: v1::Expr,
    ) -> Self {
        Self {
            name,
            consuming,
            controllers,
            observers: None,
            update,
            arg_type: ty_unit(),
        }
    }
}

pub fn template_v1(
    interner: &mut Interner,
    name_dn: i32,
    signatories: v1::Expr,
    choices: Vec<ChoiceSpec>,
) -> v1::DefTemplate {
    let param = interner.s("this");
    let arg = interner.s("arg");
    let choices = choices
        .into_iter()
        .map(|spec| {
            let name_idx = interner.s(spec.name);
            v1::TemplateChoice {
                name: Some(v1::template_choice::Name::NameInternedStr(name_idx)),
                consuming: spec.consuming,
                controllers: Some(spec.controllers),
                observers: spec.observers,
                arg_binder: Some(v1::VarWithType {
                    var: Some(v1::var_with_type::Var::VarInternedStr(arg)),
                    r#type: Some(spec.arg_type),
                }),
                ret_type: Some(ty_unit()),
                update: Some(spec.update),
                location: None,
                authorizers: None,
            }
        })
        .collect();
    v1::DefTemplate {
        tycon: Some(v1::def_template::Tycon::TyconInternedDname(name_dn)),
        param: Some(v1::def_template::Param::ParamInternedStr(param)),
        precond: None,
        signatories: Some(signatories),
        observers: Some(expr_nil_party()),
        choices,
        location: None,
        key: None,
    }
}

pub fn package_v1(
    interner: &mut Interner,
    module_dn: i32,
    templates: Vec<v1::DefTemplate>,
    name: &str,
    version: &str,
) -> v1::Package {
    let name_idx = interner.s(name);
    let version_idx = interner.s(version);
    v1::Package {
        modules: vec![v1::Module {
            name: Some(v1::module::Name::NameInternedDname(module_dn)),
            values: vec![],
            templates,
        }],
        interned_strings: interner.strings(),
        interned_dotted_names: interner.dotted_names_v1(),
        metadata: Some(v1::PackageMetadata {
            name_interned_str: name_idx,
            version_interned_str: version_idx,
        }),
        interned_types: vec![],
    }
}

/// A minimal well-formed dialect-2 package with one empty module.
pub fn minimal_package_v2(name: &str) -> v2::Package {
    let mut interner = Interner::new();
    // Index 0 is a placeholder so real references are non-zero on the wire.
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let name_idx = interner.s(name);
    let version_idx = interner.s("0.0.0");
    v2::Package {
        modules: vec![v2::Module {
            name_interned_dname: module_dn,
            values: vec![],
            templates: vec![],
        }],
        interned_strings: interner.strings(),
        interned_dotted_names: interner.dotted_names_v2(),
        metadata: Some(v2::PackageMetadata {
            name_interned_str: name_idx,
            version_interned_str: version_idx,
        }),
        interned_types: vec![],
        interned_kinds: vec![],
        interned_exprs: vec![],
        imports_sum: None,
    }
}

// --- Envelope assembly ---

pub fn payload_bytes(minor: &str, sum: archive_payload::Sum) -> Vec<u8> {
    ArchivePayload {
        minor: minor.to_string(),
        patch: 0,
        sum: Some(sum),
    }
    .encode_to_vec()
}

pub fn archive_bytes(payload: &[u8]) -> Vec<u8> {
    Archive {
        hash_function: HashFunction::Sha256 as i32,
        payload: payload.to_vec(),
        hash: hex::encode(Sha256::digest(payload)),
    }
    .encode_to_vec()
}

pub fn archive_bytes_v1(pkg: &v1::Package, minor: &str) -> Vec<u8> {
    let payload = payload_bytes(minor, archive_payload::Sum::DamlLf1(pkg.encode_to_vec()));
    archive_bytes(&payload)
}

pub fn archive_bytes_v2(pkg: &v2::Package, minor: &str) -> Vec<u8> {
    let payload = payload_bytes(minor, archive_payload::Sum::DamlLf2(pkg.encode_to_vec()));
    archive_bytes(&payload)
}

pub fn write_dar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = std::fs::File::create(path).expect("create dar");
    let mut zf = zip::ZipWriter::new(file);
    for (name, data) in entries {
        zf.start_file(*name, SimpleFileOptions::default())
            .expect("start entry");
        zf.write_all(data).expect("write entry");
    }
    zf.finish().expect("finish dar");
}

// --- Canned fixture DARs ---

/// Template `Main.TAuth`, signatories `[Alice]`, consuming choice
/// `Transfer` controlled by `[Bob]`.
pub fn dar_controller_not_aligned(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let tauth_dn = interner.dname("TAuth");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_party_list(&mut interner, &["Bob"]);
    let choice = ChoiceSpec::new("Transfer", true, controllers, expr_update_pure_unit());
    let template = template_v1(&mut interner, tauth_dn, signatories, vec![choice]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "auth-demo", "1.0.0");
    write_dar(path, &[("auth.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Template `Main.TNonConsume` with non-consuming `Mint` re-creating its
/// own template.
pub fn dar_nonconsuming_self_create(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TNonConsume");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_party_list(&mut interner, &["Alice"]);
    let update = expr_update_create(module_dn, template_dn);
    let choice = ChoiceSpec::new("Mint", false, controllers, update);
    let template = template_v1(&mut interner, template_dn, signatories, vec![choice]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "life-demo", "1.0.0");
    write_dar(path, &[("life.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Template `Main.Spawner` with non-consuming `Spawn` creating
/// `Main.Child`.
pub fn dar_nonconsuming_other_create(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let spawner_dn = interner.dname("Spawner");
    let child_dn = interner.dname("Child");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_party_list(&mut interner, &["Alice"]);
    let update = expr_update_create(module_dn, child_dn);
    let spawn = ChoiceSpec::new("Spawn", false, controllers, update);
    let spawner = template_v1(&mut interner, spawner_dn, signatories, vec![spawn]);
    let child_sigs = expr_party_list(&mut interner, &["Alice"]);
    let child = template_v1(&mut interner, child_dn, child_sigs, vec![]);
    let pkg = package_v1(
        &mut interner,
        module_dn,
        vec![spawner, child],
        "spawn-demo",
        "1.0.0",
    );
    write_dar(path, &[("spawn.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Choice `Do` whose controllers are the (party-typed) choice argument.
pub fn dar_uncontrolled_controllers(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TVar");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_var(&mut interner, "arg");
    let mut choice = ChoiceSpec::new("Do", true, controllers, expr_update_pure_unit());
    choice.arg_type = ty_party();
    let template = template_v1(&mut interner, template_dn, signatories, vec![choice]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "var-demo", "1.0.0");
    write_dar(path, &[("var.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Template with an empty signatory list.
pub fn dar_empty_signatories(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TOpen");
    let signatories = expr_party_list(&mut interner, &[]);
    let template = template_v1(&mut interner, template_dn, signatories, vec![]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "open-demo", "1.0.0");
    write_dar(path, &[("open.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Non-consuming choice whose update is a single exercise.
pub fn dar_forwarding_choice(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let proxy_dn = interner.dname("Proxy");
    let target_dn = interner.dname("Target");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_party_list(&mut interner, &["Alice"]);
    let update = expr_update_exercise(&mut interner, module_dn, target_dn, "Go");
    let forward = ChoiceSpec::new("Forward", false, controllers, update);
    let template = template_v1(&mut interner, proxy_dn, signatories, vec![forward]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "proxy-demo", "1.0.0");
    write_dar(path, &[("proxy.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Choice observers taken verbatim from a `[Party]`-typed argument.
pub fn dar_overbroad_observers(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TBroad");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_party_list(&mut interner, &["Alice"]);
    let observers = expr_var(&mut interner, "arg");
    let mut choice = ChoiceSpec::new("Share", true, controllers, expr_update_pure_unit());
    choice.observers = Some(observers);
    choice.arg_type = ty_party_list();
    let template = template_v1(&mut interner, template_dn, signatories, vec![choice]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "broad-demo", "1.0.0");
    write_dar(path, &[("broad.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

/// Signatories `[Alice]`, non-consuming choice controlled by `[Alice]`
/// with a pure-unit update: nothing to report.
pub fn dar_clean(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TClean");
    let signatories = expr_party_list(&mut interner, &["Alice"]);
    let controllers = expr_party_list(&mut interner, &["Alice"]);
    let choice = ChoiceSpec::new("Touch", false, controllers, expr_update_pure_unit());
    let template = template_v1(&mut interner, template_dn, signatories, vec![choice]);
    let pkg = package_v1(&mut interner, module_dn, vec![template], "clean-demo", "1.0.0");
    write_dar(path, &[("clean.dalf", &archive_bytes_v1(&pkg, "14"))]);
}

// --- Dialect-2 building blocks ---

pub fn ty2_party() -> v2::Type {
    v2::Type {
        sum: Some(v2::ty::Sum::Builtin(v2::TypeBuiltin {
            builtin: v2::BuiltinType::Party as i32,
            args: vec![],
        })),
    }
}

pub fn ty2_unit() -> v2::Type {
    v2::Type {
        sum: Some(v2::ty::Sum::Builtin(v2::TypeBuiltin {
            builtin: v2::BuiltinType::Unit as i32,
            args: vec![],
        })),
    }
}

fn expr2(sum: v2::expr::Sum) -> v2::Expr {
    v2::Expr {
        location: None,
        sum: Some(sum),
    }
}

pub fn expr2_party_lit(interner: &mut Interner, party: &str) -> v2::Expr {
    let idx = interner.s(party);
    expr2(v2::expr::Sum::BuiltinLit(v2::BuiltinLit {
        sum: Some(v2::builtin_lit::Sum::PartyInternedStr(idx)),
    }))
}

pub fn expr2_party_list(interner: &mut Interner, parties: &[&str]) -> v2::Expr {
    let nil = expr2(v2::expr::Sum::Nil(v2::Nil {
        r#type: Some(ty2_party()),
    }));
    if parties.is_empty() {
        return nil;
    }
    let front = parties
        .iter()
        .map(|p| expr2_party_lit(interner, p))
        .collect();
    expr2(v2::expr::Sum::Cons(Box::new(v2::Cons {
        r#type: Some(ty2_party()),
        front,
        tail: Some(Box::new(nil)),
    })))
}

pub fn expr2_update_pure_unit() -> v2::Expr {
    expr2(v2::expr::Sum::Update(Box::new(v2::Update {
        sum: Some(v2::update::Sum::Pure(Box::new(v2::Pure {
            r#type: Some(ty2_unit()),
            expr: Some(Box::new(expr2(v2::expr::Sum::BuiltinCon(
                v2::BuiltinCon::ConUnit as i32,
            )))),
        }))),
    })))
}

/// Template `Main.TAuth` in dialect 2: signatories `[Alice]`, consuming
/// choice `Transfer` controlled by `[Bob]`.
pub fn dar_v2_controller_not_aligned(path: &Path) {
    let mut interner = Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let tauth_dn = interner.dname("TAuth");
    let signatories = expr2_party_list(&mut interner, &["Alice"]);
    let controllers = expr2_party_list(&mut interner, &["Bob"]);
    let this = interner.s("this");
    let arg = interner.s("arg");
    let transfer = interner.s("Transfer");
    let name_idx = interner.s("auth-demo-v2");
    let version_idx = interner.s("1.0.0");

    let template = v2::DefTemplate {
        tycon_interned_dname: tauth_dn,
        param_interned_str: this,
        precond: None,
        signatories: Some(signatories),
        observers: Some(expr2(v2::expr::Sum::Nil(v2::Nil {
            r#type: Some(ty2_party()),
        }))),
        choices: vec![v2::TemplateChoice {
            name_interned_str: transfer,
            consuming: true,
            controllers: Some(controllers),
            observers: None,
            arg_binder: Some(v2::VarWithType {
                var_interned_str: arg,
                r#type: Some(ty2_unit()),
            }),
            ret_type: Some(ty2_unit()),
            update: Some(expr2_update_pure_unit()),
            location: None,
            authorizers: None,
        }],
        location: None,
        key: None,
    };
    let pkg = v2::Package {
        modules: vec![v2::Module {
            name_interned_dname: module_dn,
            values: vec![],
            templates: vec![template],
        }],
        interned_strings: interner.strings(),
        interned_dotted_names: interner.dotted_names_v2(),
        metadata: Some(v2::PackageMetadata {
            name_interned_str: name_idx,
            version_interned_str: version_idx,
        }),
        interned_types: vec![],
        interned_kinds: vec![],
        interned_exprs: vec![],
        imports_sum: None,
    };
    write_dar(path, &[("auth-v2.dalf", &archive_bytes_v2(&pkg, "2.1"))]);
}
