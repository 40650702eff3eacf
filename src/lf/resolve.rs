//! Interned-name resolution.
//!
//! Each package carries interning tables; the two dialects reference them
//! through different encodings. Resolution is total: an out-of-range index
//! yields a well-formed placeholder (`<str:i>`, `<dname:i>`, `<import:i>`)
//! instead of an error, so malformed inputs degrade into odd names rather
//! than crashes further down the pipeline.

use crate::lf::proto::{daml_lf1, daml_lf2};

/// Denormalized interning tables shared by both dialects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InternedTables {
    pub strings: Vec<String>,
    /// Dotted names pre-joined from their segment indices.
    pub dotted_names: Vec<String>,
    /// Dialect-2 package imports table (empty for dialect 1).
    pub imports: Vec<String>,
}

/// A package-qualified name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedName {
    pub package_id: String,
    pub module: String,
    pub name: String,
}

impl ResolvedName {
    pub fn fqn(&self) -> String {
        if self.module.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.module, self.name)
        }
    }
}

/// Shared resolver surface over the interning tables.
pub struct ResolverBase<'a> {
    pub package_id: &'a str,
    pub interned: &'a InternedTables,
}

impl<'a> ResolverBase<'a> {
    pub fn new(package_id: &'a str, interned: &'a InternedTables) -> Self {
        Self {
            package_id,
            interned,
        }
    }

    pub fn interned_str(&self, idx: i32) -> String {
        match usize::try_from(idx) {
            Ok(i) if i < self.interned.strings.len() => self.interned.strings[i].clone(),
            _ => format!("<str:{}>", idx),
        }
    }

    pub fn interned_dname(&self, idx: i32) -> String {
        match usize::try_from(idx) {
            Ok(i) if i < self.interned.dotted_names.len() => self.interned.dotted_names[i].clone(),
            _ => format!("<dname:{}>", idx),
        }
    }

    /// `module.name` inside the owning package, `pkg:module.name` elsewhere.
    pub fn fqn_with_package(&self, pkg_id: &str, module: &str, name: &str) -> String {
        if module.is_empty() {
            name.to_string()
        } else if pkg_id == self.package_id {
            format!("{}.{}", module, name)
        } else {
            format!("{}:{}.{}", pkg_id, module, name)
        }
    }
}

/// Dialect-1 resolver: names come either inline or interned.
pub struct Resolver1<'a> {
    pub base: ResolverBase<'a>,
}

impl<'a> Resolver1<'a> {
    pub fn new(package_id: &'a str, interned: &'a InternedTables) -> Self {
        Self {
            base: ResolverBase::new(package_id, interned),
        }
    }

    pub fn resolve_package_ref(&self, pkg_ref: Option<&daml_lf1::PackageRef>) -> String {
        use daml_lf1::package_ref::Sum;
        match pkg_ref.and_then(|p| p.sum.as_ref()) {
            Some(Sum::Self_(_)) => self.base.package_id.to_string(),
            Some(Sum::PackageIdStr(s)) => s.clone(),
            Some(Sum::PackageIdInternedStr(i)) => self.base.interned_str(*i),
            None => "<pkg:unknown>".to_string(),
        }
    }

    pub fn resolve_module_ref(&self, module_ref: Option<&daml_lf1::ModuleRef>) -> ResolvedName {
        use daml_lf1::module_ref::ModuleName;
        let package_id = self.resolve_package_ref(module_ref.and_then(|m| m.package_ref.as_ref()));
        let module = match module_ref.and_then(|m| m.module_name.as_ref()) {
            Some(ModuleName::ModuleNameDname(dname)) => dname.segments.join("."),
            Some(ModuleName::ModuleNameInternedDname(i)) => self.base.interned_dname(*i),
            None => "<module>".to_string(),
        };
        ResolvedName {
            package_id,
            module,
            name: String::new(),
        }
    }

    pub fn resolve_type_con(&self, tycon: &daml_lf1::TypeConName) -> ResolvedName {
        use daml_lf1::type_con_name::Name;
        let module = self.resolve_module_ref(tycon.module.as_ref());
        let name = match tycon.name.as_ref() {
            Some(Name::NameDname(dname)) => dname.segments.join("."),
            Some(Name::NameInternedDname(i)) => self.base.interned_dname(*i),
            None => "<tycon>".to_string(),
        };
        ResolvedName {
            package_id: module.package_id,
            module: module.module,
            name,
        }
    }

    pub fn resolve_val_name(&self, val: &daml_lf1::ValName) -> ResolvedName {
        let module = self.resolve_module_ref(val.module.as_ref());
        let name = if !val.name_dname.is_empty() {
            val.name_dname.join(".")
        } else {
            self.base.interned_dname(val.name_interned_dname)
        };
        ResolvedName {
            package_id: module.package_id,
            module: module.module,
            name,
        }
    }
}

/// Dialect-2 resolver: names are always interned; package references gain a
/// third form via the per-package imports table.
pub struct Resolver2<'a> {
    pub base: ResolverBase<'a>,
}

impl<'a> Resolver2<'a> {
    pub fn new(package_id: &'a str, interned: &'a InternedTables) -> Self {
        Self {
            base: ResolverBase::new(package_id, interned),
        }
    }

    pub fn resolve_package_id(&self, pkg_id: Option<&daml_lf2::SelfOrImportedPackageId>) -> String {
        use daml_lf2::self_or_imported_package_id::Sum;
        match pkg_id.and_then(|p| p.sum.as_ref()) {
            Some(Sum::SelfPackageId(_)) => self.base.package_id.to_string(),
            Some(Sum::ImportedPackageIdInternedStr(i)) => self.base.interned_str(*i),
            Some(Sum::PackageImportId(i)) => match usize::try_from(*i) {
                Ok(idx) if idx < self.base.interned.imports.len() => {
                    self.base.interned.imports[idx].clone()
                }
                _ => format!("<import:{}>", i),
            },
            None => "<pkg:unknown>".to_string(),
        }
    }

    pub fn resolve_module_id(&self, module_id: Option<&daml_lf2::ModuleId>) -> ResolvedName {
        let package_id = self.resolve_package_id(module_id.and_then(|m| m.package_id.as_ref()));
        let module = match module_id {
            Some(m) => self.base.interned_dname(m.module_name_interned_dname),
            None => "<module>".to_string(),
        };
        ResolvedName {
            package_id,
            module,
            name: String::new(),
        }
    }

    pub fn resolve_type_con(&self, tycon: &daml_lf2::TypeConId) -> ResolvedName {
        let module = self.resolve_module_id(tycon.module.as_ref());
        ResolvedName {
            package_id: module.package_id,
            module: module.module,
            name: self.base.interned_dname(tycon.name_interned_dname),
        }
    }

    pub fn resolve_val_name(&self, val: &daml_lf2::ValueId) -> ResolvedName {
        let module = self.resolve_module_id(val.module.as_ref());
        ResolvedName {
            package_id: module.package_id,
            module: module.module,
            name: self.base.interned_dname(val.name_interned_dname),
        }
    }
}
