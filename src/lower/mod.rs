//! IR lowering.
//!
//! Two parallel lowering passes translate the dialect-specific wire shapes
//! into the single IR of [`crate::ir`]. The wire schemas are genuinely
//! different oneof layouts, so no attempt is made to unify them; instead
//! each dialect gets a small lowerer over its own resolver, and dispatch
//! happens once per package here.
//!
//! Invariants shared by both passes:
//! - multi-parameter lambdas lower into right-nested single-parameter `lam`
//!   chains;
//! - `cons` chains with a `nil` tail flatten eagerly into `list` nodes;
//! - `let`/block bindings become `binding` children, environment extended
//!   left to right;
//! - wire source spans are 0-indexed, IR spans are 1-indexed;
//! - a type environment follows binders so `var` nodes carry their binding
//!   type.

pub mod v1;
pub mod v2;

use std::collections::HashMap;

use crate::ir::{Package, Program, Type};
use crate::lf::decoder::{LfPackage, PackageBody};

/// Binding-name → type environment threaded through expression lowering.
pub(crate) type TypeEnv = HashMap<String, Type>;

/// Lower every decoded package into one [`Program`].
pub fn lower_packages(packages: &[LfPackage]) -> Program {
    let mut out = Vec::with_capacity(packages.len());
    for pkg in packages {
        let modules = match &pkg.body {
            PackageBody::V1(wire) => v1::lower_modules(pkg, wire),
            PackageBody::V2(wire) => v2::lower_modules(pkg, wire),
        };
        out.push(Package {
            package_id: pkg.package_id.clone(),
            name: pkg.name.clone(),
            version: pkg.version.clone(),
            lf_major: pkg.lf_version.major,
            modules,
            lf_ref: Some(format!("pkg:{}", pkg.package_id)),
        });
    }
    Program { packages: out }
}
