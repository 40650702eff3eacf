//! Limit enforcement: any input past a documented bound fails before a
//! partial program can escape the decode pipeline.

mod common;

use daml_sast::lf::proto::daml_lf1 as v1;
use daml_sast::lf::{load_program, DecodeLimits, LfError};
use tempfile::TempDir;

fn limits(adjust: impl FnOnce(&mut DecodeLimits)) -> DecodeLimits {
    let mut limits = DecodeLimits::default();
    adjust(&mut limits);
    limits
}

#[test]
fn test_oversized_dalf_entry_rejected() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("big.dar");
    common::write_dar(&dar, &[("big.dalf", &[b'x'; 64][..])]);
    let err = load_program(&dar, &limits(|l| l.max_dalf_bytes = 16)).unwrap_err();
    assert!(matches!(err, LfError::InputLimit(_)));
}

#[test]
fn test_oversized_container_rejected() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("container.dar");
    common::dar_clean(&dar);
    let err = load_program(&dar, &limits(|l| l.max_dar_bytes = 8)).unwrap_err();
    assert!(matches!(err, LfError::InputLimit(_)));
}

#[test]
fn test_entry_count_rejected() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("many.dar");
    common::write_dar(&dar, &[("a.dalf", &b"a"[..]), ("b.dalf", &b"b"[..])]);
    let err = load_program(&dar, &limits(|l| l.max_dar_entries = 1)).unwrap_err();
    assert!(matches!(err, LfError::InputLimit(_)));
}

#[test]
fn test_proto_depth_rejected() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("deep.dar");

    let mut interner = common::Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TDeep");
    // signatories nested 256 applications deep
    let mut deep = common::expr_nil_party();
    for _ in 0..256 {
        deep = v1::Expr {
            location: None,
            sum: Some(v1::expr::Sum::App(Box::new(v1::App {
                fun: Some(Box::new(deep)),
                args: vec![],
            }))),
        };
    }
    let template = common::template_v1(&mut interner, template_dn, deep, vec![]);
    let pkg = common::package_v1(&mut interner, module_dn, vec![template], "deep", "1.0.0");
    common::write_dar(&dar, &[("deep.dalf", &common::archive_bytes_v1(&pkg, "14"))]);

    let err = load_program(&dar, &limits(|l| l.max_proto_depth = 64)).unwrap_err();
    assert!(matches!(err, LfError::StructureLimit(_)));
}

#[test]
fn test_proto_node_count_rejected() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("wide.dar");

    let mut interner = common::Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("TWide");
    let parties: Vec<String> = (0..128).map(|i| format!("P{}", i)).collect();
    let party_refs: Vec<&str> = parties.iter().map(String::as_str).collect();
    let signatories = common::expr_party_list(&mut interner, &party_refs);
    let template = common::template_v1(&mut interner, template_dn, signatories, vec![]);
    let pkg = common::package_v1(&mut interner, module_dn, vec![template], "wide", "1.0.0");
    common::write_dar(&dar, &[("wide.dalf", &common::archive_bytes_v1(&pkg, "14"))]);

    let err = load_program(&dar, &limits(|l| l.max_proto_nodes = 32)).unwrap_err();
    assert!(matches!(err, LfError::StructureLimit(_)));
}

#[test]
fn test_within_limits_loads() {
    let tmp = TempDir::new().unwrap();
    let dar = tmp.path().join("ok.dar");
    common::dar_clean(&dar);
    assert!(load_program(&dar, &DecodeLimits::default()).is_ok());
}
