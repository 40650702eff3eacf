//! Every supported language version loads a minimal well-formed archive.

mod common;

use daml_sast::lf::{load_program, supported_versions, DecodeLimits};
use tempfile::TempDir;

#[test]
fn test_supported_versions_load() {
    let tmp = TempDir::new().unwrap();

    let mut interner = common::Interner::new();
    interner.s("_");
    interner.dname("_");
    let module_dn = interner.dname("Main");
    let template_dn = interner.dname("T");
    let signatories = common::expr_party_list(&mut interner, &["Alice"]);
    let template = common::template_v1(&mut interner, template_dn, signatories, vec![]);
    let v1_pkg = common::package_v1(&mut interner, module_dn, vec![template], "matrix", "1.0.0");
    let v2_pkg = common::minimal_package_v2("matrix");

    for version in supported_versions() {
        let (major, minor) = version.split_once('.').unwrap();
        let dar = tmp.path().join(format!("lf{}-{}.dar", major, minor));
        let archive = match major {
            "1" => common::archive_bytes_v1(&v1_pkg, minor),
            _ => common::archive_bytes_v2(&v2_pkg, minor),
        };
        common::write_dar(&dar, &[("pkg.dalf", &archive)]);

        let program = load_program(&dar, &DecodeLimits::default())
            .unwrap_or_else(|e| panic!("failed for version {}: {}", version, e));
        assert!(
            !program.packages.is_empty(),
            "no packages for version {}",
            version
        );
    }
}

#[test]
fn test_unsupported_minor_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let v2_pkg = common::minimal_package_v2("matrix");
    let dar = tmp.path().join("lf2-9.dar");
    common::write_dar(&dar, &[("pkg.dalf", &common::archive_bytes_v2(&v2_pkg, "9"))]);
    let err = load_program(&dar, &DecodeLimits::default()).unwrap_err();
    assert!(err.to_string().contains("unsupported"));
}

#[test]
fn test_dotted_minor_syntax_accepted() {
    let tmp = TempDir::new().unwrap();
    let v2_pkg = common::minimal_package_v2("matrix");
    let dar = tmp.path().join("lf2-dotted.dar");
    common::write_dar(
        &dar,
        &[("pkg.dalf", &common::archive_bytes_v2(&v2_pkg, "2.1"))],
    );
    let program = load_program(&dar, &DecodeLimits::default()).unwrap();
    assert_eq!(program.packages[0].lf_major, 2);
}
