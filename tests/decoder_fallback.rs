//! The dialect-1 → dialect-2 fallback: a payload labelled dialect 1 whose
//! bytes only parse under the dialect-2 schema is accepted as 2.1 when its
//! metadata names `daml-prim`, and rejected otherwise.

mod common;

use daml_sast::lf::proto::daml_lf::archive_payload;
use daml_sast::lf::{decode_dalf, DalfEntry, DecodeLimits, LfError, LfVersion};
use prost::Message;

/// A dialect-2 package whose wire bytes cannot parse under the dialect-1
/// schema (the module name index collides with a message field there).
fn conflicting_v2_entry(name: &str) -> DalfEntry {
    let pkg = common::minimal_package_v2(name);
    // The builder pads index 0, so the module name index is non-zero and
    // lands on the wire; dialect 1 expects a submessage at that tag.
    assert!(pkg.modules[0].name_interned_dname != 0);

    let payload = common::payload_bytes(
        "14",
        archive_payload::Sum::DamlLf1(pkg.encode_to_vec()),
    );
    DalfEntry {
        path: format!("{}.dalf", name),
        raw: common::archive_bytes(&payload),
    }
}

#[test]
fn test_daml_prim_fallback_yields_v2_package() {
    let entry = conflicting_v2_entry("daml-prim");
    let decoded = decode_dalf(&entry, &DecodeLimits::default()).unwrap();
    assert_eq!(decoded.lf_version, LfVersion::new(2, 1));
    assert_eq!(decoded.name, "daml-prim");
}

#[test]
fn test_other_names_propagate_the_v1_error() {
    let entry = conflicting_v2_entry("totally-not-prim");
    let err = decode_dalf(&entry, &DecodeLimits::default()).unwrap_err();
    assert!(matches!(err, LfError::Decode(_)));
    assert!(err.to_string().contains("dialect-1"));
}
