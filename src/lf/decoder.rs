//! Payload decoding.
//!
//! For each `.dalf` blob: verify the envelope (hash function, payload hash),
//! pick the dialect from the payload oneof, validate the language version,
//! bound the wire structure, and parse the package under the matching
//! schema. The package id is the declared hex hash when the envelope
//! carries one (verified), else the computed SHA-256 of the payload bytes.

use prost::Message;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::lf::archive::DalfEntry;
use crate::lf::compat::{is_supported, normalize_version, LfVersion};
use crate::lf::error::LfError;
use crate::lf::limits::DecodeLimits;
use crate::lf::proto::daml_lf::{archive_payload, Archive, ArchivePayload, HashFunction};
use crate::lf::proto::{daml_lf1, daml_lf2};
use crate::lf::resolve::InternedTables;
use crate::lf::structure::check_structure;

/// The parsed package body, still in wire shape.
#[derive(Clone, Debug, PartialEq)]
pub enum PackageBody {
    V1(daml_lf1::Package),
    V2(daml_lf2::Package),
}

/// A fully decoded payload: identity, metadata, interning tables and the
/// dialect-tagged package body, ready for lowering.
#[derive(Clone, Debug, PartialEq)]
pub struct LfPackage {
    pub package_id: String,
    /// Package name from metadata (empty when absent).
    pub name: String,
    /// Package version from metadata (empty when absent).
    pub version: String,
    pub lf_version: LfVersion,
    /// Path of the entry inside the DAR.
    pub dalf_path: String,
    pub interned: InternedTables,
    pub body: PackageBody,
}

/// Decode one `.dalf` entry.
pub fn decode_dalf(entry: &DalfEntry, limits: &DecodeLimits) -> Result<LfPackage, LfError> {
    let archive = Archive::decode(entry.raw.as_slice())
        .map_err(|e| LfError::MalformedArchive(format!("envelope decode failed: {}", e)))?;

    if archive.hash_function != HashFunction::Sha256 as i32 {
        return Err(LfError::MalformedArchive(
            "unsupported hash function in envelope".to_string(),
        ));
    }
    if archive.payload.is_empty() {
        return Err(LfError::MalformedArchive(
            "envelope payload missing".to_string(),
        ));
    }
    if archive.payload.len() as u64 > limits.max_archive_payload_bytes {
        return Err(LfError::InputLimit(format!(
            "archive payload {} bytes exceeds limit {}",
            archive.payload.len(),
            limits.max_archive_payload_bytes
        )));
    }

    let computed = hex::encode(Sha256::digest(&archive.payload));
    if !archive.hash.is_empty() && archive.hash != computed {
        return Err(LfError::MalformedArchive(
            "payload hash mismatch".to_string(),
        ));
    }
    let package_id = if archive.hash.is_empty() {
        computed
    } else {
        archive.hash.clone()
    };

    let payload = ArchivePayload::decode(archive.payload.as_slice())
        .map_err(|e| LfError::MalformedArchive(format!("payload decode failed: {}", e)))?;

    let (major, package_bytes) = match &payload.sum {
        Some(archive_payload::Sum::DamlLf1(bytes)) => (1u32, bytes),
        Some(archive_payload::Sum::DamlLf2(bytes)) => (2u32, bytes),
        None => {
            return Err(LfError::MalformedArchive(
                "unsupported payload variant".to_string(),
            ));
        }
    };
    if package_bytes.is_empty() {
        return Err(LfError::MalformedArchive(
            "payload missing package bytes".to_string(),
        ));
    }
    if package_bytes.len() as u64 > limits.max_package_bytes {
        return Err(LfError::InputLimit(format!(
            "package {} bytes exceeds limit {}",
            package_bytes.len(),
            limits.max_package_bytes
        )));
    }

    let patch = u32::try_from(payload.patch).ok();
    let mut version = normalize_version(major, &payload.minor, patch)?;
    if !is_supported(&version) {
        return Err(LfError::UnsupportedVersion(version.short()));
    }

    check_structure(package_bytes, limits)?;

    let body = match major {
        1 => match daml_lf1::Package::decode(package_bytes.as_slice()) {
            Ok(pkg) => PackageBody::V1(pkg),
            // Known shipping quirk: some daml-prim payloads are labelled
            // dialect 1 but carry a dialect-2 package. Accept those as 2.1;
            // every other dialect-1 parse failure surfaces.
            Err(v1_err) => match daml_lf2::Package::decode(package_bytes.as_slice()) {
                Ok(pkg2) => {
                    let interned = extract_tables_v2(&pkg2);
                    let (name, _) = extract_metadata_v2(&pkg2, &interned);
                    if name == "daml-prim" {
                        warn!(entry = %entry.path, "dialect-1 payload parsed as dialect-2 daml-prim");
                        version = LfVersion::new(2, 1);
                        PackageBody::V2(pkg2)
                    } else {
                        return Err(LfError::Decode(format!(
                            "dialect-1 package decode failed: {}",
                            v1_err
                        )));
                    }
                }
                Err(_) => {
                    return Err(LfError::Decode(format!(
                        "dialect-1 package decode failed: {}",
                        v1_err
                    )));
                }
            },
        },
        _ => match daml_lf2::Package::decode(package_bytes.as_slice()) {
            Ok(pkg) => PackageBody::V2(pkg),
            Err(e) => {
                return Err(LfError::Decode(format!(
                    "dialect-2 package decode failed: {}",
                    e
                )));
            }
        },
    };

    let interned = match &body {
        PackageBody::V1(pkg) => extract_tables_v1(pkg),
        PackageBody::V2(pkg) => extract_tables_v2(pkg),
    };
    let (name, pkg_version) = match &body {
        PackageBody::V1(pkg) => extract_metadata_v1(pkg, &interned),
        PackageBody::V2(pkg) => extract_metadata_v2(pkg, &interned),
    };

    debug!(
        entry = %entry.path,
        package = %name,
        lf_version = %version.short(),
        "decoded package"
    );

    Ok(LfPackage {
        package_id,
        name,
        version: pkg_version,
        lf_version: version,
        dalf_path: entry.path.clone(),
        interned,
        body,
    })
}

fn join_dotted(segments: &[i32], strings: &[String]) -> String {
    segments
        .iter()
        .filter_map(|&i| usize::try_from(i).ok())
        .filter_map(|i| strings.get(i))
        .cloned()
        .collect::<Vec<_>>()
        .join(".")
}

fn extract_tables_v1(pkg: &daml_lf1::Package) -> InternedTables {
    let strings = pkg.interned_strings.clone();
    let dotted_names = pkg
        .interned_dotted_names
        .iter()
        .map(|d| join_dotted(&d.segments_interned_str, &strings))
        .collect();
    InternedTables {
        strings,
        dotted_names,
        imports: Vec::new(),
    }
}

fn extract_tables_v2(pkg: &daml_lf2::Package) -> InternedTables {
    let strings = pkg.interned_strings.clone();
    let dotted_names = pkg
        .interned_dotted_names
        .iter()
        .map(|d| join_dotted(&d.segments_interned_str, &strings))
        .collect();
    let imports = match &pkg.imports_sum {
        Some(daml_lf2::package::ImportsSum::PackageImports(imports)) => {
            imports.imported_packages.clone()
        }
        None => Vec::new(),
    };
    InternedTables {
        strings,
        dotted_names,
        imports,
    }
}

fn metadata_string(idx: i32, interned: &InternedTables) -> String {
    usize::try_from(idx)
        .ok()
        .and_then(|i| interned.strings.get(i))
        .cloned()
        .unwrap_or_default()
}

fn extract_metadata_v1(pkg: &daml_lf1::Package, interned: &InternedTables) -> (String, String) {
    match &pkg.metadata {
        Some(meta) => (
            metadata_string(meta.name_interned_str, interned),
            metadata_string(meta.version_interned_str, interned),
        ),
        None => (String::new(), String::new()),
    }
}

fn extract_metadata_v2(pkg: &daml_lf2::Package, interned: &InternedTables) -> (String, String) {
    match &pkg.metadata {
        Some(meta) => (
            metadata_string(meta.name_interned_str, interned),
            metadata_string(meta.version_interned_str, interned),
        ),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(payload: &[u8], hash: Option<String>) -> Vec<u8> {
        Archive {
            hash_function: HashFunction::Sha256 as i32,
            payload: payload.to_vec(),
            hash: hash.unwrap_or_default(),
        }
        .encode_to_vec()
    }

    fn minimal_v1_payload(minor: &str) -> Vec<u8> {
        let pkg = daml_lf1::Package {
            interned_strings: vec!["Main".to_string()],
            interned_dotted_names: vec![daml_lf1::InternedDottedName {
                segments_interned_str: vec![0],
            }],
            modules: vec![daml_lf1::Module {
                name: Some(daml_lf1::module::Name::NameInternedDname(0)),
                values: vec![],
                templates: vec![],
            }],
            ..Default::default()
        };
        ArchivePayload {
            minor: minor.to_string(),
            patch: 0,
            sum: Some(archive_payload::Sum::DamlLf1(pkg.encode_to_vec())),
        }
        .encode_to_vec()
    }

    #[test]
    fn test_decodes_minimal_v1() {
        let payload = minimal_v1_payload("14");
        let computed = hex::encode(Sha256::digest(&payload));
        let entry = DalfEntry {
            path: "a.dalf".to_string(),
            raw: envelope(&payload, Some(computed.clone())),
        };
        let decoded = decode_dalf(&entry, &DecodeLimits::default()).unwrap();
        assert_eq!(decoded.package_id, computed);
        assert_eq!(decoded.lf_version, LfVersion::new(1, 14));
        assert!(matches!(decoded.body, PackageBody::V1(_)));
    }

    #[test]
    fn test_package_id_from_computed_hash_when_undeclared() {
        let payload = minimal_v1_payload("14");
        let computed = hex::encode(Sha256::digest(&payload));
        let entry = DalfEntry {
            path: "a.dalf".to_string(),
            raw: envelope(&payload, None),
        };
        let decoded = decode_dalf(&entry, &DecodeLimits::default()).unwrap();
        assert_eq!(decoded.package_id, computed);
    }

    #[test]
    fn test_rejects_hash_mismatch() {
        let payload = minimal_v1_payload("14");
        let entry = DalfEntry {
            path: "a.dalf".to_string(),
            raw: envelope(&payload, Some("00".repeat(32))),
        };
        assert!(matches!(
            decode_dalf(&entry, &DecodeLimits::default()).unwrap_err(),
            LfError::MalformedArchive(_)
        ));
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let payload = minimal_v1_payload("9");
        let entry = DalfEntry {
            path: "a.dalf".to_string(),
            raw: envelope(&payload, None),
        };
        assert!(matches!(
            decode_dalf(&entry, &DecodeLimits::default()).unwrap_err(),
            LfError::UnsupportedVersion(_)
        ));
    }

    #[test]
    fn test_rejects_missing_payload() {
        let entry = DalfEntry {
            path: "a.dalf".to_string(),
            raw: envelope(&[], None),
        };
        assert!(matches!(
            decode_dalf(&entry, &DecodeLimits::default()).unwrap_err(),
            LfError::MalformedArchive(_)
        ));
    }

    #[test]
    fn test_rejects_oversized_package() {
        let payload = minimal_v1_payload("14");
        let entry = DalfEntry {
            path: "a.dalf".to_string(),
            raw: envelope(&payload, None),
        };
        let limits = DecodeLimits {
            max_package_bytes: 4,
            ..DecodeLimits::default()
        };
        assert!(matches!(
            decode_dalf(&entry, &limits).unwrap_err(),
            LfError::InputLimit(_)
        ));
    }
}
