//! Decode limits.
//!
//! Every size and complexity bound enforced by the archive extractor and the
//! payload decoder lives in one struct, constructed at startup and threaded
//! through the pipeline. Decoding untrusted archives on a CI runner must not
//! be usable as a denial-of-service vector, so all bounds are checked before
//! any analysis runs.

/// Size and structure bounds for DAR decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum size of the zip container on disk.
    pub max_dar_bytes: u64,
    /// Maximum cumulative declared uncompressed size of all entries.
    pub max_dar_uncompressed_bytes: u64,
    /// Maximum number of zip entries.
    pub max_dar_entries: usize,
    /// Maximum size of a single payload entry.
    pub max_dalf_bytes: u64,
    /// Maximum size of the inner archive payload message.
    pub max_archive_payload_bytes: u64,
    /// Maximum size of the serialized package message.
    pub max_package_bytes: u64,
    /// Maximum nesting depth of the package wire structure.
    pub max_proto_depth: usize,
    /// Maximum number of message nodes in the package wire structure.
    pub max_proto_nodes: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_dar_bytes: 200 * 1024 * 1024,
            max_dar_uncompressed_bytes: 300 * 1024 * 1024,
            max_dar_entries: 2048,
            max_dalf_bytes: 50 * 1024 * 1024,
            max_archive_payload_bytes: 50 * 1024 * 1024,
            max_package_bytes: 50 * 1024 * 1024,
            max_proto_depth: 200,
            max_proto_nodes: 500_000,
        }
    }
}

impl DecodeLimits {
    /// Defaults, with `DAML_SAST_MAX_*` environment overrides. Non-numeric
    /// or non-positive override values keep the default.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            max_dar_bytes: env_u64("DAML_SAST_MAX_DAR_BYTES", d.max_dar_bytes),
            max_dar_uncompressed_bytes: env_u64(
                "DAML_SAST_MAX_DAR_UNCOMPRESSED_BYTES",
                d.max_dar_uncompressed_bytes,
            ),
            max_dar_entries: env_usize("DAML_SAST_MAX_DAR_ENTRIES", d.max_dar_entries),
            max_dalf_bytes: env_u64("DAML_SAST_MAX_DALF_BYTES", d.max_dalf_bytes),
            max_archive_payload_bytes: env_u64(
                "DAML_SAST_MAX_ARCHIVE_PAYLOAD_BYTES",
                d.max_archive_payload_bytes,
            ),
            max_package_bytes: env_u64("DAML_SAST_MAX_PACKAGE_BYTES", d.max_package_bytes),
            max_proto_depth: env_usize("DAML_SAST_MAX_PROTO_DEPTH", d.max_proto_depth),
            max_proto_nodes: env_usize("DAML_SAST_MAX_PROTO_NODES", d.max_proto_nodes),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(v) if v > 0 => v,
            _ => default,
        },
        Err(_) => default,
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(v) if v > 0 => v,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = DecodeLimits::default();
        assert_eq!(limits.max_dar_entries, 2048);
        assert_eq!(limits.max_proto_depth, 200);
        assert_eq!(limits.max_proto_nodes, 500_000);
    }

    #[test]
    fn test_env_override_ignores_garbage() {
        // Not using real env vars here to keep tests parallel-safe; the
        // parsing helpers carry the policy.
        assert_eq!(
            "not-a-number".trim().parse::<u64>().ok().filter(|v| *v > 0),
            None
        );
    }
}
