//! Language version handling.
//!
//! The payload's `minor` field is free text that shipping compilers have
//! written as either `"14"` or `"1.14"`; both normalize to the same
//! [`LfVersion`]. The support matrix is intentionally explicit; update it
//! deliberately and keep the version-matrix test in sync.

use crate::lf::error::LfError;

/// A normalized `major.minor[.patch]` language version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LfVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl LfVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// `"major.minor"`, the key used against the support matrix.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    pub fn full(&self) -> String {
        match self.patch {
            Some(p) => format!("{}.{}.{}", self.major, self.minor, p),
            None => self.short(),
        }
    }
}

/// Supported language versions.
pub const SUPPORTED_VERSIONS: &[(u32, u32)] = &[
    (1, 6),
    (1, 7),
    (1, 8),
    (1, 11),
    (1, 14),
    (1, 15),
    (1, 17),
    (2, 1),
];

/// Normalize a payload `minor` text field against the envelope major.
/// Accepts `"N"` and `"M.N"`; a major in the text must match `major`.
pub fn normalize_version(
    major: u32,
    minor_text: &str,
    patch: Option<u32>,
) -> Result<LfVersion, LfError> {
    if minor_text.is_empty() {
        return Err(LfError::UnsupportedVersion(
            "missing Daml-LF minor version".to_string(),
        ));
    }

    let parts: Vec<&str> = minor_text.split('.').collect();
    match parts.as_slice() {
        [minor] => {
            let minor = parse_part(minor, minor_text)?;
            Ok(LfVersion { major, minor, patch })
        }
        [text_major, minor] => {
            let text_major = parse_part(text_major, minor_text)?;
            let minor = parse_part(minor, minor_text)?;
            if text_major != major {
                return Err(LfError::UnsupportedVersion(format!(
                    "version major mismatch: payload {} vs envelope {}",
                    text_major, major
                )));
            }
            Ok(LfVersion { major, minor, patch })
        }
        _ => Err(LfError::UnsupportedVersion(format!(
            "unrecognized Daml-LF version format: {}",
            minor_text
        ))),
    }
}

fn parse_part(part: &str, whole: &str) -> Result<u32, LfError> {
    part.parse::<u32>().map_err(|_| {
        LfError::UnsupportedVersion(format!("unrecognized Daml-LF version format: {}", whole))
    })
}

pub fn is_supported(version: &LfVersion) -> bool {
    SUPPORTED_VERSIONS
        .iter()
        .any(|&(maj, min)| maj == version.major && min == version.minor)
}

/// Supported versions in ascending order, as `major.minor` strings.
pub fn supported_versions() -> Vec<String> {
    SUPPORTED_VERSIONS
        .iter()
        .map(|&(maj, min)| format!("{}.{}", maj, min))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_minor() {
        let v = normalize_version(1, "14", None).unwrap();
        assert_eq!(v, LfVersion::new(1, 14));
        assert_eq!(v.short(), "1.14");
    }

    #[test]
    fn test_dotted_minor() {
        let v = normalize_version(2, "2.1", Some(0)).unwrap();
        assert_eq!(v.major, 2);
        assert_eq!(v.minor, 1);
        assert_eq!(v.full(), "2.1.0");
    }

    #[test]
    fn test_major_mismatch_rejected() {
        assert!(normalize_version(1, "2.1", None).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(normalize_version(1, "", None).is_err());
        assert!(normalize_version(1, "a.b", None).is_err());
        assert!(normalize_version(1, "1.2.3", None).is_err());
    }

    #[test]
    fn test_support_matrix() {
        assert!(is_supported(&LfVersion::new(1, 17)));
        assert!(is_supported(&LfVersion::new(2, 1)));
        assert!(!is_supported(&LfVersion::new(1, 9)));
        assert!(!is_supported(&LfVersion::new(2, 0)));
        assert_eq!(supported_versions().len(), 8);
    }
}
