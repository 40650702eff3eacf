//! Versioned baseline files.
//!
//! A baseline records the fingerprints of accepted findings so CI only
//! flags new ones. The file is versioned by both the tool and the rule set;
//! either mismatching means the stored fingerprints may no longer line up
//! with what the scanner produces, so loading fails instead of silently
//! suppressing the wrong things. Legacy bare-list baselines are rejected
//! with an upgrade message.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::registry::RULES_VERSION;

#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("failed to read baseline {0}: {1}")]
    Unreadable(String, std::io::Error),
    #[error("failed to parse baseline {0}: {1}")]
    Parse(String, serde_json::Error),
    #[error(
        "baseline {0} is a legacy fingerprint list; re-generate it with --write-baseline to upgrade"
    )]
    LegacyFormat(String),
    #[error("baseline {0} is missing version metadata")]
    MissingVersions(String),
    #[error("baseline {0} was written by {1} (rules {2}); current is {3} (rules {4}); re-generate it")]
    VersionMismatch(String, String, String, String, String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BaselineFile {
    #[serde(default)]
    tool_version: Option<String>,
    #[serde(default)]
    rules_version: Option<String>,
    #[serde(default)]
    fingerprints: Vec<String>,
}

fn tool_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Load a baseline, enforcing version metadata.
pub fn load_baseline(path: &Path) -> Result<BTreeSet<String>, BaselineError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| BaselineError::Unreadable(display.clone(), e))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| BaselineError::Parse(display.clone(), e))?;
    if value.is_array() {
        return Err(BaselineError::LegacyFormat(display));
    }

    let file: BaselineFile = serde_json::from_value(value)
        .map_err(|e| BaselineError::Parse(display.clone(), e))?;
    let (Some(tool), Some(rules)) = (file.tool_version, file.rules_version) else {
        return Err(BaselineError::MissingVersions(display));
    };
    if tool != tool_version() || rules != RULES_VERSION {
        return Err(BaselineError::VersionMismatch(
            display,
            tool,
            rules,
            tool_version().to_string(),
            RULES_VERSION.to_string(),
        ));
    }

    Ok(file.fingerprints.into_iter().collect())
}

/// Write a baseline with current version metadata.
pub fn write_baseline(path: &Path, fingerprints: &[String]) -> std::io::Result<()> {
    let file = BaselineFile {
        tool_version: Some(tool_version().to_string()),
        rules_version: Some(RULES_VERSION.to_string()),
        fingerprints: fingerprints.to_vec(),
    };
    let rendered = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, format!("{}\n", rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.json");
        write_baseline(&path, &["aa".to_string(), "bb".to_string()]).unwrap();
        let loaded = load_baseline(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains("aa"));
    }

    #[test]
    fn test_legacy_list_rejected_with_upgrade_hint() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.json");
        std::fs::write(&path, "[\"aa\", \"bb\"]").unwrap();
        let err = load_baseline(&path).unwrap_err();
        assert!(matches!(err, BaselineError::LegacyFormat(_)));
        assert!(err.to_string().contains("--write-baseline"));
    }

    #[test]
    fn test_missing_versions_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.json");
        std::fs::write(&path, "{\"fingerprints\": [\"aa\"]}").unwrap();
        assert!(matches!(
            load_baseline(&path).unwrap_err(),
            BaselineError::MissingVersions(_)
        ));
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("baseline.json");
        std::fs::write(
            &path,
            "{\"tool_version\": \"0.0.0\", \"rules_version\": \"0\", \"fingerprints\": []}",
        )
        .unwrap();
        assert!(matches!(
            load_baseline(&path).unwrap_err(),
            BaselineError::VersionMismatch(..)
        ));
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");
        assert!(matches!(
            load_baseline(&path).unwrap_err(),
            BaselineError::Unreadable(_, _)
        ));
    }
}
