//! Line-based suppression files.
//!
//! Format, one suppression per line:
//!
//! ```text
//! rule_id [module_glob] [definition_glob] [fingerprint]
//! ```
//!
//! Blank lines and `#` comments are allowed; an inline `#` truncates the
//! line. Globs are case-sensitive, filename-style. Missing fields widen the
//! match (a bare rule id suppresses the rule everywhere).

use std::path::Path;

use globset::{Glob, GlobMatcher};
use tracing::warn;

use crate::model::Finding;

/// One parsed suppression line.
pub struct Suppression {
    pub rule_id: String,
    module: Option<GlobMatcher>,
    definition: Option<GlobMatcher>,
    pub fingerprint: Option<String>,
}

impl Suppression {
    fn matches(&self, finding: &Finding) -> bool {
        if self.rule_id != finding.id {
            return false;
        }
        if let Some(module) = &self.module {
            if !module.is_match(&finding.location.module) {
                return false;
            }
        }
        if let Some(definition) = &self.definition {
            if !definition.is_match(&finding.location.definition) {
                return false;
            }
        }
        if let (Some(wanted), Some(actual)) = (&self.fingerprint, &finding.fingerprint) {
            if wanted != actual {
                return false;
            }
        }
        true
    }
}

fn compile_glob(pattern: &str, line_no: usize) -> Option<GlobMatcher> {
    match Glob::new(pattern) {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            warn!(pattern, line = line_no, "ignoring unparseable suppression glob: {}", e);
            None
        }
    }
}

/// Load suppressions from `path`. A missing file is an empty list.
pub fn load_suppressions(path: &Path) -> std::io::Result<Vec<Suppression>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    let mut suppressions = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let mut parts = line.split_whitespace();
        let Some(rule_id) = parts.next() else {
            continue;
        };
        suppressions.push(Suppression {
            rule_id: rule_id.to_string(),
            module: parts.next().and_then(|p| compile_glob(p, idx + 1)),
            definition: parts.next().and_then(|p| compile_glob(p, idx + 1)),
            fingerprint: parts.next().map(String::from),
        });
    }
    Ok(suppressions)
}

/// Drop findings matched by any suppression.
pub fn apply_suppressions(findings: Vec<Finding>, suppressions: &[Suppression]) -> Vec<Finding> {
    findings
        .into_iter()
        .filter(|f| !suppressions.iter().any(|s| s.matches(f)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Location;
    use crate::model::{Confidence, Severity};
    use tempfile::TempDir;

    fn finding(id: &str, module: &str, definition: &str) -> Finding {
        Finding::new(
            id,
            "t",
            Severity::Medium,
            Confidence::Medium,
            "auth",
            "m",
            Location::new(module, definition),
        )
    }

    fn load(content: &str) -> Vec<Suppression> {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("suppressions.txt");
        std::fs::write(&path, content).unwrap();
        load_suppressions(&path).unwrap()
    }

    #[test]
    fn test_bare_rule_id_suppresses_everywhere() {
        let sups = load("DAML-AUTH-001\n");
        let kept = apply_suppressions(
            vec![
                finding("DAML-AUTH-001", "Main", "Choice A"),
                finding("DAML-AUTH-002", "Main", "Choice A"),
            ],
            &sups,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "DAML-AUTH-002");
    }

    #[test]
    fn test_module_glob() {
        let sups = load("DAML-AUTH-001 Main.*\n");
        let kept = apply_suppressions(
            vec![
                finding("DAML-AUTH-001", "Main.Sub", "Choice A"),
                finding("DAML-AUTH-001", "Other", "Choice A"),
            ],
            &sups,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].location.module, "Other");
    }

    #[test]
    fn test_definition_glob_and_fingerprint() {
        let sups = load("DAML-AUTH-001 Main* {Choice,Template}* feedface\n");
        let mut matching = finding("DAML-AUTH-001", "Main", "Choice A");
        matching.fingerprint = Some("feedface".to_string());
        let mut other_fp = finding("DAML-AUTH-001", "Main", "Choice A");
        other_fp.fingerprint = Some("deadbeef".to_string());
        let kept = apply_suppressions(vec![matching, other_fp], &sups);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].fingerprint.as_deref(), Some("deadbeef"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let sups = load("\n# full line comment\nDAML-AUTH-001 Main # trailing comment\n\n");
        assert_eq!(sups.len(), 1);
        assert_eq!(sups[0].rule_id, "DAML-AUTH-001");
        let kept = apply_suppressions(vec![finding("DAML-AUTH-001", "Main", "d")], &sups);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_glob_matching_is_case_sensitive() {
        let sups = load("DAML-AUTH-001 main*\n");
        let kept = apply_suppressions(vec![finding("DAML-AUTH-001", "Main", "d")], &sups);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let sups = load_suppressions(&tmp.path().join("nope.txt")).unwrap();
        assert!(sups.is_empty());
    }
}
