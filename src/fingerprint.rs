//! Stable finding fingerprints.
//!
//! A fingerprint is the SHA-256 of a canonical JSON rendering of
//! `{id, module, definition, span, metadata}`: sorted keys, `,`/`:`
//! separators, `null` for a missing span. Same content, same fingerprint,
//! across runs and machines; baselines depend on this.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::model::Finding;

/// Compute the content fingerprint for a finding.
pub fn compute_fingerprint(finding: &Finding) -> String {
    let span = match &finding.location.span {
        Some(span) => json!({
            "start_line": span.start_line,
            "start_col": span.start_col,
            "end_line": span.end_line,
            "end_col": span.end_col,
        }),
        None => serde_json::Value::Null,
    };

    // serde_json's default map is BTree-backed, so object keys come out
    // sorted; metadata is a BTreeMap already.
    let payload = json!({
        "id": finding.id,
        "module": finding.location.module,
        "definition": finding.location.definition,
        "span": span,
        "metadata": finding.metadata,
    });
    let raw = serde_json::to_string(&payload).expect("fingerprint payload serializes");
    hex::encode(Sha256::digest(raw.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Location, SourceSpan};
    use crate::model::{Confidence, Severity};

    fn finding(module: &str, definition: &str) -> Finding {
        Finding::new(
            "DAML-AUTH-001",
            "t",
            Severity::Medium,
            Confidence::Medium,
            "auth",
            "m",
            Location::new(module, definition),
        )
    }

    #[test]
    fn test_stable_across_identical_findings() {
        let a = finding("Main", "Choice Transfer").with_metadata("template", "Main.T");
        let b = finding("Main", "Choice Transfer").with_metadata("template", "Main.T");
        assert_eq!(compute_fingerprint(&a), compute_fingerprint(&b));
    }

    #[test]
    fn test_any_field_change_changes_fingerprint() {
        let base = finding("Main", "Choice Transfer").with_metadata("template", "Main.T");
        let fp = compute_fingerprint(&base);

        let other_module = finding("Other", "Choice Transfer").with_metadata("template", "Main.T");
        assert_ne!(fp, compute_fingerprint(&other_module));

        let other_meta = finding("Main", "Choice Transfer").with_metadata("template", "Main.U");
        assert_ne!(fp, compute_fingerprint(&other_meta));

        let mut with_span = finding("Main", "Choice Transfer").with_metadata("template", "Main.T");
        with_span.location.span = Some(SourceSpan {
            file: None,
            start_line: Some(3),
            start_col: Some(1),
            end_line: Some(3),
            end_col: Some(20),
        });
        assert_ne!(fp, compute_fingerprint(&with_span));
    }

    #[test]
    fn test_message_does_not_affect_fingerprint() {
        let mut a = finding("Main", "Choice Transfer");
        let mut b = finding("Main", "Choice Transfer");
        a.message = "one wording".to_string();
        b.message = "another wording".to_string();
        assert_eq!(compute_fingerprint(&a), compute_fingerprint(&b));
    }

    #[test]
    fn test_metadata_order_is_irrelevant() {
        let a = finding("Main", "d")
            .with_metadata("template", "T")
            .with_metadata("choice", "C");
        let b = finding("Main", "d")
            .with_metadata("choice", "C")
            .with_metadata("template", "T");
        assert_eq!(compute_fingerprint(&a), compute_fingerprint(&b));
    }
}
