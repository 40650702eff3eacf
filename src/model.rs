//! Finding model shared by rules, reports and the CLI.
//!
//! A [`Finding`] is an immutable record produced by a rule and finalized by
//! the engine (which assigns a fingerprint when the rule did not). Reports
//! serialize findings as-is, so field order here is the JSON field order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::ir::Location;

/// Finding severity, ordered LOW < MEDIUM < HIGH < CRITICAL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "CRITICAL")]
    Critical,
}

impl Severity {
    /// Numeric rank used for threshold comparisons (`--severity`, `--fail-on`).
    pub fn rank(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// How confident a rule is that the finding is real.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "LOW",
            Confidence::Medium => "MEDIUM",
            Confidence::High => "HIGH",
        };
        write!(f, "{}", s)
    }
}

/// Supporting evidence attached to a finding, pointing back into the
/// decoded payload via an opaque `lf_ref` handle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Evidence kind: "template", "choice", "update", "key", "expr".
    pub kind: String,
    /// Short human note ("controllers expression").
    pub note: String,
    /// Opaque handle into the source payload, if any.
    pub lf_ref: Option<String>,
}

impl Evidence {
    pub fn new(kind: &str, note: &str, lf_ref: Option<String>) -> Self {
        Self {
            kind: kind.to_string(),
            note: note.to_string(),
            lf_ref,
        }
    }
}

/// A single scanner finding.
///
/// Metadata keys are sorted (BTreeMap) so serialization and fingerprinting
/// are deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule id, e.g. `DAML-AUTH-001`.
    pub id: String,
    /// Rule title.
    pub title: String,
    pub severity: Severity,
    pub confidence: Confidence,
    /// Rule category: "auth", "lifecycle", "privacy", "key", "determinism".
    pub category: String,
    /// Finding-specific message.
    pub message: String,
    pub location: Location,
    pub evidence: Vec<Evidence>,
    /// Related locations (secondary sites involved in the finding).
    pub related: Vec<Location>,
    pub metadata: BTreeMap<String, String>,
    /// Stable content-derived fingerprint; assigned by the engine when the
    /// rule left it empty.
    pub fingerprint: Option<String>,
}

impl Finding {
    /// Minimal constructor; evidence/metadata are filled in by builders below.
    pub fn new(
        id: &str,
        title: &str,
        severity: Severity,
        confidence: Confidence,
        category: &str,
        message: &str,
        location: Location,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            severity,
            confidence,
            category: category.to_string(),
            message: message.to_string(),
            location,
            evidence: Vec::new(),
            related: Vec::new(),
            metadata: BTreeMap::new(),
            fingerprint: None,
        }
    }

    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
        assert_eq!(Severity::Critical.rank(), 4);
    }

    #[test]
    fn test_severity_round_trip() {
        for s in ["LOW", "MEDIUM", "HIGH", "CRITICAL"] {
            let sev: Severity = s.parse().unwrap();
            assert_eq!(sev.to_string(), s);
        }
        assert!("bogus".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_parse_is_case_insensitive() {
        assert_eq!("medium".parse::<Severity>().unwrap(), Severity::Medium);
    }

    #[test]
    fn test_finding_serializes_with_nulls() {
        let f = Finding::new(
            "DAML-AUTH-001",
            "t",
            Severity::Medium,
            Confidence::Medium,
            "auth",
            "m",
            Location::new("Main", "Choice Transfer"),
        );
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["severity"], "MEDIUM");
        assert!(json["fingerprint"].is_null());
        assert!(json["location"]["span"].is_null());
    }
}
