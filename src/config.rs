//! Configuration file support.
//!
//! Optional TOML file with `[scanner]`, `[rules]` and `[baseline]`
//! sections. Unknown keys are ignored; a file that does not parse, or
//! carries an invalid value, is a hard error (usage failure, exit 2);
//! silently scanning with defaults would hide a typo'd CI config.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Severity;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Unreadable(String, std::io::Error),
    #[error("failed to parse config {0}: {1}")]
    Parse(String, toml::de::Error),
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// `allow`/`deny` accept either a comma-separated string or an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum IdList {
    Csv(String),
    List(Vec<String>),
}

impl IdList {
    fn into_set(self) -> Option<BTreeSet<String>> {
        let items: BTreeSet<String> = match self {
            IdList::Csv(csv) => csv
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            IdList::List(list) => list
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct ScannerSection {
    format: Option<String>,
    severity: Option<String>,
    fail_on: Option<String>,
    ci: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct RulesSection {
    allow: Option<IdList>,
    deny: Option<IdList>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct BaselineSection {
    path: Option<String>,
    /// `true` writes to `path`; a string writes to that path.
    write: Option<toml::Value>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct RawConfig {
    scanner: ScannerSection,
    rules: RulesSection,
    baseline: BaselineSection,
}

/// Resolved configuration, merged under CLI flags by the caller.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub rule_allowlist: Option<BTreeSet<String>>,
    pub rule_denylist: Option<BTreeSet<String>>,
    pub min_severity: Option<Severity>,
    pub fail_on: Option<Severity>,
    pub baseline: Option<String>,
    pub write_baseline: Option<String>,
    pub format: Option<String>,
    pub ci: Option<bool>,
}

/// Load configuration from `path`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Unreadable(display.clone(), e))?;
    let raw: RawConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(display, e))?;

    let min_severity = parse_severity(raw.scanner.severity.as_deref())?;
    let fail_on = parse_severity(raw.scanner.fail_on.as_deref())?;
    if let Some(format) = raw.scanner.format.as_deref() {
        if !matches!(format, "json" | "sarif" | "both") {
            return Err(ConfigError::InvalidValue(format!(
                "format must be json, sarif or both, got {}",
                format
            )));
        }
    }

    let write_baseline = match raw.baseline.write {
        Some(toml::Value::Boolean(true)) => raw.baseline.path.clone(),
        Some(toml::Value::Boolean(false)) | None => None,
        Some(toml::Value::String(path)) => Some(path),
        Some(other) => {
            return Err(ConfigError::InvalidValue(format!(
                "baseline.write must be a boolean or path, got {}",
                other
            )));
        }
    };

    Ok(Config {
        rule_allowlist: raw.rules.allow.and_then(IdList::into_set),
        rule_denylist: raw.rules.deny.and_then(IdList::into_set),
        min_severity,
        fail_on,
        baseline: raw.baseline.path,
        write_baseline,
        format: raw.scanner.format,
        ci: raw.scanner.ci,
    })
}

fn parse_severity(value: Option<&str>) -> Result<Option<Severity>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse::<Severity>()
            .map(Some)
            .map_err(ConfigError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("daml-sast.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[scanner]
format = "sarif"
severity = "MEDIUM"
fail_on = "HIGH"
ci = true

[rules]
allow = ["DAML-AUTH-001"]
deny = "DAML-PRIV-001"

[baseline]
path = "baseline.json"
write = true
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.format.as_deref(), Some("sarif"));
        assert_eq!(cfg.min_severity, Some(Severity::Medium));
        assert_eq!(cfg.fail_on, Some(Severity::High));
        assert_eq!(cfg.ci, Some(true));
        assert!(cfg.rule_allowlist.unwrap().contains("DAML-AUTH-001"));
        assert!(cfg.rule_denylist.unwrap().contains("DAML-PRIV-001"));
        assert_eq!(cfg.baseline.as_deref(), Some("baseline.json"));
        assert_eq!(cfg.write_baseline.as_deref(), Some("baseline.json"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[scanner]
format = "json"
frobnicate = 9

[shiny_new_section]
x = 1
"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_invalid_severity_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[scanner]\nseverity = \"SCARY\"\n");
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::InvalidValue(_)
        ));
    }

    #[test]
    fn test_invalid_format_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[scanner]\nformat = \"xml\"\n");
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::InvalidValue(_)
        ));
    }

    #[test]
    fn test_broken_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[scanner\nformat=");
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::Parse(_, _)
        ));
    }

    #[test]
    fn test_write_as_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[baseline]\nwrite = \"other.json\"\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.write_baseline.as_deref(), Some("other.json"));
        assert!(cfg.baseline.is_none());
    }
}
