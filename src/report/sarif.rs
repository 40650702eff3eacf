//! SARIF 2.1.0 report.
//!
//! One `runs[0]` element. Rule metadata is deduplicated by id from the
//! findings actually emitted; severities map to SARIF levels (CRITICAL and
//! HIGH are errors, MEDIUM warns, LOW notes). When an invocation context is
//! supplied the run carries the command line, working directory and UTC
//! timestamps, plus CI automation details when CI mode is on.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use crate::model::{Finding, Severity};
use crate::rules::RuleMeta;

/// Invocation details for the SARIF `invocations` block.
#[derive(Clone, Debug)]
pub struct SarifContext {
    pub command_line: String,
    pub cwd: String,
    pub ci: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "error",
        Severity::Medium => "warning",
        Severity::Low => "note",
    }
}

fn build_sarif(
    findings: &[Finding],
    rule_meta: &BTreeMap<String, RuleMeta>,
    context: Option<&SarifContext>,
) -> serde_json::Value {
    let mut rules: BTreeMap<String, serde_json::Value> = BTreeMap::new();
    let mut rule_order: Vec<String> = Vec::new();
    let mut results = Vec::new();

    for finding in findings {
        if !rules.contains_key(&finding.id) {
            let meta = rule_meta.get(&finding.id);
            rules.insert(
                finding.id.clone(),
                json!({
                    "id": finding.id,
                    "name": finding.title,
                    "shortDescription": { "text": finding.title },
                    "fullDescription": {
                        "text": meta.map_or(finding.message.as_str(), |m| m.description)
                    },
                    "help": {
                        "text": meta.map_or(finding.message.as_str(), |m| m.rationale)
                    },
                    "properties": {
                        "category": finding.category,
                        "tags": meta.map_or(Vec::new(), |m| {
                            m.tags.iter().map(|t| t.to_string()).collect()
                        }),
                        "severity": finding.severity.to_string(),
                        "confidence": finding.confidence.to_string(),
                    }
                }),
            );
            rule_order.push(finding.id.clone());
        }

        let locations = match finding.location.span.as_ref().and_then(|s| s.file.as_ref()) {
            Some(file) => {
                let span = finding.location.span.as_ref().expect("span with file");
                vec![json!({
                    "physicalLocation": {
                        "artifactLocation": { "uri": file },
                        "region": {
                            "startLine": span.start_line.unwrap_or(1),
                            "startColumn": span.start_col.unwrap_or(1),
                            "endLine": span.end_line.or(span.start_line).unwrap_or(1),
                            "endColumn": span.end_col.or(span.start_col).unwrap_or(1),
                        }
                    }
                })]
            }
            None => Vec::new(),
        };

        let mut properties = serde_json::Map::new();
        properties.insert("confidence".to_string(), json!(finding.confidence.to_string()));
        for (key, value) in &finding.metadata {
            properties.insert(key.clone(), json!(value));
        }

        let mut result = json!({
            "ruleId": finding.id,
            "level": level(finding.severity),
            "message": { "text": finding.message },
            "locations": locations,
            "properties": properties,
        });
        if let Some(fingerprint) = &finding.fingerprint {
            result["partialFingerprints"] = json!({ "damlSast/v1": fingerprint });
        }
        results.push(result);
    }

    let ordered_rules: Vec<serde_json::Value> = rule_order
        .iter()
        .map(|id| rules.remove(id).expect("rule recorded"))
        .collect();

    let mut run = json!({
        "tool": {
            "driver": {
                "name": "daml-sast",
                "version": env!("CARGO_PKG_VERSION"),
                "informationUri": "",
                "rules": ordered_rules,
            }
        },
        "results": results,
    });

    if let Some(ctx) = context {
        run["invocations"] = json!([{
            "commandLine": ctx.command_line,
            "executionSuccessful": true,
            "workingDirectory": { "uri": ctx.cwd },
            "startTimeUtc": ctx.start_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            "endTimeUtc": ctx.end_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        }]);
        run["properties"] = json!({ "ci": ctx.ci });
        if ctx.ci {
            run["automationDetails"] = json!({ "id": "daml-sast-ci" });
        }
    }

    json!({
        "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
        "version": "2.1.0",
        "runs": [run],
    })
}

/// Write the SARIF report to `out`.
pub fn emit_sarif(
    findings: &[Finding],
    rule_meta: &BTreeMap<String, RuleMeta>,
    context: Option<&SarifContext>,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let sarif = build_sarif(findings, rule_meta, context);
    let rendered = serde_json::to_string_pretty(&sarif)?;
    out.write_all(rendered.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
