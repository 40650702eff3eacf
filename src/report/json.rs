//! JSON findings report: a UTF-8 array of findings, 2-space indent,
//! trailing newline. Field order matches the `Finding` declaration.

use std::io::Write;

use crate::model::Finding;

/// Write the findings array to `out`.
pub fn emit_json(findings: &[Finding], out: &mut dyn Write) -> std::io::Result<()> {
    let rendered = serde_json::to_string_pretty(findings)?;
    out.write_all(rendered.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Location;
    use crate::model::{Confidence, Severity};

    #[test]
    fn test_empty_report() {
        let mut buf = Vec::new();
        emit_json(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_report_shape() {
        let finding = Finding::new(
            "DAML-AUTH-001",
            "Controller not aligned with signatories",
            Severity::Medium,
            Confidence::Medium,
            "auth",
            "message",
            Location::new("Main", "Choice Transfer"),
        )
        .with_metadata("template", "Main.T");

        let mut buf = Vec::new();
        emit_json(&[finding], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["id"], "DAML-AUTH-001");
        assert_eq!(parsed[0]["severity"], "MEDIUM");
        assert_eq!(parsed[0]["location"]["module"], "Main");
        assert_eq!(parsed[0]["metadata"]["template"], "Main.T");
        // Struct field order is the JSON field order: id first.
        let first_obj = text.find("{").unwrap();
        assert!(text[first_obj..].trim_start_matches('{').trim_start().starts_with("\"id\""));
    }
}
