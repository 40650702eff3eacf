//! Scan engine: run the walker, then finalize findings.

use crate::fingerprint::compute_fingerprint;
use crate::ir::Program;
use crate::model::Finding;
use crate::rules::Rule;
use crate::walker::walk_program;

/// Run `rules` over `program` and return finalized findings in traversal
/// order. Any finding the rule left without a fingerprint gets a
/// content-derived one.
pub fn run(rules: &[Box<dyn Rule>], program: &Program) -> Vec<Finding> {
    let mut findings: Vec<Finding> = Vec::new();
    walk_program(program, rules, &mut |f| findings.push(f));

    for finding in &mut findings {
        if finding.fingerprint.is_none() {
            finding.fingerprint = Some(compute_fingerprint(finding));
        }
    }
    findings
}
