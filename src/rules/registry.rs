//! Built-in rule registry and allow/deny filtering.

use std::collections::BTreeSet;

use crate::rules::auth::{
    ControllerAlignment, EmptySignatories, ForwardingChoice, UncontrolledControllers,
};
use crate::rules::determinism::TimeInAuthLogic;
use crate::rules::key::MaintainerAlignment;
use crate::rules::lifecycle::{NonconsumingCreate, SelfReplicatingChoice};
use crate::rules::privacy::OverbroadObservers;
use crate::rules::Rule;

/// Bumped whenever rule semantics change in a way that invalidates stored
/// baselines.
pub const RULES_VERSION: &str = "1";

/// All built-in rules, in stable registration order.
pub fn registry() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ControllerAlignment),
        Box::new(UncontrolledControllers),
        Box::new(EmptySignatories),
        Box::new(ForwardingChoice),
        Box::new(SelfReplicatingChoice),
        Box::new(NonconsumingCreate),
        Box::new(OverbroadObservers),
        Box::new(MaintainerAlignment),
        Box::new(TimeInAuthLogic),
    ]
}

/// Apply an allowlist (keep only these ids, when non-empty) and then a
/// denylist (drop these ids), preserving registration order.
pub fn filter_rules(
    rules: Vec<Box<dyn Rule>>,
    allow: Option<&BTreeSet<String>>,
    deny: Option<&BTreeSet<String>>,
) -> Vec<Box<dyn Rule>> {
    rules
        .into_iter()
        .filter(|rule| {
            let id = rule.meta().id;
            if let Some(allow) = allow {
                if !allow.is_empty() && !allow.contains(id) {
                    return false;
                }
            }
            if let Some(deny) = deny {
                if deny.contains(id) {
                    return false;
                }
            }
            true
        })
        .collect()
}
