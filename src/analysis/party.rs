//! Party-set inference.
//!
//! A three-valued abstract domain over party expressions: a set is either a
//! definite set of known party literals or `unknown` (the top element,
//! meaning "nothing can be proven"). The default value is the *definite
//! empty set*, not unknown: empty controllers are a subset of anything,
//! while empty signatories are still a separate, reportable fact.

use std::collections::{BTreeSet, HashMap};

use crate::ir::{Expr, ExprKind};

/// Abstract party set: known literals plus an unknown flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartySet {
    pub known: BTreeSet<String>,
    pub unknown: bool,
}

impl PartySet {
    /// The definite empty set (bottom element).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The top element: nothing is known.
    pub fn unknown() -> Self {
        Self {
            known: BTreeSet::new(),
            unknown: true,
        }
    }

    pub fn singleton(party: &str) -> Self {
        let mut known = BTreeSet::new();
        known.insert(party.to_string());
        Self {
            known,
            unknown: false,
        }
    }

    pub fn union(&self, other: &PartySet) -> PartySet {
        PartySet {
            known: self.known.union(&other.known).cloned().collect(),
            unknown: self.unknown || other.unknown,
        }
    }

    /// Provable subset: both sides definite and `self.known ⊆ other.known`.
    pub fn is_definitely_subset_of(&self, other: &PartySet) -> bool {
        if self.unknown || other.unknown {
            return false;
        }
        self.known.is_subset(&other.known)
    }

    /// Provable non-subset: both sides definite and some element escapes.
    pub fn is_definitely_not_subset_of(&self, other: &PartySet) -> bool {
        if self.unknown || other.unknown {
            return false;
        }
        !self.known.is_subset(&other.known)
    }
}

/// Environment mapping let-bound names to their inferred sets.
pub type PartyEnv = HashMap<String, PartySet>;

/// Infer the party set an expression evaluates to.
pub fn infer_party_set(expr: &Expr) -> PartySet {
    infer_with_env(expr, &PartyEnv::new())
}

fn infer_with_env(expr: &Expr, env: &PartyEnv) -> PartySet {
    match &expr.kind {
        ExprKind::Party => match expr.value.as_ref().and_then(|v| v.as_name()) {
            Some(name) => PartySet::singleton(name),
            None => PartySet::unknown(),
        },
        ExprKind::List => {
            let mut acc = PartySet::empty();
            for child in &expr.children {
                acc = acc.union(&infer_with_env(child, env));
                if acc.unknown {
                    return acc;
                }
            }
            acc
        }
        // Heads plus tail: a literal-head list with a known tail stays
        // definite instead of collapsing to unknown.
        ExprKind::Cons => {
            if expr.children.is_empty() {
                return PartySet::unknown();
            }
            let mut acc = PartySet::empty();
            for child in &expr.children {
                acc = acc.union(&infer_with_env(child, env));
            }
            acc
        }
        ExprKind::Var => match expr.value.as_ref().and_then(|v| v.as_name()) {
            Some(name) => env.get(name).cloned().unwrap_or_else(PartySet::unknown),
            None => PartySet::unknown(),
        },
        ExprKind::Let => {
            if expr.children.is_empty() {
                return PartySet::unknown();
            }
            let mut local = env.clone();
            let (body, bindings) = expr.children.split_last().expect("non-empty let");
            for binding in bindings {
                if binding.kind != ExprKind::Binding || binding.children.is_empty() {
                    continue;
                }
                let Some(name) = binding.value.as_ref().and_then(|v| v.as_name()) else {
                    continue;
                };
                let bound = infer_with_env(&binding.children[0], &local);
                local.insert(name.to_string(), bound);
            }
            infer_with_env(body, &local)
        }
        // Union over alternatives; the scrutinee contributes nothing.
        ExprKind::Case => {
            if expr.children.len() < 2 {
                return PartySet::unknown();
            }
            let mut acc = PartySet::empty();
            for alt in &expr.children[1..] {
                acc = acc.union(&infer_with_env(alt, env));
                if acc.unknown {
                    return acc;
                }
            }
            acc
        }
        _ => PartySet::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ExprValue;

    fn party(name: &str) -> Expr {
        Expr::new(ExprKind::Party).with_value(ExprValue::Name(name.to_string()))
    }

    fn var(name: &str) -> Expr {
        Expr::new(ExprKind::Var).with_value(ExprValue::Name(name.to_string()))
    }

    fn list(children: Vec<Expr>) -> Expr {
        Expr::new(ExprKind::List).with_children(children)
    }

    fn set(names: &[&str]) -> PartySet {
        PartySet {
            known: names.iter().map(|s| s.to_string()).collect(),
            unknown: false,
        }
    }

    #[test]
    fn test_literal_and_list() {
        assert_eq!(infer_party_set(&party("Alice")), set(&["Alice"]));
        let l = list(vec![party("Alice"), party("Bob")]);
        assert_eq!(infer_party_set(&l), set(&["Alice", "Bob"]));
    }

    #[test]
    fn test_empty_list_is_definite_empty() {
        let empty = infer_party_set(&list(vec![]));
        assert!(!empty.unknown);
        assert!(empty.known.is_empty());
        // A definite empty set is a subset of everything.
        assert!(empty.is_definitely_subset_of(&set(&["Alice"])));
    }

    #[test]
    fn test_unbound_var_is_unknown() {
        let ps = infer_party_set(&var("whoever"));
        assert!(ps.unknown);
        assert!(!ps.is_definitely_subset_of(&set(&["Alice"])));
        assert!(!ps.is_definitely_not_subset_of(&set(&["Alice"])));
    }

    #[test]
    fn test_let_binding_env_threading() {
        let binding = Expr::new(ExprKind::Binding)
            .with_value(ExprValue::Name("owners".to_string()))
            .with_children(vec![list(vec![party("Alice")])]);
        let le = Expr::new(ExprKind::Let).with_children(vec![binding, var("owners")]);
        assert_eq!(infer_party_set(&le), set(&["Alice"]));
    }

    #[test]
    fn test_let_bindings_chain_left_to_right() {
        let first = Expr::new(ExprKind::Binding)
            .with_value(ExprValue::Name("a".to_string()))
            .with_children(vec![party("Alice")]);
        let second = Expr::new(ExprKind::Binding)
            .with_value(ExprValue::Name("b".to_string()))
            .with_children(vec![var("a")]);
        let le = Expr::new(ExprKind::Let).with_children(vec![first, second, var("b")]);
        assert_eq!(infer_party_set(&le), set(&["Alice"]));
    }

    #[test]
    fn test_cons_unions_heads_and_tail() {
        let cons = Expr::new(ExprKind::Cons)
            .with_children(vec![party("Alice"), list(vec![party("Bob")])]);
        assert_eq!(infer_party_set(&cons), set(&["Alice", "Bob"]));

        // Unknown tail keeps the heads but taints the set.
        let cons = Expr::new(ExprKind::Cons).with_children(vec![party("Alice"), var("rest")]);
        let ps = infer_party_set(&cons);
        assert!(ps.unknown);
        assert!(ps.known.contains("Alice"));
    }

    #[test]
    fn test_case_unions_alternatives_only() {
        let case = Expr::new(ExprKind::Case).with_children(vec![
            var("scrutinee"),
            list(vec![party("Alice")]),
            list(vec![party("Bob")]),
        ]);
        assert_eq!(infer_party_set(&case), set(&["Alice", "Bob"]));
    }

    #[test]
    fn test_union_monotonicity() {
        let a = set(&["Alice"]);
        let b = set(&["Bob"]);
        let u = a.union(&b);
        assert!(a.known.is_subset(&u.known));
        assert!(b.known.is_subset(&u.known));
        assert_eq!(a.union(&PartySet::empty()), a);
        assert!(a.union(&PartySet::unknown()).unknown);
    }

    #[test]
    fn test_subset_predicates_are_conservative() {
        let known = set(&["Alice"]);
        let unknown = PartySet::unknown();
        assert!(!unknown.is_definitely_subset_of(&known));
        assert!(!unknown.is_definitely_not_subset_of(&known));
        assert!(!known.is_definitely_subset_of(&unknown));
        assert!(!known.is_definitely_not_subset_of(&unknown));
        assert!(set(&["Bob"]).is_definitely_not_subset_of(&known));
        assert!(set(&["Alice"]).is_definitely_subset_of(&set(&["Alice", "Bob"])));
    }
}
