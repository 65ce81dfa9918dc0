//! Binding environments produced by matching.

use std::collections::BTreeMap;
use std::fmt;

use crate::term::Term;
use crate::variable::{Var, VariableName};

/// Maps variable names to the terms they were bound to during matching.
///
/// An environment is never extended in place: [`Env::bind`] returns a new
/// environment and leaves the receiver untouched, so a match that fails part
/// way through cannot leak partial bindings into the caller's environment.
/// Callers must carry the *returned* environment forward.
///
/// Bindings must not be cyclic (a variable bound, directly or through other
/// variables, to itself); matching does not check for this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Env {
    bindings: BTreeMap<VariableName, Term>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the term bound to the variable called `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.bindings.contains_key(var.name())
    }

    /// Returns a copy of this environment with `var` bound to `term`.
    ///
    /// An existing binding for the same variable is replaced in the copy.
    pub fn bind(&self, var: &Var, term: Term) -> Env {
        let mut bindings = self.bindings.clone();
        bindings.insert(var.name().to_string(), term);
        Env { bindings }
    }

    /// Iterates over bindings in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings
            .iter()
            .map(|(name, term)| (name.as_str(), term))
    }
}

impl FromIterator<(Var, Term)> for Env {
    fn from_iter<I: IntoIterator<Item = (Var, Term)>>(iter: I) -> Self {
        Env {
            bindings: iter
                .into_iter()
                .map(|(var, term)| (var.name().to_string(), term))
                .collect(),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, term)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {term}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bind_leaves_original_untouched() {
        let empty = Env::new();
        let x = Var::new("?x");

        let bound = empty.bind(&x, Term::atom("a"));

        assert!(empty.is_empty(), "bind must not mutate the receiver");
        assert_eq!(bound.len(), 1);
        assert_eq!(bound.get("?x"), Some(&Term::atom("a")));
        assert!(bound.contains(&x));
        assert!(!empty.contains(&x));
    }

    #[test]
    fn test_rebinding_replaces_in_copy_only() {
        let x = Var::new("?x");
        let first = Env::new().bind(&x, Term::atom("a"));
        let second = first.bind(&x, Term::atom("b"));

        assert_eq!(first.get("?x"), Some(&Term::atom("a")));
        assert_eq!(second.get("?x"), Some(&Term::atom("b")));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let x = Var::new("?x");
        let y = Var::new("?y");

        let xy = Env::new()
            .bind(&x, Term::atom("a"))
            .bind(&y, Term::atom("b"));
        let yx = Env::new()
            .bind(&y, Term::atom("b"))
            .bind(&x, Term::atom("a"));

        assert_eq!(xy, yx);
    }

    #[test]
    fn test_display_is_sorted_by_name() {
        let env: Env = [
            (Var::new("?y"), Term::compound("f", [Term::atom("b")])),
            (Var::new("?x"), Term::atom("a")),
        ]
        .into_iter()
        .collect();

        assert_eq!(env.to_string(), "{?x: a, ?y: f(b)}");
        assert_eq!(Env::new().to_string(), "{}");
    }
}
