//! First-order terms and the one-directional matcher.
//!
//! A [`Term`] is either a [`Var`] or a compound: a constructor applied to an
//! ordered list of subterms. Equality and hashing are structural, so two terms
//! built independently from the same source text are interchangeable.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::trace;

use crate::environment::Env;
use crate::error::{MatchError, MatchResult, UnboundVariable};
use crate::variable::{Var, VariableName};

/// A node in a first-order term tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A logic variable.
    Var(Var),
    /// A constructor applied to zero or more subterms. With no subterms this
    /// is an atom.
    Compound {
        constructor: Arc<str>,
        subterms: Vec<Term>,
    },
}

impl Term {
    /// Create an atom: a constructor with no subterms.
    pub fn atom(constructor: impl Into<Arc<str>>) -> Self {
        Term::Compound {
            constructor: constructor.into(),
            subterms: Vec::new(),
        }
    }

    pub fn compound(
        constructor: impl Into<Arc<str>>,
        subterms: impl IntoIterator<Item = Term>,
    ) -> Self {
        Term::Compound {
            constructor: constructor.into(),
            subterms: subterms.into_iter().collect(),
        }
    }

    pub fn var(name: impl Into<VariableName>) -> Self {
        Term::Var(Var::new(name))
    }

    /// The constructor name, or `None` for a variable.
    pub fn constructor(&self) -> Option<&str> {
        match self {
            Term::Var(_) => None,
            Term::Compound { constructor, .. } => Some(constructor.as_ref()),
        }
    }

    /// The subterms of a compound. A variable has none.
    pub fn subterms(&self) -> &[Term] {
        match self {
            Term::Var(_) => &[],
            Term::Compound { subterms, .. } => subterms.as_slice(),
        }
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(var) => Some(var),
            Term::Compound { .. } => None,
        }
    }

    /// Returns `true` for a compound with no subterms. A variable is never an
    /// atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, Term::Compound { subterms, .. } if subterms.is_empty())
    }

    /// Returns `true` if no variable occurs anywhere in this term.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Compound { subterms, .. } => subterms.iter().all(Term::is_ground),
        }
    }

    /// Match this term, as a pattern, against `target`.
    ///
    /// Matching is one-directional: only variables in `self` are bound, and
    /// `target` is expected to be ground. Subterms are matched left to right
    /// and each match sees the bindings made by its earlier siblings, so
    /// `f(?x, ?x)` matches `f(a, a)` but not `f(a, b)`.
    ///
    /// A variable already bound in `env` matches by structurally matching its
    /// bound value against `target`. An unbound variable matches anything and
    /// is bound to it in the returned environment. `env` itself is never
    /// modified.
    ///
    /// An unbound variable matched against itself succeeds without binding.
    /// Otherwise there is no occurs check, and an environment whose bindings
    /// form a cycle through variables will never finish matching.
    pub fn match_with(&self, target: &Term, env: &Env) -> MatchResult<Env> {
        match self {
            Term::Var(var) => match env.get(var.name()) {
                Some(bound) => bound.match_with(target, env),
                None if target.as_var() == Some(var) => Ok(env.clone()),
                None => {
                    trace!(target: "samovar::term", %var, term = %target, "binding variable");
                    Ok(env.bind(var, target.clone()))
                }
            },
            Term::Compound {
                constructor,
                subterms,
            } => {
                let (found, targets) = match target {
                    Term::Compound {
                        constructor,
                        subterms,
                    } => (constructor, subterms),
                    Term::Var(variable) => {
                        return Err(MatchError::VariableTarget {
                            constructor: constructor.to_string(),
                            variable: variable.name().to_string(),
                        });
                    }
                };
                if constructor != found {
                    return Err(MatchError::ConstructorMismatch {
                        expected: constructor.to_string(),
                        found: found.to_string(),
                    });
                }
                if subterms.len() != targets.len() {
                    return Err(MatchError::ArityMismatch {
                        constructor: constructor.to_string(),
                        expected: subterms.len(),
                        found: targets.len(),
                    });
                }

                let mut env = env.clone();
                for (pattern, target) in subterms.iter().zip(targets) {
                    env = pattern.match_with(target, &env)?;
                }
                Ok(env)
            }
        }
    }

    /// Replace every variable in this term with its binding in `env`.
    ///
    /// Each variable is looked up once. A binding that is itself a variable,
    /// or contains variables, is inserted as is.
    pub fn subst(&self, env: &Env) -> Result<Term, UnboundVariable> {
        match self {
            Term::Var(var) => env.get(var.name()).cloned().ok_or_else(|| UnboundVariable {
                name: var.name().to_string(),
            }),
            Term::Compound {
                constructor,
                subterms,
            } => Ok(Term::Compound {
                constructor: constructor.clone(),
                subterms: subterms
                    .iter()
                    .map(|subterm| subterm.subst(env))
                    .collect::<Result<Vec<_>, _>>()?,
            }),
        }
    }

    /// Add every atom reachable from this term to `atoms`.
    pub fn collect_atoms(&self, atoms: &mut IndexSet<Term>) {
        match self {
            Term::Var(_) => {}
            Term::Compound { subterms, .. } if subterms.is_empty() => {
                atoms.insert(self.clone());
            }
            Term::Compound { subterms, .. } => {
                for subterm in subterms {
                    subterm.collect_atoms(atoms);
                }
            }
        }
    }

    /// Add every distinct variable reachable from this term to `vars`.
    pub fn collect_variables(&self, vars: &mut IndexSet<Var>) {
        match self {
            Term::Var(var) => {
                vars.insert(var.clone());
            }
            Term::Compound { subterms, .. } => {
                for subterm in subterms {
                    subterm.collect_variables(vars);
                }
            }
        }
    }

    /// The atoms in this term, in order of first occurrence.
    pub fn atoms(&self) -> IndexSet<Term> {
        let mut atoms = IndexSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    /// The variables in this term, in order of first occurrence.
    pub fn variables(&self) -> IndexSet<Var> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{var}"),
            Term::Compound {
                constructor,
                subterms,
            } => {
                write!(f, "{constructor}")?;
                if !subterms.is_empty() {
                    write!(f, "(")?;
                    for (i, subterm) in subterms.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{subterm}")?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}
