//! # samovar-terms
//!
//! The term algebra underneath the Samovar rule language.
//!
//! A [`Term`] is either a logic [`Var`] or a compound: a constructor name
//! applied to an ordered list of subterms. A compound with no subterms is an
//! *atom*. Terms are immutable; every operation returns a new value.
//!
//! Matching is one-directional. The pattern may contain variables, the target
//! is expected to be ground, and each successful match yields a new
//! [`Env`] recording what the pattern's variables were bound to:
//!
//! ```
//! use samovar_terms::{Env, Term};
//!
//! let pattern = Term::compound("likes", [Term::var("?x"), Term::var("?x")]);
//! let target = Term::compound("likes", [Term::atom("alice"), Term::atom("alice")]);
//!
//! let env = pattern.match_with(&target, &Env::new()).unwrap();
//! assert_eq!(env.get("?x"), Some(&Term::atom("alice")));
//!
//! // Substituting the bindings back into the pattern rebuilds the target.
//! assert_eq!(pattern.subst(&env).unwrap(), target);
//!
//! // A repeated variable must match equal targets.
//! let other = Term::compound("likes", [Term::atom("alice"), Term::atom("bob")]);
//! assert!(pattern.match_with(&other, &Env::new()).is_err());
//! ```

/// Immutable variable binding environments.
pub mod environment;
/// Error types for matching and substitution.
pub mod error;
/// Terms, matching, substitution, and collection.
pub mod term;
/// Logic variables.
pub mod variable;

pub use environment::Env;
pub use error::{MatchError, MatchResult, UnboundVariable};
pub use term::Term;
pub use variable::Var;
