//! Error types for matching and substitution.

use thiserror::Error;

/// Why a pattern failed to match a target.
///
/// A match failure is an ordinary outcome: it means the pattern does not
/// apply to the target, not that anything went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Pattern and target are both compounds with different constructors.
    #[error("constructor `{expected}` does not match `{found}`")]
    ConstructorMismatch { expected: String, found: String },

    /// Pattern and target share a constructor but not an arity.
    #[error("`{constructor}` has {expected} subterms in the pattern but {found} in the target")]
    ArityMismatch {
        constructor: String,
        expected: usize,
        found: usize,
    },

    /// A compound pattern was matched against a variable.
    #[error("pattern `{constructor}` cannot match variable {variable}")]
    VariableTarget {
        constructor: String,
        variable: String,
    },
}

/// Substitution reached a variable the environment has no binding for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unbound variable {name}")]
pub struct UnboundVariable {
    pub name: String,
}

/// Result type for matching operations
pub type MatchResult<T> = Result<T, MatchError>;
