//! Error types for the Samovar parser.

use itertools::Itertools;
use thiserror::Error;

use crate::scanner::{Position, TokenKind};

/// A parse failure. Parsing stops at the first one; no partial AST is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Expected one of a set of literal tokens but found something else.
    #[error("{position}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        position: Position,
    },

    /// The current token belongs to the wrong lexical class.
    #[error("{position}: expected {}, found {found}", .expected.iter().join(" or "))]
    UnexpectedKind {
        expected: Vec<TokenKind>,
        found: String,
        position: Position,
    },

    /// Input remained after the world was complete.
    #[error("{position}: unexpected {found} after end of world")]
    TrailingInput { found: String, position: Position },

    /// Compound terms were nested deeper than the parser allows.
    #[error("{position}: terms nested deeper than {limit} levels")]
    TooDeep { limit: usize, position: Position },
}

impl SyntaxError {
    /// Where in the source text parsing stopped.
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::Expected { position, .. }
            | SyntaxError::UnexpectedKind { position, .. }
            | SyntaxError::TrailingInput { position, .. }
            | SyntaxError::TooDeep { position, .. } => *position,
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, SyntaxError>;
