//! # samovar-syntax
//!
//! Scanner and recursive-descent parser for the Samovar rule language.
//!
//! Source text is parsed into an AST ([`ast`]) whose leaves are
//! [`samovar_terms::Term`] values, ready to be matched and substituted by a
//! rule engine.
//!
//! ## Syntax
//!
//! Two dialects share the same terms, conditions and rules.
//!
//! **Terms** are atoms (`alice`), compounds (`at(alice, kitchen)`) or
//! variables (`?x`, or a single Greek letter such as `α`). Punctuation is a
//! valid constructor, so `.` and `!` can appear as terms.
//!
//! **Conditions** are bracketed, comma-separated lists of terms, each
//! optionally negated: `[at(?x, kitchen), ~hungry(?x)]`. The glyphs `¬` and
//! `∧` may be used in place of `~` and `,`.
//!
//! **Rules** are a precondition, a body of terms, and a postcondition:
//!
//! ```text
//! [at(?x, kitchen)] ?x cooks dinner . [~hungry(?x)]
//! ```
//!
//! The **sectioned** dialect groups rules, functions (`sign → result`) and
//! situations (bare conditions) into `rules … end`, `functions … end` and
//! `situations … end` sections. The **scenario** dialect groups propositions
//! and rules into named blocks: `scenario kitchen { at(alice, kitchen). … }`.
//!
//! ## Example
//!
//! ```
//! use samovar_syntax::{Dialect, Document, parse};
//!
//! let document = parse("rules [p(a)] q(a) [r(a)] end", Dialect::Sectioned).unwrap();
//! let world = document.as_world().unwrap();
//! assert_eq!(world.rules.len(), 1);
//!
//! // Roundtrip back to source text
//! assert_eq!(document.to_string(), "rules\n    [p(a)] q(a) [r(a)]\nend");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod grammar;
pub mod scanner;
pub mod scenario;
pub mod sectioned;

pub use ast::{Cond, Document, Expr, Function, Rule, Scenario, Scenarios, Situation, World};
pub use config::{Dialect, ParserConfig, VarPolicy};
pub use error::{ParseResult, SyntaxError};
pub use grammar::{Grammar, MAX_NESTING, parse_cond, parse_term};
pub use scanner::{Position, Scanner, Token, TokenKind};

/// Parse `input` in the dialect named by `config`.
///
/// Accepts either a full [`ParserConfig`] or just a [`Dialect`], in which
/// case the dialect's default variable policy applies.
pub fn parse(input: &str, config: impl Into<ParserConfig>) -> ParseResult<Document> {
    let config = config.into();
    match config.dialect {
        Dialect::Sectioned => {
            sectioned::parse_with(input, config.var_policy).map(Document::Sectioned)
        }
        Dialect::Scenario => {
            scenario::parse_with(input, config.var_policy).map(Document::Scenarios)
        }
    }
}
