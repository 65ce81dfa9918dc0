//! Productions shared by both dialects.
//!
//! ```text
//! Rule    ::= Cond {Term} Cond.
//! Cond    ::= "[" [Expr {AndSym Expr}] "]".
//! Expr    ::= [NotSym] Term.
//! Term    ::= Var | (Word | Punct) ["(" Term {AndSym Term} ")"].
//! Var     ::= Variable            (strict)
//!           | Variable | Qmark    (loose)
//! NotSym  ::= "~" | "¬".
//! AndSym  ::= "," | "∧".
//! ```

use samovar_terms::{Term, Var};
use tracing::trace;

use crate::ast::{Cond, Expr, Rule};
use crate::config::VarPolicy;
use crate::error::{ParseResult, SyntaxError};
use crate::scanner::{Scanner, TokenKind};

pub(crate) const NOT_SYMBOLS: &[&str] = &["~", "¬"];
pub(crate) const AND_SYMBOLS: &[&str] = &[",", "∧"];

/// How many argument lists may be open at once inside a single term.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent procedures for the productions both dialects share.
///
/// Each dialect parser wraps a `Grammar` and adds its own top-level
/// productions on top of these.
#[derive(Debug, Clone)]
pub struct Grammar {
    scanner: Scanner,
    var_policy: VarPolicy,
    depth: usize,
}

impl Grammar {
    pub fn new(input: &str, var_policy: VarPolicy) -> Self {
        Self {
            scanner: Scanner::new(input),
            var_policy,
            depth: 0,
        }
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn scanner_mut(&mut self) -> &mut Scanner {
        &mut self.scanner
    }

    /// `Cond {Term} Cond`. The body runs until the next `[`.
    pub fn rule(&mut self) -> ParseResult<Rule> {
        let pre = self.cond()?;
        let mut terms = Vec::new();
        while !self.scanner.on(&["["]) {
            terms.push(self.term()?);
        }
        let post = self.cond()?;

        let rule = Rule::new(pre, terms, post);
        trace!(target: "samovar::grammar", %rule, "parsed rule");
        Ok(rule)
    }

    pub fn cond(&mut self) -> ParseResult<Cond> {
        let mut exprs = Vec::new();
        self.scanner.expect(&["["])?;
        if !self.scanner.on(&["]"]) {
            exprs.push(self.expr()?);
            while self.scanner.consume(AND_SYMBOLS) {
                exprs.push(self.expr()?);
            }
        }
        self.scanner.expect(&["]"])?;
        Ok(Cond::new(exprs))
    }

    pub fn expr(&mut self) -> ParseResult<Expr> {
        if self.scanner.consume(NOT_SYMBOLS) {
            Ok(Expr::Retract(self.term()?))
        } else {
            Ok(Expr::Assert(self.term()?))
        }
    }

    pub fn term(&mut self) -> ParseResult<Term> {
        if self.on_var() {
            return Ok(Term::Var(self.var()?));
        }
        self.scanner
            .check_kind(&[TokenKind::Word, TokenKind::Punct])?;
        let constructor = self.scanner.token().to_string();
        self.scanner.scan();

        let mut subterms = Vec::new();
        if self.scanner.consume(&["("]) {
            if self.depth == MAX_NESTING {
                return Err(SyntaxError::TooDeep {
                    limit: MAX_NESTING,
                    position: self.scanner.position(),
                });
            }
            self.depth += 1;
            let arguments = self.arguments();
            self.depth -= 1;
            subterms = arguments?;
        }
        Ok(Term::compound(constructor, subterms))
    }

    /// `Term {AndSym Term} ")"`, after the opening parenthesis.
    fn arguments(&mut self) -> ParseResult<Vec<Term>> {
        let mut subterms = vec![self.term()?];
        while self.scanner.consume(AND_SYMBOLS) {
            subterms.push(self.term()?);
        }
        self.scanner.expect(&[")"])?;
        Ok(subterms)
    }

    pub fn var(&mut self) -> ParseResult<Var> {
        match self.var_policy {
            VarPolicy::Strict => self.scanner.check_kind(&[TokenKind::Variable])?,
            VarPolicy::Loose => self.scanner.check_kind(&[
                TokenKind::Variable,
                TokenKind::Qmark,
                TokenKind::Word,
                TokenKind::Punct,
            ])?,
        }
        let var = Var::new(self.scanner.token());
        self.scanner.scan();
        Ok(var)
    }

    fn on_var(&self) -> bool {
        match self.var_policy {
            VarPolicy::Strict => self.scanner.on_kind(TokenKind::Variable),
            VarPolicy::Loose => {
                self.scanner.on_kind(TokenKind::Variable) || self.scanner.on_kind(TokenKind::Qmark)
            }
        }
    }

    /// Fail unless every token has been consumed.
    pub fn finish(&self) -> ParseResult<()> {
        self.scanner.expect_end()
    }
}

/// Parse a single term, rejecting trailing input.
///
/// # Example
///
/// ```
/// use samovar_syntax::{VarPolicy, parse_term};
/// use samovar_terms::Term;
///
/// let term = parse_term("likes(?x ∧ bob)", VarPolicy::Strict).unwrap();
/// assert_eq!(
///     term,
///     Term::compound("likes", [Term::var("?x"), Term::atom("bob")])
/// );
/// ```
pub fn parse_term(input: &str, var_policy: VarPolicy) -> ParseResult<Term> {
    let mut grammar = Grammar::new(input, var_policy);
    let term = grammar.term()?;
    grammar.finish()?;
    Ok(term)
}

/// Parse a single condition, rejecting trailing input.
pub fn parse_cond(input: &str, var_policy: VarPolicy) -> ParseResult<Cond> {
    let mut grammar = Grammar::new(input, var_policy);
    let cond = grammar.cond()?;
    grammar.finish()?;
    Ok(cond)
}
