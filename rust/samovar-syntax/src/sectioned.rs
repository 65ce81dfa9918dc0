//! Parser for the sectioned dialect.
//!
//! ```text
//! World      ::= {Rules | Functions | Situations}.
//! Rules      ::= "rules" {Rule} "end".
//! Functions  ::= "functions" {Function} "end".
//! Situations ::= "situations" {Situation} "end".
//! Function   ::= Term "→" Term.
//! Situation  ::= Cond.
//! ```
//!
//! Sections may appear in any order and any number of times; their items are
//! appended to the world in the order they are encountered.

use tracing::{debug, trace};

use crate::ast::{Function, Rule, Situation, World};
use crate::config::VarPolicy;
use crate::error::ParseResult;
use crate::grammar::Grammar;

const RULES: &str = "rules";
const FUNCTIONS: &str = "functions";
const SITUATIONS: &str = "situations";
const END: &str = "end";
const ARROW: &str = "→";

/// Recursive-descent parser for sectioned source text.
#[derive(Debug, Clone)]
pub struct Parser {
    grammar: Grammar,
}

impl Parser {
    pub fn new(input: &str, var_policy: VarPolicy) -> Self {
        Self {
            grammar: Grammar::new(input, var_policy),
        }
    }

    /// Access to the shared productions.
    pub fn grammar(&mut self) -> &mut Grammar {
        &mut self.grammar
    }

    /// Parse sections for as long as the next token is a section heading.
    ///
    /// Stops, without error, at any other token.
    pub fn world(&mut self) -> ParseResult<World> {
        let mut world = World::default();
        while self.grammar.scanner().on(&[RULES, FUNCTIONS, SITUATIONS]) {
            if self.grammar.scanner().on(&[RULES]) {
                let rules = self.section(RULES, Self::rule)?;
                world.rules.extend(rules);
            }
            if self.grammar.scanner().on(&[FUNCTIONS]) {
                let functions = self.section(FUNCTIONS, Self::function)?;
                world.functions.extend(functions);
            }
            if self.grammar.scanner().on(&[SITUATIONS]) {
                let situations = self.section(SITUATIONS, Self::situation)?;
                world.situations.extend(situations);
            }
        }
        Ok(world)
    }

    /// `heading {item} "end"`.
    fn section<T, F>(&mut self, heading: &str, mut item: F) -> ParseResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> ParseResult<T>,
    {
        let mut items = Vec::new();
        self.grammar.scanner_mut().expect(&[heading])?;
        while !self.grammar.scanner().on(&[END]) {
            items.push(item(self)?);
        }
        self.grammar.scanner_mut().expect(&[END])?;

        trace!(target: "samovar::sectioned", heading, items = items.len(), "parsed section");
        Ok(items)
    }

    pub fn rule(&mut self) -> ParseResult<Rule> {
        self.grammar.rule()
    }

    pub fn function(&mut self) -> ParseResult<Function> {
        let sign = self.grammar.term()?;
        self.grammar.scanner_mut().expect(&[ARROW])?;
        let result = self.grammar.term()?;
        Ok(Function { sign, result })
    }

    pub fn situation(&mut self) -> ParseResult<Situation> {
        let cond = self.grammar.cond()?;
        Ok(Situation { cond })
    }

    /// Parse a whole world and require end of input after it.
    pub fn parse(mut self) -> ParseResult<World> {
        let world = self.world()?;
        self.grammar.finish()?;
        debug!(
            target: "samovar::sectioned",
            rules = world.rules.len(),
            functions = world.functions.len(),
            situations = world.situations.len(),
            "parsed world"
        );
        Ok(world)
    }
}

/// Parse sectioned source text with the dialect's strict variable policy.
///
/// # Example
///
/// ```
/// use samovar_syntax::sectioned;
///
/// let world = sectioned::parse("
///     rules
///         [actor(?a)] ?a looks around . [seen(?a)]
///     end
///     functions
///         name(alice) → Alice
///     end
/// ").unwrap();
///
/// assert_eq!(world.rules.len(), 1);
/// assert_eq!(world.functions.len(), 1);
/// ```
pub fn parse(input: &str) -> ParseResult<World> {
    parse_with(input, VarPolicy::Strict)
}

/// Parse sectioned source text with an explicit variable policy.
pub fn parse_with(input: &str, var_policy: VarPolicy) -> ParseResult<World> {
    Parser::new(input, var_policy).parse().inspect_err(|error| {
        debug!(target: "samovar::sectioned", %error, "parse failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Cond, Expr};
    use crate::error::SyntaxError;
    use pretty_assertions::assert_eq;
    use samovar_terms::Term;

    fn unary(constructor: &str, arg: Term) -> Term {
        Term::compound(constructor, [arg])
    }

    fn assert_cond(term: Term) -> Cond {
        Cond::new(vec![Expr::Assert(term)])
    }

    #[test]
    fn test_single_rule() {
        let world = parse("rules [p(a)] q(a) [r(a)] end").unwrap();
        let a = Term::atom("a");
        assert_eq!(
            world,
            World {
                rules: vec![Rule::new(
                    assert_cond(unary("p", a.clone())),
                    vec![unary("q", a.clone())],
                    assert_cond(unary("r", a)),
                )],
                functions: vec![],
                situations: vec![],
            }
        );
    }

    #[test]
    fn test_empty_input_is_an_empty_world() {
        assert_eq!(parse("").unwrap(), World::default());
        assert_eq!(parse("rules end").unwrap(), World::default());
    }

    #[test]
    fn test_functions_and_situations() {
        let world = parse(
            "functions
                 name(?x) → ?x
                 greeting → hello
             end
             situations
                 [at(alice, kitchen)]
                 []
             end",
        )
        .unwrap();

        assert_eq!(
            world.functions,
            vec![
                Function {
                    sign: unary("name", Term::var("?x")),
                    result: Term::var("?x"),
                },
                Function {
                    sign: Term::atom("greeting"),
                    result: Term::atom("hello"),
                },
            ]
        );
        assert_eq!(world.situations.len(), 2);
        assert!(world.situations[1].cond.is_empty());
    }

    #[test]
    fn test_sections_recur_and_concatenate() {
        let world = parse(
            "rules [a] [b] end
             situations [s] end
             rules [c] [d] end",
        )
        .unwrap();

        assert_eq!(world.rules.len(), 2);
        assert_eq!(world.rules[0].pre, assert_cond(Term::atom("a")));
        assert_eq!(world.rules[1].pre, assert_cond(Term::atom("c")));
        assert_eq!(world.situations.len(), 1);
    }

    #[test]
    fn test_function_requires_arrow() {
        let error = parse("functions f(a) -> b end").unwrap_err();
        assert!(matches!(error, SyntaxError::Expected { ref expected, .. } if expected == "`→`"));
    }

    #[test]
    fn test_missing_end() {
        let error = parse("rules [p(a)] q(a) [r(a)]").unwrap_err();
        assert!(matches!(error, SyntaxError::Expected { ref found, .. } if found == "end of input"));
    }

    #[test]
    fn test_unterminated_cond() {
        assert!(parse("rules [p(a) q(a) [r(a)] end").is_err());
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let error = parse("rules [a] [b] end stray").unwrap_err();
        assert!(matches!(error, SyntaxError::TrailingInput { .. }));
    }

    #[test]
    fn test_world_production_stops_at_other_tokens() {
        let mut parser = Parser::new("situations [s] end stray", VarPolicy::Strict);
        let world = parser.world().unwrap();
        assert_eq!(world.situations.len(), 1);
        assert_eq!(parser.grammar().scanner().token(), "stray");
    }

    #[test]
    fn test_strict_policy_rejects_lone_qmark() {
        assert!(parse("rules [p(?)] [] end").is_err());
        assert!(parse_with("rules [p(?)] [] end", VarPolicy::Loose).is_ok());
    }
}
