//! Parser for the scenario dialect.
//!
//! ```text
//! World       ::= {Scenario}.
//! Scenario    ::= "scenario" Word "{" {Rule | Proposition} "}".
//! Proposition ::= Term ["."] [","].
//! ```
//!
//! Inside a scenario, a leading `[` starts a rule; anything else is a
//! proposition.

use samovar_terms::Term;
use tracing::{debug, trace};

use crate::ast::{Rule, Scenario, Scenarios};
use crate::config::VarPolicy;
use crate::error::ParseResult;
use crate::grammar::Grammar;
use crate::scanner::TokenKind;

const SCENARIO: &str = "scenario";

/// Recursive-descent parser for scenario source text.
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

    /// Parse scenarios for as long as the next token is `scenario`.
    pub fn world(&mut self) -> ParseResult<Scenarios> {
        let mut scenarios = Vec::new();
        while self.grammar.scanner().on(&[SCENARIO]) {
            scenarios.push(self.scenario()?);
        }
        Ok(Scenarios { scenarios })
    }

    pub fn scenario(&mut self) -> ParseResult<Scenario> {
        let scanner = self.grammar.scanner_mut();
        scanner.expect(&[SCENARIO])?;
        scanner.check_kind(&[TokenKind::Word])?;
        let name = Term::atom(scanner.token());
        scanner.scan();
        scanner.expect(&["{"])?;

        let mut propositions = Vec::new();
        let mut rules = Vec::new();
        while !self.grammar.scanner().on(&["}"]) {
            if self.grammar.scanner().on(&["["]) {
                rules.push(self.rule()?);
            } else {
                propositions.push(self.proposition()?);
            }
        }
        self.grammar.scanner_mut().expect(&["}"])?;

        trace!(
            target: "samovar::scenario",
            %name,
            propositions = propositions.len(),
            rules = rules.len(),
            "parsed scenario"
        );
        Ok(Scenario {
            name,
            propositions,
            rules,
        })
    }

    /// A term optionally followed by `.` and then optionally by `,`.
    pub fn proposition(&mut self) -> ParseResult<Term> {
        let term = self.grammar.term()?;
        self.grammar.scanner_mut().consume(&["."]);
        self.grammar.scanner_mut().consume(&[","]);
        Ok(term)
    }

    pub fn rule(&mut self) -> ParseResult<Rule> {
        self.grammar.rule()
    }

    /// Parse every scenario and require end of input after them.
    pub fn parse(mut self) -> ParseResult<Scenarios> {
        let scenarios = self.world()?;
        self.grammar.finish()?;
        debug!(
            target: "samovar::scenario",
            scenarios = scenarios.scenarios.len(),
            "parsed world"
        );
        Ok(scenarios)
    }
}

/// Parse scenario source text with the dialect's loose variable policy.
///
/// # Example
///
/// ```
/// use samovar_syntax::scenario;
/// use samovar_terms::Term;
///
/// let world = scenario::parse("
///     scenario kitchen {
///         in(alice, kitchen).
///         [in(?x, kitchen)] ?x cooks . [hungry(?x)]
///     }
/// ").unwrap();
///
/// let kitchen = world.get("kitchen").unwrap();
/// assert_eq!(
///     kitchen.propositions,
///     vec![Term::compound("in", [Term::atom("alice"), Term::atom("kitchen")])]
/// );
/// assert_eq!(kitchen.rules.len(), 1);
/// ```
pub fn parse(input: &str) -> ParseResult<Scenarios> {
    parse_with(input, VarPolicy::Loose)
}

/// Parse scenario source text with an explicit variable policy.
pub fn parse_with(input: &str, var_policy: VarPolicy) -> ParseResult<Scenarios> {
    Parser::new(input, var_policy).parse().inspect_err(|error| {
        debug!(target: "samovar::scenario", %error, "parse failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Cond, Expr};
    use crate::error::SyntaxError;
    use pretty_assertions::assert_eq;

    fn unary(constructor: &str, arg: Term) -> Term {
        Term::compound(constructor, [arg])
    }

    fn assert_cond(term: Term) -> Cond {
        Cond::new(vec![Expr::Assert(term)])
    }

    #[test]
    fn test_demo_scenario() {
        let world = parse("scenario demo { p(a). [q(?x)] r(?x) [s(?x)] }").unwrap();
        let x = Term::var("?x");

        assert_eq!(
            world.scenarios,
            vec![Scenario {
                name: Term::atom("demo"),
                propositions: vec![unary("p", Term::atom("a"))],
                rules: vec![Rule::new(
                    assert_cond(unary("q", x.clone())),
                    vec![unary("r", x.clone())],
                    assert_cond(unary("s", x)),
                )],
            }]
        );
    }

    #[test]
    fn test_proposition_terminators_are_optional() {
        let world = parse(
            "scenario terminators {
                 a. b, c., d
                 e
             }",
        )
        .unwrap();

        let names: Vec<_> = world.scenarios[0]
            .propositions
            .iter()
            .filter_map(Term::constructor)
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_comma_before_period_is_not_consumed_as_terminator() {
        // Only `.` then `,` are terminators, so `,.` leaves a `.` proposition.
        let world = parse("scenario s { a,. }").unwrap();
        assert_eq!(
            world.scenarios[0].propositions,
            vec![Term::atom("a"), Term::atom(".")]
        );
    }

    #[test]
    fn test_rules_and_propositions_interleave() {
        let world = parse(
            "scenario mixed {
                 p(a).
                 [p(?x)] [q(?x)]
                 p(b).
                 [q(?x)] [~q(?x)]
             }",
        )
        .unwrap();

        let scenario = &world.scenarios[0];
        assert_eq!(scenario.propositions.len(), 2);
        assert_eq!(scenario.rules.len(), 2);
        assert!(scenario.rules[1].post.exprs[0].is_retract());
    }

    #[test]
    fn test_multiple_scenarios() {
        let world = parse("scenario one { a. } scenario two { }").unwrap();
        assert_eq!(world.scenarios.len(), 2);
        assert!(world.get("two").unwrap().propositions.is_empty());
    }

    #[test]
    fn test_name_must_be_a_word() {
        let error = parse("scenario ?x { }").unwrap_err();
        assert!(matches!(error, SyntaxError::UnexpectedKind { ref expected, .. } if expected == &[TokenKind::Word]));
    }

    #[test]
    fn test_unterminated_scenario() {
        let error = parse("scenario open { p(a).").unwrap_err();
        assert!(matches!(error, SyntaxError::UnexpectedKind { ref found, .. } if found == "end of input"));
    }

    #[test]
    fn test_loose_policy_accepts_lone_qmark() {
        let world = parse("scenario q { [p(?)] [] }").unwrap();
        assert_eq!(
            world.scenarios[0].rules[0].pre,
            assert_cond(unary("p", Term::var("?")))
        );

        assert!(parse_with("scenario q { [p(?)] [] }", VarPolicy::Strict).is_err());
    }

    #[test]
    fn test_greek_variables() {
        let world = parse("scenario g { [at(α, β)] α waves [] }").unwrap();
        let rule = &world.scenarios[0].rules[0];
        assert_eq!(rule.terms, vec![Term::var("α"), Term::atom("waves")]);
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        assert!(matches!(
            parse("scenario s { } rules"),
            Err(SyntaxError::TrailingInput { .. })
        ));
    }
}
