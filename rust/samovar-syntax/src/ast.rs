//! Abstract syntax tree types for Samovar source text.
//!
//! All nodes embed [`Term`]s from `samovar-terms`. Every node renders back to
//! surface syntax through `Display`, using the ASCII forms of the glyph
//! operators (`~` and `,`) with `→` for functions.

use std::fmt;

use samovar_terms::Term;

/// One signed entry of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The term must hold (or, in a postcondition, is made to hold).
    Assert(Term),
    /// The term must not hold (or, in a postcondition, is removed).
    Retract(Term),
}

impl Expr {
    pub fn term(&self) -> &Term {
        match self {
            Expr::Assert(term) | Expr::Retract(term) => term,
        }
    }

    pub fn is_retract(&self) -> bool {
        matches!(self, Expr::Retract(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Assert(term) => write!(f, "{term}"),
            Expr::Retract(term) => write!(f, "~{term}"),
        }
    }
}

/// A bracketed condition: `[p(a), ~q(b)]`. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cond {
    pub exprs: Vec<Expr>,
}

impl Cond {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Self { exprs }
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, expr) in self.exprs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{expr}")?;
        }
        write!(f, "]")
    }
}

/// A rule: a precondition, an action body of opaque terms, and a
/// postcondition.
///
/// The body holds every term between the two conditions, punctuation
/// included, e.g. `[actor(α)] α looks around . [seen(α)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pre: Cond,
    pub terms: Vec<Term>,
    pub post: Cond,
}

impl Rule {
    pub fn new(pre: Cond, terms: Vec<Term>, post: Cond) -> Self {
        Self { pre, terms, post }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pre)?;
        for term in &self.terms {
            write!(f, " {term}")?;
        }
        write!(f, " {}", self.post)
    }
}

/// A rewrite signature, `sign → result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub sign: Term,
    pub result: Term,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.sign, self.result)
    }
}

/// A standalone condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Situation {
    pub cond: Cond,
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cond)
    }
}

/// Everything declared in a sectioned source text, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct World {
    pub rules: Vec<Rule>,
    pub functions: Vec<Function>,
    pub situations: Vec<Situation>,
}

impl World {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.functions.is_empty() && self.situations.is_empty()
    }
}

fn write_section<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    items: &[T],
    first: &mut bool,
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    if !*first {
        writeln!(f)?;
    }
    *first = false;
    writeln!(f, "{heading}")?;
    for item in items {
        writeln!(f, "    {item}")?;
    }
    write!(f, "end")
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write_section(f, "rules", &self.rules, &mut first)?;
        write_section(f, "functions", &self.functions, &mut first)?;
        write_section(f, "situations", &self.situations, &mut first)
    }
}

/// A named block of propositions and rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Always an atom.
    pub name: Term,
    pub propositions: Vec<Term>,
    pub rules: Vec<Rule>,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario {} {{", self.name)?;
        for proposition in &self.propositions {
            writeln!(f, "    {proposition}.")?;
        }
        for rule in &self.rules {
            writeln!(f, "    {rule}")?;
        }
        write!(f, "}}")
    }
}

/// Every scenario in a scenario-dialect source text, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scenarios {
    pub scenarios: Vec<Scenario>,
}

impl Scenarios {
    /// Look up a scenario by name.
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.name.constructor() == Some(name))
    }
}

impl fmt::Display for Scenarios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, scenario) in self.scenarios.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{scenario}")?;
        }
        Ok(())
    }
}

/// The result of parsing with a caller-chosen dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Sectioned(World),
    Scenarios(Scenarios),
}

impl Document {
    pub fn as_world(&self) -> Option<&World> {
        match self {
            Document::Sectioned(world) => Some(world),
            Document::Scenarios(_) => None,
        }
    }

    pub fn as_scenarios(&self) -> Option<&Scenarios> {
        match self {
            Document::Sectioned(_) => None,
            Document::Scenarios(scenarios) => Some(scenarios),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Sectioned(world) => write!(f, "{world}"),
            Document::Scenarios(scenarios) => write!(f, "{scenarios}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(arg: &str) -> Term {
        Term::compound("p", [Term::atom(arg)])
    }

    #[test]
    fn test_cond_display() {
        let cond = Cond::new(vec![Expr::Retract(p("a")), Expr::Assert(Term::var("?x"))]);
        assert_eq!(cond.to_string(), "[~p(a), ?x]");
        assert_eq!(Cond::default().to_string(), "[]");
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(
            Cond::new(vec![Expr::Assert(p("a"))]),
            vec![Term::atom("q"), Term::atom(".")],
            Cond::new(vec![Expr::Assert(p("b"))]),
        );
        assert_eq!(rule.to_string(), "[p(a)] q . [p(b)]");

        let empty_body = Rule::new(Cond::default(), vec![], Cond::default());
        assert_eq!(empty_body.to_string(), "[] []");
    }

    #[test]
    fn test_world_display() {
        let world = World {
            rules: vec![],
            functions: vec![Function {
                sign: Term::compound("f", [Term::var("?x")]),
                result: Term::atom("b"),
            }],
            situations: vec![Situation {
                cond: Cond::new(vec![Expr::Assert(p("a"))]),
            }],
        };
        assert_eq!(
            world.to_string(),
            "functions\n    f(?x) → b\nend\nsituations\n    [p(a)]\nend"
        );
        assert_eq!(World::default().to_string(), "");
    }

    #[test]
    fn test_scenario_display() {
        let scenario = Scenario {
            name: Term::atom("demo"),
            propositions: vec![p("a")],
            rules: vec![Rule::new(Cond::default(), vec![], Cond::default())],
        };
        assert_eq!(
            scenario.to_string(),
            "scenario demo {\n    p(a).\n    [] []\n}"
        );
    }

    #[test]
    fn test_scenarios_lookup() {
        let scenarios = Scenarios {
            scenarios: vec![Scenario {
                name: Term::atom("demo"),
                propositions: vec![],
                rules: vec![],
            }],
        };
        assert!(scenarios.get("demo").is_some());
        assert!(scenarios.get("other").is_none());
    }

    #[test]
    fn test_expr_accessors() {
        let retract = Expr::Retract(p("a"));
        assert!(retract.is_retract());
        assert_eq!(retract.term(), &p("a"));
        assert!(!Expr::Assert(p("a")).is_retract());
    }
}
