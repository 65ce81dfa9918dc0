//! Parser configuration.

/// The surface grammar a source text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `rules … end`, `functions … end` and `situations … end` sections.
    #[default]
    Sectioned,
    /// `scenario name { … }` blocks mixing propositions and rules.
    Scenario,
}

impl Dialect {
    /// The variable policy the dialect has always used.
    pub fn default_var_policy(self) -> VarPolicy {
        match self {
            Dialect::Sectioned => VarPolicy::Strict,
            Dialect::Scenario => VarPolicy::Loose,
        }
    }
}

/// How strictly the `Var` production checks the token it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarPolicy {
    /// Only tokens the scanner classified as variables start a `Var`.
    Strict,
    /// A lone `?` also starts a `Var`, and `Var` takes the current token's
    /// text without checking its class (end of input is still rejected).
    Loose,
}

/// Options for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub dialect: Dialect,
    pub var_policy: VarPolicy,
}

impl ParserConfig {
    pub fn sectioned() -> Self {
        Dialect::Sectioned.into()
    }

    pub fn scenario() -> Self {
        Dialect::Scenario.into()
    }

    pub fn with_var_policy(mut self, var_policy: VarPolicy) -> Self {
        self.var_policy = var_policy;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Dialect::default().into()
    }
}

impl From<Dialect> for ParserConfig {
    fn from(dialect: Dialect) -> Self {
        ParserConfig {
            dialect,
            var_policy: dialect.default_var_policy(),
        }
    }
}
