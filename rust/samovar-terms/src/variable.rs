use std::fmt;

/// Variable name as written in source, including any `?` sigil.
pub type VariableName = String;

/// A logic variable.
///
/// Variables are identified solely by their name: `?x` and `?x` are the same
/// variable wherever they occur, while `?x` and `α` are distinct. A variable
/// is never ground.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    name: VariableName,
}

impl Var {
    pub fn new(name: impl Into<VariableName>) -> Self {
        Var { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}
