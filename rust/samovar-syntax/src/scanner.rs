//! Scanner for Samovar source text.
//!
//! Tokenization happens up front; the [`Scanner`] then walks the token list
//! with one token of lookahead and offers the peek/expect/consume queries the
//! grammar productions are written against.
//!
//! Token classes:
//! - **Word**: a run of ASCII letters, digits, `_` or `'` (e.g. `rules`, `Alice`, `p`)
//! - **Variable**: `?` followed by letters (`?x`, `?actor`), or a single
//!   Greek letter from [`GREEK_VARIABLES`]
//! - **Qmark**: a `?` that does not start a variable
//! - **Punct**: any other single character, including the glyphs `¬ ∧ →`
//! - **Eof**: end of input
//!
//! Whitespace is skipped and `//` starts a comment running to end of line.

use std::fmt;

use itertools::Itertools;

use crate::error::SyntaxError;

/// Greek letters that scan as variables.
pub const GREEK_VARIABLES: &str = "αβγδεζθικλμνξοπρστυφχψω";

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Punct,
    Variable,
    Qmark,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Punct => write!(f, "punctuation"),
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::Qmark => write!(f, "question mark"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// 1-based line and column, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub position: Position,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "`{}`", self.text),
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '\''
}

/// Tokenize `input` into a token list that always ends with one `Eof` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    // Position of every character, plus one past the end for `Eof`.
    let mut positions = Vec::with_capacity(len + 1);
    let (mut line, mut column) = (1, 1);
    for &ch in &chars {
        positions.push(Position { line, column });
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    positions.push(Position { line, column });

    let mut tokens = Vec::new();
    let mut push = |start: usize, end: usize, kind: TokenKind| {
        tokens.push(Token {
            text: chars[start..end].iter().collect(),
            kind,
            position: positions[start],
        });
    };

    let mut i = 0;
    while i < len {
        let ch = chars[i];

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        // `//` comment
        if ch == '/' && chars.get(i + 1) == Some(&'/') {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        // `?x` variable, or a lone `?`
        if ch == '?' {
            let start = i;
            i += 1;
            if i < len && chars[i].is_ascii_alphabetic() {
                while i < len && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                push(start, i, TokenKind::Variable);
            } else {
                push(start, i, TokenKind::Qmark);
            }
            continue;
        }

        if GREEK_VARIABLES.contains(ch) {
            push(i, i + 1, TokenKind::Variable);
            i += 1;
            continue;
        }

        if ch.is_ascii_alphanumeric() || ch == '_' {
            let start = i;
            while i < len && is_word_char(chars[i]) {
                i += 1;
            }
            push(start, i, TokenKind::Word);
            continue;
        }

        push(i, i + 1, TokenKind::Punct);
        i += 1;
    }

    push(len, len, TokenKind::Eof);
    tokens
}

/// One-token-lookahead cursor over a tokenized source text.
#[derive(Debug, Clone)]
pub struct Scanner {
    tokens: Vec<Token>,
    pos: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            tokens: tokenize(input),
            pos: 0,
        }
    }

    /// The current lookahead token.
    pub fn current(&self) -> &Token {
        // `tokenize` always ends with `Eof` and `scan` never moves past it.
        &self.tokens[self.pos]
    }

    /// Text of the current token. Empty at end of input.
    pub fn token(&self) -> &str {
        &self.current().text
    }

    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn position(&self) -> Position {
        self.current().position
    }

    pub fn at_end(&self) -> bool {
        self.kind() == TokenKind::Eof
    }

    /// Returns `true` if the current token's text is one of `texts`. Never
    /// true at end of input.
    pub fn on(&self, texts: &[&str]) -> bool {
        !self.at_end() && texts.contains(&self.token())
    }

    pub fn on_kind(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Fail unless the current token's class is one of `kinds`.
    pub fn check_kind(&self, kinds: &[TokenKind]) -> Result<(), SyntaxError> {
        if kinds.contains(&self.kind()) {
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedKind {
                expected: kinds.to_vec(),
                found: self.current().to_string(),
                position: self.position(),
            })
        }
    }

    /// Consume the current token if its text is one of `texts`, failing
    /// otherwise.
    pub fn expect(&mut self, texts: &[&str]) -> Result<(), SyntaxError> {
        if self.consume(texts) {
            Ok(())
        } else {
            Err(SyntaxError::Expected {
                expected: texts.iter().map(|text| format!("`{text}`")).join(" or "),
                found: self.current().to_string(),
                position: self.position(),
            })
        }
    }

    /// Consume the current token if its text is one of `texts`, reporting
    /// whether it did.
    pub fn consume(&mut self, texts: &[&str]) -> bool {
        if self.on(texts) {
            self.scan();
            true
        } else {
            false
        }
    }

    /// Advance to the next token. Stays put at end of input.
    pub fn scan(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Fail unless all input has been consumed.
    pub fn expect_end(&self) -> Result<(), SyntaxError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(SyntaxError::TrailingInput {
                found: self.current().to_string(),
                position: self.position(),
            })
        }
    }
}
