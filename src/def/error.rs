use std::fmt::{self, Display, Formatter};

use super::tokenizer::{Location, Token, TokenKind};

/// Errors raised while reading grammar definition text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefError {
  InvalidCharacter {
    ch: char,
    loc: Location,
  },
  /// A quoted terminal hit a newline or the end of input.
  UnclosedTerminal {
    start: Location,
  },
  UnexpectedToken {
    expected: Vec<TokenKind>,
    found: Token,
  },
}

impl DefError {
  pub fn location(&self) -> Location {
    match self {
      DefError::InvalidCharacter { loc, .. } => *loc,
      DefError::UnclosedTerminal { start } => *start,
      DefError::UnexpectedToken { found, .. } => found.loc,
    }
  }
}

impl Display for DefError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      DefError::InvalidCharacter { ch, loc } => {
        write!(f, "invalid character {:?} at {}", ch, loc)
      }
      DefError::UnclosedTerminal { start } => {
        write!(f, "unclosed terminal starting at {}", start)
      }
      DefError::UnexpectedToken { expected, found } => {
        write!(f, "unexpected {} at {}, expected ", found, found.loc)?;
        write_kinds(f, expected)
      }
    }
  }
}

fn write_kinds(f: &mut Formatter, kinds: &[TokenKind]) -> fmt::Result {
  match kinds {
    [] => write!(f, "nothing"),
    [kind] => write!(f, "{}", kind),
    [a, b] => write!(f, "{} or {}", a, b),
    [init @ .., last] => {
      write!(f, "one of ")?;
      for kind in init {
        write!(f, "{}, ", kind)?;
      }
      write!(f, "or {}", last)
    }
  }
}

impl std::error::Error for DefError {}
