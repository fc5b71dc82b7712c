//! LL(1) grammar analysis and predictive parsing.
//!
//! Grammars are written in a small BNF notation (see [`def`]), checked for
//! LL(1) conflicts by the [`Analyzer`], and run by a [`PredictiveParser`]
//! over any token source implementing [`Lexer`].

use std::fmt::{self, Display, Formatter};

pub mod analysis;
pub mod def;
pub mod grammar;
pub mod parser;
mod bnf;

pub use analysis::{Analyzer, Lookahead};
pub use grammar::{Grammar, Rule, Symbol};
pub use parser::{Child, Lexer, ParseTree, PredictiveParser, Token};

/// Reads grammar definition text and builds a parser for it.
pub fn build(text: &str) -> Result<PredictiveParser, Error> {
  let grammar = def::parse(text)?;
  Ok(PredictiveParser::new(&grammar)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  Definition(def::DefError),
  Build(parser::BuildError),
}

impl From<def::DefError> for Error {
  fn from(err: def::DefError) -> Self {
    Error::Definition(err)
  }
}

impl From<parser::BuildError> for Error {
  fn from(err: parser::BuildError) -> Self {
    Error::Build(err)
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Error::Definition(err) => write!(f, "{}", err),
      Error::Build(err) => write!(f, "{}", err),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Definition(err) => Some(err),
      Error::Build(err) => Some(err),
    }
  }
}
