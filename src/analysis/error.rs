use std::fmt::{self, Display, Formatter};
use crate::grammar::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
  /// `rule` references `symbol`, which no rule defines.
  UndefinedNonTerminal {
    symbol: String,
    rule: Rule,
  },
  /// A grammar without rules has no start symbol.
  EmptyGrammar,
}

impl Display for AnalysisError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      AnalysisError::UndefinedNonTerminal { symbol, rule } => {
        write!(f, "undefined non-terminal `{}` in rule `{}`", symbol, rule)
      }
      AnalysisError::EmptyGrammar => write!(f, "grammar has no rules"),
    }
  }
}

impl std::error::Error for AnalysisError {}
