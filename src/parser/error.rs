use std::fmt::{self, Debug, Display, Formatter};
use crate::analysis::{AnalysisError, Conflict, Lookahead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError<'g, T> {
  UnexpectedToken {
    expected: Vec<Lookahead<'g>>,
    found: T,
  },
}

impl<T: Display> Display for ParseError<'_, T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      ParseError::UnexpectedToken { expected, found } => {
        write!(f, "unexpected token {}, expected ", found)?;
        match expected.as_slice() {
          [] => write!(f, "nothing"),
          [kind] => write!(f, "{}", kind),
          kinds => {
            let kinds = kinds.iter().map(Lookahead::to_string).collect::<Vec<_>>();
            write!(f, "one of {}", kinds.join(", "))
          }
        }
      }
    }
  }
}

impl<T: Debug + Display> std::error::Error for ParseError<'_, T> {}

/// Some non-terminal has alternatives with overlapping predict sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousGrammar {
  pub conflicts: Vec<Conflict>,
}

impl Display for AmbiguousGrammar {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "grammar is not LL(1)")?;
    for conflict in &self.conflicts {
      write!(f, "\n  {}", conflict)?;
    }
    Ok(())
  }
}

impl std::error::Error for AmbiguousGrammar {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
  Analysis(AnalysisError),
  Ambiguous(AmbiguousGrammar),
}

impl From<AnalysisError> for BuildError {
  fn from(err: AnalysisError) -> Self {
    BuildError::Analysis(err)
  }
}

impl From<AmbiguousGrammar> for BuildError {
  fn from(err: AmbiguousGrammar) -> Self {
    BuildError::Ambiguous(err)
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BuildError::Analysis(err) => write!(f, "{}", err),
      BuildError::Ambiguous(err) => write!(f, "{}", err),
    }
  }
}

impl std::error::Error for BuildError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BuildError::Analysis(err) => Some(err),
      BuildError::Ambiguous(err) => Some(err),
    }
  }
}
