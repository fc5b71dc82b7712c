use std::fmt::{self, Display, Formatter};

/// A grammar symbol, identified by its variant and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
  Terminal(String),
  NonTerminal(String),
}

impl Symbol {
  pub fn id(&self) -> &str {
    match self {
      Symbol::Terminal(id) | Symbol::NonTerminal(id) => id,
    }
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Symbol::Terminal(id) => write!(f, "'{}'", id),
      Symbol::NonTerminal(id) => write!(f, "{}", id),
    }
  }
}

/// One alternative of a non-terminal. An empty production derives the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
  pub lhs: String,
  pub production: Vec<Symbol>,
}

impl Rule {
  pub fn new(lhs: impl Into<String>, production: Vec<Symbol>) -> Self {
    Rule {
      lhs: lhs.into(),
      production,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.production.is_empty()
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:", self.lhs)?;
    if self.production.is_empty() {
      return write!(f, " !;");
    }
    for sym in &self.production {
      write!(f, " {}", sym)?;
    }
    write!(f, ";")
  }
}

/// An ordered list of rules. The left-hand side of the first rule is the
/// start symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grammar {
  rules: Vec<Rule>,
}

impl Grammar {
  pub fn new(rules: Vec<Rule>) -> Self {
    Grammar {
      rules,
    }
  }

  pub fn rules(&self) -> &[Rule] {
    &self.rules
  }

  pub fn start(&self) -> Option<&str> {
    self.rules.first().map(|rule| rule.lhs.as_str())
  }

  pub fn into_rules(self) -> Vec<Rule> {
    self.rules
  }
}

impl From<Vec<Rule>> for Grammar {
  fn from(rules: Vec<Rule>) -> Self {
    Grammar::new(rules)
  }
}

impl Display for Grammar {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    for rule in &self.rules {
      writeln!(f, "{}", rule)?;
    }
    Ok(())
  }
}

pub fn term(
  id: impl Into<String>,
) -> Symbol {
  Symbol::Terminal(id.into())
}

pub fn nonterm(
  id: impl Into<String>,
) -> Symbol {
  Symbol::NonTerminal(id.into())
}

pub fn rule(
  lhs: impl Into<String>,
  production: Vec<Symbol>,
) -> Rule {
  Rule::new(lhs, production)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn display_rules() {
    let grammar = Grammar::new(vec![
      rule("S", vec![term("a"), nonterm("S"), term("b")]),
      rule("S", vec![]),
    ]);

    assert_eq!(grammar.start(), Some("S"));
    assert_eq!(grammar.to_string(), "S: 'a' S 'b';\nS: !;\n");
  }

  #[test]
  fn empty_grammar_has_no_start() {
    assert_eq!(Grammar::default().start(), None);
  }
}
