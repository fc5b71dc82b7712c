use std::fmt::{self, Display, Formatter};

/// Concrete syntax tree of one non-terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree<T> {
  label: String,
  children: Vec<Child<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child<T> {
  Token(T),
  Tree(ParseTree<T>),
}

impl<T> ParseTree<T> {
  pub fn new(label: impl Into<String>, children: Vec<Child<T>>) -> Self {
    ParseTree {
      label: label.into(),
      children,
    }
  }

  /// Name of the non-terminal.
  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn children(&self) -> &[Child<T>] {
    &self.children
  }

  pub fn into_children(self) -> Vec<Child<T>> {
    self.children
  }

  /// Leaf tokens, left to right.
  pub fn tokens(&self) -> Vec<&T> {
    let mut tokens = vec![];
    self.collect_tokens(&mut tokens);
    tokens
  }

  fn collect_tokens<'a>(&'a self, tokens: &mut Vec<&'a T>) {
    for child in &self.children {
      match child {
        Child::Token(token) => tokens.push(token),
        Child::Tree(tree) => tree.collect_tokens(tokens),
      }
    }
  }
}

impl<T: Display> Display for ParseTree<T> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}(", self.label)?;
    for (i, child) in self.children.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      match child {
        Child::Token(token) => write!(f, "{}", token)?,
        Child::Tree(tree) => write!(f, "{}", tree)?,
      }
    }
    write!(f, ")")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use insta::assert_snapshot;
  use pretty_assertions::assert_eq;

  fn sample() -> ParseTree<&'static str> {
    ParseTree::new("S", vec![
      Child::Token("a"),
      Child::Tree(ParseTree::new("S", vec![])),
      Child::Token("b"),
    ])
  }

  #[test]
  fn renders() {
    assert_snapshot!(sample().to_string(), @"S(a, S(), b)");
  }

  #[test]
  fn leaf_tokens() {
    let tree = ParseTree::new("T", vec![
      Child::Tree(sample()),
      Child::Token("c"),
    ]);

    assert_eq!(tree.tokens(), vec![&"a", &"b", &"c"]);
    assert_eq!(tree.children().len(), 2);
    assert_eq!(tree.label(), "T");
  }
}
