//! Table-driven recursive descent over a caller-supplied token stream.

use std::sync::Arc;
use log::trace;
use crate::analysis::{Analyzer, Lookahead, NontermId};
use crate::bnf::Symbol;
use crate::grammar::Grammar;

pub use self::error::{AmbiguousGrammar, BuildError, ParseError};
pub use self::tree::{Child, ParseTree};

mod error;
mod tree;

/// A token of the language being parsed.
pub trait Token {
  /// The terminal this token matches, or `Lookahead::Eof` at the end of
  /// input. Terminal names must be spelled as in the grammar.
  fn kind(&self) -> Lookahead<'_>;
}

/// A token source for the language being parsed.
pub trait Lexer {
  type Token: Token + Clone;

  /// The next token, not consumed. At the end of input this is an
  /// `Eof` token, repeatedly.
  fn peek(&self) -> &Self::Token;

  fn next(&mut self) -> Self::Token;

  fn has(&self, kinds: &[Lookahead<'_>]) -> bool {
    let kind = self.peek().kind();
    kinds.iter().any(|k| *k == kind)
  }

  fn expect<'g>(
    &mut self,
    kinds: &[Lookahead<'g>],
  ) -> Result<Self::Token, ParseError<'g, Self::Token>> {
    if self.has(kinds) {
      Ok(self.next())
    } else {
      Err(ParseError::UnexpectedToken {
        expected: kinds.to_vec(),
        found: self.peek().clone(),
      })
    }
  }
}

/// LL(1) parser for a grammar without conflicts.
#[derive(Clone)]
pub struct PredictiveParser {
  analyzer: Arc<Analyzer>,
}

impl PredictiveParser {
  pub fn new(grammar: &Grammar) -> Result<Self, BuildError> {
    Self::from_analyzer(Arc::new(Analyzer::new(grammar)?))
  }

  pub fn from_analyzer(analyzer: Arc<Analyzer>) -> Result<Self, BuildError> {
    if analyzer.is_ambiguous() {
      return Err(AmbiguousGrammar {
        conflicts: analyzer.conflicts(),
      }.into());
    }
    Ok(PredictiveParser {
      analyzer,
    })
  }

  pub fn analyzer(&self) -> &Arc<Analyzer> {
    &self.analyzer
  }

  /// Parses the start symbol. Tokens after it are left in the lexer.
  pub fn parse<L: Lexer>(
    &self,
    lexer: &mut L,
  ) -> Result<ParseTree<L::Token>, ParseError<'_, L::Token>> {
    self.parse_nonterm(lexer, self.analyzer.start())
  }

  /// Parses the start symbol and requires the input to end there.
  pub fn parse_complete<L: Lexer>(
    &self,
    lexer: &mut L,
  ) -> Result<ParseTree<L::Token>, ParseError<'_, L::Token>> {
    let tree = self.parse(lexer)?;
    lexer.expect(&[Lookahead::Eof])?;
    Ok(tree)
  }

  fn parse_nonterm<L: Lexer>(
    &self,
    lexer: &mut L,
    nonterm: NontermId,
  ) -> Result<ParseTree<L::Token>, ParseError<'_, L::Token>> {
    let an = &*self.analyzer;

    let selected = an.lookahead_id(lexer.peek().kind())
      .filter(|&term| an.predicts_nonterm(nonterm, term))
      .and_then(|term| {
        an.rules(nonterm).iter().copied().find(|&rule| an.predicts(rule, term))
      });
    let rule = match selected {
      Some(rule) => rule,
      None => {
        return Err(ParseError::UnexpectedToken {
          expected: an.predict_nonterm(nonterm).into_iter().collect(),
          found: lexer.peek().clone(),
        });
      }
    };
    trace!("expanding `{}`", an.rule(rule));

    let mut children = Vec::with_capacity(an.production(rule).len());
    for sym in an.production(rule) {
      let child = match *sym {
        Symbol::Term(term) => Child::Token(lexer.expect(&[an.term(term)])?),
        Symbol::Nonterm(nt) => Child::Tree(self.parse_nonterm(lexer, nt)?),
      };
      children.push(child);
    }

    Ok(ParseTree::new(an.nonterm_name(nonterm), children))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::def::parse;
  use insta::assert_snapshot;
  use pretty_assertions::assert_eq;

  #[derive(Debug, Clone, PartialEq)]
  struct Tok(&'static str);

  impl Token for Tok {
    fn kind(&self) -> Lookahead<'_> {
      if self.0.is_empty() {
        Lookahead::Eof
      } else {
        Lookahead::Term(self.0)
      }
    }
  }

  impl std::fmt::Display for Tok {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
      if self.0.is_empty() {
        write!(f, "EOF")
      } else {
        write!(f, "{}", self.0)
      }
    }
  }

  struct Toks {
    toks: Vec<Tok>,
    pos: usize,
    eof: Tok,
  }

  impl Toks {
    fn new(text: &'static str) -> Self {
      Toks {
        toks: text.split_whitespace().map(Tok).collect(),
        pos: 0,
        eof: Tok(""),
      }
    }
  }

  impl Lexer for Toks {
    type Token = Tok;

    fn peek(&self) -> &Tok {
      self.toks.get(self.pos).unwrap_or(&self.eof)
    }

    fn next(&mut self) -> Tok {
      let tok = self.peek().clone();
      self.pos += 1;
      tok
    }
  }

  fn parser(text: &str) -> PredictiveParser {
    PredictiveParser::new(&parse(text).unwrap()).unwrap()
  }

  #[test]
  fn nested() {
    let parser = parser("S: 'a' S 'b' | ! ;");
    let tree = parser.parse(&mut Toks::new("a a b b")).unwrap();

    assert_snapshot!(tree.to_string(), @"S(a, S(a, S(), b), b)");
  }

  #[test]
  fn builds_children_in_order() {
    let parser = parser("S: 'a' S 'b' | ! ;");
    let tree = parser.parse(&mut Toks::new("a b")).unwrap();

    assert_eq!(tree, ParseTree::new("S", vec![
      Child::Token(Tok("a")),
      Child::Tree(ParseTree::new("S", vec![])),
      Child::Token(Tok("b")),
    ]));
  }

  #[test]
  fn unexpected_at_nonterm() {
    let parser = parser("e: p et; et: '+' p et | !; p: '1';");
    let err = parser.parse(&mut Toks::new("1 + +")).unwrap_err();

    assert_eq!(err, ParseError::UnexpectedToken {
      expected: vec![Lookahead::Term("1")],
      found: Tok("+"),
    });
  }

  #[test]
  fn unexpected_terminal() {
    let parser = parser("S: 'a' 'b';");
    let err = parser.parse(&mut Toks::new("a c")).unwrap_err();

    assert_snapshot!(err.to_string(), @"unexpected token c, expected 'b'");
  }

  #[test]
  fn unexpected_end() {
    let parser = parser("e: p et; et: '+' p et | !; p: '1';");
    let err = parser.parse(&mut Toks::new("1 1")).unwrap_err();

    assert_snapshot!(err.to_string(), @"unexpected token 1, expected one of '+', EOF");
  }

  #[test]
  fn trailing_input() {
    let parser = parser("S: 'a';");

    assert!(parser.parse(&mut Toks::new("a a")).is_ok());
    let err = parser.parse_complete(&mut Toks::new("a a")).unwrap_err();
    assert_eq!(err, ParseError::UnexpectedToken {
      expected: vec![Lookahead::Eof],
      found: Tok("a"),
    });
  }

  #[test]
  fn refuses_ambiguous_grammar() {
    let err = PredictiveParser::new(&parse("S: A | B; A: 'a'; B: 'a';").unwrap())
      .err()
      .unwrap();

    assert_snapshot!(err.to_string(), @r###"
    grammar is not LL(1)
      `S: B;` overlaps an earlier alternative on 'a'
    "###);
  }

  #[test]
  fn shares_analysis() {
    let an = Arc::new(Analyzer::new(&parse("S: 'x' S | !;").unwrap()).unwrap());
    let a = PredictiveParser::from_analyzer(an.clone()).unwrap();
    let b = PredictiveParser::from_analyzer(an).unwrap();

    let handle = std::thread::spawn(move || {
      a.parse(&mut Toks::new("x x")).map(|tree| tree.tokens().len()).unwrap_or(0)
    });
    assert_eq!(b.parse(&mut Toks::new("x")).unwrap().tokens().len(), 1);
    assert_eq!(handle.join().unwrap(), 2);
  }
}
