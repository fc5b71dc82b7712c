use crate::grammar::{Grammar, Rule, Symbol};
use super::error::DefError;
use super::tokenizer::{Tokenizer, TokenKind};

const SYMBOL: &[TokenKind] = &[TokenKind::NonTerm, TokenKind::Term];

/// Parses grammar definition text.
///
/// ```text
/// grammar     := rule+ EOF
/// rule        := NonTerm ':' productions ';'
/// productions := production ('|' production)*
/// production  := '!' | symbol+
/// symbol      := NonTerm | Term
/// ```
///
/// Every production becomes one `Rule`, in source order.
pub fn parse(text: &str) -> Result<Grammar, DefError> {
  let mut tokens = Tokenizer::new(text)?;

  let mut rules = parse_rule(&mut tokens)?;
  while tokens.has(&[TokenKind::NonTerm]) {
    rules.extend(parse_rule(&mut tokens)?);
  }
  tokens.expect(&[TokenKind::NonTerm, TokenKind::Eof])?;

  Ok(Grammar::new(rules))
}

fn parse_rule(tokens: &mut Tokenizer) -> Result<Vec<Rule>, DefError> {
  let name = tokens.expect(&[TokenKind::NonTerm])?.text;
  tokens.expect(&[TokenKind::Colon])?;

  let mut rules = vec![];
  loop {
    rules.push(Rule::new(name.clone(), parse_production(tokens)?));
    let sep = tokens.expect(&[TokenKind::Pipe, TokenKind::Semicolon])?;
    if sep.kind == TokenKind::Semicolon {
      return Ok(rules);
    }
  }
}

fn parse_production(tokens: &mut Tokenizer) -> Result<Vec<Symbol>, DefError> {
  if tokens.has(&[TokenKind::Empty]) {
    tokens.next()?;
    return Ok(vec![]);
  }

  let mut symbols = vec![parse_symbol(tokens)?];
  while tokens.has(SYMBOL) {
    symbols.push(parse_symbol(tokens)?);
  }
  Ok(symbols)
}

fn parse_symbol(tokens: &mut Tokenizer) -> Result<Symbol, DefError> {
  let token = tokens.expect(SYMBOL)?;
  Ok(match token.kind {
    TokenKind::Term => Symbol::Terminal(token.text),
    _ => Symbol::NonTerminal(token.text),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::def::Location;
  use crate::grammar::{nonterm, rule, term};
  use insta::assert_snapshot;
  use pretty_assertions::assert_eq;

  #[test]
  fn alternatives_in_source_order() {
    let grammar = parse("
      e: p et;
      et: '+' p et | !;
      p: '1' | '(' e ')';
    ").unwrap();

    assert_eq!(grammar.rules(), &[
      rule("e", vec![nonterm("p"), nonterm("et")]),
      rule("et", vec![term("+"), nonterm("p"), nonterm("et")]),
      rule("et", vec![]),
      rule("p", vec![term("1")]),
      rule("p", vec![term("("), nonterm("e"), term(")")]),
    ][..]);
  }

  #[test]
  fn round_trips_through_display() {
    let text = "S: 'a' S 'b';\nS: !;\n";

    assert_eq!(parse(text).unwrap().to_string(), text);
  }

  #[test]
  fn empty_text() {
    let err = parse("  # nothing\n").unwrap_err();

    assert_snapshot!(err.to_string(), @"unexpected end of input at 2:1, expected non-terminal");
  }

  #[test]
  fn production_without_symbols() {
    let err = parse("a: | 'x';").unwrap_err();

    match err {
      DefError::UnexpectedToken { expected, found } => {
        assert_eq!(expected, vec![TokenKind::NonTerm, TokenKind::Term]);
        assert_eq!(found.kind, TokenKind::Pipe);
        assert_eq!(found.loc, Location { offset: 3, line: 1, column: 4 });
      }
      err => panic!("unexpected error {:?}", err),
    }
  }

  #[test]
  fn symbols_after_empty() {
    let err = parse("a: ! 'x';").unwrap_err();

    assert_snapshot!(err.to_string(), @"unexpected terminal 'x' at 1:6, expected `|` or `;`");
  }

  #[test]
  fn trailing_tokens() {
    let err = parse("a: 'x'; ;").unwrap_err();

    assert_snapshot!(err.to_string(), @"unexpected `;` at 1:9, expected non-terminal or end of input");
  }

  #[test]
  fn missing_semicolon() {
    let err = parse("a: 'x'").unwrap_err();

    assert_snapshot!(err.to_string(), @"unexpected end of input at 1:7, expected `|` or `;`");
  }
}
