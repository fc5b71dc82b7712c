use std::fmt::{self, Display, Formatter};
use std::mem;

use super::error::DefError;

const LINE_COMMENT: &str = "#";
const BLOCK_COMMENT_OPEN: &str = "~#";
const BLOCK_COMMENT_CLOSE: &str = "#~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  NonTerm,
  Term,
  Colon,
  Semicolon,
  Pipe,
  Empty,
  Eof,
}

impl Display for TokenKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let s = match self {
      TokenKind::NonTerm => "non-terminal",
      TokenKind::Term => "terminal",
      TokenKind::Colon => "`:`",
      TokenKind::Semicolon => "`;`",
      TokenKind::Pipe => "`|`",
      TokenKind::Empty => "`!`",
      TokenKind::Eof => "end of input",
    };
    f.write_str(s)
  }
}

/// Position in the definition text. `offset` is in bytes, `line` and
/// `column` are 1-based and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
  pub offset: usize,
  pub line: usize,
  pub column: usize,
}

impl Location {
  pub fn start() -> Self {
    Location {
      offset: 0,
      line: 1,
      column: 1,
    }
  }

  fn advance(&mut self, ch: char) {
    self.offset += ch.len_utf8();
    if ch == '\n' {
      self.line += 1;
      self.column = 1;
    } else {
      self.column += 1;
    }
  }
}

impl Default for Location {
  fn default() -> Self {
    Location::start()
  }
}

impl Display for Location {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.line, self.column)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  /// Terminals carry their text without the quotes.
  pub text: String,
  pub loc: Location,
  /// Length in bytes of the source text, quotes included.
  pub len: usize,
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self.kind {
      TokenKind::NonTerm => write!(f, "non-terminal `{}`", self.text),
      TokenKind::Term => write!(f, "terminal '{}'", self.text),
      kind => write!(f, "{}", kind),
    }
  }
}

/// Splits grammar definition text into tokens, one token of lookahead at a
/// time.
pub struct Tokenizer<'a> {
  text: &'a str,
  loc: Location,
  peek: Token,
}

impl<'a> Tokenizer<'a> {
  pub fn new(text: &'a str) -> Result<Self, DefError> {
    let mut tokenizer = Tokenizer {
      text,
      loc: Location::start(),
      peek: Token {
        kind: TokenKind::Eof,
        text: String::new(),
        loc: Location::start(),
        len: 0,
      },
    };
    tokenizer.peek = tokenizer.scan()?;
    Ok(tokenizer)
  }

  pub fn peek(&self) -> &Token {
    &self.peek
  }

  /// Consumes the lookahead token. Once the end of input is reached, keeps
  /// returning `Eof` tokens.
  pub fn next(&mut self) -> Result<Token, DefError> {
    let next = self.scan()?;
    Ok(mem::replace(&mut self.peek, next))
  }

  pub fn has(&self, kinds: &[TokenKind]) -> bool {
    kinds.contains(&self.peek.kind)
  }

  pub fn expect(&mut self, kinds: &[TokenKind]) -> Result<Token, DefError> {
    if self.has(kinds) {
      self.next()
    } else {
      Err(DefError::UnexpectedToken {
        expected: kinds.to_vec(),
        found: self.peek.clone(),
      })
    }
  }

  fn rest(&self) -> &'a str {
    &self.text[self.loc.offset..]
  }

  fn current(&self) -> Option<char> {
    self.rest().chars().next()
  }

  fn bump(&mut self) -> Option<char> {
    let ch = self.current()?;
    self.loc.advance(ch);
    Some(ch)
  }

  fn bump_str(&mut self, s: &str) -> bool {
    if self.rest().starts_with(s) {
      s.chars().for_each(|ch| self.loc.advance(ch));
      true
    } else {
      false
    }
  }

  fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
    let start = self.loc.offset;
    while self.current().map_or(false, &pred) {
      self.bump();
    }
    &self.text[start..self.loc.offset]
  }

  fn skip_trivia(&mut self) {
    loop {
      self.bump_while(char::is_whitespace);
      if self.bump_str(BLOCK_COMMENT_OPEN) {
        while !self.bump_str(BLOCK_COMMENT_CLOSE) && self.bump().is_some() {}
      } else if self.bump_str(LINE_COMMENT) {
        self.bump_while(|ch| ch != '\n');
      } else {
        break;
      }
    }
  }

  fn scan(&mut self) -> Result<Token, DefError> {
    self.skip_trivia();
    let start = self.loc;

    let ch = match self.current() {
      Some(ch) => ch,
      None => return Ok(self.token(TokenKind::Eof, String::new(), start)),
    };

    if is_name_char(ch) {
      let name = self.bump_while(is_name_char).to_owned();
      return Ok(self.token(TokenKind::NonTerm, name, start));
    }
    if ch == '\'' {
      return self.scan_term();
    }

    let kind = match ch {
      ':' => TokenKind::Colon,
      ';' => TokenKind::Semicolon,
      '|' => TokenKind::Pipe,
      '!' => TokenKind::Empty,
      _ => return Err(DefError::InvalidCharacter { ch, loc: start }),
    };
    self.bump();
    Ok(self.token(kind, ch.to_string(), start))
  }

  fn scan_term(&mut self) -> Result<Token, DefError> {
    let start = self.loc;
    self.bump();
    let value = self.bump_while(|ch| ch != '\'' && ch != '\n').to_owned();
    if self.current() != Some('\'') {
      return Err(DefError::UnclosedTerminal { start });
    }
    self.bump();
    Ok(self.token(TokenKind::Term, value, start))
  }

  fn token(&self, kind: TokenKind, text: String, start: Location) -> Token {
    Token {
      kind,
      text,
      loc: start,
      len: self.loc.offset - start.offset,
    }
  }
}

fn is_name_char(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

/// Tokenizes the whole text, ending with the `Eof` token.
pub fn tokenize(text: &str) -> Result<Vec<Token>, DefError> {
  let mut tokenizer = Tokenizer::new(text)?;
  let mut tokens = vec![];
  loop {
    let token = tokenizer.next()?;
    let done = token.kind == TokenKind::Eof;
    tokens.push(token);
    if done {
      return Ok(tokens);
    }
  }
}
