use std::fmt::{self, Display, Formatter};
use ll1::{Lexer, Lookahead, Token};

pub fn init_logging() {
  let _ = pretty_env_logger::try_init();
}

/// A word of the input; the word itself is its terminal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
  pub text: String,
  pub pos: usize,
}

impl Word {
  pub fn new(text: &str, pos: usize) -> Self {
    Word {
      text: text.to_owned(),
      pos,
    }
  }
}

impl Token for Word {
  fn kind(&self) -> Lookahead<'_> {
    if self.text.is_empty() {
      Lookahead::Eof
    } else {
      Lookahead::Term(&self.text)
    }
  }
}

impl Display for Word {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.text.is_empty() {
      write!(f, "EOF")
    } else {
      write!(f, "{}", self.text)
    }
  }
}

/// Splits the input on whitespace; an empty word marks the end of input.
pub struct Words {
  words: Vec<Word>,
  pos: usize,
}

impl Words {
  pub fn new(text: &str) -> Self {
    let mut words = text.split_whitespace()
      .enumerate()
      .map(|(i, w)| Word::new(w, i))
      .collect::<Vec<_>>();
    let end = words.len();
    words.push(Word::new("", end));
    Words {
      words,
      pos: 0,
    }
  }
}

impl Lexer for Words {
  type Token = Word;

  fn peek(&self) -> &Word {
    &self.words[self.pos]
  }

  fn next(&mut self) -> Word {
    let word = self.words[self.pos].clone();
    if self.pos + 1 < self.words.len() {
      self.pos += 1;
    }
    word
  }
}
