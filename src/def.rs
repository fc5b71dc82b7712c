//! Reading grammars written in definition notation:
//!
//! ```text
//! # line comment
//! ~# block
//!    comment #~
//! expr: term expr_tail;
//! expr_tail: '+' term expr_tail | !;
//! term: '1';
//! ```
//!
//! Non-terminals are runs of alphanumerics and underscores, terminals are
//! quoted with `'` and `!` stands for the empty production.

mod error;
mod parser;
mod tokenizer;

pub use error::DefError;
pub use parser::parse;
pub use tokenizer::{tokenize, Location, Token, TokenKind, Tokenizer};
