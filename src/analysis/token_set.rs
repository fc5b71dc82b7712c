use std::fmt::{self, Debug, Formatter};
use crate::bnf::TermId;

type BitBlock = u64;

const BLOCK_NBITS: usize = std::mem::size_of::<BitBlock>() * 8;

/// Fixed-size set of lookaheads, indexed by `TermId`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct TokenSet {
  slice: Box<[BitBlock]>,
}

impl TokenSet {
  pub fn new(num_tokens: usize) -> Self {
    let len = (num_tokens + BLOCK_NBITS - 1) / BLOCK_NBITS;
    Self {
      slice: vec![0; len].into_boxed_slice(),
    }
  }

  pub fn clear(&mut self) {
    for x in self.slice.iter_mut() {
      *x = 0;
    }
  }

  /// Returns whether the set has changed.
  pub fn insert(&mut self, token: TermId) -> bool {
    let (block, mask) = Self::locate(token);
    let old = self.slice[block];
    self.slice[block] |= mask;
    old != self.slice[block]
  }

  pub fn contains(&self, token: TermId) -> bool {
    let (block, mask) = Self::locate(token);
    self.slice.get(block).map_or(false, |&x| x & mask != 0)
  }

  /// Returns whether the set has changed.
  pub fn union_with(&mut self, other: &TokenSet) -> bool {
    let mut changed = false;
    for i in 0..self.slice.len() {
      let old = self.slice[i];
      self.slice[i] |= other.slice[i];
      changed |= old != self.slice[i];
    }
    changed
  }

  pub fn intersection(&self, other: &TokenSet) -> TokenSet {
    let slice = self.slice.iter()
      .zip(other.slice.iter())
      .map(|(x, y)| x & y)
      .collect::<Vec<_>>();
    TokenSet {
      slice: slice.into_boxed_slice(),
    }
  }

  pub fn is_disjoint(&self, other: &TokenSet) -> bool {
    self.slice.iter().zip(other.slice.iter()).all(|(x, y)| x & y == 0)
  }

  pub fn iter(&self) -> Iter {
    Iter {
      slice: &*self.slice,
      bit: 0,
      index: 0,
    }
  }

  fn locate(token: TermId) -> (usize, BitBlock) {
    let token = token.index();
    (token / BLOCK_NBITS, 1 << (token % BLOCK_NBITS))
  }
}

pub(crate) struct Iter<'a> {
  slice: &'a [BitBlock],
  bit: usize,
  index: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = TermId;

  fn next(&mut self) -> Option<TermId> {
    while self.index < self.slice.len() {
      if self.bit < BLOCK_NBITS {
        let bit = (self.slice[self.index] & !((1 << self.bit) - 1))
          .trailing_zeros() as usize;
        if bit < BLOCK_NBITS {
          self.bit = bit + 1;
          return Some(TermId((self.index * BLOCK_NBITS + bit) as u32));
        }
      }

      self.index += 1;
      self.bit = 0;
    }
    None
  }
}

impl Debug for TokenSet {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_set().entries(self.iter().map(|t| t.0)).finish()
  }
}
