//! Nullable, FIRST, FOLLOW and PREDICT sets of a grammar, and the LL(1)
//! conflicts between alternatives.

use std::fmt::{self, Display, Formatter};
use indexmap::IndexSet;
use log::debug;
use crate::bnf::{self, Bnf};
use crate::grammar::{Grammar, Rule, Symbol};
use self::token_set::TokenSet;

pub use crate::bnf::{NontermId, RuleId, TermId};
pub use self::error::AnalysisError;

mod error;
mod sets;
mod token_set;

/// A lookahead: a terminal of the grammar or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lookahead<'a> {
  Term(&'a str),
  Eof,
}

impl Display for Lookahead<'_> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Lookahead::Term(name) => write!(f, "'{}'", name),
      Lookahead::Eof => write!(f, "EOF"),
    }
  }
}

/// A rule whose predict set overlaps those of the alternatives declared
/// before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
  pub rule: Rule,
  /// Shared lookaheads, rendered like `Lookahead`.
  pub overlap: Vec<String>,
}

impl Display for Conflict {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "`{}` overlaps an earlier alternative on {}",
      self.rule, self.overlap.join(", "))
  }
}

/// The analysis tables of a grammar. They are computed once by `new` and
/// never change afterwards.
pub struct Analyzer {
  bnf: Bnf,
  nullable: Vec<bool>,
  first: Vec<TokenSet>,
  follow: Vec<TokenSet>,
  /// per rule
  predict: Vec<TokenSet>,
  predict_nonterm: Vec<TokenSet>,
  ambiguous: Vec<Vec<RuleId>>,
}

impl Analyzer {
  pub fn new(grammar: &Grammar) -> Result<Self, AnalysisError> {
    let bnf = Bnf::new(grammar)?;
    debug!("analyzing {} rules, {} non-terminals, {} terminals",
      bnf.rules.len(), bnf.nonterms.len(), bnf.terms.len());

    let nullable = sets::gen_nullable(&bnf);
    let first = sets::gen_first(&bnf, &nullable);
    let follow = sets::gen_follow(&bnf, &nullable, &first);
    let (predict, predict_nonterm) =
      sets::gen_predict(&bnf, &nullable, &first, &follow);
    let ambiguous = sets::gen_ambiguous(&bnf, &predict);

    Ok(Analyzer {
      bnf,
      nullable,
      first,
      follow,
      predict,
      predict_nonterm,
      ambiguous,
    })
  }

  pub fn start(&self) -> NontermId {
    self.bnf.start()
  }

  pub fn nonterm(&self, name: &str) -> Option<NontermId> {
    self.bnf.nonterm_id(name)
  }

  pub fn nonterm_name(&self, nonterm: NontermId) -> &str {
    match self.bnf.nonterms.get_index(nonterm.index()) {
      Some((name, _)) => name,
      None => panic!("no non-terminal with id {}", nonterm.index()),
    }
  }

  /// Non-terminals in order of first definition.
  pub fn nonterms(&self) -> impl Iterator<Item = NontermId> {
    (0..self.bnf.nonterms.len() as u32).map(NontermId)
  }

  /// Terminals in order of first reference.
  pub fn terminals(&self) -> impl Iterator<Item = &str> {
    self.bnf.terms.iter().map(String::as_str)
  }

  pub fn rule(&self, rule: RuleId) -> &Rule {
    &self.bnf.rules[rule.index()]
  }

  /// Rules of a non-terminal, in declaration order.
  pub fn rules(&self, nonterm: NontermId) -> &[RuleId] {
    self.bnf.nonterm_rules(nonterm)
  }

  pub fn nullable(&self, nonterm: NontermId) -> bool {
    self.nullable[nonterm.index()]
  }

  pub fn first(&self, nonterm: NontermId) -> IndexSet<&str> {
    self.first[nonterm.index()].iter()
      .map(|term| self.term_name(term))
      .collect()
  }

  pub fn follow(&self, nonterm: NontermId) -> IndexSet<Lookahead> {
    self.lookaheads(&self.follow[nonterm.index()])
  }

  pub fn predict(&self, rule: RuleId) -> IndexSet<Lookahead> {
    self.lookaheads(&self.predict[rule.index()])
  }

  /// Union of the predict sets of the non-terminal's rules.
  pub fn predict_nonterm(&self, nonterm: NontermId) -> IndexSet<Lookahead> {
    self.lookaheads(&self.predict_nonterm[nonterm.index()])
  }

  /// Rules of the non-terminal that overlap an earlier alternative.
  pub fn ambiguous(&self, nonterm: NontermId) -> &[RuleId] {
    &self.ambiguous[nonterm.index()]
  }

  pub fn is_ambiguous(&self) -> bool {
    self.ambiguous.iter().any(|rules| !rules.is_empty())
  }

  pub fn conflicts(&self) -> Vec<Conflict> {
    let mut conflicts = vec![];
    for nonterm in self.nonterms() {
      let mut seen = TokenSet::new(self.bnf.num_lookaheads());
      for &rule in self.rules(nonterm) {
        let set = &self.predict[rule.index()];
        if self.ambiguous(nonterm).contains(&rule) {
          conflicts.push(Conflict {
            rule: self.rule(rule).clone(),
            overlap: self.lookaheads(&seen.intersection(set)).iter()
              .map(Lookahead::to_string)
              .collect(),
          });
        }
        seen.union_with(set);
      }
    }
    conflicts
  }

  /// FIRST set of a symbol sequence, or `None` if it names a symbol the
  /// grammar does not have.
  pub fn first_of(&self, symbols: &[Symbol]) -> Option<IndexSet<&str>> {
    let symbols = self.intern(symbols)?;
    let mut set = TokenSet::new(self.bnf.num_lookaheads());
    sets::compute_first_for_symbols(&mut set, &self.first, &self.nullable, &symbols);
    Some(set.iter().map(|term| self.term_name(term)).collect())
  }

  pub fn is_nullable(&self, symbols: &[Symbol]) -> Option<bool> {
    let symbols = self.intern(symbols)?;
    Some(sets::is_nullable(&self.nullable, &symbols))
  }

  fn intern(&self, symbols: &[Symbol]) -> Option<Vec<bnf::Symbol>> {
    symbols.iter().map(|sym| self.bnf.intern(sym)).collect()
  }

  fn lookaheads(&self, set: &TokenSet) -> IndexSet<Lookahead> {
    set.iter().map(|term| self.lookahead(term)).collect()
  }

  fn lookahead(&self, term: TermId) -> Lookahead {
    if term == self.bnf.eof() {
      Lookahead::Eof
    } else {
      Lookahead::Term(self.term_name(term))
    }
  }

  fn term_name(&self, term: TermId) -> &str {
    &self.bnf.terms[term.index()]
  }

  pub(crate) fn lookahead_id(&self, lookahead: Lookahead) -> Option<TermId> {
    match lookahead {
      Lookahead::Term(name) => self.bnf.term_id(name),
      Lookahead::Eof => Some(self.bnf.eof()),
    }
  }

  pub(crate) fn predicts(&self, rule: RuleId, term: TermId) -> bool {
    self.predict[rule.index()].contains(term)
  }

  pub(crate) fn predicts_nonterm(&self, nonterm: NontermId, term: TermId) -> bool {
    self.predict_nonterm[nonterm.index()].contains(term)
  }

  pub(crate) fn production(&self, rule: RuleId) -> &[bnf::Symbol] {
    &self.bnf.prods[rule.index()].symbols
  }

  pub(crate) fn term(&self, term: TermId) -> Lookahead {
    self.lookahead(term)
  }
}
