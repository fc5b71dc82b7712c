use indexmap::{IndexMap, IndexSet};
use crate::analysis::AnalysisError;
use crate::grammar::{self, Grammar, Rule};

/// Index-based form of a `Grammar`. Non-terminals are numbered in order of
/// first appearance as a left-hand side, so the start symbol is always
/// `NontermId(0)`. Terminals are numbered in order of first appearance in a
/// production, and the end of input takes the id after the last terminal.
pub(crate) struct Bnf {
  pub(crate) terms: IndexSet<String>,
  /// name -> rules in declaration order
  pub(crate) nonterms: IndexMap<String, Vec<RuleId>>,
  pub(crate) rules: Vec<Rule>,
  /// parallel to `rules`
  pub(crate) prods: Vec<Production>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Symbol {
  Term(TermId),
  Nonterm(NontermId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NontermId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub(crate) u32);

impl TermId {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl NontermId {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl RuleId {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

#[derive(Debug, Clone)]
pub(crate) struct Production {
  pub(crate) nonterm: NontermId,
  pub(crate) symbols: Vec<Symbol>,
}

impl Bnf {
  pub(crate) fn new(grammar: &Grammar) -> Result<Bnf, AnalysisError> {
    if grammar.rules().is_empty() {
      return Err(AnalysisError::EmptyGrammar);
    }

    let mut nonterms = IndexMap::<String, Vec<RuleId>>::new();
    let mut terms = IndexSet::new();
    let mut lhs = Vec::with_capacity(grammar.rules().len());
    for (i, rule) in grammar.rules().iter().enumerate() {
      let entry = nonterms.entry(rule.lhs.clone());
      lhs.push(NontermId(entry.index() as u32));
      entry.or_default().push(RuleId(i as u32));
      for sym in &rule.production {
        if let grammar::Symbol::Terminal(id) = sym {
          if !terms.contains(id) {
            terms.insert(id.clone());
          }
        }
      }
    }

    let mut bnf = Bnf {
      terms,
      nonterms,
      rules: grammar.rules().to_vec(),
      prods: Vec::with_capacity(grammar.rules().len()),
    };

    for (rule, nonterm) in grammar.rules().iter().zip(lhs) {
      let symbols = rule.production.iter()
        .map(|sym| bnf.intern(sym).ok_or_else(|| {
          AnalysisError::UndefinedNonTerminal {
            symbol: sym.id().to_owned(),
            rule: rule.clone(),
          }
        }))
        .collect::<Result<Vec<_>, _>>()?;
      bnf.prods.push(Production {
        nonterm,
        symbols,
      });
    }

    Ok(bnf)
  }

  pub(crate) fn intern(&self, sym: &grammar::Symbol) -> Option<Symbol> {
    match sym {
      grammar::Symbol::Terminal(id) => self.term_id(id).map(Symbol::Term),
      grammar::Symbol::NonTerminal(id) => self.nonterm_id(id).map(Symbol::Nonterm),
    }
  }

  pub(crate) fn term_id(&self, name: &str) -> Option<TermId> {
    self.terms.get_index_of(name).map(|i| TermId(i as u32))
  }

  pub(crate) fn nonterm_id(&self, name: &str) -> Option<NontermId> {
    self.nonterms.get_index_of(name).map(|i| NontermId(i as u32))
  }

  pub(crate) fn start(&self) -> NontermId {
    NontermId(0)
  }

  pub(crate) fn eof(&self) -> TermId {
    TermId(self.terms.len() as u32)
  }

  /// Number of distinct lookaheads: every terminal plus the end of input.
  pub(crate) fn num_lookaheads(&self) -> usize {
    self.terms.len() + 1
  }

  pub(crate) fn nonterm_rules(&self, nonterm: NontermId) -> &[RuleId] {
    &self.nonterms[nonterm.index()]
  }
}
