use log::{debug, trace};
use crate::bnf::*;
use super::token_set::TokenSet;

pub(super) fn gen_nullable(
  bnf: &Bnf,
) -> Vec<bool> {
  let mut nullable = vec![false; bnf.nonterms.len()];

  let mut sweeps = 0;
  loop {
    sweeps += 1;
    let mut changed = false;
    for prod in &bnf.prods {
      let nt_ix = prod.nonterm.index();
      if !nullable[nt_ix] && is_nullable(&nullable, &prod.symbols) {
        nullable[nt_ix] = true;
        changed = true;
      }
    }
    trace!("nullable sweep {}: {:?}", sweeps, nullable);
    if !changed {
      break;
    }
  }

  debug!("nullable converged after {} sweeps", sweeps);
  nullable
}

pub(super) fn is_nullable(nullable: &[bool], symbols: &[Symbol]) -> bool {
  symbols.iter().all(|sym| match sym {
    Symbol::Term(_) => false,
    Symbol::Nonterm(id) => nullable[id.index()],
  })
}

pub(super) fn gen_first(
  bnf: &Bnf,
  nullable: &[bool],
) -> Vec<TokenSet> {
  let mut buf = TokenSet::new(bnf.num_lookaheads());
  let mut first = vec![buf.clone(); bnf.nonterms.len()];

  let mut sweeps = 0;
  loop {
    sweeps += 1;
    let mut changed = false;
    for prod in &bnf.prods {
      buf.clear();
      compute_first_for_symbols(&mut buf, &first, nullable, &prod.symbols);
      changed |= first[prod.nonterm.index()].union_with(&buf);
    }
    trace!("first sweep {}: {:?}", sweeps, first);
    if !changed {
      break;
    }
  }

  debug!("first converged after {} sweeps", sweeps);
  first
}

/// Adds the terminals that can begin `symbols` to `result`.
pub(super) fn compute_first_for_symbols(
  result: &mut TokenSet,
  first: &[TokenSet],
  nullable: &[bool],
  symbols: &[Symbol],
) {
  for sym in symbols {
    match sym {
      Symbol::Term(id) => {
        result.insert(*id);
        return;
      }
      Symbol::Nonterm(id) => {
        result.union_with(&first[id.index()]);
        if !nullable[id.index()] {
          return;
        }
      }
    }
  }
}

pub(super) fn gen_follow(
  bnf: &Bnf,
  nullable: &[bool],
  first: &[TokenSet],
) -> Vec<TokenSet> {
  let mut buf = TokenSet::new(bnf.num_lookaheads());
  let mut follow = vec![buf.clone(); bnf.nonterms.len()];
  follow[bnf.start().index()].insert(bnf.eof());

  let mut sweeps = 0;
  loop {
    sweeps += 1;
    let mut changed = false;
    for prod in &bnf.prods {
      for (i, sym) in prod.symbols.iter().enumerate() {
        let nt = match sym {
          Symbol::Term(_) => continue,
          Symbol::Nonterm(id) => id.index(),
        };
        let suffix = &prod.symbols[i + 1..];

        buf.clear();
        compute_first_for_symbols(&mut buf, first, nullable, suffix);
        if is_nullable(nullable, suffix) {
          buf.union_with(&follow[prod.nonterm.index()]);
        }
        changed |= follow[nt].union_with(&buf);
      }
    }
    trace!("follow sweep {}: {:?}", sweeps, follow);
    if !changed {
      break;
    }
  }

  debug!("follow converged after {} sweeps", sweeps);
  follow
}

/// Returns the predict set of every rule, and of every non-terminal as the
/// union over its rules.
pub(super) fn gen_predict(
  bnf: &Bnf,
  nullable: &[bool],
  first: &[TokenSet],
  follow: &[TokenSet],
) -> (Vec<TokenSet>, Vec<TokenSet>) {
  let empty = TokenSet::new(bnf.num_lookaheads());
  let mut predict = vec![];
  let mut predict_nonterm = vec![empty.clone(); bnf.nonterms.len()];

  for prod in &bnf.prods {
    let mut set = empty.clone();
    compute_first_for_symbols(&mut set, first, nullable, &prod.symbols);
    if is_nullable(nullable, &prod.symbols) {
      set.union_with(&follow[prod.nonterm.index()]);
    }
    predict_nonterm[prod.nonterm.index()].union_with(&set);
    predict.push(set);
  }

  (predict, predict_nonterm)
}

/// Rules whose predict set overlaps the union of the predict sets of the
/// earlier alternatives of the same non-terminal.
pub(super) fn gen_ambiguous(
  bnf: &Bnf,
  predict: &[TokenSet],
) -> Vec<Vec<RuleId>> {
  let mut ambiguous = vec![vec![]; bnf.nonterms.len()];
  let mut seen = TokenSet::new(bnf.num_lookaheads());

  for (nt_ix, rules) in bnf.nonterms.values().enumerate() {
    seen.clear();
    for &rule in rules {
      let set = &predict[rule.index()];
      if !seen.is_disjoint(set) {
        debug!("rule {} of `{}` overlaps an earlier alternative on {:?}",
          rule.index(), bnf.rules[rule.index()].lhs, seen.intersection(set));
        ambiguous[nt_ix].push(rule);
      }
      seen.union_with(set);
    }
  }

  ambiguous
}
