mod common;

use common::Words;
use insta::assert_snapshot;
use ll1::def::DefError;

#[test]
fn builds_from_text() {
  common::init_logging();
  let parser = ll1::build("
    # statements separated by semicolons
    stmts: stmt rest;
    rest: 'sep' stmt rest | !;
    stmt: 'id' '=' expr;
    ~# an expression is
       a single atom #~
    expr: 'id' | 'num';
  ").unwrap();

  let tree = parser.parse_complete(&mut Words::new("id = num sep id = id")).unwrap();
  assert_snapshot!(
    tree.to_string(),
    @"stmts(stmt(id, =, expr(num)), rest(sep, stmt(id, =, expr(id)), rest()))");
}

#[test]
fn reports_definition_errors() {
  let err = ll1::build("a: 'x' | 'y").err().unwrap();

  match err {
    ll1::Error::Definition(DefError::UnclosedTerminal { start }) => {
      assert_eq!((start.line, start.column), (1, 10));
    }
    err => panic!("unexpected error {}", err),
  }
}

#[test]
fn reports_undefined_nonterm() {
  let err = ll1::build("a: b;").err().unwrap();

  assert_snapshot!(err.to_string(), @"undefined non-terminal `b` in rule `a: b;`");
}

#[test]
fn reports_conflicts() {
  let err = ll1::build("list: 'n' | 'n' ',' list;").err().unwrap();

  assert_snapshot!(err.to_string(), @r###"
  grammar is not LL(1)
    `list: 'n' ',' list;` overlaps an earlier alternative on 'n'
  "###);
}
