//! Tests for index-to-variable normalization.

use kestrel_ir::{Expr, IntoExpr, Var};
use test_case::test_case;

use crate::auto_schedule::analysis::indices_to_vars;
use crate::config::IndexPolicy;
use crate::error::AnalysisError;

fn mixed_indices() -> (Vec<Expr>, Var, Var) {
    let (i, j, k) = (Var::new("i"), Var::new("j"), Var::new("k"));
    (vec![i.clone().into_expr(), Expr::int(3), &j + 1, k.clone().into_expr()], i, k)
}

#[test]
fn test_drops_constants_and_compound_indices() {
    let (indices, i, k) = mixed_indices();
    let vars = indices_to_vars("A", &indices, IndexPolicy::Drop).unwrap();
    assert_eq!(vars.as_slice(), [i, k]);
}

#[test]
fn test_vars_are_copies() {
    let (indices, i, _) = mixed_indices();
    let vars = indices_to_vars("A", &indices, IndexPolicy::Drop).unwrap();
    assert!(!vars[0].ptr_eq(&i));
    assert!(!vars[0].ptr_eq(indices[0].as_var().unwrap()));
}

#[test]
fn test_reduce_flag_survives_copy() {
    let k = Var::reduce_axis("k");
    let vars = indices_to_vars("A", &[Expr::var(&k)], IndexPolicy::Drop).unwrap();
    assert!(vars[0].is_reduce_axis());
}

#[test]
fn test_empty_indices() {
    assert!(indices_to_vars("s", &[], IndexPolicy::Reject).unwrap().is_empty());
}

#[test]
fn test_only_constants_yields_empty() {
    let vars = indices_to_vars("A", &[Expr::int(0), Expr::int(1)], IndexPolicy::Drop).unwrap();
    assert!(vars.is_empty());
}

#[test]
fn test_reject_reports_first_offender() {
    let (indices, _, _) = mixed_indices();
    let err = indices_to_vars("A", &indices, IndexPolicy::Reject).unwrap_err();
    assert_eq!(err, AnalysisError::NonVariableIndex { tensor: "A".into(), position: 1, index: "3".into() });
}

#[test_case(IndexPolicy::Drop ; "drop")]
#[test_case(IndexPolicy::Reject ; "reject")]
fn test_all_vars_pass_any_policy(policy: IndexPolicy) {
    let indices = [Var::new("i").into_expr(), Var::new("j").into_expr()];
    let vars = indices_to_vars("A", &indices, policy).unwrap();
    let names: Vec<&str> = vars.iter().map(Var::name).collect();
    assert_eq!(names, ["i", "j"]);
}
