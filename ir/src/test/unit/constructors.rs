//! Tests for node constructors and their guards.

use test_case::test_case;

use crate::error::Error;
use crate::types::{BinaryOp, DType, IrNodeTy};
use crate::{Expr, IntoExpr, Op, ScheduleBlock, Tensor, Var};

fn tensor_2d(name: &str) -> Tensor {
    Tensor::new(name, [Expr::int(8), Expr::int(8)], DType::Float32)
}

#[test]
fn test_load() {
    let a = tensor_2d("A");
    let (i, j) = (Var::new("i"), Var::new("j"));
    let load = Expr::load(&a, [&i, &j]).unwrap();

    assert_eq!(load.node_type(), IrNodeTy::Load);
    let Op::Load { tensor, indices } = load.op() else { panic!("Expected Load op") };
    assert_eq!(tensor.as_tensor().unwrap().name(), "A");
    assert_eq!(indices.len(), 2);
    assert_eq!(indices[0].as_var(), Some(&i));
    assert_eq!(load.op().access_tensor().map(Tensor::name), Some("A"));
}

#[test]
fn test_store() {
    let c = tensor_2d("C");
    let (i, j) = (Var::new("i"), Var::new("j"));
    let store = Expr::store(&c, 1.0f32, [&i, &j]).unwrap();

    let Op::Store { value, indices, .. } = store.op() else { panic!("Expected Store op") };
    assert!(matches!(value.op(), Op::FloatImm(v) if *v == 1.0));
    assert_eq!(store.op().access_indices().map(<[Expr]>::len), Some(2));
}

#[test_case(0 ; "too few")]
#[test_case(1 ; "one short")]
#[test_case(3 ; "too many")]
fn test_access_rank_mismatch(count: usize) {
    let a = tensor_2d("A");
    let indices: Vec<Expr> = (0..count).map(|n| Expr::int(n as i64)).collect();

    let err = Expr::load(&a, indices.clone()).unwrap_err();
    assert_eq!(err, Error::ShapeRankMismatch { tensor: "A".into(), rank: 2, indices: count });
    assert!(Expr::store(&a, 0, indices).is_err());
}

#[test]
fn test_scalar_tensor_access() {
    let s = Tensor::new("s", std::iter::empty(), DType::Float32);
    let load = Expr::load(&s, std::iter::empty::<Expr>()).unwrap();
    assert!(load.op().access_indices().unwrap().is_empty());
}

#[test]
fn test_operators_build_binary_nodes() {
    let i = Var::new("i");
    let e = &i * 4 + 1;
    let Op::Binary(BinaryOp::Add, lhs, rhs) = e.op() else { panic!("Expected Add") };
    assert!(matches!(lhs.op(), Op::Binary(BinaryOp::Mul, ..)));
    assert_eq!(rhs.as_int(), Some(1));

    assert!(matches!((e.clone() % 3).op(), Op::Binary(BinaryOp::Mod, ..)));
    assert!(matches!((&e - &i).op(), Op::Binary(BinaryOp::Sub, ..)));
    assert!(matches!((e / 2).op(), Op::Binary(BinaryOp::Div, ..)));
}

#[test]
fn test_realize_checks_iter_value_count() {
    let c = Tensor::new("C", [Expr::int(8)], DType::Float32);
    let i = Var::new("i");
    let block = ScheduleBlock::new("C", [i.clone()], Expr::store(&c, 0, [&i]).unwrap());

    let err = Expr::schedule_block_realize([Var::new("x"), Var::new("y")], Expr::schedule_block(block.clone()))
        .unwrap_err();
    assert_eq!(err, Error::IterValueCountMismatch { block: "C".into(), iter_vars: 1, iter_values: 2 });

    let realize = Expr::schedule_block_realize([Var::new("x")], Expr::schedule_block(block)).unwrap();
    let r = realize.as_schedule_block_realize().unwrap();
    assert_eq!(r.block().map(ScheduleBlock::name), Some("C"));
}

#[test]
fn test_realize_accepts_non_block_target() {
    // Only blocks are checked; analyses reject other targets themselves.
    let realize = Expr::schedule_block_realize([1, 2], Var::new("x").into_expr()).unwrap();
    assert!(realize.as_schedule_block_realize().unwrap().block().is_none());
}

#[test]
fn test_for_loop_children() {
    let i = Var::new("i");
    let body = Expr::block([Expr::int(0)]);
    let f = Expr::for_loop(&i, 0, 16, body);
    let children = f.op().children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[1].as_int(), Some(16));
}
