//! Tests for buffer identity, tensor views and buffer ranges.

use crate::types::DType;
use crate::{Buffer, BufferRange, Expr, Tensor, Var};

#[test]
fn test_buffer_identity_not_structural() {
    let a = Buffer::new("_A", DType::Float32);
    let b = Buffer::new("_A", DType::Float32);
    assert_ne!(a, b, "same name and dtype must still be distinct storage");
    assert_ne!(a.id(), b.id());
    assert_eq!(a, a.clone());
}

#[test]
fn test_tensor_gets_underscored_buffer() {
    let t = Tensor::new("A", [Expr::int(4), Expr::int(8)], DType::Float64);
    assert_eq!(t.buffer().name(), "_A");
    assert_eq!(t.buffer().dtype(), DType::Float64);
    assert_eq!(t.rank(), 2);
}

#[test]
fn test_tensor_view_shares_storage() {
    let t = Tensor::new("A", [Expr::int(4)], DType::Float32);
    let view = t.view("A_view");
    assert_eq!(view.name(), "A_view");
    assert_eq!(view.buffer(), t.buffer());
    assert_eq!(view.rank(), 1);

    let other = Tensor::new("A", [Expr::int(4)], DType::Float32);
    assert_ne!(other.buffer(), t.buffer());
}

#[test]
fn test_tensor_with_buffer() {
    let buffer = Buffer::new("_S", DType::Int32);
    let t = Tensor::with_buffer("S", [Expr::int(2)], buffer.clone());
    assert_eq!(t.buffer(), &buffer);
    assert_eq!(t.dtype(), DType::Int32);
}

#[test]
fn test_buffer_range_equality_through_views() {
    let t = Tensor::new("A", [Expr::int(4), Expr::int(4)], DType::Float32);
    let view = t.view("A2");
    let r1 = BufferRange::new(t.buffer().clone(), [Var::new("i"), Var::new("j")]);
    let r2 = BufferRange::new(view.buffer().clone(), [Var::new("i"), Var::new("j")]);
    assert_eq!(r1, r2);

    let r3 = BufferRange::new(t.buffer().clone(), [Var::new("j"), Var::new("i")]);
    assert_ne!(r1, r3, "variable order is part of the range");
}

#[test]
fn test_buffer_range_is_indexed_by() {
    let t = Tensor::new("A", [Expr::int(4), Expr::int(4)], DType::Float32);
    let r = BufferRange::new(t.buffer().clone(), [Var::new("i"), Var::reduce_axis("k")]);
    assert!(r.is_indexed_by(&Var::new("k")));
    assert!(!r.is_indexed_by(&Var::new("j")));
    assert_eq!(r.to_string(), "_A[i, k]");
}
