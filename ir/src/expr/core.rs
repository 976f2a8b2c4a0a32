//! Core [`Expr`] handle and fundamental operations.

use std::sync::Arc;

use crate::op::Op;
use crate::types::IrNodeTy;
use crate::visit::{self, TensorBoundary};
use crate::{ScheduleBlock, ScheduleBlockRealize, Tensor, Var};

/// Handle to an immutable IR node.
///
/// Cloning is cheap and shares the node. Trees are value-like: nothing mutates
/// a node after construction, and [`Expr::deep_copy`] produces a tree that
/// shares no node allocation with the original.
#[derive(Clone)]
pub struct Expr(Arc<Op>);

impl Expr {
    pub fn new(op: Op) -> Self {
        Self(Arc::new(op))
    }

    pub fn op(&self) -> &Op {
        &self.0
    }

    pub fn node_type(&self) -> IrNodeTy {
        self.0.node_type()
    }

    /// True if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self.op() {
            Op::Var(var) => Some(var),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self.op(), Op::Var(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.op() {
            Op::IntImm(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self.op() {
            Op::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn as_schedule_block(&self) -> Option<&ScheduleBlock> {
        match self.op() {
            Op::ScheduleBlock(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_schedule_block_realize(&self) -> Option<&ScheduleBlockRealize> {
        match self.op() {
            Op::ScheduleBlockRealize(realize) => Some(realize),
            _ => None,
        }
    }

    /// All nodes of this tree matching `pred`, without entering tensor internals.
    pub fn collect_without_tensor<F>(&self, pred: F) -> Vec<Expr>
    where
        F: FnMut(&Expr) -> bool,
    {
        visit::collect_nodes(self, TensorBoundary::Opaque, pred)
    }

    /// Structurally identical tree sharing no node allocation with `self`.
    ///
    /// Variables are duplicated. Tensors keep their buffer, since a copy of the
    /// IR still refers to the same storage. Copied schedule blocks get fresh
    /// block ids.
    pub fn deep_copy(&self) -> Expr {
        let op = match self.op() {
            Op::IntImm(v) => Op::IntImm(*v),
            Op::FloatImm(v) => Op::FloatImm(*v),
            Op::Var(var) => Op::Var(var.deep_copy()),
            Op::Binary(bop, a, b) => Op::Binary(*bop, a.deep_copy(), b.deep_copy()),
            Op::Cast { src, dtype } => Op::Cast { src: src.deep_copy(), dtype: *dtype },
            Op::Select { cond, true_value, false_value } => Op::Select {
                cond: cond.deep_copy(),
                true_value: true_value.deep_copy(),
                false_value: false_value.deep_copy(),
            },
            Op::Tensor(tensor) => Op::Tensor(tensor.deep_copy()),
            Op::Load { tensor, indices } => {
                Op::Load { tensor: tensor.deep_copy(), indices: indices.iter().map(Expr::deep_copy).collect() }
            }
            Op::Store { tensor, value, indices } => Op::Store {
                tensor: tensor.deep_copy(),
                value: value.deep_copy(),
                indices: indices.iter().map(Expr::deep_copy).collect(),
            },
            Op::Block { stmts } => Op::Block { stmts: stmts.iter().map(Expr::deep_copy).collect() },
            Op::For { loop_var, min, extent, body } => Op::For {
                loop_var: loop_var.deep_copy(),
                min: min.deep_copy(),
                extent: extent.deep_copy(),
                body: body.deep_copy(),
            },
            Op::ScheduleBlock(block) => Op::ScheduleBlock(block.deep_copy()),
            Op::ScheduleBlockRealize(realize) => Op::ScheduleBlockRealize(realize.deep_copy()),
        };
        Expr::new(op)
    }
}
