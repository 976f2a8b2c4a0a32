//! Operation enum and implementation.
//!
//! The [`Op`] enum defines every node kind of the IR, from immediates and
//! arithmetic to memory accesses, loops and schedule blocks.

use smallvec::{SmallVec, smallvec};

use crate::types::{BinaryOp, DType, IrNodeTy};
use crate::{Expr, ScheduleBlock, ScheduleBlockRealize, Tensor, Var};

/// Operation with typed operands.
///
/// Each variant encodes its operand structure directly. Variable-arity index
/// lists use `SmallVec` to avoid heap allocation for tensors of rank ≤ 4.
#[derive(Debug, Clone)]
pub enum Op {
    // Leaves
    IntImm(i64),
    FloatImm(f64),
    Var(Var),

    // Scalar computation
    Binary(BinaryOp, Expr, Expr),
    Cast {
        src: Expr,
        dtype: DType,
    },
    Select {
        cond: Expr,
        true_value: Expr,
        false_value: Expr,
    },

    // Memory
    /// Reference to a tensor. Its shape expressions are the tensor's internals.
    Tensor(Tensor),
    Load {
        tensor: Expr,
        indices: SmallVec<[Expr; 4]>,
    },
    Store {
        tensor: Expr,
        value: Expr,
        indices: SmallVec<[Expr; 4]>,
    },

    // Control
    Block {
        stmts: Vec<Expr>,
    },
    For {
        loop_var: Var,
        min: Expr,
        extent: Expr,
        body: Expr,
    },
    ScheduleBlock(ScheduleBlock),
    ScheduleBlockRealize(ScheduleBlockRealize),
}

impl Op {
    pub fn node_type(&self) -> IrNodeTy {
        match self {
            Self::IntImm(_) => IrNodeTy::IntImm,
            Self::FloatImm(_) => IrNodeTy::FloatImm,
            Self::Var(_) => IrNodeTy::Var,
            Self::Binary(..) => IrNodeTy::Binary,
            Self::Cast { .. } => IrNodeTy::Cast,
            Self::Select { .. } => IrNodeTy::Select,
            Self::Tensor(_) => IrNodeTy::Tensor,
            Self::Load { .. } => IrNodeTy::Load,
            Self::Store { .. } => IrNodeTy::Store,
            Self::Block { .. } => IrNodeTy::Block,
            Self::For { .. } => IrNodeTy::For,
            Self::ScheduleBlock(_) => IrNodeTy::ScheduleBlock,
            Self::ScheduleBlockRealize(_) => IrNodeTy::ScheduleBlockRealize,
        }
    }

    /// Child expressions in source order.
    ///
    /// A `Tensor` reports its shape expressions; whether a walk enters them is
    /// the walker's decision. `For` does not report its loop variable and
    /// `ScheduleBlock` reports only its body.
    pub fn children(&self) -> SmallVec<[&Expr; 4]> {
        match self {
            Self::IntImm(_) | Self::FloatImm(_) | Self::Var(_) => SmallVec::new(),
            Self::Binary(_, a, b) => smallvec![a, b],
            Self::Cast { src, .. } => smallvec![src],
            Self::Select { cond, true_value, false_value } => smallvec![cond, true_value, false_value],
            Self::Tensor(tensor) => tensor.shape().iter().collect(),
            Self::Load { tensor, indices } => std::iter::once(tensor).chain(indices.iter()).collect(),
            Self::Store { tensor, value, indices } => [tensor, value].into_iter().chain(indices.iter()).collect(),
            Self::Block { stmts } => stmts.iter().collect(),
            Self::For { min, extent, body, .. } => smallvec![min, extent, body],
            Self::ScheduleBlock(block) => smallvec![block.body()],
            Self::ScheduleBlockRealize(realize) => {
                realize.iter_values.iter().chain(std::iter::once(&realize.schedule_block)).collect()
            }
        }
    }

    /// Apply `f` to each child without collecting.
    pub fn map_child<F>(&self, mut f: F)
    where
        F: FnMut(&Expr),
    {
        for child in self.children() {
            f(child);
        }
    }

    /// Index list of a memory access, `None` for other nodes.
    pub fn access_indices(&self) -> Option<&[Expr]> {
        match self {
            Self::Load { indices, .. } | Self::Store { indices, .. } => Some(indices),
            _ => None,
        }
    }

    /// Accessed tensor of a memory access, `None` for other nodes.
    pub fn access_tensor(&self) -> Option<&Tensor> {
        match self {
            Self::Load { tensor, .. } | Self::Store { tensor, .. } => tensor.as_tensor(),
            _ => None,
        }
    }
}
