//! Node constructors.
//!
//! Leaves and arithmetic are infallible. Memory accesses check the index count
//! against the tensor rank, and realize nodes check the iter-value count
//! against the wrapped block.

use smallvec::SmallVec;
use snafu::ensure;

use crate::Result;
use crate::error::{IterValueCountMismatchSnafu, ShapeRankMismatchSnafu};
use crate::op::Op;
use crate::types::{BinaryOp, DType};
use crate::{Expr, ScheduleBlock, ScheduleBlockRealize, Tensor, Var};

/// Conversion of scalars and variables into expression leaves.
///
/// Lets constructors and operators take `i`, `&i`, `4` or an [`Expr`] alike.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for &Expr {
    fn into_expr(self) -> Expr {
        self.clone()
    }
}

impl IntoExpr for Var {
    fn into_expr(self) -> Expr {
        Expr::new(Op::Var(self))
    }
}

impl IntoExpr for &Var {
    fn into_expr(self) -> Expr {
        Expr::new(Op::Var(self.clone()))
    }
}

impl IntoExpr for i32 {
    fn into_expr(self) -> Expr {
        Expr::int(self as i64)
    }
}

impl IntoExpr for i64 {
    fn into_expr(self) -> Expr {
        Expr::int(self)
    }
}

impl IntoExpr for f32 {
    fn into_expr(self) -> Expr {
        Expr::float(self as f64)
    }
}

impl IntoExpr for f64 {
    fn into_expr(self) -> Expr {
        Expr::float(self)
    }
}

impl Expr {
    // =========================================================================
    // Leaves
    // =========================================================================

    pub fn int(value: i64) -> Self {
        Self::new(Op::IntImm(value))
    }

    pub fn float(value: f64) -> Self {
        Self::new(Op::FloatImm(value))
    }

    pub fn var(var: &Var) -> Self {
        var.into_expr()
    }

    /// Reference to a tensor (an opaque boundary for most walks).
    pub fn tensor(tensor: &Tensor) -> Self {
        Self::new(Op::Tensor(tensor.clone()))
    }

    // =========================================================================
    // Scalar computation
    // =========================================================================

    pub fn binary(op: BinaryOp, lhs: impl IntoExpr, rhs: impl IntoExpr) -> Self {
        Self::new(Op::Binary(op, lhs.into_expr(), rhs.into_expr()))
    }

    pub fn min(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Self {
        Self::binary(BinaryOp::Min, lhs, rhs)
    }

    pub fn cast(src: impl IntoExpr, dtype: DType) -> Self {
        Self::new(Op::Cast { src: src.into_expr(), dtype })
    }

    pub fn select(cond: impl IntoExpr, true_value: impl IntoExpr, false_value: impl IntoExpr) -> Self {
        Self::new(Op::Select {
            cond: cond.into_expr(),
            true_value: true_value.into_expr(),
            false_value: false_value.into_expr(),
        })
    }

    // =========================================================================
    // Memory
    // =========================================================================

    /// Load `tensor[indices]`. The index count must equal the tensor rank.
    pub fn load<I>(tensor: &Tensor, indices: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        let indices = collect_indices(tensor, indices)?;
        Ok(Self::new(Op::Load { tensor: Self::tensor(tensor), indices }))
    }

    /// Store `value` into `tensor[indices]`. The index count must equal the tensor rank.
    pub fn store<I>(tensor: &Tensor, value: impl IntoExpr, indices: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        let indices = collect_indices(tensor, indices)?;
        Ok(Self::new(Op::Store { tensor: Self::tensor(tensor), value: value.into_expr(), indices }))
    }

    // =========================================================================
    // Control
    // =========================================================================

    pub fn block(stmts: impl IntoIterator<Item = Expr>) -> Self {
        Self::new(Op::Block { stmts: stmts.into_iter().collect() })
    }

    pub fn for_loop(loop_var: &Var, min: impl IntoExpr, extent: impl IntoExpr, body: Expr) -> Self {
        Self::new(Op::For { loop_var: loop_var.clone(), min: min.into_expr(), extent: extent.into_expr(), body })
    }

    pub fn schedule_block(block: ScheduleBlock) -> Self {
        Self::new(Op::ScheduleBlock(block))
    }

    /// Bind `schedule_block` to call-site values.
    ///
    /// When `schedule_block` is a block, it must declare exactly one iteration
    /// variable per value. Any other node is accepted as is; analyses reject it
    /// when they need the block.
    pub fn schedule_block_realize<I>(iter_values: I, schedule_block: Expr) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        let iter_values: Vec<Expr> = iter_values.into_iter().map(IntoExpr::into_expr).collect();
        if let Some(block) = schedule_block.as_schedule_block() {
            ensure!(
                block.iter_vars().len() == iter_values.len(),
                IterValueCountMismatchSnafu {
                    block: block.name(),
                    iter_vars: block.iter_vars().len(),
                    iter_values: iter_values.len(),
                }
            );
        }
        Ok(Self::new(Op::ScheduleBlockRealize(ScheduleBlockRealize { iter_values, schedule_block })))
    }
}

fn collect_indices<I>(tensor: &Tensor, indices: I) -> Result<SmallVec<[Expr; 4]>>
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    let indices: SmallVec<[Expr; 4]> = indices.into_iter().map(IntoExpr::into_expr).collect();
    ensure!(
        indices.len() == tensor.rank(),
        ShapeRankMismatchSnafu { tensor: tensor.name(), rank: tensor.rank(), indices: indices.len() }
    );
    Ok(indices)
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: IntoExpr> std::ops::$trait<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl<R: IntoExpr> std::ops::$trait<R> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl<R: IntoExpr> std::ops::$trait<R> for &Var {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add);
impl_binary_operator!(Sub, sub, BinaryOp::Sub);
impl_binary_operator!(Mul, mul, BinaryOp::Mul);
impl_binary_operator!(Div, div, BinaryOp::Div);
impl_binary_operator!(Rem, rem, BinaryOp::Mod);
