//! Type definitions for IR nodes.
//!
//! Element types, binary operator kinds and the node category enum used for
//! category-based subtree queries.

use enumset::{EnumSet, EnumSetType};

/// Element type of a tensor, buffer or scalar expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum DType {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
}

/// Binary operation types.
///
/// Arithmetic operations keep the LHS dtype, comparisons produce [`DType::Bool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b (truncated toward zero for integers)
    Div,
    /// Remainder: a % b (sign of the dividend)
    Mod,
    /// Minimum: min(a, b)
    Min,
    /// Maximum: max(a, b)
    Max,
    /// Less than: a < b
    Lt,
    /// Equality: a == b
    Eq,
}

impl BinaryOp {
    /// Infix symbol, `None` for function-style operators (`min`, `max`).
    pub fn symbol(self) -> Option<&'static str> {
        Some(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Lt => "<",
            Self::Eq => "==",
            Self::Min | Self::Max => return None,
        })
    }
}

/// Node category of an IR expression.
///
/// One variant per [`Op`](crate::Op) variant. Sets of categories are expressed
/// as [`NodeTySet`] for presence queries over a subtree.
#[derive(Debug, Hash, PartialOrd, Ord, strum::Display)]
#[derive(EnumSetType)]
pub enum IrNodeTy {
    IntImm,
    FloatImm,
    Var,
    Binary,
    Cast,
    Select,
    Tensor,
    Load,
    Store,
    Block,
    For,
    ScheduleBlock,
    ScheduleBlockRealize,
}

/// Set of node categories.
pub type NodeTySet = EnumSet<IrNodeTy>;
