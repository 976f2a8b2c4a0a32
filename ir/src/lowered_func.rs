//! Compiled function signatures.

use crate::types::DType;
use crate::{Buffer, Expr, Var};

/// Direction of a function argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ArgumentIo {
    Input,
    Output,
}

/// What an argument passes: a buffer, or a scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentKind {
    Buffer(Buffer),
    Scalar { var: Var, dtype: DType },
}

/// One argument of a [`LoweredFunc`].
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub kind: ArgumentKind,
    pub io: ArgumentIo,
}

impl Argument {
    pub fn buffer(buffer: Buffer, io: ArgumentIo) -> Self {
        Self { kind: ArgumentKind::Buffer(buffer), io }
    }

    pub fn scalar(var: Var, dtype: DType, io: ArgumentIo) -> Self {
        Self { kind: ArgumentKind::Scalar { var, dtype }, io }
    }

    /// Buffer name for buffer arguments, variable name for scalars.
    pub fn name(&self) -> &str {
        match &self.kind {
            ArgumentKind::Buffer(buffer) => buffer.name(),
            ArgumentKind::Scalar { var, .. } => var.name(),
        }
    }

    pub fn is_output(&self) -> bool {
        self.io == ArgumentIo::Output
    }
}

/// Signature and body of a compiled function.
#[derive(Debug, Clone)]
pub struct LoweredFunc {
    pub name: String,
    pub args: Vec<Argument>,
    pub body: Expr,
}

impl LoweredFunc {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = Argument>, body: Expr) -> Self {
        Self { name: name.into(), args: args.into_iter().collect(), body }
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Argument> {
        self.args.iter().filter(|a| a.is_output())
    }
}
