//! Compact textual form of expressions.
//!
//! ```text
//! C[i, j] = (C[i, j] + (A[i, k] * B[k, j]))
//! ```

use std::fmt;

use crate::Expr;
use crate::op::Op;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op() {
            Op::IntImm(v) => write!(f, "{v}"),
            Op::FloatImm(v) => write!(f, "{v:?}"),
            Op::Var(var) => write!(f, "{var}"),
            Op::Binary(bop, a, b) => match bop.symbol() {
                Some(sym) => write!(f, "({a} {sym} {b})"),
                None => write!(f, "{}({a}, {b})", bop.as_ref().to_lowercase()),
            },
            Op::Cast { src, dtype } => write!(f, "{dtype}({src})"),
            Op::Select { cond, true_value, false_value } => write!(f, "select({cond}, {true_value}, {false_value})"),
            Op::Tensor(tensor) => f.write_str(tensor.name()),
            Op::Load { tensor, indices } => {
                write!(f, "{tensor}")?;
                write_indices(f, indices)
            }
            Op::Store { tensor, value, indices } => {
                write!(f, "{tensor}")?;
                write_indices(f, indices)?;
                write!(f, " = {value}")
            }
            Op::Block { stmts } => {
                f.write_str("{ ")?;
                for stmt in stmts {
                    write!(f, "{stmt}; ")?;
                }
                f.write_str("}")
            }
            Op::For { loop_var, min, extent, body } => write!(f, "for ({loop_var}, {min}, {extent}) {body}"),
            Op::ScheduleBlock(block) => {
                write!(f, "ScheduleBlock({}", block.name())?;
                for var in block.iter_vars() {
                    write!(f, ", {var}")?;
                    if var.is_reduce_axis() {
                        f.write_str("(R)")?;
                    }
                }
                write!(f, ") {}", block.body())
            }
            Op::ScheduleBlockRealize(realize) => {
                f.write_str("realize(")?;
                for (i, value) in realize.iter_values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ") {}", realize.schedule_block)
            }
        }
    }
}

fn write_indices(f: &mut fmt::Formatter<'_>, indices: &[Expr]) -> fmt::Result {
    f.write_str("[")?;
    for (i, index) in indices.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{index}")?;
    }
    f.write_str("]")
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({}: {self})", self.node_type())
    }
}
