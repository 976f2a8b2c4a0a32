//! Intermediate Representation (IR) for the Kestrel auto-scheduler.
//!
//! A deliberately small tensor-program IR: immutable expression trees with
//! loads, stores, loops and schedule blocks, plus the signatures of compiled
//! functions. Analyses live in `kestrel-schedule`; this crate owns the data
//! model and the generic walker they are built on.
//!
//! # Module Organization
//!
//! - [`types`] - Element types, operators and node categories
//! - [`op`] - Operation enum defining all IR nodes
//! - [`expr`] - The [`Expr`] handle, constructors, printing
//! - [`var`] - Loop variables, compared by name
//! - [`buffer`] - Buffers (identity by id), tensors, buffer ranges
//! - [`schedule_block`] - Schedule blocks and realize nodes
//! - [`lowered_func`] - Compiled function signatures
//! - [`visit`] - Predicate-driven pre-order walker
//! - [`error`] - Error types and result handling

pub mod buffer;
pub mod error;
pub mod expr;
pub mod lowered_func;
pub mod op;
pub mod prelude;
pub mod schedule_block;
pub mod types;
pub mod var;
pub mod visit;


pub use buffer::{Buffer, BufferId, BufferRange, Tensor};
pub use error::{Error, Result};
pub use expr::{Expr, IntoExpr};
pub use lowered_func::{Argument, ArgumentIo, ArgumentKind, LoweredFunc};
pub use op::Op;
pub use schedule_block::{BlockId, ScheduleBlock, ScheduleBlockRealize};
pub use types::{BinaryOp, DType, IrNodeTy, NodeTySet};
pub use var::Var;
pub use visit::{TensorBoundary, any_node, collect_nodes, for_each_node};
