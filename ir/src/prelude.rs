//! Common imports for building and inspecting IR trees.
//!
//! ```rust,ignore
//! use kestrel_ir::prelude::*;
//! ```

// Core types
pub use crate::Op;
pub use crate::expr::{Expr, IntoExpr};
pub use crate::{Buffer, BufferId, BufferRange, Tensor, Var};

// Blocks and functions
pub use crate::lowered_func::{Argument, ArgumentIo, LoweredFunc};
pub use crate::schedule_block::{BlockId, ScheduleBlock, ScheduleBlockRealize};

// Node categories and scalar types
pub use crate::types::{BinaryOp, DType, IrNodeTy, NodeTySet};

// Walking
pub use crate::visit::TensorBoundary;
