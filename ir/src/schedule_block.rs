//! Schedule blocks and their call-site realization.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{BufferRange, Expr, Var};

static BLOCK_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_block_id() -> BlockId {
    BlockId(BLOCK_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Stable identity of a schedule block, assigned at construction.
///
/// Deep copies receive a new id, so a copied block is a new block for any
/// analysis keyed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("block#{_0}")]
pub struct BlockId(u64);

/// Named computational unit: the grain of auto-scheduling transformations.
///
/// `read_buffers`/`write_buffers` hold ranges supplied by whoever built the
/// block. They are empty for a block built from a body alone; analyses that
/// derive them keep the result outside the block.
#[derive(Debug, Clone)]
pub struct ScheduleBlock {
    id: BlockId,
    name: String,
    iter_vars: Vec<Var>,
    body: Expr,
    read_buffers: Vec<BufferRange>,
    write_buffers: Vec<BufferRange>,
}

impl ScheduleBlock {
    pub fn new(name: impl Into<String>, iter_vars: impl IntoIterator<Item = Var>, body: Expr) -> Self {
        Self {
            id: next_block_id(),
            name: name.into(),
            iter_vars: iter_vars.into_iter().collect(),
            body,
            read_buffers: Vec::new(),
            write_buffers: Vec::new(),
        }
    }

    /// Attach known read/write ranges.
    pub fn with_buffer_ranges(
        mut self,
        read_buffers: impl IntoIterator<Item = BufferRange>,
        write_buffers: impl IntoIterator<Item = BufferRange>,
    ) -> Self {
        self.read_buffers = read_buffers.into_iter().collect();
        self.write_buffers = write_buffers.into_iter().collect();
        self
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iter_vars(&self) -> &[Var] {
        &self.iter_vars
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    pub fn read_buffers(&self) -> &[BufferRange] {
        &self.read_buffers
    }

    pub fn write_buffers(&self) -> &[BufferRange] {
        &self.write_buffers
    }

    /// True if the builder supplied any read or write range.
    pub fn has_buffer_ranges(&self) -> bool {
        !self.read_buffers.is_empty() || !self.write_buffers.is_empty()
    }

    /// Iteration variables that are not reduction axes, in declaration order.
    pub fn spatial_iter_vars(&self) -> impl Iterator<Item = &Var> {
        self.iter_vars.iter().filter(|v| !v.is_reduce_axis())
    }

    /// Iteration variables that are reduction axes, with their positions.
    pub fn reduce_iter_vars(&self) -> impl Iterator<Item = (usize, &Var)> {
        self.iter_vars.iter().enumerate().filter(|(_, v)| v.is_reduce_axis())
    }

    pub(crate) fn deep_copy(&self) -> Self {
        Self {
            id: next_block_id(),
            name: self.name.clone(),
            iter_vars: self.iter_vars.iter().map(Var::deep_copy).collect(),
            body: self.body.deep_copy(),
            read_buffers: self.read_buffers.iter().map(BufferRange::deep_copy).collect(),
            write_buffers: self.write_buffers.iter().map(BufferRange::deep_copy).collect(),
        }
    }
}

/// Binding of a schedule block to concrete call-site values.
///
/// `iter_values[i]` is the value of the block's `i`-th iteration variable,
/// usually an expression over enclosing loop variables.
#[derive(Debug, Clone)]
pub struct ScheduleBlockRealize {
    pub iter_values: Vec<Expr>,
    /// Normally an [`Op::ScheduleBlock`](crate::Op::ScheduleBlock) node.
    pub schedule_block: Expr,
}

impl ScheduleBlockRealize {
    /// The wrapped block, if `schedule_block` is one.
    pub fn block(&self) -> Option<&ScheduleBlock> {
        self.schedule_block.as_schedule_block()
    }

    pub(crate) fn deep_copy(&self) -> Self {
        Self {
            iter_values: self.iter_values.iter().map(Expr::deep_copy).collect(),
            schedule_block: self.schedule_block.deep_copy(),
        }
    }
}
