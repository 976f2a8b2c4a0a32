//! Read/write buffer inference for schedule blocks.
//!
//! Results are kept in a [`BufferAccessTable`] keyed by [`BlockId`] instead of
//! being written back into the IR. A block is analyzed at most once per table;
//! a block whose builder already supplied ranges is taken at its word.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ops::ControlFlow;

use kestrel_ir::visit::{self, TensorBoundary};
use kestrel_ir::{BlockId, BufferRange, Expr, IrNodeTy, Op, ScheduleBlock};

use super::indices::indices_to_vars;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Read and write ranges of one schedule block, in access order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockBufferAccess {
    pub read_buffers: Vec<BufferRange>,
    pub write_buffers: Vec<BufferRange>,
}

impl BlockBufferAccess {
    fn from_block_ranges(block: &ScheduleBlock) -> Self {
        Self { read_buffers: block.read_buffers().to_vec(), write_buffers: block.write_buffers().to_vec() }
    }
}

/// Walk `block`'s body and record one range per load (read) and store (write).
///
/// Tensor internals are not entered. An access whose indices normalize to
/// nothing still yields a range, with no variables.
pub fn collect_block_buffer_access(block: &ScheduleBlock, config: &AnalysisConfig) -> Result<BlockBufferAccess> {
    let mut access = BlockBufferAccess::default();

    let flow = visit::walk(block.body(), TensorBoundary::Opaque, |node| {
        let ranges = match node.op() {
            Op::Load { .. } => &mut access.read_buffers,
            Op::Store { .. } => &mut access.write_buffers,
            _ => return ControlFlow::Continue(()),
        };
        let (Some(tensor), Some(indices)) = (node.op().access_tensor(), node.op().access_indices()) else {
            tracing::trace!(access = %node, "access target is not a tensor reference, skipping");
            return ControlFlow::Continue(());
        };
        match indices_to_vars(tensor.name(), indices, config.index_policy) {
            Ok(vars) => {
                ranges.push(BufferRange::new(tensor.buffer().clone(), vars));
                ControlFlow::Continue(())
            }
            Err(err) => ControlFlow::Break(err),
        }
    });

    if let ControlFlow::Break(err) = flow {
        tracing::warn!(block = block.name(), error = %err, "buffer access analysis rejected block");
        return Err(err);
    }
    Ok(access)
}

/// Side-table of analyzed schedule blocks.
///
/// Analysis takes `&mut self`, so checking for an entry and inserting it can
/// not interleave with another analysis of the same table.
#[derive(Debug, Default)]
pub struct BufferAccessTable {
    config: AnalysisConfig,
    entries: HashMap<BlockId, BlockBufferAccess>,
}

impl BufferAccessTable {
    /// Empty table configured from the environment (see [`AnalysisConfig::from_env`]).
    ///
    /// `Default` gives an empty table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::from_env())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config, entries: HashMap::new() }
    }

    /// Ranges of `block`, computing them on first request.
    ///
    /// Ranges supplied with the block are recorded unchanged. A failed
    /// analysis records nothing.
    #[tracing::instrument(skip_all, fields(block = block.name(), id = %block.id()))]
    pub fn analyze(&mut self, block: &ScheduleBlock) -> Result<&BlockBufferAccess> {
        match self.entries.entry(block.id()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let access = if block.has_buffer_ranges() {
                    tracing::trace!("using ranges supplied with the block");
                    BlockBufferAccess::from_block_ranges(block)
                } else {
                    collect_block_buffer_access(block, &self.config)?
                };
                tracing::debug!(
                    reads = access.read_buffers.len(),
                    writes = access.write_buffers.len(),
                    "analyzed schedule block buffer access"
                );
                Ok(entry.insert(access))
            }
        }
    }

    /// Analyze every schedule block under `root`. Returns how many blocks were found.
    pub fn analyze_all(&mut self, root: &Expr) -> Result<usize> {
        let blocks = root.collect_without_tensor(|e| e.node_type() == IrNodeTy::ScheduleBlock);
        tracing::trace!(blocks = blocks.len(), tree = %root.tree(), "analyzing schedule blocks");
        for expr in &blocks {
            if let Some(block) = expr.as_schedule_block() {
                self.analyze(block)?;
            }
        }
        Ok(blocks.len())
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockBufferAccess> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(reads, writes)` of `block`: the table entry if analyzed, otherwise
    /// whatever ranges the block was built with (possibly none).
    pub fn buffer_ranges<'a>(&'a self, block: &'a ScheduleBlock) -> (&'a [BufferRange], &'a [BufferRange]) {
        match self.entries.get(&block.id()) {
            Some(access) => (&access.read_buffers, &access.write_buffers),
            None => (block.read_buffers(), block.write_buffers()),
        }
    }
}
