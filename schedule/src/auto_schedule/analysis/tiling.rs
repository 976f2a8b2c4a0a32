//! Multi-level tiling need classification.
//!
//! Multi-level tiling splits loops into nested tiles to improve reuse. It pays
//! off when some spatial loop variable does not index one of the operands:
//! that operand is then re-read across the variable's whole range. For
//! `C[i, j] += A[i, k] * B[k, j]`, `j` does not index `A` and `i` does not
//! index `B`, so the block is a candidate. An elementwise
//! `C[i, j] = A[i, j]` is not.

use kestrel_ir::{BufferRange, Expr, ScheduleBlock};

use super::block::as_block_realize;
use super::buffer_access::BufferAccessTable;
use crate::error::Result;

/// Total number of (read, spatial iteration variable) pairs where the variable
/// does not index the read.
///
/// Reads of the written buffer (a reduction's accumulator) are skipped.
/// Returns `None` unless the block writes exactly one buffer and reads at
/// least one; such blocks never need multi-level tiling.
pub fn count_unused_iter_vars(block: &ScheduleBlock, reads: &[BufferRange], writes: &[BufferRange]) -> Option<usize> {
    let [write] = writes else { return None };
    if reads.is_empty() {
        return None;
    }

    let total = reads
        .iter()
        .filter(|read| read.buffer != write.buffer)
        .map(|read| {
            let unused = block.spatial_iter_vars().filter(|v| !read.is_indexed_by(v)).count();
            tracing::trace!(read = %read, unused, "unused block iter vars for read");
            unused
        })
        .sum();
    Some(total)
}

/// Whether the realized block needs multi-level tiling.
///
/// Uses the block's ranges from `table` (or those it was built with), so the
/// block should have gone through [`BufferAccessTable::analyze`] first. A block
/// with no ranges at all is classified as not needing tiling.
#[tracing::instrument(skip_all)]
pub fn needs_multi_level_tiling(expr: &Expr, table: &BufferAccessTable) -> Result<bool> {
    let (_, block) = as_block_realize(expr)?;
    let (reads, writes) = table.buffer_ranges(block);

    let needs = match count_unused_iter_vars(block, reads, writes) {
        Some(total_unused_iter_vars) => {
            tracing::debug!(block = block.name(), total_unused_iter_vars, "multi-level tiling check");
            total_unused_iter_vars >= 1
        }
        None => {
            tracing::debug!(
                block = block.name(),
                reads = reads.len(),
                writes = writes.len(),
                "not a single-output block with reads, no tiling"
            );
            false
        }
    };
    Ok(needs)
}
