//! Queries on schedule-block realize nodes.

use std::collections::HashSet;

use kestrel_ir::visit::{TensorBoundary, for_each_node};
use kestrel_ir::{Expr, IrNodeTy, ScheduleBlock, ScheduleBlockRealize};
use snafu::OptionExt;

use crate::error::{InvalidArgumentSnafu, Result};

/// View `expr` as a realize node wrapping a schedule block.
///
/// Fails with `InvalidArgument` naming the first cast that did not match.
pub fn as_block_realize(expr: &Expr) -> Result<(&ScheduleBlockRealize, &ScheduleBlock)> {
    let realize = expr
        .as_schedule_block_realize()
        .context(InvalidArgumentSnafu { expected: IrNodeTy::ScheduleBlockRealize, found: expr.node_type() })?;
    let block = realize.block().context(InvalidArgumentSnafu {
        expected: IrNodeTy::ScheduleBlock,
        found: realize.schedule_block.node_type(),
    })?;
    Ok((realize, block))
}

/// Names of the call-site loop variables that drive the block's reduction axes.
///
/// A reduction axis may be bound to a compound value (`i * 4 + j` for a
/// flattened index); every variable in that value is reported.
pub fn reduce_loop_var_names(expr: &Expr) -> Result<HashSet<String>> {
    let (realize, block) = as_block_realize(expr)?;

    let mut names = HashSet::new();
    for (position, _) in block.reduce_iter_vars() {
        let Some(value) = realize.iter_values.get(position) else { continue };
        for_each_node(value, TensorBoundary::Opaque, |node| {
            if let Some(var) = node.as_var() {
                names.insert(var.name().to_string());
            }
        });
    }
    Ok(names)
}

/// Name of the realized schedule block.
pub fn block_name(expr: &Expr) -> Result<&str> {
    let (_, block) = as_block_realize(expr)?;
    Ok(block.name())
}
