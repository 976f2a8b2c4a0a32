//! Predicate-driven tree walking.
//!
//! One primitive serves every subtree query in the workspace: a pre-order walk
//! (node first, then children in source order) that can stop early and that
//! either enters or skips the internals of tensor references.

use std::ops::ControlFlow;

use crate::Expr;
use crate::op::Op;

/// Whether a walk enters the shape expressions of `Tensor` nodes.
///
/// The `Tensor` node itself is visited either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TensorBoundary {
    /// Visit tensor references but not their internals.
    #[default]
    Opaque,
    /// Walk into tensor shape expressions as ordinary children.
    Transparent,
}

/// Pre-order walk calling `f` on every node until it breaks.
pub fn walk<B, F>(root: &Expr, boundary: TensorBoundary, mut f: F) -> ControlFlow<B>
where
    F: FnMut(&Expr) -> ControlFlow<B>,
{
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        f(&node)?;

        if boundary == TensorBoundary::Opaque && matches!(node.op(), Op::Tensor(_)) {
            continue;
        }

        // Push in reverse order for source-order traversal
        for child in node.op().children().into_iter().rev() {
            stack.push(child.clone());
        }
    }

    ControlFlow::Continue(())
}

/// Every node for which `pred` holds, in pre-order.
pub fn collect_nodes<F>(root: &Expr, boundary: TensorBoundary, mut pred: F) -> Vec<Expr>
where
    F: FnMut(&Expr) -> bool,
{
    let mut result = Vec::new();
    let _ = walk::<(), _>(root, boundary, |node| {
        if pred(node) {
            result.push(node.clone());
        }
        ControlFlow::Continue(())
    });
    result
}

/// True if some node satisfies `pred`. Stops at the first match.
pub fn any_node<F>(root: &Expr, boundary: TensorBoundary, mut pred: F) -> bool
where
    F: FnMut(&Expr) -> bool,
{
    walk(root, boundary, |node| if pred(node) { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }).is_break()
}

/// Call `f` on every node in pre-order.
pub fn for_each_node<F>(root: &Expr, boundary: TensorBoundary, mut f: F)
where
    F: FnMut(&Expr),
{
    let _ = walk::<(), _>(root, boundary, |node| {
        f(node);
        ControlFlow::Continue(())
    });
}
