use kestrel_ir::visit::{TensorBoundary, any_node};
use kestrel_ir::{Expr, NodeTySet};

/// True if `expr` or any node below it (tensor internals excluded) has a
/// category in `node_types`.
pub fn contains_node_type(expr: &Expr, node_types: NodeTySet) -> bool {
    !node_types.is_empty() && any_node(expr, TensorBoundary::Opaque, |node| node_types.contains(node.node_type()))
}
