//! Tree visualization for expressions.
//!
//! Provides pretty-printing of IR trees as ASCII trees for debug logging.

use std::borrow::Cow;
use std::io;

use ptree::{Style, TreeItem};

use crate::Expr;
use crate::op::Op;

/// Renders every node with its children, tensor shapes included.
#[derive(Clone)]
pub struct ExprTree {
    expr: Expr,
}

impl ExprTree {
    pub fn new(expr: &Expr) -> Self {
        Self { expr: expr.clone() }
    }
}

impl TreeItem for ExprTree {
    type Child = ExprTree;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        write!(f, "{}", format_node(&self.expr))
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        let mut children = Vec::new();
        self.expr.op().map_child(|child| children.push(ExprTree::new(child)));
        Cow::Owned(children)
    }
}

/// Format a single node without its children.
fn format_node(expr: &Expr) -> String {
    match expr.op() {
        Op::IntImm(v) => format!("INT({v})"),
        Op::FloatImm(v) => format!("FLOAT({v:?})"),
        Op::Var(var) if var.is_reduce_axis() => format!("VAR('{var}', reduce)"),
        Op::Var(var) => format!("VAR('{var}')"),
        Op::Binary(bop, ..) => format!("{bop:?}"),
        Op::Cast { dtype, .. } => format!("CAST({dtype})"),
        Op::Select { .. } => "SELECT".to_string(),
        Op::Tensor(tensor) => format!("TENSOR('{}', {:?})", tensor.name(), tensor.buffer()),
        Op::Load { .. } => "LOAD".to_string(),
        Op::Store { .. } => "STORE".to_string(),
        Op::Block { stmts } => format!("BLOCK(len={})", stmts.len()),
        Op::For { loop_var, .. } => format!("FOR('{loop_var}')"),
        Op::ScheduleBlock(block) => format!("SCHEDULE_BLOCK('{}', {})", block.name(), block.id()),
        Op::ScheduleBlockRealize(realize) => format!("SCHEDULE_BLOCK_REALIZE(values={})", realize.iter_values.len()),
    }
}

/// Render an expression as an ASCII tree string.
pub fn render_tree(expr: &Expr) -> String {
    let tree = ExprTree::new(expr);
    let mut buf = Vec::new();
    ptree::write_tree(&tree, &mut buf).expect("tree rendering failed");
    String::from_utf8(buf).expect("invalid utf8 in tree")
}

impl Expr {
    /// Render this expression and its children as an ASCII tree.
    ///
    /// ```text
    /// SCHEDULE_BLOCK('C', block#3)
    /// └─ STORE
    ///    ├─ TENSOR('C', Buffer(_C, buf#2))
    ///    ...
    /// ```
    pub fn tree(&self) -> String {
        render_tree(self)
    }
}
