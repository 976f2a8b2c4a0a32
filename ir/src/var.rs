//! Loop and iteration variables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Named symbol usable as a loop index.
///
/// Variables compare and hash by name only. Two `Var` handles created
/// independently with the same name are the same variable for every analysis
/// in this workspace; [`Var::ptr_eq`] is available when allocation identity
/// matters.
#[derive(Clone)]
pub struct Var(Arc<VarNode>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarNode {
    pub name: String,
    /// The variable iterates a reduction axis (accumulated, not preserved in the output).
    pub is_reduce_axis: bool,
}

impl Var {
    /// Create a spatial (non-reduction) variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(VarNode { name: name.into(), is_reduce_axis: false }))
    }

    /// Create a reduction-axis variable.
    pub fn reduce_axis(name: impl Into<String>) -> Self {
        Self(Arc::new(VarNode { name: name.into(), is_reduce_axis: true }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn is_reduce_axis(&self) -> bool {
        self.0.is_reduce_axis
    }

    /// Independent copy sharing no allocation with `self`.
    pub fn deep_copy(&self) -> Self {
        Self(Arc::new(VarNode::clone(&self.0)))
    }

    /// True if both handles point to the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_reduce_axis {
            write!(f, "Var({}, reduce)", self.0.name)
        } else {
            write!(f, "Var({})", self.0.name)
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}
