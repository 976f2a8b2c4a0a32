//! Buffers, tensors and buffer ranges.
//!
//! A [`Buffer`] is a piece of storage. Its identity is a [`BufferId`] drawn from
//! a global counter at creation, so two buffers with the same name and dtype
//! are still distinct storage. A [`Tensor`] is a named, shaped view over a
//! buffer; several tensors may view one buffer.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

use crate::types::DType;
use crate::{Expr, Var};

// Monotonic, never reused. Relaxed ordering is enough for uniqueness.
static BUFFER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_buffer_id() -> BufferId {
    BufferId(BUFFER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Stable identity of a buffer's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("buf#{_0}")]
pub struct BufferId(u64);

/// Addressable memory region backing one or more tensors.
#[derive(Clone)]
pub struct Buffer(Arc<BufferNode>);

#[derive(Debug)]
pub struct BufferNode {
    pub id: BufferId,
    pub name: String,
    pub dtype: DType,
}

impl Buffer {
    /// Allocate a fresh buffer identity.
    pub fn new(name: impl Into<String>, dtype: DType) -> Self {
        Self(Arc::new(BufferNode { id: next_buffer_id(), name: name.into(), dtype }))
    }

    pub fn id(&self) -> BufferId {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn dtype(&self) -> DType {
        self.0.dtype
    }
}

/// Buffers are equal iff they are the same storage.
impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Buffer {}

impl std::hash::Hash for Buffer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({}, {})", self.0.name, self.0.id)
    }
}

/// Named, shaped view over a [`Buffer`].
#[derive(Clone)]
pub struct Tensor(Arc<TensorNode>);

#[derive(Debug, Clone)]
pub struct TensorNode {
    pub name: String,
    pub shape: SmallVec<[Expr; 4]>,
    pub dtype: DType,
    pub buffer: Buffer,
}

impl Tensor {
    /// Create a tensor backed by a new buffer named `_{name}`.
    pub fn new(name: impl Into<String>, shape: impl IntoIterator<Item = Expr>, dtype: DType) -> Self {
        let name = name.into();
        let buffer = Buffer::new(format!("_{name}"), dtype);
        Self::with_buffer(name, shape, buffer)
    }

    /// Create a tensor over an existing buffer.
    pub fn with_buffer(name: impl Into<String>, shape: impl IntoIterator<Item = Expr>, buffer: Buffer) -> Self {
        let dtype = buffer.dtype();
        Self(Arc::new(TensorNode { name: name.into(), shape: shape.into_iter().collect(), dtype, buffer }))
    }

    /// Another tensor with the same shape over the same storage.
    pub fn view(&self, name: impl Into<String>) -> Self {
        Self::with_buffer(name, self.0.shape.iter().cloned(), self.0.buffer.clone())
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn shape(&self) -> &[Expr] {
        &self.0.shape
    }

    pub fn rank(&self) -> usize {
        self.0.shape.len()
    }

    pub fn dtype(&self) -> DType {
        self.0.dtype
    }

    pub fn buffer(&self) -> &Buffer {
        &self.0.buffer
    }

    /// Copy with deep-copied shape expressions. The storage is shared.
    pub fn deep_copy(&self) -> Self {
        let node = &self.0;
        let shape = node.shape.iter().map(Expr::deep_copy).collect();
        Self(Arc::new(TensorNode { name: node.name.clone(), shape, dtype: node.dtype, buffer: node.buffer.clone() }))
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({}, {:?})", self.0.name, self.0.buffer)
    }
}

/// Which variables index which buffer at one access site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferRange {
    pub buffer: Buffer,
    pub ranges: SmallVec<[Var; 4]>,
}

impl BufferRange {
    pub fn new(buffer: Buffer, ranges: impl IntoIterator<Item = Var>) -> Self {
        Self { buffer, ranges: ranges.into_iter().collect() }
    }

    /// True if `var` (by name) indexes this range.
    pub fn is_indexed_by(&self, var: &Var) -> bool {
        self.ranges.iter().any(|r| r.name() == var.name())
    }

    pub(crate) fn deep_copy(&self) -> Self {
        Self { buffer: self.buffer.clone(), ranges: self.ranges.iter().map(Var::deep_copy).collect() }
    }
}

impl fmt::Display for BufferRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.buffer.name())?;
        for (i, var) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var}")?;
        }
        f.write_str("]")
    }
}
