use std::fmt::Debug;

use kestrel_ir::DType;

/// Device family a kernel runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Backend {
    Cpu,
}

/// Memory layout of a kernel or of one of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DataLayout {
    /// Matches any layout.
    AllLayout,
    Dense,
    SparseCoo,
    SparseCsr,
}

/// Lookup key of a registered kernel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{name}({backend}, {layout}, {dtype})")]
pub struct KernelKey {
    pub name: String,
    pub backend: Backend,
    pub layout: DataLayout,
    pub dtype: DType,
}

impl KernelKey {
    pub fn new(name: impl Into<String>, backend: Backend, layout: DataLayout, dtype: DType) -> Self {
        Self { name: name.into(), backend, layout, dtype }
    }
}

/// Element types kernels are instantiated for.
pub trait Element: Copy + Debug + Default + Send + Sync + 'static {
    const DTYPE: DType;
}

impl Element for f32 {
    const DTYPE: DType = DType::Float32;
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;
}
