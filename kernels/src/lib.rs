//! Kernel registry for Kestrel backends.
//!
//! Kernels are registered per (name, backend, layout, dtype) and launched
//! through a type-erased [`KernelContext`]. The global [`registry()`] comes
//! preloaded with the built-in kernels.

pub mod context;
pub mod error;
pub mod registry;
pub mod sparse;
pub mod types;


pub use context::KernelContext;
pub use error::{Error, Result};
pub use registry::{KernelEntry, KernelFn, KernelRegistry, registry};
pub use types::{Backend, DataLayout, Element, KernelKey};
