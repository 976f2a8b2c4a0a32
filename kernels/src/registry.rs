use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use smallvec::SmallVec;
use snafu::{OptionExt, ensure};

use crate::context::KernelContext;
use crate::error::{DuplicateKernelSnafu, KernelNotFoundSnafu, Result};
use crate::types::{DataLayout, KernelKey};

pub type KernelFn = fn(&mut KernelContext) -> Result<()>;

/// A registered kernel: its entry point and per-input layout overrides.
#[derive(Debug, Clone)]
pub struct KernelEntry {
    pub launch: KernelFn,
    input_layouts: SmallVec<[(usize, DataLayout); 2]>,
}

impl KernelEntry {
    pub fn new(launch: KernelFn) -> Self {
        Self { launch, input_layouts: SmallVec::new() }
    }

    /// Require `layout` for input `index` instead of the key's layout.
    pub fn with_input_layout(mut self, index: usize, layout: DataLayout) -> Self {
        self.input_layouts.retain(|(i, _)| *i != index);
        self.input_layouts.push((index, layout));
        self
    }

    /// Layout override for input `index`, if any.
    pub fn input_layout(&self, index: usize) -> Option<DataLayout> {
        self.input_layouts.iter().find(|(i, _)| *i == index).map(|(_, layout)| *layout)
    }
}

/// Register one kernel function for several element types.
///
/// Expands to an array of `(KernelKey, KernelEntry)` pairs, one per listed
/// type, with `$func::<T>` as the entry point. The optional trailing closure
/// adjusts each entry.
#[macro_export]
macro_rules! kernel_entries {
    ($name:expr, $backend:expr, $layout:expr, $func:ident, [$($ty:ty),+ $(,)?]) => {
        $crate::kernel_entries!($name, $backend, $layout, $func, [$($ty),+], |entry| entry)
    };
    ($name:expr, $backend:expr, $layout:expr, $func:ident, [$($ty:ty),+ $(,)?], $setup:expr) => {{
        let setup = $setup;
        [$(
            {
                let key = $crate::KernelKey::new($name, $backend, $layout, <$ty as $crate::Element>::DTYPE);
                (key, setup($crate::KernelEntry::new($func::<$ty>)))
            }
        ),+]
    }};
}

pub struct KernelRegistry {
    kernels: RwLock<HashMap<KernelKey, KernelEntry>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self { kernels: RwLock::new(HashMap::new()) }
    }

    /// A registry holding every built-in kernel.
    pub fn with_builtin_kernels() -> Self {
        let kernels = crate::sparse::kernels().into_iter().collect();
        Self { kernels: RwLock::new(kernels) }
    }

    pub fn register(&self, key: KernelKey, entry: KernelEntry) -> Result<()> {
        let mut kernels = self.kernels.write();
        ensure!(!kernels.contains_key(&key), DuplicateKernelSnafu { key });
        tracing::trace!(%key, "registered kernel");
        kernels.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, key: &KernelKey) -> Result<KernelEntry> {
        self.kernels.read().get(key).cloned().context(KernelNotFoundSnafu { key: key.clone() })
    }

    pub fn contains(&self, key: &KernelKey) -> bool {
        self.kernels.read().contains_key(key)
    }

    /// Keys of every kernel registered under `name`.
    pub fn keys_for(&self, name: &str) -> Vec<KernelKey> {
        self.kernels.read().keys().filter(|key| key.name == name).cloned().collect()
    }

    /// Look up `key` and run it on `ctx`.
    pub fn launch(&self, key: &KernelKey, ctx: &mut KernelContext) -> Result<()> {
        let entry = self.get(key)?;
        tracing::debug!(%key, "launching kernel");
        (entry.launch)(ctx).inspect_err(|err| tracing::debug!(%key, error = %err, "kernel failed"))
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global kernel registry instance.
static REGISTRY: Lazy<KernelRegistry> = Lazy::new(KernelRegistry::with_builtin_kernels);

/// Get the global kernel registry.
pub fn registry() -> &'static KernelRegistry {
    &REGISTRY
}
