//! Sparse tensor storage and sparse kernels.

pub mod addmm_grad;

use smallvec::SmallVec;

use crate::registry::KernelEntry;
use crate::types::{Element, KernelKey};

/// Row-major dense tensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseTensor<T> {
    pub dims: SmallVec<[usize; 4]>,
    pub data: Vec<T>,
}

impl<T: Element> DenseTensor<T> {
    pub fn zeros(dims: impl IntoIterator<Item = usize>) -> Self {
        let dims: SmallVec<[usize; 4]> = dims.into_iter().collect();
        let data = vec![T::default(); dims.iter().product()];
        Self { dims, data }
    }
}

/// Coordinate-format sparse tensor. `indices[d][n]` is the `d`-th coordinate
/// of the `n`-th stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseCooTensor<T> {
    pub dims: SmallVec<[usize; 4]>,
    pub indices: Vec<Vec<usize>>,
    pub values: Vec<T>,
}

/// Compressed-sparse-row matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseCsrTensor<T> {
    pub dims: SmallVec<[usize; 4]>,
    pub crows: Vec<usize>,
    pub cols: Vec<usize>,
    pub values: Vec<T>,
}

/// Every built-in sparse kernel.
pub(crate) fn kernels() -> impl IntoIterator<Item = (KernelKey, KernelEntry)> {
    addmm_grad::kernels()
}
