//! Type-erased kernel arguments.

use std::any::{Any, type_name};

use smallvec::SmallVec;
use snafu::OptionExt;

use crate::error::{ArgumentMismatchSnafu, Result};

/// Inputs, float attributes and outputs of one kernel launch.
///
/// Inputs are downcast by the launching kernel; a missing input or one of
/// the wrong type fails with `ArgumentMismatch`.
#[derive(Default)]
pub struct KernelContext {
    kernel: String,
    inputs: Vec<Box<dyn Any + Send + Sync>>,
    attrs: SmallVec<[f32; 4]>,
    outputs: Vec<Box<dyn Any + Send + Sync>>,
}

impl KernelContext {
    pub fn new(kernel: impl Into<String>) -> Self {
        Self { kernel: kernel.into(), ..Default::default() }
    }

    pub fn with_input<T: Any + Send + Sync>(mut self, input: T) -> Self {
        self.inputs.push(Box::new(input));
        self
    }

    pub fn with_attr(mut self, attr: f32) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn kernel(&self) -> &str {
        &self.kernel
    }

    pub fn input<T: Any>(&self, index: usize) -> Result<&T> {
        self.inputs.get(index).and_then(|input| input.downcast_ref::<T>()).context(ArgumentMismatchSnafu {
            kernel: self.kernel.as_str(),
            index,
            expected: type_name::<T>(),
        })
    }

    pub fn attr(&self, index: usize) -> Result<f32> {
        self.attrs.get(index).copied().context(ArgumentMismatchSnafu {
            kernel: self.kernel.as_str(),
            index,
            expected: "f32 attribute",
        })
    }

    pub fn push_output<T: Any + Send + Sync>(&mut self, output: T) {
        self.outputs.push(Box::new(output));
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub fn output<T: Any>(&self, index: usize) -> Option<&T> {
        self.outputs.get(index)?.downcast_ref::<T>()
    }
}
