//! Gradient of `out = beta * input + alpha * (x @ y)` with sparse `x`.
//!
//! Only the registrations exist on CPU: both kernels refuse to run.

use super::{DenseTensor, SparseCooTensor, SparseCsrTensor};
use crate::context::KernelContext;
use crate::error::{Result, UnimplementedSnafu};
use crate::kernel_entries;
use crate::registry::KernelEntry;
use crate::types::{Backend, DataLayout, Element, KernelKey};

pub const ADDMM_COO_DENSE_GRAD: &str = "addmm_coo_dense_grad";
pub const ADDMM_CSR_DENSE_GRAD: &str = "addmm_csr_dense_grad";

const CPU_BACKWARD_UNSUPPORTED: &str = "Not support CPU backward kernel of 'sparse.addmm' now.";

/// Gradients with respect to `input`, `x` and `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddmmGrad<T, S> {
    pub dinput: DenseTensor<T>,
    pub dx: S,
    pub dy: DenseTensor<T>,
}

pub fn addmm_coo_dense_grad<T: Element>(
    _input: &DenseTensor<T>,
    x: &SparseCooTensor<T>,
    _y: &DenseTensor<T>,
    _dout: &DenseTensor<T>,
    _alpha: f32,
    _beta: f32,
) -> Result<AddmmGrad<T, SparseCooTensor<T>>> {
    tracing::debug!(dtype = %T::DTYPE, nnz = x.values.len(), "sparse addmm coo backward requested on cpu");
    UnimplementedSnafu { message: CPU_BACKWARD_UNSUPPORTED }.fail()
}

pub fn addmm_csr_dense_grad<T: Element>(
    _input: &DenseTensor<T>,
    x: &SparseCsrTensor<T>,
    _y: &DenseTensor<T>,
    _dout: &DenseTensor<T>,
    _alpha: f32,
    _beta: f32,
) -> Result<AddmmGrad<T, SparseCsrTensor<T>>> {
    tracing::debug!(dtype = %T::DTYPE, nnz = x.values.len(), "sparse addmm csr backward requested on cpu");
    UnimplementedSnafu { message: CPU_BACKWARD_UNSUPPORTED }.fail()
}

// Launch adapters. Inputs: input, x, y, dout. Attributes: alpha, beta.

fn launch_coo<T: Element>(ctx: &mut KernelContext) -> Result<()> {
    let grad = addmm_coo_dense_grad::<T>(
        ctx.input(0)?,
        ctx.input(1)?,
        ctx.input(2)?,
        ctx.input(3)?,
        ctx.attr(0)?,
        ctx.attr(1)?,
    )?;
    push_grad(ctx, grad);
    Ok(())
}

fn launch_csr<T: Element>(ctx: &mut KernelContext) -> Result<()> {
    let grad = addmm_csr_dense_grad::<T>(
        ctx.input(0)?,
        ctx.input(1)?,
        ctx.input(2)?,
        ctx.input(3)?,
        ctx.attr(0)?,
        ctx.attr(1)?,
    )?;
    push_grad(ctx, grad);
    Ok(())
}

fn push_grad<T: Element, S: Send + Sync + 'static>(ctx: &mut KernelContext, grad: AddmmGrad<T, S>) {
    ctx.push_output(grad.dinput);
    ctx.push_output(grad.dx);
    ctx.push_output(grad.dy);
}

pub(crate) fn kernels() -> impl IntoIterator<Item = (KernelKey, KernelEntry)> {
    let coo = kernel_entries!(
        ADDMM_COO_DENSE_GRAD,
        Backend::Cpu,
        DataLayout::AllLayout,
        launch_coo,
        [f32, f64],
        |entry: KernelEntry| entry.with_input_layout(0, DataLayout::SparseCoo)
    );
    let csr = kernel_entries!(
        ADDMM_CSR_DENSE_GRAD,
        Backend::Cpu,
        DataLayout::AllLayout,
        launch_csr,
        [f32, f64],
        |entry: KernelEntry| entry.with_input_layout(0, DataLayout::SparseCsr)
    );
    coo.into_iter().chain(csr)
}
