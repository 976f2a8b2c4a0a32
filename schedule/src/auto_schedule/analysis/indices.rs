//! Index-to-variable normalization.

use kestrel_ir::{Expr, Var};
use smallvec::SmallVec;
use snafu::ensure;

use crate::config::IndexPolicy;
use crate::error::{NonVariableIndexSnafu, Result};

/// Keep the indices that are exactly a loop variable, as independent copies.
///
/// Constants and compound indices (`3`, `j + 1`) are dropped under
/// [`IndexPolicy::Drop`], so `[i, 3, j + 1, k]` becomes `[i, k]`. This loses
/// the dependence of the range on `j`. [`IndexPolicy::Reject`] fails on the
/// first such index instead. `tensor` only names the access in errors.
pub fn indices_to_vars(tensor: &str, indices: &[Expr], policy: IndexPolicy) -> Result<SmallVec<[Var; 4]>> {
    let mut vars = SmallVec::new();
    for (position, index) in indices.iter().enumerate() {
        match index.as_var() {
            Some(var) => vars.push(var.deep_copy()),
            None => {
                ensure!(
                    policy == IndexPolicy::Drop,
                    NonVariableIndexSnafu { tensor, position, index: index.to_string() }
                );
                tracing::trace!(tensor, position, %index, "dropping non-variable index");
            }
        }
    }
    Ok(vars)
}
