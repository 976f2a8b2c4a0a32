use std::collections::HashSet;

use kestrel_ir::LoweredFunc;

/// Names of all output arguments across `lowered_funcs`.
pub fn output_names_from_lowered_funcs(lowered_funcs: &[LoweredFunc]) -> HashSet<String> {
    lowered_funcs.iter().flat_map(LoweredFunc::outputs).map(|arg| arg.name().to_string()).collect()
}
