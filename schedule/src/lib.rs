//! Schedule analyses for the Kestrel auto-scheduler.
//!
//! This crate inspects schedule blocks of the IR defined in `kestrel-ir` and
//! reports the structural facts an auto-scheduler needs before it picks
//! transformations.
//!
//! # Module Organization
//!
//! - [`auto_schedule::analysis`] - read/write buffer inference, node presence,
//!   output names, reduction loop variables, multi-level tiling need
//! - [`config`] - analysis configuration
//! - [`error`] - analysis errors

pub mod auto_schedule;
pub mod config;
pub mod error;

#[cfg(test)]
pub mod test;

pub use auto_schedule::analysis::{
    BlockBufferAccess, BufferAccessTable, block_name, contains_node_type, count_unused_iter_vars, indices_to_vars,
    needs_multi_level_tiling, output_names_from_lowered_funcs, reduce_loop_var_names,
};
pub use config::{AnalysisConfig, IndexPolicy};
pub use error::{AnalysisError, Result};

// Re-export the IR for convenience
pub use kestrel_ir as ir;
