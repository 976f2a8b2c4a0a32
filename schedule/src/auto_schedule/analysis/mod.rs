//! Schedule-block analyses used by the auto-scheduler.
//!
//! The scheduler annotates blocks with [`BufferAccessTable::analyze`] and then
//! queries them before exploring transformations:
//!
//! ```rust,ignore
//! let mut table = BufferAccessTable::new();
//! table.analyze(block)?;
//! if needs_multi_level_tiling(&realize, &table)? {
//!     // try multi-level tiling on `realize`
//! }
//! ```

pub mod block;
pub mod buffer_access;
pub mod indices;
pub mod node_presence;
pub mod output_names;
pub mod tiling;

pub use block::{as_block_realize, block_name, reduce_loop_var_names};
pub use buffer_access::{BlockBufferAccess, BufferAccessTable, collect_block_buffer_access};
pub use indices::indices_to_vars;
pub use node_presence::contains_node_type;
pub use output_names::output_names_from_lowered_funcs;
pub use tiling::{count_unused_iter_vars, needs_multi_level_tiling};
