//! Auto-scheduling support.
//!
//! - [`analysis`] - read/write inference and structural queries over schedule blocks

pub mod analysis;
