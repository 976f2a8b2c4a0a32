//! Property-based tests for buffer-access analysis and tiling classification.

mod access_props;
