//! Expression handles and everything built on them.
//!
//! - [`core`] - the [`Expr`] handle, downcasts and deep copy
//! - [`constructors`] - node constructors and [`IntoExpr`]
//! - [`display`] - compact textual form used in logs and errors
//! - [`tree`] - ASCII tree rendering

pub mod constructors;
pub mod core;
pub mod display;
pub mod tree;

pub use constructors::IntoExpr;
pub use core::Expr;
