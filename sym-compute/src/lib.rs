//! Symbolic manipulation of arithmetic expressions built from nonnegative numbers, variables,
//! addition, and multiplication.
//!
//! See the [`symbolic`] module for the expression type and the algorithms that transform it.

pub mod symbolic;
