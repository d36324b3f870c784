//! Errors produced while tokenizing and parsing.
//!
//! All errors share the [`Error`] type from `sym-error`, which pairs the offending source spans
//! with one of the error kinds in [`kind`].

pub mod kind;

pub use sym_error::{Error, ErrorKind};
