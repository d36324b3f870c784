//! The spanned syntax tree produced by the [`Parser`](super::Parser).
//!
//! Unlike the symbolic expression used for algebra, this tree keeps parentheses and the source
//! span of every node, so that errors and tools can point back into the source code.

pub mod binary;
pub mod expr;
pub mod literal;
pub mod paren;

pub use binary::Binary;
pub use expr::{Expr, Primary};
pub use literal::{Literal, LitNum, LitSym};
pub use paren::Paren;
