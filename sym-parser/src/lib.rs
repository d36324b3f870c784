//! Tokenizer and parser for arithmetic expressions over nonnegative numbers, variables, addition
//! and multiplication.
//!
//! The [`tokenizer`] turns source text into [`Token`](tokenizer::Token)s, and the [`parser`]
//! builds a spanned syntax tree ([`parser::ast::Expr`]) out of them, using the grammar:
//!
//! ```text
//! Sum        := Mul ( '+' Mul )*
//! Mul        := Primitive ( '*' Primitive )*
//! Primitive  := NUMBER | VARIABLE | '(' Sum ')'
//! ```
//!
//! ```
//! use sym_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x * (y + 2)").unwrap();
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "x * (y + 2)");
//! ```

pub mod parser;
pub mod tokenizer;
