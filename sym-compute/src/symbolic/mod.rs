//! Symbolic manipulation of sum-of-products expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a binary tree of [`Expr`] nodes: numbers, variables, and the
//! sum or product of exactly two subexpressions. Chains like `a + b + c` are left-associated, so
//! they become `(a + b) + c`. The [`parse`] function turns text into an [`Expr`], and the
//! [`Display`](std::fmt::Display) implementation turns it back into fully parenthesized text that
//! [`parse`] accepts again.
//!
//! ```
//! use sym_compute::symbolic::{parse, Expr};
//!
//! let expr = parse("x * (y + 2)").unwrap();
//! assert_eq!(expr, Expr::multiply(
//!     Expr::variable("x"),
//!     Expr::plus(Expr::variable("y"), Expr::number(2.0)),
//! ));
//! assert_eq!(expr.to_string(), "(x * (y + 2.0))");
//! ```
//!
//! Expressions are immutable values. Every operation returns a new tree and leaves its input
//! untouched.
//!
//! # Differentiation
//!
//! [`differentiate`] applies the sum and product rules without cleaning up the result, so terms
//! multiplied by `0.0` or `1.0` are kept:
//!
//! ```
//! use sym_compute::symbolic::{differentiate, parse};
//!
//! let expr = parse("x * x").unwrap();
//! assert_eq!(differentiate(&expr, "x").to_string(), "((1.0 * x) + (x * 1.0))");
//! ```
//!
//! # Simplification
//!
//! [`simplify`] substitutes variables from an [`Environment`] and folds sums and products of two
//! numbers. See the [`simplify`](mod@simplify) module for exactly what it does and does not
//! rewrite.
//!
//! ```
//! use sym_compute::symbolic::{parse, simplify, Environment};
//!
//! let expr = parse("x + y").unwrap();
//! let env = Environment::new().with("y", 4.9);
//! assert_eq!(simplify(&expr, &env).to_string(), "(x + 4.9)");
//! ```

pub mod derivative;
pub mod env;
pub mod error;
pub mod expr;
pub mod simplify;
pub mod step_collector;

use log::debug;
use sym_parser::parser::{ast::expr::Expr as AstExpr, Parser, ParserOptions};

pub use derivative::differentiate;
pub use env::Environment;
pub use error::InvalidExpression;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;

/// Parses text into an [`Expr`].
///
/// Whitespace between tokens is ignored. Numbers are nonnegative decimals with digits on both
/// sides of any decimal point; variables are runs of ASCII letters. `*` binds tighter than `+`,
/// both associate to the left, and parentheses group. Any other input, including empty input,
/// fails with [`InvalidExpression`].
pub fn parse(text: &str) -> Result<Expr, InvalidExpression> {
    parse_with(text, ParserOptions::default())
}

/// Parses text into an [`Expr`] using the given parser options.
pub fn parse_with(text: &str, options: ParserOptions) -> Result<Expr, InvalidExpression> {
    Parser::with_options(text, options)
        .and_then(|mut parser| parser.try_parse_full::<AstExpr>())
        .map(Expr::from)
        .map_err(|err| {
            debug!("failed to parse {:?}: {}", text, err);
            InvalidExpression::from(err)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn assert_invalid(text: &str) {
        let err = parse(text).unwrap_err();
        assert!(
            err.to_string().starts_with("invalid expression: "),
            "unexpected message {:?}",
            err.to_string(),
        );
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parse("  x\t+\n2 ").unwrap(), parse("x+2").unwrap());
    }

    #[test]
    fn malformed_inputs() {
        for text in [
            "",
            "   ",
            "3 +",
            "* 2",
            "x y",
            "(x + 1",
            "x + 1)",
            "()",
            "x - 1",
            "-3",
            "x / 2",
            "2 ^ 3",
            "3.",
            ".5",
            "1e5",
            "f(x)",
            "x_1",
            "x1",
        ] {
            assert_invalid(text);
        }
    }

    #[test]
    fn error_keeps_location() {
        let err = parse("x + 3 - y").unwrap_err();
        assert_eq!(err.spans(), &[6..7]);
        assert_eq!(err.reason(), "unexpected character `-`");
        assert_eq!(err.to_string(), "invalid expression: unexpected character `-`");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_report() {
        let err = parse("(x + 1").unwrap_err();
        let mut out = Vec::new();
        err.write_report("input", "(x + 1", &mut out).unwrap();

        let report = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(report.contains("unclosed parenthesis"));
    }

    #[test]
    fn nesting_limit() {
        let options = ParserOptions { max_depth: 3, ..Default::default() };
        assert!(parse_with("(((x)))", options).is_ok());
        assert!(parse_with("((((x))))", options).is_err());

        let deep = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_invalid(&deep);
    }

    #[test]
    fn long_chains_within_limit() {
        let text = vec!["x"; 1_000].join(" + ");
        let expr = parse(&text).unwrap();
        assert_eq!(expr.node_count(), 1_999);
        assert_eq!(differentiate(&expr, "x").node_count(), 1_999);
    }

    #[test]
    fn very_long_chain_is_invalid() {
        let text = vec!["x"; 200_000].join("+");
        let err = parse(&text).unwrap_err();
        assert_eq!(err.reason(), "expression is too deep");

        let text = vec!["2"; 500_000].join(" * ");
        assert_invalid(&text);
    }

    #[test]
    fn tree_depth_option() {
        let options = ParserOptions { max_tree_depth: 3, ..Default::default() };
        assert!(parse_with("x * y + 1", options).is_ok());
        assert!(parse_with("x * y * z + 1", options).is_err());
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
        assert_send_sync::<Environment>();
        assert_send_sync::<InvalidExpression>();

        let expr = parse("x * x + y").unwrap();
        let env = Environment::new().with("x", 3.0).with("y", 1.0);
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| simplify(&differentiate(&expr, "x"), &env)))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Expr::number(6.0));
            }
        });
    }

    #[test]
    fn error_converts_to_boxed_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = parse("x +").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid expression: "));
    }

    #[test]
    fn from_str() {
        let expr: Expr = "x + 78.4".parse().unwrap();
        assert_eq!(expr.to_string(), "(x + 78.4)");
        assert!("x +".parse::<Expr>().is_err());
    }
}
