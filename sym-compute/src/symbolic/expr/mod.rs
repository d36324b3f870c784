//! The symbolic expression type that every algorithm in this crate operates on.
//!
//! The [`Expr`](sym_parser::parser::ast::expr::Expr) produced by `sym_parser` remembers where each
//! node came from in the source text, and keeps parentheses as nodes of their own. That is useful
//! for reporting errors, but gets in the way of manipulating the expression. This module defines
//! a separate [`Expr`] with exactly four kinds of node and no source information. Converting from
//! the syntax tree drops the parentheses, since the tree shape already records the grouping.
//!
//! # Structural equality
//!
//! The [`PartialEq`], [`Eq`] and [`Hash`] implementations compare trees node by node. Two
//! expressions are equal only if they have the same shape, the same variable names (case
//! sensitive), and numerically equal numbers in the same places. Addition and multiplication are
//! **not** treated as commutative or associative here: `x + 1` and `1 + x` are different
//! expressions, and so are `(a + b) + c` and `a + (b + c)`.
//!
//! # Rendering
//!
//! The [`Display`](std::fmt::Display) implementation writes every operation fully parenthesized,
//! such as `((1.0 * x) + (x * 1.0))`. Numbers are written in plain decimal notation and always
//! contain a decimal point, so `2` is written as `2.0`. For any expression whose numbers are
//! finite and nonnegative, parsing the rendered text gives back an equal expression.

mod iter;

use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};
use sym_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    token::op::BinOpKind,
};
use super::{error::InvalidExpression, parse};

pub use iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable expression tree made of numbers, variables, sums, and products.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number, such as `2.0` or `0.25`. Parsed numbers are always finite and nonnegative.
    Number(f64),

    /// A variable, such as `x` or `Foo`. The name is one or more ASCII letters.
    Variable(String),

    /// The sum of two expressions, `left + right`.
    Plus(Box<Expr>, Box<Expr>),

    /// The product of two expressions, `left * right`.
    Multiply(Box<Expr>, Box<Expr>),
}

/// [`Eq`] is implemented manually because of the [`f64`] in [`Expr::Number`]. The parser only
/// produces finite numbers, so `NaN` can only appear if folding overflows to infinity and that
/// result is then multiplied by zero.
impl Eq for Expr {}

/// [`Hash`] is implemented manually to allow hashing [`Expr::Number`]s. Equal numbers hash by
/// their bit pattern, with `-0.0` folded into `0.0` so that hashing agrees with equality.
impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Number(value) => {
                let value = if *value == 0.0 { 0.0 } else { *value };
                value.to_bits().hash(state);
            },
            Self::Variable(name) => name.hash(state),
            Self::Plus(left, right) => {
                left.hash(state);
                '+'.hash(state);
                right.hash(state);
            },
            Self::Multiply(left, right) => {
                left.hash(state);
                '*'.hash(state);
                right.hash(state);
            },
        }
    }
}

impl Expr {
    /// Creates a number expression.
    pub fn number(value: f64) -> Self {
        debug_assert!(value >= 0.0, "numbers must be nonnegative, got {}", value);
        Self::Number(value)
    }

    /// Creates a variable expression. The name must consist of ASCII letters only.
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(
            !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()),
            "invalid variable name {:?}",
            name,
        );
        Self::Variable(name)
    }

    /// Creates the sum `left + right`.
    pub fn plus(left: Expr, right: Expr) -> Self {
        Self::Plus(Box::new(left), Box::new(right))
    }

    /// Creates the product `left * right`.
    pub fn multiply(left: Expr, right: Expr) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    /// Returns the numeric value of this expression if it is a [`Expr::Number`].
    ///
    /// Compound expressions have no value of their own, even when both of their children do.
    /// Use [`simplify`](super::simplify) to fold them.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this expression is a [`Expr::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns the name of this expression if it is a [`Expr::Variable`].
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order, yielding this
    /// expression last.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the set of distinct variable names used in this expression.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect()
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Differentiates this expression with respect to `var`. See
    /// [`differentiate`](super::differentiate).
    pub fn differentiate(&self, var: &str) -> Expr {
        super::differentiate(self, var)
    }
}

/// Writes a number so that it reads back as the same value, always with a decimal point.
///
/// [`f64`]'s [`Display`](fmt::Display) implementation never switches to exponent notation and
/// prints the shortest digits that round-trip, so only the `.0` suffix needs adding.
fn fmt_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        write!(f, "{}.0", text)
    } else {
        f.write_str(&text)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => fmt_number(f, *value),
            Self::Variable(name) => f.write_str(name),
            Self::Plus(left, right) => write!(f, "({} + {})", left, right),
            Self::Multiply(left, right) => write!(f, "({} * {})", left, right),
        }
    }
}

/// Converts the syntax tree into an [`Expr`], discarding spans and parentheses.
impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::Number(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Variable(sym.name),
            AstExpr::Paren(paren) => paren.into_innermost().into(),
            AstExpr::Binary(binary) => {
                let left = Box::new(Self::from(*binary.lhs));
                let right = Box::new(Self::from(*binary.rhs));
                match binary.op.kind {
                    BinOpKind::Add => Self::Plus(left, right),
                    BinOpKind::Mul => Self::Multiply(left, right),
                }
            },
        }
    }
}

impl FromStr for Expr {
    type Err = InvalidExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
