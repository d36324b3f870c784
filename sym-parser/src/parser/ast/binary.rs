use crate::parser::{
    ast::expr::{Expr, Primary},
    error::{kind, Error},
    token::op::{BinOp, Precedence},
    Parser,
};
use log::debug;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,

    /// The depth of the tree rooted at this node, with parentheses removed. See
    /// [`Expr::depth`].
    pub depth: usize,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the chain of binary operators following `lhs`, as long as their precedence is at
    /// least `precedence`. Operators of equal precedence fold to the left, so `a + b + c` is
    /// parsed as `(a + b) + c`.
    pub(crate) fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            let Ok(op) = input.try_parse::<BinOp>() else {
                break;
            };
            if op.precedence() < precedence {
                // leave the operator for the caller, whose precedence is lower
                input.prev();
                break;
            }

            let mut rhs: Expr = input.try_parse::<Primary>()?.into();

            // before creating the `lhs op rhs` node, check the precedence of the following
            // operator: in `3 + 4 * 5`, `4 * 5` must be grouped first
            loop {
                match input.try_peek::<BinOp>() {
                    Ok(next_op) if next_op.precedence() > op.precedence() => {
                        rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                    },
                    _ => break,
                }
            }

            let depth = 1 + lhs.depth().max(rhs.depth());
            let max_tree_depth = input.options().max_tree_depth;
            if depth > max_tree_depth {
                debug!("expression tree deeper than {} levels at {:?}", max_tree_depth, op.span);
                return Err(Error::new(vec![op.span], kind::ExpressionTooDeep { max_tree_depth }));
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
                depth,
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op.kind, self.rhs)
    }
}
