use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, paren::Paren},
        error::{kind, Error},
        token::op::Precedence,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression: a sum of products of literals and parenthesized
/// expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns the depth of the tree rooted at this expression once parentheses are removed: `1`
    /// for a literal, and one more than the deeper operand for a binary expression.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Paren(paren) => paren.innermost().depth(),
            Expr::Binary(binary) => binary.depth,
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn into_innermost(self) -> Expr {
        match self {
            Expr::Paren(paren) => paren.into_innermost(),
            expr => expr,
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse::<Primary>()?.into();
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression: an operand of a binary operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.current_token().map(|token| token.kind) {
            Some(TokenKind::Number | TokenKind::Name) => input.try_parse().map(Primary::Literal),
            Some(TokenKind::OpenParen) => input.try_parse().map(Primary::Paren),
            Some(found) => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Number, TokenKind::Name, TokenKind::OpenParen],
                found,
            })),
            None => Err(input.error(kind::UnexpectedEof)),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
        }
    }
}
