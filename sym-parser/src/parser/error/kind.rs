use ariadne::Fmt;
use sym_attrs::ErrorKind;
use sym_error::EXPR;
use crate::tokenizer::TokenKind;

/// A character that is not part of any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character),
    labels = ["I don't know what this character means"],
    help = format!(
        "expressions may only contain {}, letters, `+`, `*`, and parentheses",
        "nonnegative numbers".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub character: char,
}

/// A decimal point was not surrounded by digits on both sides.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed number literal",
    labels = ["this number is incomplete"],
    help = format!("decimal numbers need digits on both sides of the `.`, like {}", "0.5".fg(EXPR)),
)]
pub struct MalformedNumber;

/// A number literal has too many digits to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "number literal is too large",
    labels = ["this value cannot be represented"],
)]
pub struct NumberTooLarge;

/// The source code contained no tokens at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// Parentheses were nested deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this parenthesis exceeds the nesting limit"],
    help = format!("at most {} levels of parentheses are allowed", max_depth),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth the parser was configured with.
    pub max_depth: usize,
}

/// The expression tree would be deeper than the parser allows, usually because of a very long
/// chain of operators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is too deep",
    labels = ["this operator exceeds the depth limit"],
    help = format!("at most {} levels of operators are allowed; try splitting the expression", max_tree_depth),
)]
pub struct ExpressionTooDeep {
    /// The maximum tree depth the parser was configured with.
    pub max_tree_depth: usize,
}
