use std::fmt;
use super::super::Expr;

/// A single rewrite performed by [`simplify`](super::simplify).
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// `x` became `2.0` because the environment binds `x = 2`.
    Substitute {
        /// The variable that was replaced.
        name: String,

        /// The value it was replaced with.
        value: f64,
    },

    /// `2.0 + 3.0` became `5.0`.
    FoldAdd {
        left: f64,
        right: f64,
    },

    /// `2.0 * 3.0` became `6.0`.
    FoldMultiply {
        left: f64,
        right: f64,
    },
}

impl Step {
    /// The number the rewritten node became.
    pub fn result(&self) -> f64 {
        match self {
            Self::Substitute { value, .. } => *value,
            Self::FoldAdd { left, right } => left + right,
            Self::FoldMultiply { left, right } => left * right,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = Expr::Number(self.result());
        match self {
            Self::Substitute { name, .. } => write!(f, "{} = {}", name, result),
            Self::FoldAdd { left, right } => {
                write!(f, "{} + {} = {}", Expr::Number(*left), Expr::Number(*right), result)
            },
            Self::FoldMultiply { left, right } => {
                write!(f, "{} * {} = {}", Expr::Number(*left), Expr::Number(*right), result)
            },
        }
    }
}
