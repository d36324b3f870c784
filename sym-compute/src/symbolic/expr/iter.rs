use super::Expr;

/// Walks an expression tree in left-to-right post-order: both children of a node are yielded
/// before the node itself, and the left child before the right one.
///
/// Created by [`Expr::post_order_iter`]. Traversal uses an explicit stack, so arbitrarily deep
/// trees cannot overflow the call stack.
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    pub(super) fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the node on top of the stack and marks it as visited.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if `expr` is the node that was yielded last. Compared by address, since
    /// structurally equal subtrees may appear more than once.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        self.last_visited.map_or(false, |last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Variable(_) => return self.visit(),
                Expr::Plus(left, right) | Expr::Multiply(left, right) => {
                    if self.is_last_visited(right) {
                        return self.visit();
                    }
                    self.stack.push(right);
                    self.stack.push(left);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn leaf_yields_itself() {
        let expr = Expr::variable("x");
        assert_eq!(expr.post_order_iter().collect::<Vec<_>>(), vec![&expr]);
    }

    #[test]
    fn children_before_parent() {
        // ((a * b) + c)
        let expr = Expr::plus(
            Expr::multiply(Expr::variable("a"), Expr::variable("b")),
            Expr::variable("c"),
        );
        let rendered = expr.post_order_iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>();

        assert_eq!(rendered, vec!["a", "b", "(a * b)", "c", "((a * b) + c)"]);
    }

    #[test]
    fn repeated_subtrees_are_all_visited() {
        // (x * x): the two children are equal but distinct nodes
        let expr = Expr::multiply(Expr::variable("x"), Expr::variable("x"));
        assert_eq!(expr.post_order_iter().count(), 3);
    }
}
