use super::Expr;

/// `(f + g)' = f' + g'`
fn sum_rule(f: &Expr, g: &Expr, var: &str) -> Expr {
    Expr::plus(differentiate(f, var), differentiate(g, var))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr, var: &str) -> Expr {
    Expr::plus(
        Expr::multiply(differentiate(f, var), g.clone()),
        Expr::multiply(f.clone(), differentiate(g, var)),
    )
}

/// Computes the derivative of `expr` with respect to the variable named `var`.
///
/// Every other variable is treated as a constant, so this is the partial derivative when the
/// expression has several variables. No simplification is applied: the result keeps every
/// product rule term, including ones multiplied by `0.0` or `1.0`, so
/// `differentiate(x * x, "x")` is `((1.0 * x) + (x * 1.0))`. Pass the result to
/// [`simplify`](super::simplify) to fold what can be folded.
///
/// `var` does not have to appear in the expression, or even be a valid variable name; in that
/// case every leaf differentiates to `0.0`.
pub fn differentiate(expr: &Expr, var: &str) -> Expr {
    match expr {
        Expr::Number(_) => Expr::Number(0.0),
        Expr::Variable(name) => Expr::Number(if name == var { 1.0 } else { 0.0 }),
        Expr::Plus(f, g) => sum_rule(f, g, var),
        Expr::Multiply(f, g) => product_rule(f, g, var),
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{parse, simplify, Environment};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates an expression of `x` alone at the given point.
    fn eval_x(expr: &Expr, x: f64) -> f64 {
        let env = Environment::new().with("x", x);
        simplify(expr, &env)
            .value()
            .unwrap_or_else(|| panic!("{} did not fold to a number", expr))
    }

    /// Approximates the derivative with a central difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(expr, x + DX) - eval_x(expr, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let expr = parse(function).unwrap();
        let symbolic = differentiate(&expr, "x");

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "for \"{}\" at x={}, symbolic derivative was {} but finite difference gave {}",
                function,
                point,
                symbolically_computed,
                numerically_computed,
            );
        }
    }

    fn derive(text: &str, var: &str) -> String {
        differentiate(&parse(text).unwrap(), var).to_string()
    }

    #[test]
    fn constant() {
        assert_eq!(derive("3", "x"), "0.0");
    }

    #[test]
    fn variable() {
        assert_eq!(derive("x", "x"), "1.0");
        assert_eq!(derive("y", "x"), "0.0");
        assert_eq!(derive("X", "x"), "0.0");
    }

    #[test]
    fn sum_is_not_simplified() {
        assert_eq!(derive("x+1", "x"), "(1.0 + 0.0)");
    }

    #[test]
    fn product_rule_keeps_all_terms() {
        assert_eq!(derive("x*x", "x"), "((1.0 * x) + (x * 1.0))");
        assert_eq!(derive("2*y", "x"), "((0.0 * y) + (2.0 * 0.0))");
    }

    #[test]
    fn nested_product() {
        // ((x * x) * x)' = ((x * x)' * x) + ((x * x) * 1)
        assert_eq!(
            derive("x*x*x", "x"),
            "((((1.0 * x) + (x * 1.0)) * x) + ((x * x) * 1.0))",
        );
    }

    #[test]
    fn absent_variable() {
        let derivative = differentiate(&parse("x * y + 4").unwrap(), "z");
        assert_eq!(derivative.to_string(), "(((0.0 * y) + (x * 0.0)) + 0.0)");

        let env = Environment::new().with("x", 3.0).with("y", 5.0);
        assert_eq!(simplify(&derivative, &env), Expr::number(0.0));
    }

    #[test]
    fn partial_derivative() {
        let expr = parse("x * y + y").unwrap();
        let env = Environment::new().with("x", 2.0).with("y", 7.0);
        assert_eq!(simplify(&differentiate(&expr, "x"), &env), Expr::number(7.0));
        assert_eq!(simplify(&differentiate(&expr, "y"), &env), Expr::number(3.0));
    }

    #[test]
    fn matches_finite_difference() {
        test_for_function("x*x + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("3 * x * x * x + 2 * (x + 4) * x", [0., 0.5, 1., 3.]);
        test_for_function("(x + 1) * (x + 2) * (x + 3)", [0., 1., 2.5]);
    }
}
