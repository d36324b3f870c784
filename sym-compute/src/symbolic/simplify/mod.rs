//! Substitution and constant folding.
//!
//! [`simplify`] replaces every variable bound in an [`Environment`] with its value, then folds
//! each sum or product whose two operands have both become numbers. Nothing else is rewritten:
//! there are no identity rules such as `x + 0 = x` or `x * 1 = x`, no reordering of operands, and
//! no combining of constants across nodes. For example, `(x + 2) + 3` stays as it is, because the
//! left operand of the outer sum is not a number.

pub mod step;

use log::trace;
use step::Step;
use super::{env::Environment, expr::Expr, step_collector::StepCollector};

/// Records a step and logs it.
fn record(step_collector: &mut dyn StepCollector<Step>, step: Step) {
    trace!("simplify: {}", step);
    step_collector.push(step);
}

/// Folds `left op right` if both operands are numbers, otherwise rebuilds the node with `make`.
fn fold(
    left: Expr,
    right: Expr,
    make: fn(Expr, Expr) -> Expr,
    step: fn(f64, f64) -> Step,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    match (left.value(), right.value()) {
        (Some(l), Some(r)) => {
            let step = step(l, r);
            let result = step.result();
            record(step_collector, step);
            Expr::Number(result)
        },
        _ => make(left, right),
    }
}

/// Base implementation of the simplification algorithm. Children are always simplified before
/// their parent, left before right.
fn inner_simplify(
    expr: &Expr,
    env: &Environment,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    match expr {
        Expr::Number(value) => Expr::Number(*value),
        Expr::Variable(name) => match env.get(name) {
            Some(value) => {
                record(step_collector, Step::Substitute { name: name.clone(), value });
                Expr::Number(value)
            },
            None => Expr::Variable(name.clone()),
        },
        Expr::Plus(left, right) => fold(
            inner_simplify(left, env, step_collector),
            inner_simplify(right, env, step_collector),
            Expr::plus,
            |left, right| Step::FoldAdd { left, right },
            step_collector,
        ),
        Expr::Multiply(left, right) => fold(
            inner_simplify(left, env, step_collector),
            inner_simplify(right, env, step_collector),
            Expr::multiply,
            |left, right| Step::FoldMultiply { left, right },
            step_collector,
        ),
    }
}

/// Substitutes the values bound in `env` and folds every sum or product of two numbers.
///
/// The result is a [`Expr::Number`] exactly when every variable in `expr` is bound. Otherwise it
/// keeps the shape of `expr`, with the fully numeric subtrees collapsed. The input is left
/// untouched.
///
/// Simplifying twice with the same environment gives the same result as simplifying once.
///
/// Values in the environment are used as they are. A negative value produces a negative
/// [`Expr::Number`], whose rendering the parser does not accept.
pub fn simplify(expr: &Expr, env: &Environment) -> Expr {
    inner_simplify(expr, env, &mut ())
}

/// Simplifies the given expression, and returns every substitution and fold performed, in the
/// order they happened.
pub fn simplify_with_steps(expr: &Expr, env: &Environment) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, env, &mut steps);
    (expr, steps)
}

impl Expr {
    /// Simplifies this expression in the given environment. See [`simplify`].
    pub fn simplify(&self, env: &Environment) -> Expr {
        simplify(self, env)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_is_relative_eq,
        afe_relative_error_msg,
        assert_float_relative_eq,
    };
    use crate::symbolic::{differentiate, parse};
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(text: &str, env: &Environment) -> String {
        simplify(&parse(text).unwrap(), env).to_string()
    }

    #[test]
    fn full_substitution_folds_to_number() {
        let env = Environment::new().with("x", 5.1).with("y", 4.9);
        assert_eq!(simplified("x + y", &env), "10.0");
    }

    #[test]
    fn partial_substitution_keeps_shape() {
        let env = Environment::new().with("y", 4.9);
        assert_eq!(simplified("x + y", &env), "(x + 4.9)");
    }

    #[test]
    fn empty_environment_folds_constants() {
        let env = Environment::new();
        assert_eq!(simplified("2 * 3 + x", &env), "(6.0 + x)");
        assert_eq!(simplified("x", &env), "x");
        assert_eq!(simplified("(1 + 2) * (3 + 4)", &env), "21.0");
    }

    #[test]
    fn no_identity_rules() {
        let env = Environment::new();
        assert_eq!(simplified("x + 0", &env), "(x + 0.0)");
        assert_eq!(simplified("1 * x", &env), "(1.0 * x)");
        assert_eq!(simplified("0 * x", &env), "(0.0 * x)");
    }

    #[test]
    fn no_reassociation() {
        // the left operand of the outer sum is not a number, so nothing folds
        let env = Environment::new();
        assert_eq!(simplified("x + 2 + 3", &env), "((x + 2.0) + 3.0)");
        assert_eq!(simplified("x + (2 + 3)", &env), "(x + 5.0)");
    }

    #[test]
    fn names_are_case_sensitive() {
        let env = Environment::new().with("x", 1.0);
        assert_eq!(simplified("X + x", &env), "(X + 1.0)");
    }

    #[test]
    fn unused_bindings_are_ignored() {
        let env = Environment::new().with("z", 9.0);
        assert_eq!(simplified("x * y", &env), "(x * y)");
    }

    #[test]
    fn floating_point_sum() {
        let value = simplify(&parse("0.1 + 0.2").unwrap(), &Environment::new())
            .value()
            .unwrap();
        assert_float_relative_eq!(value, 0.3);
    }

    #[test]
    fn input_is_unchanged() {
        let expr = parse("x * 2").unwrap();
        let before = expr.clone();
        let _ = simplify(&expr, &Environment::new().with("x", 3.0));
        assert_eq!(expr, before);
    }

    #[test]
    fn idempotent() {
        let envs = [
            Environment::new(),
            Environment::new().with("x", 2.0),
            Environment::new().with("x", 2.0).with("y", 0.5),
        ];
        for text in ["x * y + 3 * 4", "x + 2 + 3", "(y + 1) * (x * x)", "7"] {
            let expr = parse(text).unwrap();
            for env in &envs {
                let once = simplify(&expr, env);
                assert_eq!(simplify(&once, env), once, "{} was not idempotent", text);
            }
        }
    }

    #[test]
    fn simplify_derivative() {
        let derivative = differentiate(&parse("x*x").unwrap(), "x");
        let env = Environment::new().with("x", 3.0);
        assert_eq!(simplify(&derivative, &env), Expr::number(6.0));
        assert_eq!(
            simplify(&derivative, &Environment::new()).to_string(),
            "((1.0 * x) + (x * 1.0))",
        );
    }

    #[test]
    fn negative_values_are_used_as_is() {
        let env = Environment::new().with("x", -2.0);
        assert_eq!(simplify(&parse("x + 1").unwrap(), &env), Expr::Number(-1.0));
    }

    #[test]
    fn steps_in_order() {
        let env = Environment::new().with("x", 2.0);
        let (result, steps) = simplify_with_steps(&parse("x * 3 + y").unwrap(), &env);

        assert_eq!(result.to_string(), "(6.0 + y)");
        assert_eq!(steps, vec![
            Step::Substitute { name: "x".to_string(), value: 2.0 },
            Step::FoldMultiply { left: 2.0, right: 3.0 },
        ]);
        assert_eq!(
            steps.iter().map(Step::to_string).collect::<Vec<_>>(),
            vec!["x = 2.0", "2.0 * 3.0 = 6.0"],
        );
    }

    #[test]
    fn no_steps_when_nothing_changes() {
        let (result, steps) = simplify_with_steps(&parse("x + y").unwrap(), &Environment::new());
        assert_eq!(result.to_string(), "(x + y)");
        assert!(steps.is_empty());
    }
}
