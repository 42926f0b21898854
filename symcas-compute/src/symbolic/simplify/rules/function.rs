//! Simplification rules for functions: brackets, trigonometric functions, `sign`, `mod`, `min`,
//! and `max`.
//!
//! Most of these functions are only simplified by evaluating them when their arguments are
//! constant. A result that is not finite is never folded, so that `mod(1, 0)` stays as written.

use crate::funcs::{self, miscellaneous::{Max, Min, Mod, Sign}};
use symcas_parser::parser::ast::{BracketKind, Expr, TrigKind};
use crate::symbolic::simplify::simplify_step;

/// Returns the value as a constant if it is finite.
fn finite(value: f64) -> Option<Expr> {
    value.is_finite().then_some(Expr::Constant(value))
}

/// Evaluates `floor`, `ceil`, and `abs` of a constant.
pub fn simplify_bracket(kind: BracketKind, arg: &Expr) -> Expr {
    arg.as_constant()
        .and_then(|value| finite(funcs::bracket(kind, value)))
        .unwrap_or_else(|| Expr::bracket(kind, simplify_step(arg)))
}

/// Evaluates a trigonometric function of a constant if the result is an integer, and cancels
/// `sin(arcsin(f))`, `cos(arccos(f))`, and `tan(arctan(f))`.
pub fn simplify_trig(kind: TrigKind, arg: &Expr) -> Expr {
    if let Some(value) = arg.as_constant() {
        let result = funcs::trig(kind, value);
        if result.fract() == 0.0 {
            return Expr::Constant(result);
        }
    }

    match arg {
        Expr::Trig(inner_kind, inner) if kind.cancels() == Some(*inner_kind) => simplify_step(inner),
        _ => Expr::trig(kind, simplify_step(arg)),
    }
}

/// Evaluates `sign` of a constant.
pub fn simplify_sign(arg: &Expr) -> Expr {
    arg.as_constant()
        .and_then(|value| finite(Sign::eval_static(value)))
        .unwrap_or_else(|| Expr::sign(simplify_step(arg)))
}

/// Evaluates `mod` of two constants.
pub fn simplify_mod(dividend: &Expr, divisor: &Expr) -> Expr {
    dividend.as_constant()
        .zip(divisor.as_constant())
        .and_then(|(n, d)| finite(Mod::eval_static(n, d)))
        .unwrap_or_else(|| Expr::modulo(simplify_step(dividend), simplify_step(divisor)))
}

/// Simplifies the children of `min` or `max`, then folds the constant children into one with
/// `eval`. If only a constant remains, it is returned directly. Constant children are left alone
/// if folding them would not give a finite value.
fn simplify_extremum(
    children: &[Expr],
    eval: fn(Vec<f64>) -> f64,
    build: fn(Vec<Expr>) -> Expr,
) -> Expr {
    let (constants, mut rest): (Vec<_>, Vec<_>) = children.iter()
        .map(simplify_step)
        .partition(Expr::is_constant);
    let values = constants.iter().filter_map(Expr::as_constant).collect::<Vec<_>>();
    if values.is_empty() {
        return build(rest);
    }

    match finite(eval(values)) {
        Some(folded) if rest.is_empty() => folded,
        Some(folded) => {
            rest.push(folded);
            build(rest)
        },
        None => {
            rest.extend(constants);
            build(rest)
        },
    }
}

/// Evaluates `min` of constants, and partially evaluates the constant children otherwise.
pub fn simplify_min(children: &[Expr]) -> Expr {
    simplify_extremum(children, |values| Min::eval_static(values), Expr::min)
}

/// Evaluates `max` of constants, and partially evaluates the constant children otherwise.
pub fn simplify_max(children: &[Expr]) -> Expr {
    simplify_extremum(children, |values| Max::eval_static(values), Expr::max)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::Variable('x')
    }

    fn c(value: f64) -> Expr {
        Expr::Constant(value)
    }

    #[test]
    fn brackets_of_constants() {
        assert_eq!(simplify_bracket(BracketKind::Floor, &c(2.7)), c(2.0));
        assert_eq!(simplify_bracket(BracketKind::Ceiling, &c(2.2)), c(3.0));
        assert_eq!(simplify_bracket(BracketKind::Abs, &c(-4.5)), c(4.5));
        assert_eq!(
            simplify_bracket(BracketKind::Abs, &x()),
            Expr::bracket(BracketKind::Abs, x()),
        );
    }

    #[test]
    fn trig_of_constants() {
        assert_eq!(simplify_trig(TrigKind::Cos, &c(0.0)), c(1.0));
        assert_eq!(simplify_trig(TrigKind::ArcTan, &c(0.0)), c(0.0));
        assert_eq!(simplify_trig(TrigKind::Sin, &c(1.0)), Expr::trig(TrigKind::Sin, c(1.0)));
    }

    #[test]
    fn trig_cancellation() {
        let inner = Expr::trig(TrigKind::ArcCos, x());
        assert_eq!(simplify_trig(TrigKind::Cos, &inner), x());

        let inner = Expr::trig(TrigKind::ArcSin, x());
        assert_eq!(simplify_trig(TrigKind::Cos, &inner), Expr::trig(TrigKind::Cos, inner));
    }

    #[test]
    fn sign_and_mod() {
        assert_eq!(simplify_sign(&c(0.0)), c(0.0));
        assert_eq!(simplify_sign(&c(-2.0)), c(-1.0));
        assert_eq!(simplify_mod(&c(-7.0), &c(3.0)), c(-1.0));
        assert_eq!(simplify_mod(&x(), &c(3.0)), Expr::modulo(x(), c(3.0)));
    }

    #[test]
    fn non_finite_results_are_not_folded() {
        assert_eq!(simplify_mod(&c(1.0), &c(0.0)), Expr::modulo(c(1.0), c(0.0)));
        assert_eq!(
            simplify_bracket(BracketKind::Floor, &c(f64::INFINITY)),
            Expr::bracket(BracketKind::Floor, c(f64::INFINITY)),
        );
        assert_eq!(
            simplify_min(&[c(f64::NAN), c(1.0), x()]),
            Expr::min(vec![x(), c(f64::NAN), c(1.0)]),
        );
        assert_eq!(simplify_max(&[c(2.0), c(5.0)]), c(5.0));
    }

    #[test]
    fn extremum_partial_evaluation() {
        assert_eq!(simplify_min(&[c(3.0), c(1.0)]), c(1.0));
        assert_eq!(simplify_min(&[c(1.0), c(3.0), x()]), Expr::Min(vec![c(1.0), x()]));
        assert_eq!(simplify_max(&[c(1.0), c(3.0), x()]), Expr::Max(vec![c(3.0), x()]));
        assert_eq!(simplify_max(&[x()]), Expr::Max(vec![x()]));
    }
}
