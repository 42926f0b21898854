//! The canonical order of expressions.
//!
//! Every rewriting step sorts the children of associative operators with [`cmp`], so that
//! structurally equal expressions always end up in the same shape. Nodes are first ordered by the
//! priority of their [`ExpressionType`](super::ExpressionType); nodes of the same type are then
//! compared field by field.
//!
//! The order is total over expressions: two expressions compare [`Ordering::Equal`] exactly when
//! they are structurally equal.

use std::cmp::Ordering;
use super::Expr;

/// Compares two constants numerically. `NaN` sorts after every other value and is equal to
/// itself.
fn cmp_constants(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // `partial_cmp` treats `0.0` and `-0.0` as equal, matching structural equality
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compares two lists of children: shorter lists sort first, then children are compared pairwise
/// and the first difference wins.
fn cmp_children(a: &[Expr], b: &[Expr]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b)
            .map(|(a, b)| cmp(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Compares two expressions in canonical order.
pub fn cmp(a: &Expr, b: &Expr) -> Ordering {
    let by_type = a.expression_type().cmp(&b.expression_type());
    if by_type.is_ne() {
        return by_type;
    }

    match (a, b) {
        (Expr::Constant(a), Expr::Constant(b)) => cmp_constants(*a, *b),
        (Expr::Variable(a), Expr::Variable(b)) => a.cmp(b),
        (Expr::Sum(a), Expr::Sum(b))
            | (Expr::Product(a), Expr::Product(b))
            | (Expr::Min(a), Expr::Min(b))
            | (Expr::Max(a), Expr::Max(b)) => cmp_children(a, b),
        (Expr::Fraction(a_num, a_den), Expr::Fraction(b_num, b_den)) => {
            cmp(a_num, b_num).then_with(|| cmp(a_den, b_den))
        },
        (Expr::Power(a_base, a_exp), Expr::Power(b_base, b_exp)) => {
            cmp(a_base, b_base).then_with(|| cmp(a_exp, b_exp))
        },
        (Expr::Log(a_base, a_arg), Expr::Log(b_base, b_arg)) => {
            cmp(a_arg, b_arg).then_with(|| cmp(a_base, b_base))
        },
        (Expr::Mod(a_dividend, a_divisor), Expr::Mod(b_dividend, b_divisor)) => {
            cmp(a_dividend, b_dividend).then_with(|| cmp(a_divisor, b_divisor))
        },
        (Expr::Bracket(_, a), Expr::Bracket(_, b))
            | (Expr::Trig(_, a), Expr::Trig(_, b))
            | (Expr::Sign(a), Expr::Sign(b)) => cmp(a, b),
        // equal types imply equal variants
        _ => Ordering::Equal,
    }
}

/// Sorts the expressions in ascending canonical order.
pub fn sort_ascending(exprs: &mut [Expr]) {
    exprs.sort_by(cmp);
}

/// Sorts the expressions in descending canonical order.
pub fn sort_descending(exprs: &mut [Expr]) {
    exprs.sort_by(|a, b| cmp(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{BracketKind, TrigKind};

    /// A varied set of pairwise distinct expressions.
    fn samples() -> Vec<Expr> {
        let x = Expr::Variable('x');
        let y = Expr::Variable('y');
        vec![
            Expr::Constant(-2.0),
            Expr::Constant(0.25),
            Expr::Constant(0.5),
            Expr::Constant(3.0),
            x.clone(),
            y.clone(),
            Expr::power(x.clone(), Expr::Constant(2.0)),
            Expr::power(x.clone(), Expr::Constant(3.0)),
            Expr::power(y.clone(), Expr::Constant(2.0)),
            Expr::fraction(x.clone(), y.clone()),
            Expr::log(Expr::Constant(10.0), x.clone()),
            Expr::log(Expr::Constant(2.0), x.clone()),
            Expr::bracket(BracketKind::Abs, x.clone()),
            Expr::bracket(BracketKind::Floor, x.clone()),
            Expr::trig(TrigKind::Sin, x.clone()),
            Expr::trig(TrigKind::Sin, y.clone()),
            Expr::trig(TrigKind::ArcTan, x.clone()),
            Expr::sign(x.clone()),
            Expr::modulo(x.clone(), Expr::Constant(2.0)),
            Expr::max(vec![x.clone(), y.clone()]),
            Expr::min(vec![x.clone(), y.clone()]),
            Expr::product(vec![Expr::Constant(2.0), x.clone()]),
            Expr::product(vec![Expr::Constant(2.0), x.clone(), y.clone()]),
            Expr::sum(vec![x.clone(), Expr::Constant(1.0)]),
            Expr::sum(vec![y, x, Expr::Constant(1.0)]),
        ]
    }

    #[test]
    fn type_priority_dominates() {
        let constant = Expr::Constant(1000.0);
        let variable = Expr::Variable('a');
        let sum = Expr::sum(vec![Expr::Constant(0.0), Expr::Constant(1.0)]);
        assert_eq!(cmp(&constant, &variable), Ordering::Less);
        assert_eq!(cmp(&sum, &variable), Ordering::Greater);
    }

    #[test]
    fn close_constants_are_ordered() {
        assert_eq!(cmp(&Expr::Constant(0.25), &Expr::Constant(0.5)), Ordering::Less);
        assert_eq!(cmp(&Expr::Constant(0.5), &Expr::Constant(0.25)), Ordering::Greater);
    }

    #[test]
    fn log_compares_argument_before_base() {
        let a = Expr::log(Expr::Constant(100.0), Expr::Variable('x'));
        let b = Expr::log(Expr::Constant(2.0), Expr::Variable('y'));
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn order_is_total_and_antisymmetric() {
        let samples = samples();
        for (i, a) in samples.iter().enumerate() {
            for (j, b) in samples.iter().enumerate() {
                let ab = cmp(a, b);
                assert_eq!(ab, cmp(b, a).reverse(), "{:?} vs {:?}", a, b);
                assert_eq!(ab.is_eq(), i == j, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn order_is_transitive() {
        let samples = samples();
        for a in &samples {
            for b in &samples {
                for c in &samples {
                    if cmp(a, b).is_lt() && cmp(b, c).is_lt() {
                        assert!(cmp(a, c).is_lt(), "{:?} < {:?} < {:?}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn sorting_is_deterministic() {
        let mut forward = samples();
        let mut backward = samples();
        backward.reverse();
        sort_ascending(&mut forward);
        sort_ascending(&mut backward);
        assert_eq!(forward, backward);
    }
}
