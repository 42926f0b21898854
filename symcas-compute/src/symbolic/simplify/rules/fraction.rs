//! Simplification rules for fractions.

use symcas_parser::parser::ast::Expr;
use crate::symbolic::simplify::simplify_step;
use super::multiply::build_product;

/// Simplifies the fraction `num / den`.
///
/// - `(a/b)/c = a/(bc)`
/// - `a/(b/c) = (ac)/b`
/// - `(a/b)/(c/d) = (ad)/(bc)`
/// - a constant divided by a constant is folded if the quotient is an integer
/// - otherwise, `a/b = a*b^-1`, built with [`build_product`]
pub fn simplify_fraction(num: &Expr, den: &Expr) -> Expr {
    let num = simplify_step(num);
    let den = simplify_step(den);

    match (num, den) {
        (Expr::Fraction(a, b), Expr::Fraction(c, d)) => Expr::fraction(
            build_product(vec![simplify_step(&a), simplify_step(&d)]),
            build_product(vec![simplify_step(&b), simplify_step(&c)]),
        ),
        (Expr::Fraction(a, b), den) => Expr::fraction(
            simplify_step(&a),
            build_product(vec![simplify_step(&b), den]),
        ),
        (num, Expr::Fraction(c, d)) => Expr::fraction(
            build_product(vec![num, simplify_step(&d)]),
            simplify_step(&c),
        ),
        (Expr::Constant(a), Expr::Constant(b)) if (a / b).fract() == 0.0 => Expr::Constant(a / b),
        (num, den) => build_product(vec![num, simplify_step(&Expr::recip(den))]),
    }
}
