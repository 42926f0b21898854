//! Derivatives of the bracket and trigonometric functions, via the chain rule.

use symcas_parser::parser::ast::{BracketKind, Expr, TrigKind};
use crate::symbolic::simplify::{build_product, build_sum};
use super::{derivative, DerivativeError};

/// `-1`
fn neg_one() -> Expr {
    Expr::Constant(-1.0)
}

/// `(1 ± f^2)`
fn one_plus_square(sign: f64, f: &Expr) -> Expr {
    build_sum(vec![
        Expr::Constant(1.0),
        build_product(vec![Expr::Constant(sign), Expr::power(f.clone(), Expr::Constant(2.0))]),
    ])
}

pub(super) fn bracket_derivative(kind: BracketKind, f: &Expr, var: char) -> Result<Expr, DerivativeError> {
    match kind {
        // |f|' = f / |f| * f'
        BracketKind::Abs => Ok(build_product(vec![
            Expr::fraction(f.clone(), Expr::bracket(BracketKind::Abs, f.clone())),
            derivative(f, var)?,
        ])),
        BracketKind::Floor | BracketKind::Ceiling => Ok(Expr::Constant(0.0)),
    }
}

pub(super) fn trig_derivative(kind: TrigKind, f: &Expr, var: char) -> Result<Expr, DerivativeError> {
    let df = derivative(f, var)?;
    let of = |kind| Expr::trig(kind, f.clone());
    let squared = |kind| Expr::power(Expr::trig(kind, f.clone()), Expr::Constant(2.0));

    Ok(match kind {
        TrigKind::Sin => build_product(vec![df, of(TrigKind::Cos)]),
        TrigKind::Cos => build_product(vec![neg_one(), df, of(TrigKind::Sin)]),
        TrigKind::Tan => build_product(vec![df, squared(TrigKind::Sec)]),
        TrigKind::Csc => build_product(vec![neg_one(), df, of(TrigKind::Csc), of(TrigKind::Cot)]),
        TrigKind::Sec => build_product(vec![df, of(TrigKind::Sec), of(TrigKind::Tan)]),
        TrigKind::Cot => build_product(vec![neg_one(), df, squared(TrigKind::Csc)]),
        TrigKind::ArcSin => build_product(vec![
            df,
            Expr::power(one_plus_square(-1.0, f), Expr::Constant(-0.5)),
        ]),
        TrigKind::ArcCos => build_product(vec![
            neg_one(),
            df,
            Expr::power(one_plus_square(-1.0, f), Expr::Constant(-0.5)),
        ]),
        TrigKind::ArcTan => build_product(vec![df, Expr::recip(one_plus_square(1.0, f))]),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::Variable('x')
    }

    #[test]
    fn sin_and_cos() {
        assert_eq!(
            trig_derivative(TrigKind::Sin, &x(), 'x').unwrap(),
            Expr::trig(TrigKind::Cos, x()),
        );
        assert_eq!(
            trig_derivative(TrigKind::Cos, &x(), 'x').unwrap(),
            Expr::Product(vec![Expr::Constant(-1.0), Expr::trig(TrigKind::Sin, x())]),
        );
    }

    #[test]
    fn chain_rule_of_constant_argument() {
        let two = Expr::Constant(2.0);
        assert_eq!(trig_derivative(TrigKind::Tan, &two, 'x').unwrap(), Expr::Constant(0.0));
        assert_eq!(bracket_derivative(BracketKind::Abs, &two, 'x').unwrap(), Expr::Constant(0.0));
    }

    #[test]
    fn step_functions() {
        assert_eq!(bracket_derivative(BracketKind::Floor, &x(), 'x').unwrap(), Expr::Constant(0.0));
        assert_eq!(bracket_derivative(BracketKind::Ceiling, &x(), 'x').unwrap(), Expr::Constant(0.0));
    }
}
