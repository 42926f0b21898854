//! Symbolic differentiation.
//!
//! The derivative of an expression is built with [`build_sum`] and [`build_product`], which fold
//! away the zeros and ones produced by the differentiation rules. The result is otherwise not
//! simplified.

mod function;

use ariadne::{Report, ReportKind};
use std::{any::Any, fmt, ops::Range};
use symcas_error::{Error, ErrorKind};
use symcas_parser::parser::ast::Expr;
use crate::symbolic::simplify::{build_product, build_sum};

/// The derivative of an expression could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeError {
    /// The expression contains a function that has no derivative in closed form.
    Undifferentiable {
        /// The name of the function.
        function: &'static str,
    },
}

impl fmt::Display for DerivativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undifferentiable { function } => {
                write!(f, "the `{}` function cannot be differentiated", function)
            },
        }
    }
}

impl ErrorKind for DerivativeError {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map_or(0, |span| span.start);
        let Self::Undifferentiable { function } = self;
        Report::build(ReportKind::Error, src_id, offset)
            .with_message(self)
            .with_help(format!(
                "`{}` is not continuous, so it has no symbolic derivative",
                function,
            ))
            .finish()
    }
}

impl From<DerivativeError> for Error {
    fn from(err: DerivativeError) -> Self {
        Error::without_spans(err)
    }
}

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr], var: char) -> Result<Expr, DerivativeError> {
    let derivatives = terms.iter()
        .map(|term| derivative(term, var))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_sum(derivatives))
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
///
/// A constant times a function is special-cased: `(k * f)' = k * f'`.
fn product_rule(factors: &[Expr], var: char) -> Result<Expr, DerivativeError> {
    if let [k @ Expr::Constant(_), f] = factors {
        return Ok(build_product(vec![k.clone(), derivative(f, var)?]));
    }

    let mut terms = Vec::with_capacity(factors.len());
    for derivative_index in 0..factors.len() {
        let mut product = factors.to_vec();
        product[derivative_index] = derivative(&factors[derivative_index], var)?;
        terms.push(build_product(product));
    }
    Ok(build_sum(terms))
}

/// `(f / g)' = (f'g - fg') / g^2`
fn quotient_rule(num: &Expr, den: &Expr, var: char) -> Result<Expr, DerivativeError> {
    Ok(Expr::fraction(
        build_sum(vec![
            build_product(vec![derivative(num, var)?, den.clone()]),
            build_product(vec![Expr::Constant(-1.0), num.clone(), derivative(den, var)?]),
        ]),
        Expr::power(den.clone(), Expr::Constant(2.0)),
    ))
}

/// Derivative of the power `base ^ exp`.
fn power_rule(power: &Expr, base: &Expr, exp: &Expr, var: char) -> Result<Expr, DerivativeError> {
    Ok(match (base.as_constant(), exp.as_constant()) {
        // k^c
        (Some(_), Some(_)) => Expr::Constant(0.0),

        // (f^k)' = k * f' * f^(k-1)
        (_, Some(k)) => build_product(vec![
            Expr::Constant(k),
            derivative(base, var)?,
            Expr::power(base.clone(), Expr::Constant(k - 1.0)),
        ]),

        // (e^f)' = e^f * f'
        _ if base.is_e() => build_product(vec![power.clone(), derivative(exp, var)?]),

        // (k^f)' = k^f * f' * ln(k)
        (Some(_), _) => build_product(vec![
            power.clone(),
            derivative(exp, var)?,
            Expr::ln(base.clone()),
        ]),

        // (f^g)' = f^g * (g' * ln(f) + g * f' * f^-1)
        _ => build_product(vec![
            power.clone(),
            build_sum(vec![
                build_product(vec![derivative(exp, var)?, Expr::ln(base.clone())]),
                build_product(vec![exp.clone(), derivative(base, var)?, Expr::recip(base.clone())]),
            ]),
        ]),
    })
}

/// Derivative of the logarithm of `arg` to the given `base`.
fn log_rule(base: &Expr, arg: &Expr, var: char) -> Result<Expr, DerivativeError> {
    if base.is_constant() && arg.is_constant() {
        return Ok(Expr::Constant(0.0));
    }

    if base.is_e() {
        // (ln f)' = f' * f^-1
        Ok(build_product(vec![derivative(arg, var)?, Expr::recip(arg.clone())]))
    } else if base.is_constant() {
        // (log_k f)' = f' * (f * ln(k))^-1
        Ok(build_product(vec![
            derivative(arg, var)?,
            Expr::recip(build_product(vec![arg.clone(), Expr::ln(base.clone())])),
        ]))
    } else {
        // log_g(f) = ln(f) / ln(g)
        let change_of_base = Expr::fraction(Expr::ln(arg.clone()), Expr::ln(base.clone()));
        derivative(&change_of_base, var)
    }
}

/// Computes the derivative of the given expression with respect to `var`. Returns [`Err`] if the
/// expression contains a function that cannot be differentiated (`sign`, `mod`, `min`, and
/// `max`).
pub fn derivative(expr: &Expr, var: char) -> Result<Expr, DerivativeError> {
    match expr {
        Expr::Constant(_) => Ok(Expr::Constant(0.0)),
        Expr::Variable(symbol) => Ok(Expr::Constant(if *symbol == var { 1.0 } else { 0.0 })),
        Expr::Sum(terms) => sum_rule(terms, var),
        Expr::Product(factors) => product_rule(factors, var),
        Expr::Fraction(num, den) => quotient_rule(num, den, var),
        Expr::Power(base, exp) => power_rule(expr, base, exp, var),
        Expr::Log(base, arg) => log_rule(base, arg, var),
        Expr::Bracket(kind, arg) => function::bracket_derivative(*kind, arg, var),
        Expr::Trig(kind, arg) => function::trig_derivative(*kind, arg, var),
        Expr::Sign(_) => Err(DerivativeError::Undifferentiable { function: "sign" }),
        Expr::Mod(..) => Err(DerivativeError::Undifferentiable { function: "mod" }),
        Expr::Min(_) => Err(DerivativeError::Undifferentiable { function: "min" }),
        Expr::Max(_) => Err(DerivativeError::Undifferentiable { function: "max" }),
    }
}
