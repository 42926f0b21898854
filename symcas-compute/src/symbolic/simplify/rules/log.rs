//! Simplification rules for logarithms.

use symcas_parser::parser::ast::Expr;
use crate::symbolic::simplify::simplify_step;

/// Simplifies the logarithm of `arg` to the given `base`.
///
/// - `log_b(b) = 1`
/// - `log_b(b^p) = p`
/// - `log_b(1) = 0`
pub fn simplify_log(base: &Expr, arg: &Expr) -> Expr {
    if arg == base {
        return Expr::Constant(1.0);
    }

    match arg {
        Expr::Power(power_base, exp) if **power_base == *base => (**exp).clone(),
        _ if arg.is_one() => Expr::Constant(0.0),
        _ => Expr::log(simplify_step(base), simplify_step(arg)),
    }
}
