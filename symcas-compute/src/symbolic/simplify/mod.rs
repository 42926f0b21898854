//! Simplification of expressions into canonical form.
//!
//! [`simplify_step`] applies one node-local rewrite to an expression, recursing into the children
//! where the rewrite of the node itself does not apply. [`simplify`] repeats it until the tree
//! stops changing.

pub mod rules;

use log::{debug, warn};
use symcas_parser::parser::ast::Expr;

pub use rules::{add::build_sum, multiply::build_product};

/// The maximum number of passes [`simplify`] makes over an expression before giving up on
/// reaching a fixed point.
pub const MAX_PASSES: usize = 256;

/// Applies one simplification step to the expression.
///
/// The rewrite applied depends only on the node itself and its direct children. For example,
/// `log_b(b)` becomes `1`, and the children of sums and products are simplified and then merged
/// with [`build_sum`] and [`build_product`].
pub fn simplify_step(expr: &Expr) -> Expr {
    match expr {
        Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Sum(terms) => build_sum(terms.iter().map(simplify_step).collect()),
        Expr::Product(factors) => build_product(factors.iter().map(simplify_step).collect()),
        Expr::Fraction(num, den) => rules::fraction::simplify_fraction(num, den),
        Expr::Power(base, exp) => rules::power::simplify_power(base, exp),
        Expr::Log(base, arg) => rules::log::simplify_log(base, arg),
        Expr::Bracket(kind, arg) => rules::function::simplify_bracket(*kind, arg),
        Expr::Trig(kind, arg) => rules::function::simplify_trig(*kind, arg),
        Expr::Sign(arg) => rules::function::simplify_sign(arg),
        Expr::Mod(dividend, divisor) => rules::function::simplify_mod(dividend, divisor),
        Expr::Min(children) => rules::function::simplify_min(children),
        Expr::Max(children) => rules::function::simplify_max(children),
    }
}

/// Simplifies the expression to a fixed point.
///
/// [`simplify_step`] is applied until two consecutive results are structurally equal, then once
/// more. If no fixed point is reached within [`MAX_PASSES`] passes, the last result is returned.
pub fn simplify(expr: &Expr) -> Expr {
    let mut current = simplify_step(expr);
    for pass in 1..MAX_PASSES {
        let next = simplify_step(&current);
        if next == current {
            debug!("reached fixed point after {} passes: {}", pass, next);
            return simplify_step(&next);
        }
        debug!("pass {}: {}", pass, next);
        current = next;
    }

    warn!("no fixed point after {} passes, stopping at: {}", MAX_PASSES, current);
    current
}
