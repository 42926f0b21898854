//! Simplification rules for sums, including combining like terms.

use log::trace;
use symcas_parser::parser::ast::{order, Expr};
use crate::symbolic::simplify::simplify_step;
use super::multiply::build_product;

/// Moves the terms of any nested sum into `out`, recursively.
fn flatten_into(terms: Vec<Expr>, out: &mut Vec<Expr>) {
    for term in terms {
        match term {
            Expr::Sum(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

/// Splits a term into its numeric coefficient and its remaining factors.
///
/// - `3*a*b` -> `(3, [a, b])`
/// - `a*b` -> `(1, [a, b])`
/// - `sin(x)` -> `(1, [sin(x)])`
fn split_coefficient(term: Expr) -> (f64, Vec<Expr>) {
    match term {
        Expr::Product(mut factors) => match factors.first().and_then(Expr::as_constant) {
            Some(coefficient) => {
                factors.remove(0);
                (coefficient, factors)
            },
            None => (1.0, factors),
        },
        other => (1.0, vec![other]),
    }
}

/// A group of terms that share the same non-constant factors.
struct LikeTerms {
    coefficient: f64,
    factors: Vec<Expr>,
    merged: bool,
}

impl LikeTerms {
    /// Builds the term represented by this group.
    fn into_term(self) -> Expr {
        if self.merged {
            build_product(vec![Expr::Constant(self.coefficient), Expr::Product(self.factors)])
        } else {
            let mut factors = Vec::with_capacity(self.factors.len() + 1);
            factors.push(Expr::Constant(self.coefficient));
            factors.extend(self.factors);
            Expr::Product(factors)
        }
    }
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `a*b - b*a = 0`
fn combine_like_terms(terms: Vec<Expr>) -> Vec<Expr> {
    let mut groups: Vec<LikeTerms> = Vec::new();
    for term in terms {
        let (coefficient, factors) = split_coefficient(term);
        match groups.iter_mut().find(|group| group.factors == factors) {
            Some(group) => {
                group.coefficient += coefficient;
                group.merged = true;
            },
            None => groups.push(LikeTerms { coefficient, factors, merged: false }),
        }
    }

    groups.into_iter().map(LikeTerms::into_term).collect()
}

/// Adds the given terms together, applying the sum rules:
///
/// 1. A single term is returned as is. Zeros are dropped; if nothing remains the result is `0`,
///    and two constants are added directly.
/// 2. Nested sums are flattened into one list of terms.
/// 3. Constant terms are added into a single constant, which is dropped if it is zero.
/// 4. Terms that differ only by their numeric coefficient are combined.
/// 5. Every resulting term is simplified once, and the terms are wrapped in a sum.
///
/// The terms are not simplified before they are combined; simplify them first if needed.
pub fn build_sum(mut terms: Vec<Expr>) -> Expr {
    if terms.len() == 1 {
        return terms.remove(0);
    }

    let mut valid = terms.into_iter()
        .filter(|term| !term.is_zero())
        .collect::<Vec<_>>();
    match valid.len() {
        0 => return Expr::Constant(0.0),
        1 => return valid.remove(0),
        2 => if let (Some(a), Some(b)) = (valid[0].as_constant(), valid[1].as_constant()) {
            return Expr::Constant(a + b);
        },
        _ => (),
    }

    order::sort_ascending(&mut valid);
    trace!("building sum of: {:?}", valid);

    let mut flat = Vec::with_capacity(valid.len());
    flatten_into(valid, &mut flat);

    let mut grouped = Vec::new();
    let (constants, rest): (Vec<_>, Vec<_>) = flat.into_iter().partition(Expr::is_constant);
    let total = constants.iter().filter_map(Expr::as_constant).sum::<f64>();
    if total != 0.0 {
        grouped.push(Expr::Constant(total));
    }
    grouped.extend(combine_like_terms(rest));

    let result = Expr::sum(grouped.iter().map(simplify_step).collect()).downgrade();
    trace!("built sum: {}", result);
    result
}
