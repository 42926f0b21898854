//! Simplification rules for products, including combining like bases and distributing over sums.

use log::trace;
use symcas_parser::parser::ast::{order, Expr};
use crate::symbolic::simplify::simplify_step;
use super::add::build_sum;

/// Distributes a factor over a binary sum.
///
/// `a(b+c) = ab+ac`
///
/// This only applies to a product of exactly two factors, one of which is a sum of two terms, and
/// the other is not a sum.
fn distribute(factors: &[Expr]) -> Option<Expr> {
    let [other, Expr::Sum(terms)] = factors else {
        return None;
    };
    if matches!(other, Expr::Sum(_)) {
        return None;
    }
    let [first, second] = terms.as_slice() else {
        return None;
    };

    Some(build_sum(vec![
        Expr::product(vec![other.clone(), first.clone()]),
        Expr::product(vec![other.clone(), second.clone()]),
    ]))
}

/// Pushes the factors equivalent to the reciprocal of a denominator into `out`.
///
/// - `b^k` -> `b^(-1*k)`
/// - `a*b` -> `a^-1`, `b^-1`
/// - `a` -> `a^-1`
fn push_reciprocal(den: Expr, out: &mut Vec<Expr>) {
    match den {
        Expr::Power(base, exp) => {
            out.push(Expr::Power(base, Box::new(build_product(vec![Expr::Constant(-1.0), *exp]))));
        },
        Expr::Product(factors) => {
            for factor in factors {
                push_reciprocal(factor, out);
            }
        },
        other => out.push(Expr::recip(other)),
    }
}

/// Rewrites every fraction in the factors as its numerator times the reciprocal of its
/// denominator.
///
/// `a/b = a*b^-1`
fn expand_fractions(factors: Vec<Expr>) -> Vec<Expr> {
    let mut out = Vec::with_capacity(factors.len());
    for factor in factors {
        match factor {
            Expr::Fraction(num, den) => {
                out.push(*num);
                push_reciprocal(*den, &mut out);
            },
            other => out.push(other),
        }
    }
    out
}

/// Moves the factors of any nested product into `out`, recursively.
fn flatten_into(factors: Vec<Expr>, out: &mut Vec<Expr>) {
    for factor in factors {
        match factor {
            Expr::Product(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

/// Combines powers that share the same base by adding their exponents. Fresh power nodes are
/// built for the merged bases.
///
/// `a^x * a^y = a^(x+y)`
fn combine_like_bases(powers: Vec<(Expr, Expr)>) -> Vec<Expr> {
    let mut groups: Vec<(Expr, Vec<Expr>)> = Vec::new();
    for (base, exp) in powers {
        match groups.iter_mut().find(|(group_base, _)| *group_base == base) {
            Some((_, exps)) => exps.push(exp),
            None => groups.push((base, vec![exp])),
        }
    }

    groups.into_iter()
        .map(|(base, exps)| Expr::power(base, build_sum(exps)))
        .collect()
}

/// Multiplies the given factors together, applying the product rules:
///
/// 1. A single factor is returned as is. Any zero makes the product `0`. Ones are dropped; if
///    nothing remains the result is `1`, and two constants are multiplied directly.
/// 2. A product of a binary sum and one other factor is distributed, and the result is built with
///    [`build_sum`].
/// 3. Fractions are split into a numerator and the reciprocal of the denominator, and nested
///    products are flattened into one list of factors.
/// 4. Constant factors are multiplied into a single coefficient, which is dropped if it is one.
/// 5. Every other factor is viewed as a power (with exponent `1` if it is not one), and powers
///    with the same base are combined.
/// 6. Every resulting factor is simplified once. Powers with a negative exponent are moved into a
///    denominator, producing a fraction; otherwise, the factors are wrapped in a product.
///
/// The factors are not simplified before they are combined; simplify them first if needed.
pub fn build_product(mut factors: Vec<Expr>) -> Expr {
    if factors.len() == 1 {
        return factors.remove(0);
    }

    if factors.iter().any(Expr::is_zero) {
        return Expr::Constant(0.0);
    }

    let mut valid = factors.into_iter()
        .filter(|factor| !factor.is_one())
        .collect::<Vec<_>>();
    match valid.len() {
        0 => return Expr::Constant(1.0),
        1 => return valid.remove(0),
        2 => if let (Some(a), Some(b)) = (valid[0].as_constant(), valid[1].as_constant()) {
            return Expr::Constant(a * b);
        },
        _ => (),
    }

    order::sort_ascending(&mut valid);
    trace!("building product of: {:?}", valid);

    if let Some(distributed) = distribute(&valid) {
        return distributed;
    }

    let mut flat = Vec::with_capacity(valid.len());
    flatten_into(expand_fractions(valid), &mut flat);

    let mut grouped = Vec::new();
    let (constants, rest): (Vec<_>, Vec<_>) = flat.into_iter().partition(Expr::is_constant);
    let total = constants.iter().filter_map(Expr::as_constant).product::<f64>();
    if total != 1.0 {
        grouped.push(Expr::Constant(total));
    }

    let mut powers = Vec::new();
    let mut leftovers = Vec::new();
    for factor in rest {
        let factor = match factor {
            Expr::Power(..) => simplify_step(&factor),
            other => Expr::power(simplify_step(&other), Expr::Constant(1.0)),
        };
        match factor {
            Expr::Power(base, exp) => powers.push((*base, *exp)),
            other => leftovers.push(other),
        }
    }
    grouped.extend(combine_like_bases(powers));
    grouped.extend(leftovers);

    let mut grouped = grouped.iter().map(simplify_step).collect::<Vec<_>>();
    order::sort_ascending(&mut grouped);

    let (denominators, numerators): (Vec<_>, Vec<_>) = grouped.into_iter()
        .partition(|factor| matches!(factor, Expr::Power(_, exp) if exp.is_negative()));
    let result = if denominators.is_empty() {
        Expr::Product(numerators).downgrade()
    } else {
        let denominators = denominators.into_iter()
            .filter_map(|factor| match factor {
                Expr::Power(base, exp) => Some(simplify_step(&Expr::Power(
                    base,
                    Box::new(build_product(vec![Expr::Constant(-1.0), *exp])),
                ))),
                _ => None,
            })
            .collect::<Vec<_>>();
        let numerator = if numerators.is_empty() {
            Expr::Constant(1.0)
        } else {
            build_product(numerators)
        };
        Expr::fraction(numerator, build_product(denominators))
    };
    trace!("built product: {}", result);
    result
}
