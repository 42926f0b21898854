//! Uncategorized functions.

/// Returns the absolute value.
#[derive(Debug)]
pub struct Abs;

impl Abs {
    pub fn eval_static(n: f64) -> f64 {
        n.abs()
    }
}

/// Returns the sign of a number: `-1`, `0`, or `1`. The sign of `NaN` is `NaN`.
///
/// Unlike [`f64::signum`], the sign of zero (positive or negative) is `0`.
#[derive(Debug)]
pub struct Sign;

impl Sign {
    pub fn eval_static(n: f64) -> f64 {
        if n == 0.0 {
            0.0
        } else {
            n.signum()
        }
    }
}

/// Returns the logarithm of `n` to the base `b`, computed as `ln(n) / ln(b)`.
#[derive(Debug)]
pub struct Log;

impl Log {
    pub fn eval_static(b: f64, n: f64) -> f64 {
        n.ln() / b.ln()
    }
}

/// Returns the remainder of dividing `n` by `d`. The result has the sign of `n`.
#[derive(Debug)]
pub struct Mod;

impl Mod {
    pub fn eval_static(n: f64, d: f64) -> f64 {
        n % d
    }
}

/// Returns the smallest of the given values, or `NaN` if any of them is `NaN`.
#[derive(Debug)]
pub struct Min;

impl Min {
    pub fn eval_static(values: impl IntoIterator<Item = f64>) -> f64 {
        values.into_iter().fold(f64::INFINITY, |acc, value| {
            if acc.is_nan() || value.is_nan() {
                f64::NAN
            } else {
                acc.min(value)
            }
        })
    }
}

/// Returns the largest of the given values, or `NaN` if any of them is `NaN`.
#[derive(Debug)]
pub struct Max;

impl Max {
    pub fn eval_static(values: impl IntoIterator<Item = f64>) -> f64 {
        values.into_iter().fold(f64::NEG_INFINITY, |acc, value| {
            if acc.is_nan() || value.is_nan() {
                f64::NAN
            } else {
                acc.max(value)
            }
        })
    }
}
