//! Trigonometric and inverse trigonometric functions. Angles are always in radians.

/// Build a trigonometric function that takes in a single argument.
macro_rules! build_trig {
    ($($upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(n)
                }
            }
        )*
    };
}

build_trig! {
    Sin; f64::sin,
    Cos; f64::cos,
    Tan; f64::tan,
    Csc; |n: f64| n.sin().recip(),
    Sec; |n: f64| n.cos().recip(),
    Cot; |n: f64| n.tan().recip(),
    Asin; f64::asin,
    Acos; f64::acos,
    Atan; f64::atan,
}
