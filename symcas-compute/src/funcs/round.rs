//! Rounding functions.

/// Build a rounding function.
macro_rules! build_rounding {
    ($($name:ident $upname:ident; $doc:literal),* $(,)?) => {
        $(
            #[doc = $doc]
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    n.$name()
                }
            }
        )*
    };
}

build_rounding! {
    ceil Ceil; "Round a number up to the nearest integer.",
    floor Floor; "Round a number down to the nearest integer.",
}
