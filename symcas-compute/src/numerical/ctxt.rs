use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// A context can be collected from any iterator of `(symbol, value)` pairs:
///
/// ```
/// use symcas_compute::numerical::ctxt::Ctxt;
///
/// let ctxt = [('x', 2.0), ('y', -1.0)].into_iter().collect::<Ctxt>();
/// assert_eq!(ctxt.get_var('x'), Some(2.0));
/// assert_eq!(ctxt.get_var('z'), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<char, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, symbol: char, value: f64) {
        self.vars.insert(symbol, value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, symbol: char) -> Option<f64> {
        self.vars.get(&symbol).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<char, f64> {
        &self.vars
    }
}

impl From<HashMap<char, f64>> for Ctxt {
    fn from(vars: HashMap<char, f64>) -> Self {
        Self { vars }
    }
}

impl FromIterator<(char, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().collect() }
    }
}
