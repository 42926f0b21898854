use log::debug;
use std::{collections::BTreeSet, fmt, str::FromStr};
use symcas_error::Error;
use symcas_parser::parser::{ast::Expr, fmt::RenderMode, parse_with_variables};
use crate::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{derivative, simplify, DerivativeError},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression together with the set of variables that appear in it.
///
/// An [`Equation`] is immutable; [`Equation::simplified`] and [`Equation::derivative`] return new
/// equations.
///
/// ```
/// use symcas_compute::{numerical::ctxt::Ctxt, Equation};
///
/// let equation = Equation::parse("x^2 + 3*x").unwrap();
/// let derivative = equation.derivative('x').unwrap();
///
/// let ctxt = [('x', 2.0)].into_iter().collect::<Ctxt>();
/// assert_eq!(equation.evaluate(&ctxt).unwrap(), 10.0);
/// assert_eq!(derivative.evaluate(&ctxt).unwrap(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    root: Expr,
    variables: BTreeSet<char>,
}

impl Equation {
    /// Creates an equation from an existing expression and its set of variables.
    pub fn new(root: Expr, variables: BTreeSet<char>) -> Self {
        Self { root, variables }
    }

    /// Parses an equation from text. The free variables are the single-letter names used in it.
    pub fn parse(source: &str) -> Result<Self, Error> {
        let mut variables = BTreeSet::new();
        let root = parse_with_variables(source, &mut variables)?;
        Ok(Self { root, variables })
    }

    /// Evaluates the equation with the given variable values.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.root.eval(ctxt)
    }

    /// Returns the canonical form of this equation. The free variables are recomputed, so
    /// variables that cancel out (as in `x - x`) are no longer listed.
    pub fn simplified(&self) -> Self {
        let root = simplify(&self.root);
        let variables = root.variables();
        Self { root, variables }
    }

    /// Returns the simplified derivative of this equation with respect to `var`.
    pub fn derivative(&self, var: char) -> Result<Self, DerivativeError> {
        debug!("differentiating {} with respect to {}", self.root, var);
        let root = derivative(&self.root, var)?;
        Ok(Self::new(root, BTreeSet::new()).simplified())
    }

    /// The variables that appear in the equation.
    pub fn free_variables(&self) -> &BTreeSet<char> {
        &self.variables
    }

    /// The root of the expression tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Renders the equation as text.
    pub fn render(&self, mode: RenderMode) -> String {
        self.root.render(mode)
    }
}

impl FromStr for Equation {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use crate::numerical::error::UndefinedVariable;
    use pretty_assertions::assert_eq;
    use super::*;

    fn at(pairs: &[(char, f64)]) -> Ctxt {
        pairs.iter().copied().collect()
    }

    #[test]
    fn parse_collects_variables() {
        let equation = Equation::parse("x*y + sin(z) + pi").unwrap();
        assert_eq!(equation.free_variables(), &BTreeSet::from(['x', 'y', 'z']));

        let equation: Equation = "2 + 3".parse().unwrap();
        assert!(equation.free_variables().is_empty());
    }

    #[test]
    fn parse_error() {
        assert!(Equation::parse("x +").is_err());
        assert!(Equation::parse("").is_err());
    }

    #[test]
    fn evaluate() {
        let equation = Equation::parse("x^2 + y").unwrap();
        assert_float_relative_eq!(equation.evaluate(&at(&[('x', 3.0), ('y', 1.5)])).unwrap(), 10.5);

        let err = equation.evaluate(&at(&[('x', 3.0)])).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&UndefinedVariable { name: 'y' }));
    }

    #[test]
    fn simplified_recomputes_variables() {
        let equation = Equation::parse("x - x + y").unwrap();
        assert_eq!(equation.free_variables(), &BTreeSet::from(['x', 'y']));

        let simplified = equation.simplified();
        assert_eq!(simplified.root(), &Expr::Variable('y'));
        assert_eq!(simplified.free_variables(), &BTreeSet::from(['y']));
    }

    #[test]
    fn simplified_is_idempotent() {
        let once = Equation::parse("2*(x+1) + x*x").unwrap().simplified();
        assert_eq!(once.simplified(), once);
    }

    #[test]
    fn derivative() {
        let equation = Equation::parse("x^2").unwrap();
        let derivative = equation.derivative('x').unwrap();
        assert_float_relative_eq!(derivative.evaluate(&at(&[('x', 3.0)])).unwrap(), 6.0);
        assert_eq!(derivative.free_variables(), &BTreeSet::from(['x']));

        let derivative = Equation::parse("3*x+5").unwrap().derivative('x').unwrap();
        assert_eq!(derivative.root(), &Expr::Constant(3.0));
        assert!(derivative.free_variables().is_empty());

        let derivative = Equation::parse("y^2").unwrap().derivative('x').unwrap();
        assert_eq!(derivative.root(), &Expr::Constant(0.0));
    }

    #[test]
    fn derivative_error() {
        let err = Equation::parse("min(x, 2)").unwrap().derivative('x').unwrap_err();
        assert_eq!(err, DerivativeError::Undifferentiable { function: "min" });
    }

    #[test]
    fn render_modes() {
        let equation = Equation::parse("x^2").unwrap();
        assert_eq!(equation.render(RenderMode::Plain), "(x)^(2)");
        assert_eq!(equation.render(RenderMode::Annotated), "x^2");
        assert_eq!(equation.to_string(), "x^2");
    }

    #[test]
    fn plain_rendering_round_trips() {
        let ctxt = at(&[('x', 1.7)]);
        for source in [
            "x^2+3*x-1",
            "sin(x)/(x+1)",
            "log_2(x)*e^x",
            "min(x, 2) + mod(x, 3)",
            "abs(x)+floor(x/2)",
            "sqrt(x+1)",
            "arctan(x)^2",
        ] {
            let simplified = Equation::parse(source).unwrap().simplified();
            let reparsed = Equation::parse(&simplified.render(RenderMode::Plain)).unwrap();
            assert_eq!(reparsed.simplified(), simplified);
            assert_float_relative_eq!(
                reparsed.evaluate(&ctxt).unwrap(),
                Equation::parse(source).unwrap().evaluate(&ctxt).unwrap(),
                1e-12
            );
        }
    }

    /// A negative constant is written as `-k`, which parses as `-1 * k`, so only the value is
    /// guaranteed to survive.
    #[test]
    fn plain_rendering_keeps_value_of_negative_constants() {
        let simplified = Equation::parse("ln((0.5-e)^2)").unwrap().simplified();
        let reparsed = Equation::parse(&simplified.render(RenderMode::Plain)).unwrap();
        assert_float_relative_eq!(
            reparsed.simplified().evaluate(&Ctxt::new()).unwrap(),
            simplified.evaluate(&Ctxt::new()).unwrap(),
            1e-12
        );
    }

    #[test]
    fn plain_rendering_of_non_finite_values() {
        let simplified = Equation::parse("mod(1,0)").unwrap().simplified();
        assert_eq!(simplified.root(), &Expr::modulo(Expr::Constant(1.0), Expr::Constant(0.0)));
        let plain = simplified.render(RenderMode::Plain);
        assert_eq!(plain, "mod(1,0)");
        let reparsed = Equation::parse(&plain).unwrap();
        assert!(reparsed.simplified().evaluate(&Ctxt::new()).unwrap().is_nan());

        let huge = format!("{}*2", "9".repeat(400));
        let simplified = Equation::parse(&huge).unwrap().simplified();
        assert_eq!(simplified.root(), &Expr::Constant(f64::INFINITY));
        let reparsed = Equation::parse(&simplified.render(RenderMode::Plain)).unwrap();
        assert_eq!(reparsed.simplified().evaluate(&Ctxt::new()).unwrap(), f64::INFINITY);
    }
}
