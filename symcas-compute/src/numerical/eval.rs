use crate::funcs::{self, miscellaneous::{Log, Max, Min, Mod, Sign}};
use symcas_error::Error;
use symcas_parser::parser::ast::Expr;
use super::{ctxt::Ctxt, error::UndefinedVariable};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context to look up the
    /// values of variables.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Evaluates every expression in the slice, stopping at the first error.
fn eval_all(exprs: &[Expr], ctxt: &Ctxt) -> Result<Vec<f64>, Error> {
    exprs.iter().map(|expr| expr.eval(ctxt)).collect()
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        Ok(match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => ctxt.get_var(*name)
                .ok_or_else(|| Error::without_spans(UndefinedVariable { name: *name }))?,
            Expr::Sum(terms) => eval_all(terms, ctxt)?.into_iter().sum(),
            Expr::Product(factors) => eval_all(factors, ctxt)?.into_iter().product(),
            Expr::Fraction(num, den) => num.eval(ctxt)? / den.eval(ctxt)?,
            Expr::Power(base, exp) => base.eval(ctxt)?.powf(exp.eval(ctxt)?),
            Expr::Log(base, arg) => Log::eval_static(base.eval(ctxt)?, arg.eval(ctxt)?),
            Expr::Bracket(kind, arg) => funcs::bracket(*kind, arg.eval(ctxt)?),
            Expr::Trig(kind, arg) => funcs::trig(*kind, arg.eval(ctxt)?),
            Expr::Sign(arg) => Sign::eval_static(arg.eval(ctxt)?),
            Expr::Mod(dividend, divisor) => Mod::eval_static(dividend.eval(ctxt)?, divisor.eval(ctxt)?),
            Expr::Min(children) => Min::eval_static(eval_all(children, ctxt)?),
            Expr::Max(children) => Max::eval_static(eval_all(children, ctxt)?),
        })
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use symcas_parser::parser::Parser;
    use super::*;

    fn eval_with(source: &str, vars: &[(char, f64)]) -> Result<f64, Error> {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        expr.eval(&vars.iter().copied().collect())
    }

    #[test]
    fn polynomial() {
        assert_float_relative_eq!(eval_with("x^2+1", &[('x', 2.0)]).unwrap(), 5.0);
        assert_float_relative_eq!(eval_with("(x-1)(x+1)", &[('x', 3.0)]).unwrap(), 8.0);
    }

    #[test]
    fn functions() {
        assert_eq!(eval_with("floor(2.7)", &[]).unwrap(), 2.0);
        assert_eq!(eval_with("ceil(-2.7)", &[]).unwrap(), -2.0);
        assert_eq!(eval_with("abs(x)", &[('x', -4.0)]).unwrap(), 4.0);
        assert_eq!(eval_with("sign(0)", &[]).unwrap(), 0.0);
        assert_eq!(eval_with("mod(7, 3)", &[]).unwrap(), 1.0);
        assert_eq!(eval_with("min(x, 2, 5)", &[('x', 3.0)]).unwrap(), 2.0);
        assert_eq!(eval_with("max(x, 2, 5)", &[('x', 3.0)]).unwrap(), 5.0);
        assert_float_relative_eq!(eval_with("log_2_8", &[]).unwrap(), 3.0);
        assert_float_relative_eq!(eval_with("ln(e^3)", &[]).unwrap(), 3.0);
        assert_float_relative_eq!(eval_with("sqrt(16)", &[]).unwrap(), 4.0);
        assert_float_relative_eq!(eval_with("cos(pi)", &[]).unwrap(), -1.0);
        assert_float_relative_eq!(eval_with("arctan(1)*4", &[]).unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn ieee_edge_cases_are_not_errors() {
        assert!(eval_with("1/x", &[('x', 0.0)]).unwrap().is_infinite());
        assert!(eval_with("ln(x)", &[('x', -1.0)]).unwrap().is_nan());
        assert!(eval_with("min(x, 1)", &[('x', f64::NAN)]).unwrap().is_nan());
    }

    #[test]
    fn undefined_variable() {
        let err = eval_with("x + y", &[('x', 1.0)]).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&UndefinedVariable { name: 'y' }));
        assert!(err.spans.is_empty());
    }
}
