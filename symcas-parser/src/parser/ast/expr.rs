use std::{collections::BTreeSet, ops::Neg};
use super::{
    consts::E,
    iter::ExprIter,
    kind::{BracketKind, ExpressionType, TrigKind},
    order,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a mathematical expression tree.
///
/// The children of [`Expr::Sum`] are kept sorted in descending canonical order, and the children
/// of [`Expr::Product`], [`Expr::Min`], and [`Expr::Max`] in ascending canonical order (see
/// [`order`](super::order)). The constructors of this type (such as [`Expr::sum`]) sort for you,
/// but perform no other simplification.
///
/// # Structural equality
///
/// The [`PartialEq`] implementation compares expressions **structurally**: two expressions are
/// equal only if they are the same variant, with equal children in the same order. Expressions
/// that are mathematically equivalent, such as `x + x` and `2x`, are not structurally equal
/// until both have been brought into canonical form.
///
/// Constants are compared by value. Two `NaN` constants are considered structurally equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number, such as `2`, `0.5`, or `π`.
    Constant(f64),

    /// A single-letter variable, such as `x`.
    Variable(char),

    /// Multiple terms added together.
    Sum(Vec<Expr>),

    /// Multiple factors multiplied together.
    Product(Vec<Expr>),

    /// A numerator divided by a denominator.
    Fraction(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Power(Box<Expr>, Box<Expr>),

    /// The logarithm of an argument (the second field) to a base (the first field).
    Log(Box<Expr>, Box<Expr>),

    /// `floor`, `ceil`, or `abs`.
    Bracket(BracketKind, Box<Expr>),

    /// A trigonometric or inverse trigonometric function.
    Trig(TrigKind, Box<Expr>),

    /// The sign of an expression: `-1`, `0`, or `1`.
    Sign(Box<Expr>),

    /// The remainder of dividing the dividend (the first field) by the divisor.
    Mod(Box<Expr>, Box<Expr>),

    /// The smallest of its children.
    Min(Vec<Expr>),

    /// The largest of its children.
    Max(Vec<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Sum`] with the given terms, sorted in descending order.
    pub fn sum(mut terms: Vec<Expr>) -> Self {
        order::sort_descending(&mut terms);
        Self::Sum(terms)
    }

    /// Creates a [`Expr::Product`] with the given factors, sorted in ascending order.
    pub fn product(mut factors: Vec<Expr>) -> Self {
        order::sort_ascending(&mut factors);
        Self::Product(factors)
    }

    /// Creates a [`Expr::Fraction`].
    pub fn fraction(numerator: Expr, denominator: Expr) -> Self {
        Self::Fraction(Box::new(numerator), Box::new(denominator))
    }

    /// Creates a [`Expr::Power`].
    pub fn power(base: Expr, exponent: Expr) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    /// Creates `e^exponent`.
    pub fn exp(exponent: Expr) -> Self {
        Self::power(Self::Constant(E), exponent)
    }

    /// Creates `expr^0.5`.
    pub fn sqrt(expr: Expr) -> Self {
        Self::power(expr, Self::Constant(0.5))
    }

    /// Creates `expr^-1`.
    pub fn recip(expr: Expr) -> Self {
        Self::power(expr, Self::Constant(-1.0))
    }

    /// Creates a [`Expr::Log`] of `argument` to the given `base`.
    pub fn log(base: Expr, argument: Expr) -> Self {
        Self::Log(Box::new(base), Box::new(argument))
    }

    /// Creates the natural logarithm of `argument`.
    pub fn ln(argument: Expr) -> Self {
        Self::log(Self::Constant(E), argument)
    }

    /// Creates a [`Expr::Bracket`].
    pub fn bracket(kind: BracketKind, arg: Expr) -> Self {
        Self::Bracket(kind, Box::new(arg))
    }

    /// Creates a [`Expr::Trig`].
    pub fn trig(kind: TrigKind, arg: Expr) -> Self {
        Self::Trig(kind, Box::new(arg))
    }

    /// Creates a [`Expr::Sign`].
    pub fn sign(arg: Expr) -> Self {
        Self::Sign(Box::new(arg))
    }

    /// Creates a [`Expr::Mod`].
    pub fn modulo(dividend: Expr, divisor: Expr) -> Self {
        Self::Mod(Box::new(dividend), Box::new(divisor))
    }

    /// Creates a [`Expr::Min`] with the given children, sorted in ascending order.
    pub fn min(mut children: Vec<Expr>) -> Self {
        order::sort_ascending(&mut children);
        Self::Min(children)
    }

    /// Creates a [`Expr::Max`] with the given children, sorted in ascending order.
    pub fn max(mut children: Vec<Expr>) -> Self {
        order::sort_ascending(&mut children);
        Self::Max(children)
    }

    /// Returns the type of this node.
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Self::Constant(_) => ExpressionType::Constant,
            Self::Variable(_) => ExpressionType::Variable,
            Self::Sum(_) => ExpressionType::Sum,
            Self::Product(_) => ExpressionType::Product,
            Self::Fraction(..) => ExpressionType::Fraction,
            Self::Power(..) => ExpressionType::Power,
            Self::Log(..) => ExpressionType::Logarithm,
            Self::Bracket(kind, _) => kind.expression_type(),
            Self::Trig(kind, _) => kind.expression_type(),
            Self::Sign(_) => ExpressionType::Sign,
            Self::Mod(..) => ExpressionType::Mod,
            Self::Min(_) => ExpressionType::Min,
            Self::Max(_) => ExpressionType::Max,
        }
    }

    /// If the expression is a [`Expr::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns true if the expression is the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }

    /// Returns true if the expression is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.as_constant() == Some(1.0)
    }

    /// Returns true if the expression is the constant `e`, the base of [`Expr::exp`] and
    /// [`Expr::ln`].
    pub fn is_e(&self) -> bool {
        self.as_constant() == Some(E)
    }

    /// If the expression is a [`Expr::Product`] whose first factor is a constant, returns that
    /// constant.
    pub fn leading_coefficient(&self) -> Option<f64> {
        match self {
            Self::Product(factors) => factors.first().and_then(Self::as_constant),
            _ => None,
        }
    }

    /// Returns true if the expression is a negative constant, or a product led by a negative
    /// constant.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Constant(value) => *value < 0.0,
            _ => self.leading_coefficient().map_or(false, |value| value < 0.0),
        }
    }

    /// Returns the children of the node, in order.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Sum(children) | Self::Product(children)
                | Self::Min(children) | Self::Max(children) => children.iter().collect(),
            Self::Fraction(a, b) | Self::Power(a, b) | Self::Log(a, b) | Self::Mod(a, b) => vec![&**a, &**b],
            Self::Bracket(_, arg) | Self::Trig(_, arg) | Self::Sign(arg) => vec![&**arg],
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Sum`] with zero / one term, or an
    /// [`Expr::Product`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or the constant 0 or 1.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Sum(mut terms) => match terms.len() {
                0 => Self::Constant(0.0),
                1 => terms.remove(0),
                _ => Self::Sum(terms),
            },
            Self::Product(mut factors) => match factors.len() {
                0 => Self::Constant(1.0),
                1 => factors.remove(0),
                _ => Self::Product(factors),
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the set of variables that appear as leaves of this expression.
    pub fn variables(&self) -> BTreeSet<char> {
        self.post_order_iter()
            .filter_map(|expr| match expr {
                Self::Variable(symbol) => Some(*symbol),
                _ => None,
            })
            .collect()
    }
}

/// Checks if two expressions are **structurally** equal.
///
/// For more information about structural equality, see the documentation of [`Expr`].
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(lhs), Self::Constant(rhs)) => {
                lhs == rhs || (lhs.is_nan() && rhs.is_nan())
            },
            (Self::Variable(lhs), Self::Variable(rhs)) => lhs == rhs,
            (Self::Sum(lhs), Self::Sum(rhs))
                | (Self::Product(lhs), Self::Product(rhs))
                | (Self::Min(lhs), Self::Min(rhs))
                | (Self::Max(lhs), Self::Max(rhs)) => lhs == rhs,
            (Self::Fraction(lhs_a, lhs_b), Self::Fraction(rhs_a, rhs_b))
                | (Self::Power(lhs_a, lhs_b), Self::Power(rhs_a, rhs_b))
                | (Self::Log(lhs_a, lhs_b), Self::Log(rhs_a, rhs_b))
                | (Self::Mod(lhs_a, lhs_b), Self::Mod(rhs_a, rhs_b)) => {
                lhs_a == rhs_a && lhs_b == rhs_b
            },
            (Self::Bracket(lhs_kind, lhs), Self::Bracket(rhs_kind, rhs)) => {
                lhs_kind == rhs_kind && lhs == rhs
            },
            (Self::Trig(lhs_kind, lhs), Self::Trig(rhs_kind, rhs)) => {
                lhs_kind == rhs_kind && lhs == rhs
            },
            (Self::Sign(lhs), Self::Sign(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(order::cmp(self, other))
    }
}

/// Negates the expression by multiplying it with `-1`. If the expression is already a
/// [`Expr::Product`], `-1` is added to its factors instead of nesting it. No simplification is
/// done.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut factors = vec![Self::Constant(-1.0)];
        match self {
            Self::Product(inner) => factors.extend(inner),
            other => factors.push(other),
        }
        Self::product(factors)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<char> for Expr {
    fn from(symbol: char) -> Self {
        Self::Variable(symbol)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constructors_sort_children() {
        let x = Expr::Variable('x');
        let two = Expr::Constant(2.0);

        assert_eq!(
            Expr::sum(vec![two.clone(), x.clone()]),
            Expr::Sum(vec![x.clone(), two.clone()]),
        );
        assert_eq!(
            Expr::product(vec![x.clone(), two.clone()]),
            Expr::Product(vec![two, x]),
        );
    }

    #[test]
    fn structural_equality_is_order_sensitive() {
        let a = Expr::Sum(vec![Expr::Variable('x'), Expr::Variable('y')]);
        let b = Expr::Sum(vec![Expr::Variable('y'), Expr::Variable('x')]);
        assert_ne!(a, b);
    }

    #[test]
    fn nan_constants_are_structurally_equal() {
        assert_eq!(Expr::Constant(f64::NAN), Expr::Constant(f64::NAN));
        assert_eq!(Expr::Constant(0.0), Expr::Constant(-0.0));
    }

    #[test]
    fn different_kinds_are_not_equal() {
        let x = Expr::Variable('x');
        assert_ne!(
            Expr::bracket(BracketKind::Floor, x.clone()),
            Expr::bracket(BracketKind::Ceiling, x.clone()),
        );
        assert_ne!(Expr::power(x.clone(), 2.0.into()), Expr::log(x, 2.0.into()));
    }

    #[test]
    fn negation_flattens_products() {
        let xy = Expr::product(vec![Expr::Variable('x'), Expr::Variable('y')]);
        assert_eq!(
            -xy,
            Expr::Product(vec![Expr::Constant(-1.0), Expr::Variable('x'), Expr::Variable('y')]),
        );
    }

    #[test]
    fn negative_detection() {
        assert!(Expr::Constant(-2.0).is_negative());
        assert!((-Expr::Variable('x')).is_negative());
        assert!(!Expr::Variable('x').is_negative());
        assert!(!Expr::Constant(0.0).is_negative());
    }

    #[test]
    fn variables_of_nested_expression() {
        let expr = Expr::sum(vec![
            Expr::trig(TrigKind::Sin, Expr::Variable('x')),
            Expr::power(Expr::Variable('y'), Expr::Variable('x')),
            Expr::Constant(3.0),
        ]);
        assert_eq!(expr.variables(), BTreeSet::from(['x', 'y']));
    }

    #[test]
    fn downgrade_degenerate_operators() {
        assert_eq!(Expr::Sum(vec![]).downgrade(), Expr::Constant(0.0));
        assert_eq!(Expr::Product(vec![]).downgrade(), Expr::Constant(1.0));
        assert_eq!(Expr::Product(vec![Expr::Variable('x')]).downgrade(), Expr::Variable('x'));
    }
}
