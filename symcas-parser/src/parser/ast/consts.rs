//! Named constants. A [`Constant`](super::Expr::Constant) whose value equals one of these is
//! rendered with the constant's symbol, however it was constructed.

/// The ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number, the base of the natural logarithm.
pub const E: f64 = std::f64::consts::E;

/// The golden ratio.
pub const PHI: f64 = 1.618033988749895;

/// One of the constants with a name in the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedConstant {
    Pi,
    E,
    Phi,
}

impl NamedConstant {
    /// All named constants.
    pub const ALL: [NamedConstant; 3] = [NamedConstant::Pi, NamedConstant::E, NamedConstant::Phi];

    /// Returns the value of the constant.
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
            Self::Phi => PHI,
        }
    }

    /// Returns the named constant with the given name in the grammar, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|constant| constant.name() == name)
    }

    /// Returns the named constant whose value is exactly `value`, if any.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|constant| constant.value() == value)
    }

    /// The name of the constant in the grammar, also used for plain-text rendering.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Phi => "phi",
        }
    }

    /// The Unicode symbol of the constant.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
            Self::Phi => "ϕ",
        }
    }

    /// The LaTeX representation of the constant.
    pub fn latex(self) -> &'static str {
        match self {
            Self::Pi => "\\pi",
            Self::E => "e",
            Self::Phi => "\\varphi",
        }
    }
}
