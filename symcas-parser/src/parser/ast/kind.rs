#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type of an expression node.
///
/// The discriminant of each type is its priority in the canonical order: when two nodes of
/// different types are compared, the one with the lower priority sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ExpressionType {
    Constant = 0,
    Variable = 1,
    Power = 2,
    Fraction = 3,
    Logarithm = 4,
    Abs = 5,
    Floor = 6,
    Ceiling = 7,
    Sin = 8,
    Cos = 9,
    Tan = 10,
    Csc = 11,
    Sec = 12,
    Cot = 13,
    ArcSin = 14,
    ArcCos = 15,
    ArcTan = 16,
    Sign = 17,
    Mod = 18,
    Max = 19,
    Min = 20,
    Product = 21,
    Sum = 22,
}

impl ExpressionType {
    /// Returns the priority of this type in the canonical order.
    pub fn priority(self) -> u8 {
        self as u8
    }
}

/// A function written with a pair of enclosing glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BracketKind {
    /// `⌊x⌋`
    Floor,

    /// `⌈x⌉`
    Ceiling,

    /// `|x|`
    Abs,
}

impl BracketKind {
    /// All bracket functions.
    pub const ALL: [BracketKind; 3] = [BracketKind::Floor, BracketKind::Ceiling, BracketKind::Abs];

    /// The name of the function in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Ceiling => "ceil",
            Self::Abs => "abs",
        }
    }

    /// The opening and closing glyphs of the function.
    pub fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Self::Floor => ("⌊", "⌋"),
            Self::Ceiling => ("⌈", "⌉"),
            Self::Abs => ("|", "|"),
        }
    }

    /// The opening and closing LaTeX delimiters of the function.
    pub fn latex_delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Floor => ("\\lfloor ", " \\rfloor"),
            Self::Ceiling => ("\\lceil ", " \\rceil"),
            Self::Abs => ("\\left| ", " \\right|"),
        }
    }

    /// The type of a node applying this function.
    pub fn expression_type(self) -> ExpressionType {
        match self {
            Self::Floor => ExpressionType::Floor,
            Self::Ceiling => ExpressionType::Ceiling,
            Self::Abs => ExpressionType::Abs,
        }
    }
}

/// A trigonometric or inverse trigonometric function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrigKind {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    ArcSin,
    ArcCos,
    ArcTan,
}

impl TrigKind {
    /// All trigonometric functions.
    pub const ALL: [TrigKind; 9] = [
        TrigKind::Sin,
        TrigKind::Cos,
        TrigKind::Tan,
        TrigKind::Csc,
        TrigKind::Sec,
        TrigKind::Cot,
        TrigKind::ArcSin,
        TrigKind::ArcCos,
        TrigKind::ArcTan,
    ];

    /// The name of the function in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Csc => "csc",
            Self::Sec => "sec",
            Self::Cot => "cot",
            Self::ArcSin => "arcsin",
            Self::ArcCos => "arccos",
            Self::ArcTan => "arctan",
        }
    }

    /// Returns true if this is one of `arcsin`, `arccos`, or `arctan`.
    pub fn is_inverse(self) -> bool {
        matches!(self, Self::ArcSin | Self::ArcCos | Self::ArcTan)
    }

    /// For `sin`, `cos`, and `tan`, returns the inverse function that this function cancels out.
    pub fn cancels(self) -> Option<TrigKind> {
        match self {
            Self::Sin => Some(Self::ArcSin),
            Self::Cos => Some(Self::ArcCos),
            Self::Tan => Some(Self::ArcTan),
            _ => None,
        }
    }

    /// The type of a node applying this function.
    pub fn expression_type(self) -> ExpressionType {
        match self {
            Self::Sin => ExpressionType::Sin,
            Self::Cos => ExpressionType::Cos,
            Self::Tan => ExpressionType::Tan,
            Self::Csc => ExpressionType::Csc,
            Self::Sec => ExpressionType::Sec,
            Self::Cot => ExpressionType::Cot,
            Self::ArcSin => ExpressionType::ArcSin,
            Self::ArcCos => ExpressionType::ArcCos,
            Self::ArcTan => ExpressionType::ArcTan,
        }
    }
}
