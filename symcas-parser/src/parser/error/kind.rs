use ariadne::Fmt;
use symcas_attrs::ErrorKind;
use symcas_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// There was nothing to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// Two operands were written next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["add an operator before this"],
    help = format!(
        "multiplication must be written with `{}`, except between bracketed groups such as `{}`",
        "*".fg(EXPR),
        "(a)(b)".fg(EXPR),
    ),
)]
pub struct MissingOperator;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// Two operators were written next to each other.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot follow `{}`", second, first),
    labels = ["this operator", "is followed by this operator"],
    help = format!("only `{}` may directly follow `*`, `/`, or `^`", "-".fg(EXPR)),
)]
pub struct DoubledOperator {
    /// The first operator.
    pub first: String,

    /// The operator that follows it.
    pub second: String,
}

/// A character that is not part of the expression grammar was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["here"],
)]
pub struct InvalidCharacter {
    /// The character that was found.
    pub character: String,
}

/// A numeric literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// A name is neither a variable, a constant, nor a function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown symbol `{}`", name),
    labels = ["this symbol"],
    help = if suggestions.is_empty() {
        format!(
            "variables are single letters; write products of variables with `{}`",
            "*".fg(EXPR),
        )
    } else {
        format!(
            "did you mean {}?",
            suggestions.iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        )
    },
)]
pub struct UnknownSymbol {
    /// The name that was found.
    pub name: String,

    /// Known names that are spelled similarly.
    pub suggestions: Vec<String>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments for `{}`", name),
    labels = [format!("this call has {} argument(s)", given)],
    help = format!("`{}` takes {} argument(s)", name.fg(EXPR), expected),
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: &'static str,

    /// A description of the accepted number of arguments.
    pub expected: &'static str,

    /// The number of arguments given.
    pub given: usize,
}
