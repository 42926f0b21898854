//! Resolution of names: constants, variables, and function applications.
//!
//! A function can be applied with brackets, `sin(x)`, or directly to the operand that follows
//! it, `sinx` or `sin 2`. A name that starts with a function name applies that function to the
//! rest of the name, so `sinsinx` is `sin(sin(x))`.

use crate::tokenizer::{Token, TokenKind};
use std::ops::Range;
use super::{
    ast::{consts::NamedConstant, BracketKind, Expr, TrigKind},
    error::{kind, Error},
    expr::parse_atom,
    paren::{parse_args, parse_group},
    Parser,
};

/// The number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),

    /// At least one argument.
    Variadic,
}

impl Arity {
    /// Returns true if `count` arguments are accepted.
    fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::Variadic => count >= 1,
        }
    }

    /// Describes the accepted number of arguments.
    fn describe(self) -> &'static str {
        match self {
            Self::Exactly(1) => "exactly 1",
            Self::Exactly(2) => "exactly 2",
            Self::Exactly(_) => "a fixed number of",
            Self::Variadic => "at least 1",
        }
    }
}

/// A function that can be written in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Function {
    Trig(TrigKind),
    Bracket(BracketKind),
    Sqrt,
    Exp,
    Ln,
    Log,
    Sign,
    Min,
    Max,
    Mod,
}

impl Function {
    /// Every function, in no particular order.
    fn all() -> impl Iterator<Item = Function> {
        TrigKind::ALL.into_iter().map(Function::Trig)
            .chain(BracketKind::ALL.into_iter().map(Function::Bracket))
            .chain([
                Function::Sqrt,
                Function::Exp,
                Function::Ln,
                Function::Log,
                Function::Sign,
                Function::Min,
                Function::Max,
                Function::Mod,
            ])
    }

    /// The name of the function.
    fn name(self) -> &'static str {
        match self {
            Self::Trig(kind) => kind.name(),
            Self::Bracket(kind) => kind.name(),
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sign => "sign",
            Self::Min => "min",
            Self::Max => "max",
            Self::Mod => "mod",
        }
    }

    /// Returns the function with exactly this name.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|func| func.name() == name)
    }

    /// Returns the function whose name is the longest prefix of `name`.
    fn longest_prefix(name: &str) -> Option<Self> {
        Self::all()
            .filter(|func| name.starts_with(func.name()))
            .max_by_key(|func| func.name().len())
    }

    fn arity(self) -> Arity {
        match self {
            Self::Mod => Arity::Exactly(2),
            Self::Min | Self::Max => Arity::Variadic,
            _ => Arity::Exactly(1),
        }
    }

    /// Builds the node applying this function to the arguments. Returns [`None`] if the function
    /// does not accept that many arguments.
    fn apply(self, args: Vec<Expr>) -> Option<Expr> {
        if !self.arity().accepts(args.len()) {
            return None;
        }

        let mut args = args.into_iter();
        let expr = match self {
            Self::Min | Self::Max if args.len() == 1 => args.next()?,
            Self::Min => Expr::min(args.collect()),
            Self::Max => Expr::max(args.collect()),
            Self::Mod => Expr::modulo(args.next()?, args.next()?),
            Self::Trig(kind) => Expr::trig(kind, args.next()?),
            Self::Bracket(kind) => Expr::bracket(kind, args.next()?),
            Self::Sqrt => Expr::sqrt(args.next()?),
            Self::Exp => Expr::exp(args.next()?),
            Self::Ln => Expr::ln(args.next()?),
            Self::Log => Expr::log(Expr::Constant(10.0), args.next()?),
            Self::Sign => Expr::sign(args.next()?),
        };
        Some(expr)
    }
}

/// Returns the known names that are spelled similarly to `name`, closest first.
fn suggestions(name: &str) -> Vec<String> {
    let mut candidates = Function::all()
        .map(Function::name)
        .chain(NamedConstant::ALL.into_iter().map(NamedConstant::name))
        .map(|candidate| (levenshtein::levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .collect::<Vec<_>>();
    candidates.sort();
    candidates.into_iter().map(|(_, candidate)| candidate.to_string()).collect()
}

/// Parses the expression started by a name token.
pub fn parse_name(input: &mut Parser, token: &Token) -> Result<Expr, Error> {
    resolve(input, token.lexeme, token.span.clone())
}

/// Resolves `name`, which occupies `span` in the source, into an expression. Function
/// applications consume their arguments from the parser.
fn resolve(input: &mut Parser, name: &str, span: Range<usize>) -> Result<Expr, Error> {
    if let Some(constant) = NamedConstant::from_name(name) {
        return Ok(Expr::Constant(constant.value()));
    }

    let mut chars = name.chars();
    if let (Some(symbol), None) = (chars.next(), chars.next()) {
        input.register_variable(symbol);
        return Ok(Expr::Variable(symbol));
    }

    if let Some(func) = Function::from_name(name) {
        return parse_application(input, func, span);
    }

    if let Some(func) = Function::longest_prefix(name) {
        let split = func.name().len();
        let operand = resolve(input, &name[split..], span.start + split..span.end)?;
        return check_arity(func, vec![operand], span.start..span.start + split);
    }

    Err(Error::new(vec![span], kind::UnknownSymbol {
        name: name.to_string(),
        suggestions: suggestions(name),
    }))
}

/// Applies the function to the arguments, or reports that it does not accept that many.
fn check_arity(func: Function, args: Vec<Expr>, span: Range<usize>) -> Result<Expr, Error> {
    let given = args.len();
    func.apply(args).ok_or_else(|| Error::new(vec![span], kind::WrongArgumentCount {
        name: func.name(),
        expected: func.arity().describe(),
        given,
    }))
}

/// Parses the arguments of a function whose name has just been consumed.
fn parse_application(input: &mut Parser, func: Function, span: Range<usize>) -> Result<Expr, Error> {
    if func == Function::Log && input.eat(TokenKind::Underscore) {
        return parse_log_with_base(input);
    }

    if input.peek_kind() == Some(TokenKind::OpenParen) {
        let start = span.start;
        let args = parse_args(input)?;
        let end = input.prev_token().map_or(span.end, |token| token.span.end);
        return check_arity(func, args, start..end);
    }

    // applied directly to the next operand
    let operand = parse_atom(input)?;
    check_arity(func, vec![operand], span)
}

/// Parses `log_b_x`, `log_b(x)`, and their bracketed forms, after `log_`.
fn parse_log_with_base(input: &mut Parser) -> Result<Expr, Error> {
    let base = parse_atom(input)?;
    let argument = if input.eat(TokenKind::Underscore) {
        parse_atom(input)?
    } else {
        input.expect(&[TokenKind::Underscore, TokenKind::OpenParen])?;
        parse_group(input)?
    };
    Ok(Expr::log(base, argument))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn longest_prefix_wins() {
        assert_eq!(Function::longest_prefix("arcsinx"), Some(Function::Trig(TrigKind::ArcSin)));
        assert_eq!(Function::longest_prefix("sqrtx"), Some(Function::Sqrt));
        assert_eq!(Function::longest_prefix("lnx"), Some(Function::Ln));
        assert_eq!(Function::longest_prefix("xy"), None);
    }

    #[test]
    fn every_function_name_resolves() {
        for func in Function::all() {
            assert_eq!(Function::from_name(func.name()), Some(func));
        }
    }

    #[test]
    fn suggestions_are_sorted_by_distance() {
        let suggested = suggestions("cell");
        assert_eq!(suggested.first().map(String::as_str), Some("ceil"));
        assert!(suggestions("zzzzzz").is_empty());
    }
}
