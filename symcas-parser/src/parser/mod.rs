pub mod ast;
pub mod call;
pub mod error;
pub mod expr;
pub mod fmt;
pub mod literal;
pub mod paren;

use ast::Expr;
use error::{kind, Error};
use std::{collections::BTreeSet, ops::Range};
use symcas_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};

/// A high-level parser for mathematical expressions. This is the type to use to parse an
/// arbitrary piece of text into an expression tree.
///
/// Whitespace is dropped and empty pairs of parentheses `()` are deleted before parsing starts.
/// Every variable encountered while parsing is recorded, and can be retrieved with
/// [`Parser::variables`].
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,

    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The variables discovered so far.
    variables: BTreeSet<char>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        let mut tokens: Vec<Token<'source>> = Vec::new();
        for token in tokenize_complete(source).into_vec() {
            if token.is_whitespace() {
                continue;
            }

            if token.kind == TokenKind::CloseParen
                && tokens.last().map_or(false, |last| last.kind == TokenKind::OpenParen) {
                tokens.pop();
                continue;
            }

            tokens.push(token);
        }

        Self {
            source,
            tokens: tokens.into_boxed_slice(),
            cursor: 0,
            variables: BTreeSet::new(),
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token, without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Advances the cursor past the current token if it is of the given kind, returning true if
    /// it was.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next token, which must be of the given kind.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'source>, Error> {
        match self.current_token() {
            Some(token) if expected.contains(&token.kind) => self.next_token(),
            Some(token) => Err(self.unexpected(token, expected)),
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Creates the error for finding `token` where one of `expected` should be.
    ///
    /// A token that starts an operand is reported as a missing operator, since that is the most
    /// common reason to find one in an unexpected place (such as `2x`).
    pub fn unexpected(&self, token: &Token, expected: &'static [TokenKind]) -> Error {
        let span = vec![token.span.clone()];
        match token.kind {
            TokenKind::Number | TokenKind::Name | TokenKind::OpenParen => {
                Error::new(span, kind::MissingOperator)
            },
            TokenKind::Symbol => Error::new(span, kind::InvalidCharacter {
                character: token.lexeme.to_string(),
            }),
            found => Error::new(span, kind::UnexpectedToken { expected, found }),
        }
    }

    /// Records a variable discovered while parsing.
    pub fn register_variable(&mut self, symbol: char) {
        self.variables.insert(symbol);
    }

    /// Returns the variables discovered while parsing.
    pub fn variables(&self) -> &BTreeSet<char> {
        &self.variables
    }

    /// Consumes the parser, returning the variables discovered while parsing.
    pub fn into_variables(self) -> BTreeSet<char> {
        self.variables
    }

    /// Checks the whole token stream for errors that do not depend on the structure of the
    /// expression: nothing to parse, invalid characters, unbalanced brackets, and doubled
    /// operators.
    fn validate(&self) -> Result<(), Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(vec![0..self.source.len()], kind::EmptyExpression));
        }

        if let Some(token) = self.tokens.iter().find(|token| token.kind == TokenKind::Symbol) {
            return Err(Error::new(vec![token.span.clone()], kind::InvalidCharacter {
                character: token.lexeme.to_string(),
            }));
        }

        let mut open = Vec::new();
        for token in self.tokens.iter() {
            match token.kind {
                TokenKind::OpenParen => open.push(token.span.clone()),
                TokenKind::CloseParen => {
                    if open.pop().is_none() {
                        return Err(Error::new(
                            vec![token.span.clone()],
                            kind::UnclosedParenthesis { opening: false },
                        ));
                    }
                },
                _ => (),
            }
        }
        if let Some(span) = open.pop() {
            return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: true }));
        }

        for pair in self.tokens.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            if !first.kind.is_operator() || !second.kind.is_operator() {
                continue;
            }

            // `*-`, `/-`, and `^-` negate the following operand
            let negates = second.kind == TokenKind::Sub
                && matches!(first.kind, TokenKind::Mul | TokenKind::Div | TokenKind::Exp);
            if !negates {
                return Err(Error::new(
                    vec![first.span.clone(), second.span.clone()],
                    kind::DoubledOperator {
                        first: first.lexeme.to_string(),
                        second: second.lexeme.to_string(),
                    },
                ));
            }
        }

        Ok(())
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        self.validate()?;
        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) => match token.kind {
                TokenKind::Number | TokenKind::Name | TokenKind::OpenParen => {
                    Err(self.error(kind::MissingOperator))
                },
                _ => Err(self.error(kind::ExpectedEof)),
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses the source into an expression, adding every variable found in it to `variables`.
///
/// `variables` is left untouched if parsing fails.
pub fn parse_with_variables(source: &str, variables: &mut BTreeSet<char>) -> Result<Expr, Error> {
    let mut parser = Parser::new(source);
    let expr = parser.try_parse_full::<Expr>()?;
    variables.extend(parser.into_variables());
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::{consts::{E, PI}, BracketKind, TrigKind};

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    fn parse_err(source: &str) -> Error {
        Parser::new(source).try_parse_full::<Expr>().unwrap_err()
    }

    fn x() -> Expr {
        Expr::Variable('x')
    }

    fn y() -> Expr {
        Expr::Variable('y')
    }

    fn c(value: f64) -> Expr {
        Expr::Constant(value)
    }

    #[test]
    fn literals() {
        assert_eq!(parse("2.5"), c(2.5));
        assert_eq!(parse(".5"), c(0.5));
        assert_eq!(parse("x"), x());
        assert_eq!(parse("pi"), c(PI));
        assert_eq!(parse("e"), c(E));
    }

    #[test]
    fn sum_is_sorted_descending() {
        assert_eq!(parse("1 + x"), Expr::Sum(vec![x(), c(1.0)]));
        assert_eq!(parse("[x]+{y}"), Expr::Sum(vec![y(), x()]));
    }

    #[test]
    fn minus_becomes_negative_one_product() {
        assert_eq!(parse("-2"), Expr::Product(vec![c(-1.0), c(2.0)]));
        assert_eq!(
            parse("x - y*x"),
            Expr::Sum(vec![Expr::Product(vec![c(-1.0), x(), y()]), x()]),
        );
        assert_eq!(
            parse("x^-2"),
            Expr::power(x(), Expr::Product(vec![c(-1.0), c(2.0)])),
        );
    }

    #[test]
    fn products_are_flat_and_sorted() {
        assert_eq!(parse("y*2*x"), Expr::Product(vec![c(2.0), x(), y()]));
    }

    #[test]
    fn division_and_power_are_right_associative() {
        let z = Expr::Variable('z');
        assert_eq!(parse("x/y/z"), Expr::fraction(x(), Expr::fraction(y(), z.clone())));
        assert_eq!(parse("x^y^z"), Expr::power(x(), Expr::power(y(), z)));
    }

    #[test]
    fn division_binds_tighter_than_multiplication() {
        assert_eq!(
            parse("2*x/y"),
            Expr::Product(vec![c(2.0), Expr::fraction(x(), y())]),
        );
        assert_eq!(
            parse("x^2/y"),
            Expr::fraction(Expr::power(x(), c(2.0)), y()),
        );
    }

    #[test]
    fn implicit_multiplication_between_groups() {
        let expr = parse("(x+1)(x+2)");
        assert_eq!(
            expr,
            Expr::Product(vec![
                Expr::Sum(vec![x(), c(1.0)]),
                Expr::Sum(vec![x(), c(2.0)]),
            ]),
        );
    }

    #[test]
    fn coefficient_needs_explicit_multiplication() {
        assert_eq!(
            parse("3*x^2 + sin(x)"),
            Expr::sum(vec![
                Expr::product(vec![c(3.0), Expr::power(x(), c(2.0))]),
                Expr::trig(TrigKind::Sin, x()),
            ]),
        );
        assert!(parse_err("3x^2 + sin(x)").is::<kind::MissingOperator>());
    }

    #[test]
    fn redundant_and_empty_brackets() {
        assert_eq!(parse("((x))"), x());
        assert_eq!(parse("x()"), x());
        assert_eq!(parse("x+(())1"), parse("x+1"));
    }

    #[test]
    fn functions_with_and_without_brackets() {
        let sin_x = Expr::trig(TrigKind::Sin, x());
        assert_eq!(parse("sin(x)"), sin_x);
        assert_eq!(parse("sinx"), sin_x);
        assert_eq!(parse("sin x"), sin_x);
        assert_eq!(parse("sinx^2"), Expr::power(sin_x.clone(), c(2.0)));
        assert_eq!(parse("sin(x)^2"), Expr::power(sin_x.clone(), c(2.0)));
        assert_eq!(parse("sinsinx"), Expr::trig(TrigKind::Sin, sin_x));
        assert_eq!(parse("arctan(x)"), Expr::trig(TrigKind::ArcTan, x()));
        assert_eq!(parse("ceil(x)"), Expr::bracket(BracketKind::Ceiling, x()));
        assert_eq!(parse("sqrt(x)"), Expr::sqrt(x()));
        assert_eq!(parse("exp(x)"), Expr::exp(x()));
        assert_eq!(parse("e^x"), Expr::exp(x()));
        assert_eq!(parse("sign(x)"), Expr::sign(x()));
    }

    #[test]
    fn logarithms() {
        assert_eq!(parse("lnx"), Expr::ln(x()));
        assert_eq!(parse("ln(x)"), Expr::ln(x()));
        assert_eq!(parse("log(x)"), Expr::log(c(10.0), x()));
        assert_eq!(parse("logx"), Expr::log(c(10.0), x()));
        assert_eq!(parse("log_2_x"), Expr::log(c(2.0), x()));
        assert_eq!(parse("log_2(x)"), Expr::log(c(2.0), x()));
        assert_eq!(
            parse("log_(y+1)_(x)"),
            Expr::log(Expr::Sum(vec![y(), c(1.0)]), x()),
        );
    }

    #[test]
    fn variadic_functions() {
        assert_eq!(parse("min(y, 2, x)"), Expr::Min(vec![c(2.0), x(), y()]));
        assert_eq!(parse("max(x)"), x());
        assert_eq!(parse("mod(x, 3)"), Expr::modulo(x(), c(3.0)));
    }

    #[test]
    fn variables_are_registered() {
        let mut parser = Parser::new("x + y*sin(z) + pi");
        parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(parser.variables(), &BTreeSet::from(['x', 'y', 'z']));

        let mut variables = BTreeSet::from(['a']);
        parse_with_variables("e^t", &mut variables).unwrap();
        assert_eq!(variables, BTreeSet::from(['a', 't']));
    }

    #[test]
    fn doubled_operators() {
        assert!(parse_err("x++1").is::<kind::DoubledOperator>());
        assert!(parse_err("x+-1").is::<kind::DoubledOperator>());
        assert!(parse_err("x--1").is::<kind::DoubledOperator>());
        assert!(parse_err("x**2").is::<kind::DoubledOperator>());
        assert!(parse_err("x//2").is::<kind::DoubledOperator>());
        assert!(parse_err("x^^2").is::<kind::DoubledOperator>());
    }

    #[test]
    fn unbalanced_brackets() {
        let err = parse_err("(x+1");
        assert_eq!(err.downcast_ref(), Some(&kind::UnclosedParenthesis { opening: true }));
        assert_eq!(err.spans, vec![0..1]);

        let err = parse_err("x+1)");
        assert_eq!(err.downcast_ref(), Some(&kind::UnclosedParenthesis { opening: false }));
    }

    #[test]
    fn other_errors() {
        assert!(parse_err("").is::<kind::EmptyExpression>());
        assert!(parse_err("  ").is::<kind::EmptyExpression>());
        assert!(parse_err("x+").is::<kind::UnexpectedEof>());
        assert!(parse_err("2x").is::<kind::MissingOperator>());
        assert!(parse_err("x$y").is::<kind::InvalidCharacter>());
        assert!(parse_err("mod(x)").is::<kind::WrongArgumentCount>());
        assert!(parse_err("sin(x, y)").is::<kind::WrongArgumentCount>());
        assert!(parse_err("x,y").is::<kind::ExpectedEof>());
    }

    #[test]
    fn unknown_symbol_suggestions() {
        let err = parse_err("flor(x)");
        let kind = err.downcast_ref::<kind::UnknownSymbol>().unwrap();
        assert_eq!(kind.name, "flor");
        assert!(kind.suggestions.contains(&"floor".to_string()));

        assert!(parse_err("qz").is::<kind::UnknownSymbol>());
    }
}
