//! Precedence climbing over the four infix operators.
//!
//! From lowest to highest precedence:
//!
//! | Level    | Operators | Associativity | Node                   |
//! | -------- | --------- | ------------- | ---------------------- |
//! | sum      | `+`, `-`  | n-ary         | [`Expr::Sum`]          |
//! | product  | `*`, `)(` | n-ary         | [`Expr::Product`]      |
//! | quotient | `/`       | right         | [`Expr::Fraction`]     |
//! | power    | `^`       | right         | [`Expr::Power`]        |
//!
//! Subtraction and negation multiply the operand by the constant `-1`.

use crate::tokenizer::TokenKind;
use super::{
    ast::Expr,
    call,
    error::Error,
    literal,
    paren,
    Parse,
    Parser,
};

/// The tokens that can start an operand.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Name,
    TokenKind::OpenParen,
    TokenKind::Sub,
];

/// Parses a sum of terms. This is the lowest precedence level.
pub fn parse_sum(input: &mut Parser) -> Result<Expr, Error> {
    let first = if input.eat(TokenKind::Sub) {
        -parse_product(input)?
    } else {
        parse_product(input)?
    };

    let mut terms = vec![first];
    loop {
        if input.eat(TokenKind::Add) {
            terms.push(parse_product(input)?);
        } else if input.eat(TokenKind::Sub) {
            terms.push(-parse_product(input)?);
        } else {
            break;
        }
    }

    Ok(if terms.len() == 1 {
        terms.remove(0)
    } else {
        Expr::sum(terms)
    })
}

/// Returns true if the parser is positioned between two bracketed groups, `)(`, where an implicit
/// multiplication is inserted.
fn at_implicit_mul(input: &Parser) -> bool {
    input.peek_kind() == Some(TokenKind::OpenParen)
        && input.prev_token().map_or(false, |token| token.kind == TokenKind::CloseParen)
}

/// Parses a product of factors.
fn parse_product(input: &mut Parser) -> Result<Expr, Error> {
    let mut factors = vec![parse_quotient(input)?];
    while input.eat(TokenKind::Mul) || at_implicit_mul(input) {
        factors.push(parse_quotient(input)?);
    }

    Ok(if factors.len() == 1 {
        factors.remove(0)
    } else {
        Expr::product(factors)
    })
}

/// Parses a quotient. `a/b/c` is read as `a/(b/c)`.
fn parse_quotient(input: &mut Parser) -> Result<Expr, Error> {
    let numerator = parse_power(input)?;
    if input.eat(TokenKind::Div) {
        let denominator = parse_quotient(input)?;
        Ok(Expr::fraction(numerator, denominator))
    } else {
        Ok(numerator)
    }
}

/// Parses a power, or a negated power. `a^b^c` is read as `a^(b^c)`.
fn parse_power(input: &mut Parser) -> Result<Expr, Error> {
    if input.eat(TokenKind::Sub) {
        return Ok(-parse_power(input)?);
    }

    let base = parse_atom(input)?;
    if input.eat(TokenKind::Exp) {
        let exponent = parse_power(input)?;
        Ok(Expr::power(base, exponent))
    } else {
        Ok(base)
    }
}

/// Parses a number, a name (variable, constant, or function application), or a bracketed group.
pub fn parse_atom(input: &mut Parser) -> Result<Expr, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Number => literal::parse_number(&token),
        TokenKind::Name => call::parse_name(input, &token),
        TokenKind::OpenParen => paren::parse_group(input),
        _ => Err(input.unexpected(&token, OPERAND_START)),
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_sum(input)
    }
}
