use crate::tokenizer::TokenKind;
use super::{ast::Expr, error::Error, expr::parse_sum, Parser};

/// Parses the rest of a bracketed group, after its opening bracket. The group itself does not
/// produce a node; its contents are returned directly.
pub fn parse_group(input: &mut Parser) -> Result<Expr, Error> {
    let inner = parse_sum(input)?;
    input.expect(&[TokenKind::CloseParen])?;
    Ok(inner)
}

/// Parses a bracketed, comma-separated list of at least one argument, including the brackets.
pub fn parse_args(input: &mut Parser) -> Result<Vec<Expr>, Error> {
    input.expect(&[TokenKind::OpenParen])?;
    let mut args = vec![parse_sum(input)?];
    loop {
        let token = input.expect(&[TokenKind::Comma, TokenKind::CloseParen])?;
        if token.kind == TokenKind::CloseParen {
            return Ok(args);
        }
        args.push(parse_sum(input)?);
    }
}
