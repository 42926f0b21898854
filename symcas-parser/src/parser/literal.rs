use crate::tokenizer::Token;
use super::{ast::Expr, error::{kind, Error}};

/// Converts a number token into a [`Expr::Constant`].
pub fn parse_number(token: &Token) -> Result<Expr, Error> {
    token.lexeme
        .parse::<f64>()
        .map(Expr::Constant)
        .map_err(|_| Error::new(vec![token.span.clone()], kind::InvalidNumber {
            lexeme: token.lexeme.to_string(),
        }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::tokenizer::TokenKind;

    fn number(lexeme: &str) -> Result<Expr, Error> {
        parse_number(&Token { span: 0..lexeme.len(), kind: TokenKind::Number, lexeme })
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(number("42").unwrap(), Expr::Constant(42.0));
        assert_eq!(number("0.125").unwrap(), Expr::Constant(0.125));
        assert_eq!(number(".5").unwrap(), Expr::Constant(0.5));
        assert_eq!(number("3.").unwrap(), Expr::Constant(3.0));
    }

    #[test]
    fn invalid() {
        assert!(number("1.2.3").unwrap_err().is::<kind::InvalidNumber>());
    }
}
