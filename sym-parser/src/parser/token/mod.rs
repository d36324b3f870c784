pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to request token kinds as a type.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                // only read for tokens whose text matters, such as numbers and names
                #[allow(dead_code)]
                pub(crate) lexeme: String,
                pub(crate) span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme.to_owned(),
                            span: token.span,
                        })
                    } else {
                        Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    OpenParen
    CloseParen
    Number
    Name
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn tokens_keep_lexeme_and_span() {
        let mut parser = Parser::new("( 12.5 x )").unwrap();

        let open = parser.try_parse::<OpenParen>().unwrap();
        assert_eq!((open.lexeme.as_str(), open.span), ("(", 0..1));

        let number = parser.try_parse::<Number>().unwrap();
        assert_eq!((number.lexeme.as_str(), number.span), ("12.5", 2..6));

        let name = parser.try_parse::<Name>().unwrap();
        assert_eq!((name.lexeme.as_str(), name.span), ("x", 7..8));

        let close = parser.try_parse::<CloseParen>().unwrap();
        assert_eq!((close.lexeme.as_str(), close.span), (")", 9..10));
    }

    #[test]
    fn wrong_token_is_not_consumed() {
        let mut parser = Parser::new("x").unwrap();
        let err = parser.try_parse::<OpenParen>().unwrap_err();
        assert_eq!(err.to_string(), "unexpected token");
        assert_eq!(parser.try_parse::<Name>().unwrap().lexeme, "x");
    }
}
