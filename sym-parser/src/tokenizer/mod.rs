pub mod token;

use crate::parser::error::{kind, Error};
use log::trace;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer, whitespace included.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens produced by the tokenizer.
/// This allows the parser to backtrack and peek freely. The end of the array plays the role of the
/// end-of-input token.
///
/// Any character that no token accepts, and any malformed decimal literal such as `3.` or `.5`,
/// fails the whole tokenization.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut raw = Vec::new();

    while let Some(result) = lexer.next() {
        raw.push(Token {
            span: lexer.span(),
            // logos reports characters matching no pattern as `Err(())`
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    if let Some(index) = raw.iter().position(|token| token.kind == TokenKind::Symbol) {
        return Err(lex_error(&raw, index));
    }

    let tokens = raw.into_iter()
        .filter(|token| !token.is_whitespace())
        .collect::<Vec<_>>();
    trace!("tokenized {} bytes into {} tokens", input.len(), tokens.len());

    Ok(tokens.into_boxed_slice())
}

/// Builds the error for the unrecognized token at the given index. A stray `.` directly touching
/// a number is reported as a malformed literal covering both.
fn lex_error(tokens: &[Token], index: usize) -> Error {
    let token = &tokens[index];

    if token.lexeme == "." {
        let before = index.checked_sub(1)
            .and_then(|i| tokens.get(i))
            .filter(|prev| prev.kind == TokenKind::Number && prev.span.end == token.span.start);
        let after = tokens.get(index + 1)
            .filter(|next| next.kind == TokenKind::Number && next.span.start == token.span.end);

        if before.is_some() || after.is_some() {
            let start = before.map_or(token.span.start, |prev| prev.span.start);
            let end = after.map_or(token.span.end, |next| next.span.end);
            return Error::new(vec![start..end], kind::MalformedNumber);
        }
    }

    Error::new(vec![token.span.clone()], kind::UnexpectedCharacter {
        character: token.lexeme.chars().next().unwrap_or_default(),
    })
}
