pub mod ast;
pub mod error;
pub mod token;

use error::{kind, Error, ErrorKind};
use log::debug;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The default maximum nesting depth of parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// The default maximum depth of the expression tree, counted with parentheses removed.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 1024;

/// Options that control how the [`Parser`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// The maximum number of parentheses that may be open at the same time. Input nested deeper
    /// than this fails with [`kind::NestingTooDeep`] instead of exhausting the stack.
    pub max_depth: usize,

    /// The maximum depth of the resulting tree, where a number or name has depth 1 and each
    /// operator adds one level above the deeper of its operands. A chain of `n` operators such as
    /// `x + x + ... + x` is `n + 1` levels deep. Deeper input fails with
    /// [`kind::ExpressionTooDeep`], since every consumer of the tree walks it recursively.
    pub max_tree_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// source code into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source code, used to point at its end.
    source_len: usize,

    /// The number of parentheses that are currently open.
    depth: usize,

    /// The options this parser was created with.
    options: ParserOptions,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source, with the default options.
    ///
    /// Returns an error if the source cannot be tokenized.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Self::with_options(source, ParserOptions::default())
    }

    /// Create a new parser for the given source, with the given options.
    ///
    /// Returns an error if the source cannot be tokenized.
    pub fn with_options(source: &'source str, options: ParserOptions) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
            source_len: source.len(),
            depth: 0,
            options,
        })
    }

    /// Returns the options this parser was created with.
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Move the cursor to the previous token. This function is a no-op if the cursor is at the
    /// beginning of the stream.
    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
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

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Parses a value from the given stream of tokens without consuming anything, whether parsing
    /// succeeds or not.
    pub fn try_peek<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        let result = T::parse(self);
        self.cursor = start;
        result
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(vec![self.eof_span()], kind::EmptyExpression));
        }

        let value = T::parse(self)?;
        match self.current_token().map(|token| token.kind) {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            Some(_) => Err(self.error(kind::ExpectedEof)),
        }
    }

    /// Runs the given parsing function one level of parentheses deeper. The `open` span should
    /// point at the opening parenthesis, and is reported if the nesting limit is exceeded.
    pub(crate) fn nested<T, F>(&mut self, open: Range<usize>, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        if self.depth >= self.options.max_depth {
            debug!("parentheses nested deeper than {} levels at {:?}", self.options.max_depth, open);
            return Err(Error::new(vec![open], kind::NestingTooDeep {
                max_depth: self.options.max_depth,
            }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}
