use crate::cursor::Cursor;
use crate::error::ParseError;

/// Outcome of running a parser: the produced value with the cursor just past
/// what was consumed, or the failure that stopped it
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), ParseError<'code>>;

/// Core parser trait for parser combinators
///
/// Parsers are reusable and hold no mutable state: running the same parser on
/// the same cursor always produces the same outcome.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. The caller's cursor is never modified.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Plain functions and closures over cursors are parsers too
impl<'code, F, O> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self(cursor)
    }
}

/// Run `parser` from the start of `input`
///
/// Trailing input after a successful parse is left in the returned cursor;
/// whether that counts as an error is up to the caller.
pub fn parse<'code, P>(parser: &P, input: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    parser.parse(Cursor::new(input))
}
