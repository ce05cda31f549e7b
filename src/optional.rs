use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that turns a failure into `None`
///
/// On failure nothing is consumed and the cursor is returned as it was given.
///
/// Example:
/// ```
/// use jsoncomb::optional::optional;
/// use jsoncomb::parser::parse;
/// use jsoncomb::text::char;
///
/// let (sign, cursor) = parse(&optional(char('-')), "-12").unwrap();
/// assert_eq!(sign, Some('-'));
/// assert_eq!(cursor.remaining(), "12");
///
/// let (sign, cursor) = parse(&optional(char('-')), "12").unwrap();
/// assert_eq!(sign, None);
/// assert_eq!(cursor.remaining(), "12");
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next_cursor)) => Ok((Some(value), next_cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}
