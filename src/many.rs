use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Apply `parser` until it fails, collecting outputs; returns the cursor after
/// the last success
fn repeat<'code, P>(
    parser: &P,
    mut cursor: Cursor<'code>,
    results: &mut Vec<P::Output>,
) -> Cursor<'code>
where
    P: Parser<'code>,
{
    // Zero or more, so the final failure is not propagated
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        // A parser that succeeds without consuming would repeat forever
        if next_cursor.position() == cursor.position() {
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    cursor
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];
        let cursor = repeat(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
