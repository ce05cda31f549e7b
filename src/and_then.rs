use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that chooses its continuation from the value just parsed
///
/// The first parser runs; only if it succeeds is its value handed to
/// `continuation`, and the returned parser resumes exactly where the first one
/// stopped. Failure of either step ends the whole chain.
pub struct AndThen<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        AndThen {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.continuation)(value).parse(cursor)
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'code, P, F, Q>(parser: P, continuation: F) -> AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    AndThen::new(parser, continuation)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, continuation: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        AndThen::new(self, continuation)
    }
}

/// Implement AndThenExt for all parsers
impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
