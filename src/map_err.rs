use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that rewrites the failure of a parser
///
/// Successes pass through untouched.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError<'code>) -> ParseError<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError<'code>) -> ParseError<'code>,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError<'code>) -> ParseError<'code>,
{
    MapErr::new(parser, mapper)
}
