use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs a fixed list of parsers one after another
///
/// Each parser starts where the previous one stopped. The outputs are collected
/// in order; the first failure aborts the whole sequence.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Sequence parser
///
/// # Example
/// ```
/// use jsoncomb::parser::parse;
/// use jsoncomb::sequence::sequence;
/// use jsoncomb::text::char;
///
/// let parser = sequence("abc".chars().map(char));
/// let (chars, cursor) = parse(&parser, "abcd").unwrap();
/// assert_eq!(chars, vec!['a', 'b', 'c']);
/// assert_eq!(cursor.remaining(), "d");
/// ```
pub fn sequence<'code, I>(parsers: I) -> Sequence<I::Item>
where
    I: IntoIterator,
    I::Item: Parser<'code>,
{
    Sequence::new(parsers.into_iter().collect())
}
