use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// One or more `parser` matches with `separator` between each pair
///
/// `"1,2,3"` with `char(',')` yields `['1', '2', '3']`. A separator commits to
/// another item, so `"1,2,"` fails at the end instead of stopping after `2`.
/// Whitespace is left to the caller.
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, new_cursor)) => new_cursor,
                Err(_) => break,
            };

            let (value, next_cursor) = self.parser.parse(after_separator)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
