use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both attempts start from the same cursor, so whatever the first parser
/// consumed before failing is forgotten. The first failure is discarded and the
/// second parser's outcome is returned as is, error included.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::text::{char, string};

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(char('a'), char('b'));

        let (ch, cursor) = parse(&parser, "abc").unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.remaining(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(char('a'), char('b'));

        let (ch, cursor) = parse(&parser, "bcd").unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.remaining(), "cd");
    }

    #[test]
    fn test_or_both_fail_reports_second() {
        let parser = or(char('a'), char('b'));

        let err = parse(&parser, "xyz").unwrap_err();
        assert_eq!(err.to_string(), "expected 'b', found 'x'");
    }

    #[test]
    fn test_or_second_sees_original_input() {
        // "fals" is consumed by the first branch before it fails on 'y'
        let parser = string("falsy").or(string("false"));

        let (word, cursor) = parse(&parser, "false").unwrap();
        assert_eq!(word, "false");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_or_matches_each_branch_alone() {
        let first = string("true");
        let second = string("false");
        let parser = string("true").or(string("false"));

        for input in ["true", "false", "maybe", "", "truex"] {
            let expected = parse(&first, input).or_else(|_| parse(&second, input));
            assert_eq!(parse(&parser, input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_or_method_chain() {
        let parser = char('a').or(char('b')).or(char('c')).or(char('d'));

        let (ch, cursor) = parse(&parser, "d").unwrap();
        assert_eq!(ch, 'd');
        assert!(cursor.is_empty());
    }
}
