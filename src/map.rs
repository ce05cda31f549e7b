use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::parser::parse;
    use crate::text::{char, string};

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Keyword(String),
        Special(char),
    }

    #[test]
    fn test_map_char_to_digit() {
        let parser = char('5').map(|ch| ch.to_digit(10));

        let (digit, cursor) = parse(&parser, "5").unwrap();
        assert_eq!(digit, Some(5));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_keeps_cursor_transition() {
        let plain = string("true");
        let mapped = string("true").map(|s| s.len());

        let (_, plain_cursor) = parse(&plain, "true!").unwrap();
        let (len, mapped_cursor) = parse(&mapped, "true!").unwrap();
        assert_eq!(len, 4);
        assert_eq!(plain_cursor, mapped_cursor);
    }

    #[test]
    fn test_map_chaining() {
        let parser = char('7')
            .map(|ch| ch.to_digit(10).unwrap_or(0))
            .map(|digit| digit * 6)
            .map(|n| format!("Answer: {}", n));

        let (result, _) = parse(&parser, "7").unwrap();
        assert_eq!(result, "Answer: 42");
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let letter = char('A').map(Token::Letter);
        let keyword = string("let").map(Token::Keyword);
        let special = char('!').map(Token::Special);
        let parser = letter.or(keyword).or(special);

        let (token, cursor) = parse(&parser, "let x").unwrap();
        assert_eq!(token, Token::Keyword("let".to_string()));
        assert_eq!(cursor.remaining(), " x");
    }

    #[test]
    fn test_map_preserves_errors() {
        let unmapped = parse(&char('A'), "xyz").unwrap_err();
        let mapped = parse(&char('A').map(|ch| ch as u32), "xyz").unwrap_err();

        assert_eq!(unmapped, mapped);
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(char('9'), |ch| ch.is_ascii_digit());

        let (is_digit, _) = parse(&parser, "9").unwrap();
        assert!(is_digit);
    }
}
