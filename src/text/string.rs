use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::map_err::MapErrExt;
use crate::parser::{ParseResult, Parser};
use crate::sequence::sequence;
use crate::text::chars::char;
use std::borrow::Cow;

/// Parser that matches an exact literal, one `char` parser per character
pub struct IsString {
    expected: Cow<'static, str>,
}

impl IsString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsString {
    type Output = String;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // A mismatch anywhere inside the literal is reported against the whole
        // literal and the text where the match started.
        sequence(self.expected.chars().map(char))
            .map(|chars: Vec<char>| chars.into_iter().collect::<String>())
            .map_err(|inner: ParseError<'code>| {
                ParseError::new(
                    &cursor,
                    format!(
                        "expected '{}', but found '{}' ({})",
                        self.expected,
                        cursor.remaining(),
                        inner
                    ),
                )
            })
            .parse(cursor)
    }
}

/// Match exactly the text `expected`
pub fn string(expected: impl Into<Cow<'static, str>>) -> IsString {
    IsString::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_exact_match() {
        let (result, cursor) = parse(&string("hello"), "hello").unwrap();

        assert_eq!(result, "hello");
        assert!(cursor.is_empty());
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, cursor) = parse(&string("true"), "true123").unwrap();

        assert_eq!(result, "true");
        assert_eq!(cursor.remaining(), "123");
    }

    #[test]
    fn test_unicode_string() {
        let (result, cursor) = parse(&string("こんにちは"), "こんにちは世界").unwrap();

        assert_eq!(result, "こんにちは");
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), "世界");
    }

    #[test]
    fn test_empty_string() {
        let (result, cursor) = parse(&string(""), "hello").unwrap();

        assert_eq!(result, "");
        // Cursor should not advance for empty string
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_mismatch_names_whole_literal() {
        let err = parse(&string("hello"), "help me").unwrap_err();

        assert_eq!(
            err.to_string(),
            "expected 'hello', but found 'help me' (expected 'l', found 'p')"
        );
        // Reported where the literal started, not where it broke
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_insufficient_input() {
        let err = parse(&string("null"), "nul").unwrap_err();

        assert_eq!(
            err.to_string(),
            "expected 'null', but found 'nul' (expected 'l', but reached end of input)"
        );
    }

    #[test]
    fn test_empty_input() {
        let err = parse(&string("false"), "").unwrap_err();

        assert!(err.to_string().starts_with("expected 'false', but found ''"));
        assert!(err.to_string().contains("reached end of input"));
    }

    #[test]
    fn test_case_sensitive() {
        let err = parse(&string("true"), "True").unwrap_err();

        assert!(err.to_string().contains("expected 't', found 'T'"));
    }

    #[test]
    fn test_failure_is_repeatable() {
        let parser = string("false");

        let first = parse(&parser, "maybe");
        let second = parse(&parser, "maybe");
        assert!(first.is_err());
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_located_at_start_of_literal() {
        let cursor = Cursor::new("[nul]");
        let (_, cursor) = cursor.uncons().unwrap();

        let err = string("null").parse(cursor).unwrap_err();
        assert_eq!(err.position(), 1);
        assert!(err.to_string().contains("but found 'nul]'"));
    }

    #[test]
    fn test_keywords() {
        for keyword in ["null", "true", "false", "->", "::", "température", "🚀🦀"] {
            let (result, cursor) = parse(&string(keyword), keyword).unwrap();
            assert_eq!(result, keyword, "Failed for keyword: {}", keyword);
            assert!(cursor.is_empty());
        }
    }
}
