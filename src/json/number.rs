use crate::and::AndExt;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::many::{many, many1};
use crate::map::MapExt;
use crate::optional::optional;
use crate::or::OrExt;
use crate::parser::{ParseResult, Parser};
use crate::position::PositionExt;
use crate::text::{char, satisfy};

fn digit<'code>() -> impl Parser<'code, Output = char> {
    satisfy(|c: char| c.is_ascii_digit(), "digit")
}

/// `0`, or a non-zero digit followed by any digits
///
/// A leading `0` ends the integer part, so `012` stops after the `0`.
fn integer<'code>() -> impl Parser<'code, Output = ()> {
    let nonzero = satisfy(|c: char| matches!(c, '1'..='9'), "digit");
    char('0').map(|_| ()).or(nonzero.and(many(digit())).map(|_| ()))
}

fn fraction<'code>() -> impl Parser<'code, Output = ()> {
    char('.').and(many1(digit())).map(|_| ())
}

fn exponent<'code>() -> impl Parser<'code, Output = ()> {
    satisfy(|c: char| c == 'e' || c == 'E', "exponent")
        .and(optional(satisfy(|c: char| c == '+' || c == '-', "sign")))
        .and(many1(digit()))
        .map(|_| ())
}

/// Parser for a JSON number: `-? int frac? exp?`
pub struct NumberParser;

impl<'code> Parser<'code> for NumberParser {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let syntax = optional(char('-'))
            .and(integer())
            .and(optional(fraction()))
            .and(optional(exponent()));
        let ((_, span), next) = syntax.with_position().parse(cursor)?;

        let text = span.as_str();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok((value, next)),
            Ok(_) => Err(ParseError::new(
                &cursor,
                format!("number '{}' is out of range", text),
            )),
            Err(err) => Err(ParseError::new(
                &cursor,
                format!("invalid number '{}': {}", text, err),
            )),
        }
    }
}

/// Convenience function to create a NumberParser
pub fn number() -> NumberParser {
    NumberParser
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn number_of(input: &str) -> f64 {
        parse(&number(), input).unwrap().0
    }

    #[test]
    fn test_integers() {
        assert_eq!(number_of("0"), 0.0);
        assert_eq!(number_of("7"), 7.0);
        assert_eq!(number_of("1234567890"), 1234567890.0);
        assert_eq!(number_of("-42"), -42.0);
    }

    #[test]
    fn test_fractions_and_exponents() {
        assert_eq!(number_of("3.25"), 3.25);
        assert_eq!(number_of("-0.5"), -0.5);
        assert_eq!(number_of("1e3"), 1000.0);
        assert_eq!(number_of("1E+2"), 100.0);
        assert_eq!(number_of("25e-2"), 0.25);
        assert_eq!(number_of("6.02e23"), 6.02e23);
    }

    #[test]
    fn test_leading_zero_stops_integer() {
        let (value, cursor) = parse(&number(), "012").unwrap();

        assert_eq!(value, 0.0);
        assert_eq!(cursor.remaining(), "12");
    }

    #[test]
    fn test_incomplete_parts_are_left_unconsumed() {
        // A dot or exponent without digits is not part of the number
        let (value, cursor) = parse(&number(), "1.").unwrap();
        assert_eq!(value, 1.0);
        assert_eq!(cursor.remaining(), ".");

        let (value, cursor) = parse(&number(), "2e+").unwrap();
        assert_eq!(value, 2.0);
        assert_eq!(cursor.remaining(), "e+");
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(parse(&number(), "").is_err());
        assert!(parse(&number(), "-").is_err());
        assert!(parse(&number(), "+1").is_err());
        assert!(parse(&number(), ".5").is_err());
        assert!(parse(&number(), "abc").is_err());
    }

    #[test]
    fn test_out_of_range() {
        let err = parse(&number(), "1e400").unwrap_err();

        assert_eq!(err.to_string(), "number '1e400' is out of range");
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_stops_before_trailing_text() {
        let (value, cursor) = parse(&number(), "-12.5e1,").unwrap();

        assert_eq!(value, -125.0);
        assert_eq!(cursor.remaining(), ",");
    }
}
