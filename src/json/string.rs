use crate::and::AndExt;
use crate::and_then::AndThenExt;
use crate::between::between;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};
use crate::sequence::sequence;
use crate::text::{char, satisfy, string};

fn hex_digit<'code>() -> impl Parser<'code, Output = u32> {
    satisfy(|c: char| c.is_ascii_hexdigit(), "hexadecimal digit")
        .map(|c: char| c.to_digit(16).unwrap_or_default())
}

/// Exactly four hex digits as one UTF-16 code unit
fn hex_quad<'code>() -> impl Parser<'code, Output = u32> {
    sequence([hex_digit(), hex_digit(), hex_digit(), hex_digit()])
        .map(|digits: Vec<u32>| digits.into_iter().fold(0, |acc, d| acc * 16 + d))
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// The `XXXX` after `\u`; a high surrogate must be followed by `\uXXXX` with
/// the matching low surrogate
fn unicode_escape<'code>() -> impl Parser<'code, Output = char> {
    hex_quad().and_then(|high: u32| {
        move |cursor: Cursor<'code>| -> ParseResult<'code, char> {
            if is_low_surrogate(high) {
                return Err(ParseError::new(
                    &cursor,
                    format!("unpaired low surrogate \\u{:04X}", high),
                ));
            }
            if !is_high_surrogate(high) {
                let ch = char::from_u32(high).ok_or_else(|| {
                    ParseError::new(&cursor, format!("invalid code point U+{:04X}", high))
                })?;
                return Ok((ch, cursor));
            }

            let (low, next) = string("\\u")
                .and(hex_quad())
                .map(|(_, low)| low)
                .parse(cursor)?;
            if !is_low_surrogate(low) {
                return Err(ParseError::new(
                    &cursor,
                    format!("expected low surrogate after \\u{:04X}", high),
                ));
            }

            let code_point = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            let ch = char::from_u32(code_point).ok_or_else(|| {
                ParseError::new(&cursor, format!("invalid code point U+{:X}", code_point))
            })?;
            Ok((ch, next))
        }
    })
}

fn simple_escape<'code>() -> impl Parser<'code, Output = char> {
    satisfy(
        |c: char| matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't'),
        "escape character",
    )
    .map(|c: char| match c {
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    })
}

/// A backslash commits to an escape; what follows it must be a valid one
fn escape<'code>() -> impl Parser<'code, Output = char> {
    char('\\').and_then(|_| {
        |cursor: Cursor<'code>| -> ParseResult<'code, char> {
            match cursor.uncons() {
                Some(('u', next)) => unicode_escape().parse(next),
                _ => simple_escape().parse(cursor),
            }
        }
    })
}

/// Any character other than a quote, a backslash, or a control character
fn unescaped<'code>() -> impl Parser<'code, Output = char> {
    satisfy(
        |c: char| c != '"' && c != '\\' && c >= '\u{20}',
        "string character",
    )
}

/// Decoded characters up to, not including, the closing quote
///
/// Unlike `many`, a broken escape or control character is an error here
/// rather than the end of the body.
struct StringBody;

impl<'code> Parser<'code> for StringBody {
    type Output = String;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut text = String::new();
        loop {
            let (ch, next) = match cursor.uncons() {
                Some(('"', _)) | None => return Ok((text, cursor)),
                Some(('\\', _)) => escape().parse(cursor)?,
                Some(_) => unescaped().parse(cursor)?,
            };
            text.push(ch);
            cursor = next;
        }
    }
}

/// Parser for a double-quoted JSON string, decoding escapes
pub fn string_literal<'code>() -> impl Parser<'code, Output = String> {
    between(char('"'), StringBody, char('"'))
}
