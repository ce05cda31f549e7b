use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes and returns any single character
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        cursor.uncons().ok_or_else(|| {
            ParseError::new(&cursor, "expected any character, but reached end of input")
        })
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that succeeds, consuming nothing, only when the input is exhausted
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.is_empty() {
            Ok(((), cursor))
        } else {
            Err(ParseError::new(
                &cursor,
                format!("expected end of input, found '{}'", cursor.remaining()),
            ))
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

/// Parser that matches one specific character
pub struct IsChar(char);

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.uncons() {
            Some((found, next)) if found == self.0 => Ok((found, next)),
            Some((found, _)) => Err(ParseError::new(
                &cursor,
                format!("expected '{}', found '{}'", self.0, found),
            )),
            None => Err(ParseError::new(
                &cursor,
                format!("expected '{}', but reached end of input", self.0),
            )),
        }
    }
}

/// Match exactly the character `expected`
pub fn char(expected: char) -> IsChar {
    IsChar(expected)
}

/// Parser that consumes one character accepted by a predicate
///
/// `description` names the accepted class in failure messages, e.g. `digit`.
pub struct Satisfy<F> {
    predicate: F,
    description: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, description: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            description: description.into(),
        }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.uncons() {
            Some((found, next)) if (self.predicate)(found) => Ok((found, next)),
            Some((found, _)) => Err(ParseError::new(
                &cursor,
                format!("expected {}, found '{}'", self.description, found),
            )),
            None => Err(ParseError::new(
                &cursor,
                format!("expected {}, but reached end of input", self.description),
            )),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, description: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, description)
}
