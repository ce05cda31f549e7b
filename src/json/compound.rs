use crate::and::AndExt;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::json::limits::Limits;
use crate::json::literal::{boolean, null};
use crate::json::number::number;
use crate::json::string::string_literal;
use crate::json::value::{JsonValue, Member};
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::{ParseResult, Parser};
use crate::separated_list::separated_list;
use crate::text::{char, end_of_input, whitespace};

/// Parser for any JSON value, with surrounding whitespace skipped
///
/// The first character picks the grammar: `[`, `{`, `"`, `-` or a digit,
/// `n`, and `t` or `f`. Once picked, that grammar's failure is the one reported.
#[derive(Debug, Clone, Copy)]
pub struct ValueParser {
    limits: Limits,
    depth: usize,
}

impl ValueParser {
    pub fn new(limits: Limits) -> Self {
        Self::nested(limits, 0)
    }

    fn nested(limits: Limits, depth: usize) -> Self {
        ValueParser { limits, depth }
    }

    fn parse_token<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, JsonValue> {
        match cursor.uncons() {
            Some(('[', _)) => ArrayParser {
                limits: self.limits,
                depth: self.depth,
            }
            .parse(cursor),
            Some(('{', _)) => ObjectParser {
                limits: self.limits,
                depth: self.depth,
            }
            .parse(cursor),
            Some(('"', _)) => string_literal().map(JsonValue::String).parse(cursor),
            Some(('-' | '0'..='9', _)) => number().map(JsonValue::Number).parse(cursor),
            Some(('n', _)) => null().parse(cursor),
            Some(('t' | 'f', _)) => boolean().parse(cursor),
            Some((found, _)) => Err(ParseError::new(
                &cursor,
                format!("expected a JSON value, found '{}'", found),
            )),
            None => Err(ParseError::new(
                &cursor,
                "expected a JSON value, but reached end of input",
            )),
        }
    }
}

impl<'code> Parser<'code> for ValueParser {
    type Output = JsonValue;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = whitespace().parse(cursor)?;
        let (value, cursor) = self.parse_token(cursor)?;
        let (_, cursor) = whitespace().parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Parser for `[ value, ... ]`
#[derive(Debug, Clone, Copy)]
pub struct ArrayParser {
    limits: Limits,
    depth: usize,
}

impl<'code> Parser<'code> for ArrayParser {
    type Output = JsonValue;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, after_open) = char('[').parse(cursor)?;
        self.limits.enter(self.depth, &cursor)?;

        let element = ValueParser::nested(self.limits, self.depth + 1);
        let empty = whitespace().and(char(']')).map(|_| Vec::new());
        let elements = separated_list(element, char(','))
            .and(char(']'))
            .map(|(items, _)| items);

        empty
            .or(elements)
            .map(JsonValue::Array)
            .parse(after_open)
    }
}

/// Parser for `{ "key": value, ... }`
#[derive(Debug, Clone, Copy)]
pub struct ObjectParser {
    limits: Limits,
    depth: usize,
}

impl<'code> Parser<'code> for ObjectParser {
    type Output = JsonValue;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, after_open) = char('{').parse(cursor)?;
        self.limits.enter(self.depth, &cursor)?;

        let member = whitespace()
            .and(string_literal())
            .and(whitespace())
            .and(char(':'))
            .and(ValueParser::nested(self.limits, self.depth + 1))
            .map(|((((_, key), _), _), value)| (key, value));
        let empty = whitespace().and(char('}')).map(|_| Vec::<Member>::new());
        let members = separated_list(member, char(','))
            .and(char('}'))
            .map(|(members, _)| members);

        empty
            .or(members)
            .map(JsonValue::Object)
            .parse(after_open)
    }
}

/// A value that must use up the whole input
///
/// Anything but whitespace after the value is a failure located at the
/// first leftover character.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser {
    value: ValueParser,
}

impl<'code> Parser<'code> for DocumentParser {
    type Output = JsonValue;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.value
            .and(end_of_input())
            .map(|(value, _)| value)
            .parse(cursor)
    }
}

/// Any JSON value with default limits
pub fn value() -> ValueParser {
    ValueParser::new(Limits::default())
}

pub fn array() -> ArrayParser {
    ArrayParser {
        limits: Limits::default(),
        depth: 0,
    }
}

pub fn object() -> ObjectParser {
    ObjectParser {
        limits: Limits::default(),
        depth: 0,
    }
}

/// A complete JSON text: one value and nothing after it
pub fn document(limits: Limits) -> DocumentParser {
    DocumentParser {
        value: ValueParser::new(limits),
    }
}
