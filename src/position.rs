use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A stretch of consumed input
///
/// `start` and `end` are character positions; `text` is the consumed slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
    text: &'code str,
}

impl<'code> Span<'code> {
    /// The span covering everything consumed between two cursors over the same input
    pub fn between(from: &Cursor<'code>, to: &Cursor<'code>) -> Self {
        Span {
            start: from.position(),
            end: to.position(),
            text: &from.source()[from.byte_offset()..to.byte_offset()],
        }
    }

    /// Get the length of the span in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        self.text
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let span = Span::between(&cursor, &new_cursor);
        Ok(((output, span), new_cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
