/// Immutable snapshot of how far a parse has progressed through its input
///
/// A cursor remembers the whole source together with the number of characters
/// consumed so far. Advancing never mutates a cursor; it returns a new one, so a
/// saved cursor can always be handed to another parser to retry from that point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Characters consumed from `source`
    position: usize,
    /// Byte offset of the first unconsumed character in `source`
    offset: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
            offset: 0,
        }
    }

    /// Split off the next character
    ///
    /// Returns `None` once the input is exhausted. Running out of input is not an
    /// error here; the calling parser decides whether it should be one.
    pub fn uncons(self) -> Option<(char, Self)> {
        let ch = self.remaining().chars().next()?;
        let next = Cursor {
            source: self.source,
            position: self.position + 1,
            offset: self.offset + ch.len_utf8(),
        };
        Some((ch, next))
    }

    /// Number of characters consumed from the start of the input
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset into `source()` matching `position()`
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed suffix of the input
    pub fn remaining(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// The full input this cursor was created from
    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_zero() {
        let cursor = Cursor::new("null");

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), "null");
        assert_eq!(cursor.source(), "null");
        assert!(!cursor.is_empty());
    }

    #[test]
    fn test_uncons_advances_by_one() {
        let cursor = Cursor::new("ab");

        let (ch, cursor) = cursor.uncons().unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), "b");

        let (ch, cursor) = cursor.uncons().unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.position(), 2);
        assert!(cursor.is_empty());
        assert!(cursor.uncons().is_none());
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");

        assert!(cursor.is_empty());
        assert!(cursor.uncons().is_none());
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        let cursor = Cursor::new("é🦀x");

        let (_, cursor) = cursor.uncons().unwrap();
        let (ch, cursor) = cursor.uncons().unwrap();
        assert_eq!(ch, '🦀');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.byte_offset(), "é🦀".len());
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_copy_independence() {
        let start = Cursor::new("abcd");
        let saved = start;

        let (_, advanced) = start.uncons().unwrap();
        assert_eq!(advanced.remaining(), "bcd");

        // Advancing never touches earlier snapshots
        assert_eq!(saved.remaining(), "abcd");
        assert_eq!(start.position(), 0);

        let (ch, _) = saved.uncons().unwrap();
        assert_eq!(ch, 'a');
    }

    #[test]
    fn test_remaining_is_suffix_of_source() {
        let mut cursor = Cursor::new("true123");
        while let Some((_, next)) = cursor.uncons() {
            assert!(next.source().ends_with(next.remaining()));
            assert_eq!(
                next.source().chars().count() - next.remaining().chars().count(),
                next.position()
            );
            cursor = next;
        }
        assert!(cursor.is_empty());
    }
}
