use crate::cursor::Cursor;
use crate::error::ParseError;

/// Resource bounds for the recursive value grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest allowed nesting of arrays and objects; `[]` at top level is depth 1
    pub max_depth: usize,
}

impl Limits {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn with_max_depth(max_depth: usize) -> Self {
        Limits { max_depth }
    }

    /// Fail at `cursor` if opening a container at `depth` would exceed the bound
    pub(crate) fn enter<'code>(
        &self,
        depth: usize,
        cursor: &Cursor<'code>,
    ) -> Result<(), ParseError<'code>> {
        if depth >= self.max_depth {
            return Err(ParseError::new(
                cursor,
                format!("maximum nesting depth of {} exceeded", self.max_depth),
            ));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::with_max_depth(Self::DEFAULT_MAX_DEPTH)
    }
}
