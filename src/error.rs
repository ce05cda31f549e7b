use crate::cursor::Cursor;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    /// Characters from the start of `line`
    pub char_offset: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Character position in `code` where the parser gave up
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn at(cursor: &Cursor<'code>) -> Self {
        Self::new(cursor.source(), cursor.position())
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate the line number and the character offset within that line
    ///
    /// Offsets count characters, not display columns: tabs and wide glyphs are
    /// one character each.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, ch) in self.code.chars().enumerate() {
            if i >= self.loc {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            char_offset: self.loc - line_start,
        }
    }

    /// Up to two lines of context on each side of the failing line, with a
    /// pointer under the failing character
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let content = content.strip_suffix('\r').unwrap_or(content);
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.char_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// The single failure kind every parser reports
///
/// `Display` renders just the message. Use [`ParseError::report`] for the
/// multi-line rendering with line numbers and surrounding context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError<'code> {
    message: Cow<'static, str>,
    loc: CodeLoc<'code>,
}

impl<'code> ParseError<'code> {
    /// Create a failure located at `cursor`
    pub fn new(cursor: &Cursor<'code>, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            message: message.into(),
            loc: CodeLoc::at(cursor),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// Character position where this failure occurred
    pub fn position(&self) -> usize {
        self.loc.position()
    }

    pub fn report(&self) -> Report<'_, 'code> {
        Report { error: self }
    }
}

/// Display adapter rendering a [`ParseError`] with its location and context
pub struct Report<'a, 'code> {
    error: &'a ParseError<'code>,
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = &self.error.loc;
        let pos = loc.readable_position();
        writeln!(
            f,
            "Syntax error at line {}, offset {} (absolute position: {}): {}",
            pos.line,
            pos.char_offset,
            loc.position(),
            self.error.message
        )?;
        writeln!(f)?;
        for line in loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
