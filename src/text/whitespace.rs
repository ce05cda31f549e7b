use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::text::chars::satisfy;

/// Returns true for the four insignificant whitespace characters between tokens
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Skip zero or more whitespace characters; never fails
pub fn whitespace<'code>() -> impl Parser<'code, Output = ()> {
    many(satisfy(is_whitespace, "whitespace")).map(|_| ())
}
