//! # jsoncomb - Parser Combinators for JSON
//!
//! Small parsers combine into larger ones without manual index bookkeeping.
//! Every parser is a pure function from a [`Cursor`] to either a value paired
//! with the cursor after it, or a [`ParseError`].
//!
//! - **Primitives**: [`text::char`] and [`text::string`] match literal input
//! - **Combinators**: `map`, `and_then`, `or`, `sequence` and friends build new
//!   parsers from existing ones
//! - **Grammar**: the [`json`] module composes both into a JSON value parser
//!
//! ```
//! use jsoncomb::json::{self, JsonValue};
//!
//! let (value, rest) = jsoncomb::parse(&json::boolean(), "true123").unwrap();
//! assert_eq!(value, JsonValue::Boolean(true));
//! assert_eq!(rest.remaining(), "123");
//! ```

pub mod and;
pub mod and_then;
pub mod between;
pub mod cursor;
pub mod error;
pub mod json;
pub mod many;
pub mod map;
pub mod map_err;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod separated_list;
pub mod sequence;
pub mod text;

pub use and::{AndExt, and};
pub use and_then::{AndThenExt, and_then};
pub use between::between;
pub use cursor::Cursor;
pub use error::{CodeLoc, ParseError};
pub use many::{many, many1};
pub use map::{MapExt, map};
pub use map_err::{MapErrExt, map_err};
pub use optional::optional;
pub use or::{OrExt, or};
pub use parser::{ParseResult, Parser, parse};
pub use position::{Position, PositionExt, Span, position};
pub use separated_list::separated_list;
pub use sequence::sequence;
