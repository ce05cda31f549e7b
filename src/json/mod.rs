//! JSON grammar built from the generic combinators
//!
//! [`null`] and [`boolean`] match literals only. [`value`] handles the full
//! RFC 8259 value grammar with a nesting bound from [`Limits`], and
//! [`document`] additionally insists that nothing but whitespace follows.

pub mod compound;
pub mod limits;
pub mod literal;
pub mod number;
pub mod string;
pub mod value;

pub use compound::{
    ArrayParser, DocumentParser, ObjectParser, ValueParser, array, document, object, value,
};
pub use limits::Limits;
pub use literal::{boolean, null};
pub use number::number;
pub use string::string_literal;
pub use value::{JsonValue, Member};
