pub mod chars;
pub mod string;
pub mod whitespace;

pub use chars::{any_char, char, end_of_input, satisfy};
pub use string::string;
pub use whitespace::whitespace;
