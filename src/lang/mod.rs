/*!
# Rust Language Module

This Rust module provides the scanning primitives, statement keywords
and error values of the BASIC language. There is no tokenizer: statements
are recognized directly in the program text.

*/

pub type LineNumber = Option<u16>;

#[macro_use]
mod error;
mod scan;
mod word;

pub use error::Error;
pub use error::ErrorCode;
pub use scan::{keyword_match, line_number, Scanner, NUL};
pub use word::Word;
