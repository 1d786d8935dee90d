/*!
## Rust Machine Module

This Rust module executes BASIC directly from the program text.
There is no compiled form; the cursor into the text is the program counter.

*/

/// Byte offset into program text.
pub type Address = usize;

mod expr;
mod runtime;
mod source;
mod stack;
mod statement;
mod var;

pub use expr::{divide, Relation};
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::{GOSUB_DEPTH, PROMPT, XOFF, XON};
pub use source::Source;
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
