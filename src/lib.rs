//! # Tiny BASIC
//!
//! A line-numbered BASIC that runs straight from the program text.
//! There is no tokenizer and nothing is compiled: the interpreter keeps a
//! cursor into the text and reads each statement as it reaches it.
//!
//! Run a program with `tinybasic program.bas`. Add `--trace` to see each
//! statement as it executes.
//! ```text
//! 10 PRINT "HELLO WORLD"
//! 20 END
//! ```
//!
//! The engine is usable on its own. Feed it a program and turn its
//! events into I/O:
//! ```
//! use tinybasic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::new("10 LET A=3\n20 PRINT A\n30 END\n");
//! let mut out = String::new();
//! loop {
//!     match runtime.execute(100) {
//!         Event::Print(s) => out.push_str(&s),
//!         Event::Stopped => break,
//!         _ => {}
//!     }
//! }
//! assert_eq!(out, "3\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
