use super::{Address, Source, Stack, Var};
use crate::error;
use crate::lang::{Error, ErrorCode, LineNumber, Scanner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Pending `GOSUB` limit.
pub const GOSUB_DEPTH: usize = 32;

/// Sent when a `PRINT` is ended by `:` instead of a newline.
pub const XOFF: char = '\u{13}';

/// Sent after the input prompt.
pub const XON: char = '\u{11}';

/// Shown when `INPUT` needs a new line.
pub const PROMPT: &str = "?";

/// ## Events
///
/// Everything the runtime needs from the outside world is returned
/// from [`Runtime::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The program ended; keep returning this.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    /// Text for the terminal.
    Print(String),
    /// `LIST` output.
    List(String),
    /// Statement about to execute, when tracing.
    Trace(String),
    /// Show the prompt and send the line to [`Runtime::enter`].
    Input(String),
    /// A fatal error. The program has stopped.
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum State {
    Running,
    Input,
    Stopped,
}

/// ## BASIC runtime
///
/// Executes the program text directly. The cursor in `cur` is the only
/// thing deciding what runs next.
pub struct Runtime {
    pub(super) source: Source,
    pub(super) cur: Scanner,
    pub(super) var: Var,
    pub(super) stack: Stack<Address>,
    pub(super) input: Option<Scanner>,
    pub(super) resume_input: bool,
    pub(super) column: usize,
    pub(super) output: String,
    pub(super) events: VecDeque<Event>,
    pub(super) line: LineNumber,
    pub(super) state: State,
    pub(super) trace: bool,
    pub(super) rng: StdRng,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new("")
    }
}

impl Runtime {
    pub fn new(program: &str) -> Runtime {
        let source = Source::new(program);
        Runtime {
            cur: source.scanner(),
            source,
            var: Var::new(),
            stack: Stack::new(
                GOSUB_DEPTH,
                ErrorCode::TooManyGosubs,
                ErrorCode::ReturnWithoutGosub,
            ),
            input: None,
            resume_input: false,
            column: 0,
            output: String::new(),
            events: VecDeque::new(),
            line: None,
            state: State::Running,
            trace: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Emit an [`Event::Trace`] before every statement.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Make `RND` repeatable.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Number of `GOSUB`s waiting for a `RETURN`.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    /// Supply the line requested by [`Event::Input`].
    pub fn enter(&mut self, line: &str) -> bool {
        if self.state != State::Input {
            return false;
        }
        let mut text = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        text.push('\n');
        self.input = Some(Scanner::new(Arc::from(text)));
        self.state = State::Running;
        true
    }

    /// Stop the program with a BREAK error.
    pub fn interrupt(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        self.flush();
        self.state = State::Stopped;
        self.resume_input = false;
        self.events.push_back(Event::Error(error!(Break, self.line)));
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            match self.state {
                State::Stopped => return Event::Stopped,
                State::Input => return Event::Input(PROMPT.to_string()),
                State::Running => {}
            }
            if let Err(error) = self.step() {
                self.state = State::Stopped;
                self.resume_input = false;
                self.emit(Event::Error(error.in_line_number(self.line)));
            }
            self.flush();
        }
        match self.events.pop_front() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    /// Find the next statement and run it.
    fn step(&mut self) -> Result<()> {
        if self.resume_input {
            self.resume_input = false;
            return self.input();
        }
        while !self.cur.peek().is_ascii_uppercase() {
            if self.cur.at_end() {
                self.state = State::Stopped;
                return Ok(());
            }
            self.cur.advance();
        }
        self.line = self.source.line_number_of(self.cur.pos());
        self.statement()
    }

    /// Queue an event behind any text already printed.
    pub(super) fn emit(&mut self, event: Event) {
        self.flush();
        self.events.push_back(event);
    }

    fn flush(&mut self) {
        if !self.output.is_empty() {
            let s = std::mem::take(&mut self.output);
            self.events.push_back(Event::Print(s));
        }
    }
}
