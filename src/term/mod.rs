extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime, XON};
use crate::{error, lang::Error};
use ansi_term::Style;
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run a line-numbered Tiny BASIC program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program source file
    program: Option<PathBuf>,

    /// Print each statement before it executes
    #[arg(short, long)]
    trace: bool,
}

pub fn main() {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let status = match main_loop(&args, interrupted) {
        Ok(status) => status,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };
    std::process::exit(status);
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let source = match load(args.program.as_deref()) {
        Ok(source) => source,
        Err(error) => {
            report(&error);
            return Ok(error.exit_status());
        }
    };
    let mut runtime = Runtime::new(&source);
    runtime.set_trace(args.trace);
    let console = Console::new()?;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Print(s) | Event::List(s) => console.write(&s)?,
            Event::Trace(s) => {
                eprintln!("{}", Style::new().dimmed().paint(format!("TRACE: {}", s)));
            }
            Event::Input(prompt) => match console.read_line(&prompt)? {
                Some(line) => {
                    runtime.enter(&line);
                }
                None => runtime.interrupt(),
            },
            Event::Error(error) => {
                report(&error);
                return Ok(error.exit_status());
            }
            Event::Stopped => return Ok(0),
        }
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn load(filename: Option<&Path>) -> Result<String, Error> {
    let filename = match filename {
        Some(filename) => filename,
        None => return Err(error!(CannotLoadSource; "NO PROGRAM FILE GIVEN")),
    };
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(source),
        Err(error) => Err(error!(CannotLoadSource; format!("{}: {}", filename.display(), error))),
    }
}

/// Line editing when a person is typing, plain reads when input is piped.
enum Console {
    Editor(Interface<DefaultTerminal>),
    Plain,
}

impl Console {
    fn new() -> std::io::Result<Console> {
        if !std::io::stdin().is_terminal() {
            return Ok(Console::Plain);
        }
        let interface = Interface::new("BASIC")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console::Editor(interface))
    }

    fn write(&self, s: &str) -> std::io::Result<()> {
        match self {
            Console::Editor(interface) => interface.write_fmt(format_args!("{}", s)),
            Console::Plain => {
                let mut stdout = std::io::stdout();
                stdout.write_all(s.as_bytes())?;
                stdout.flush()
            }
        }
    }

    /// `None` when the operator interrupts or input ends.
    fn read_line(&self, prompt: &str) -> std::io::Result<Option<String>> {
        match self {
            Console::Editor(interface) => {
                interface.set_prompt(&editor_prompt(prompt))?;
                match interface.read_line()? {
                    ReadResult::Input(string) => {
                        if !string.trim().is_empty() {
                            interface.add_history_unique(string.clone());
                        }
                        Ok(Some(string))
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        Ok(None)
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
                }
            }
            Console::Plain => {
                self.write(&plain_prompt(prompt))?;
                let mut line = String::new();
                if std::io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(line))
            }
        }
    }
}

fn plain_prompt(prompt: &str) -> String {
    format!("{}{}", prompt, XON)
}

/// linefeed leaves text between `\x01` and `\x02` out of the prompt width.
fn editor_prompt(prompt: &str) -> String {
    format!("{}\x01{}\x02", prompt, XON)
}
