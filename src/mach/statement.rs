use super::expr::Relation;
use super::runtime::{Event, State, XOFF};
use super::Runtime;
use crate::error;
use crate::lang::{Error, Word, NUL};

type Result<T> = std::result::Result<T, Error>;

/// Width of a `PRINT` comma zone.
const TAB_WIDTH: usize = 8;

impl Runtime {
    /// Dispatch the statement at the cursor. `IF` calls back into this
    /// for its then-clause.
    pub(super) fn statement(&mut self) -> Result<()> {
        let (word, len) = Word::resolve(self.cur.remaining());
        if self.trace {
            let text = self.cur.rest_of_line().to_string();
            self.emit(Event::Trace(text));
        }
        self.cur.seek(self.cur.pos() + len);
        match word {
            Word::Print | Word::Pr => self.print(),
            Word::Input => self.input(),
            Word::Let | Word::Implied => self.assign(),
            Word::Goto => self.goto(),
            Word::Gosub => self.gosub(),
            Word::Return => self.return_from(),
            Word::If => self.if_then(),
            Word::Rem => self.rem(),
            Word::List => self.list(),
            Word::End => self.end(),
        }
    }

    fn print(&mut self) -> Result<()> {
        self.cur.skip_spaces();
        'items: loop {
            if self.cur.is_line_end() {
                break;
            }
            if self.cur.peek() == b'"' {
                self.cur.advance();
                let start = self.cur.pos();
                self.cur.skip_to(b'"');
                let text = self.cur.slice(start..self.cur.pos());
                self.column += text.chars().count();
                self.output.push_str(text);
            } else {
                let val = self.expr()?.to_string();
                self.column += val.len();
                self.output.push_str(&val);
            }
            loop {
                match self.cur.peek() {
                    b',' => {
                        let pad = TAB_WIDTH - self.column % TAB_WIDTH;
                        self.column += pad;
                        self.output.extend(std::iter::repeat(' ').take(pad));
                    }
                    b';' => {}
                    b':' => {
                        self.output.push(XOFF);
                        break 'items;
                    }
                    b'\n' | NUL => break 'items,
                    _ => {
                        self.cur.advance();
                        continue;
                    }
                }
                self.cur.advance();
                self.cur.skip_spaces();
                if self.cur.is_line_end() {
                    return Ok(());
                }
                continue 'items;
            }
        }
        self.output.push('\n');
        self.column = 0;
        Ok(())
    }

    /// Also entered directly, with the cursor on a target, when a line
    /// of input arrives.
    pub(super) fn input(&mut self) -> Result<()> {
        self.cur.skip_spaces();
        while !matches!(self.cur.peek(), b'\n' | b':' | NUL) {
            let target = self.cur.peek();
            if !target.is_ascii_uppercase() {
                return Err(error!(InputExpectsVariable));
            }
            if self.input_exhausted() {
                self.input = None;
                self.resume_input = true;
                self.state = State::Input;
                return Ok(());
            }
            let val = self.input_value()?;
            self.var.store(target, val);
            self.cur.advance();
            self.cur.skip_spaces();
            match self.cur.peek() {
                b',' => {
                    self.cur.advance();
                    self.cur.skip_spaces();
                }
                b'\n' | b':' | NUL => {}
                _ => return Err(error!(InputExpectsComma)),
            }
        }
        Ok(())
    }

    fn input_exhausted(&mut self) -> bool {
        match self.input.as_mut() {
            Some(buffer) => {
                buffer.skip_spaces();
                buffer.is_line_end()
            }
            None => true,
        }
    }

    /// A letter reads as its place in the alphabet, anything else as an
    /// expression. The expression is evaluated over the input text.
    fn input_value(&mut self) -> Result<i16> {
        let buffer = match self.input.take() {
            Some(buffer) => buffer,
            None => return Ok(0),
        };
        let program = std::mem::replace(&mut self.cur, buffer);
        let start = self.cur.pos();
        let ch = self.cur.peek();
        let val = if ch.is_ascii_uppercase() {
            self.cur.advance();
            Ok(i16::from(ch - b'@'))
        } else {
            self.expr()
        };
        let mut buffer = std::mem::replace(&mut self.cur, program);
        let val = val?;
        if buffer.pos() == start {
            buffer.skip_to(b'\n');
        }
        while matches!(buffer.peek(), b' ' | b',') {
            buffer.advance();
        }
        self.input = Some(buffer);
        Ok(val)
    }

    fn assign(&mut self) -> Result<()> {
        self.cur.skip_spaces();
        let target = self.cur.peek();
        if !target.is_ascii_uppercase() {
            return Err(error!(LetMissingVariable));
        }
        self.cur.advance();
        self.cur.skip_spaces();
        if self.cur.peek() != b'=' {
            return Err(error!(LetMissingEqual));
        }
        self.cur.advance();
        self.cur.skip_spaces();
        let val = self.expr()?;
        self.var.store(target, val);
        Ok(())
    }

    /// Move the cursor to the line numbered `number`. False when that
    /// exact line does not exist.
    fn branch(&mut self, number: i16) -> Result<bool> {
        let addr = self.source.find(number)?;
        self.cur.seek(addr);
        Ok(self.cur.line_number() == i32::from(number))
    }

    fn goto(&mut self) -> Result<()> {
        let number = self.expr()?;
        if !self.branch(number)? {
            return Err(error!(NoLineToGoTo));
        }
        Ok(())
    }

    fn gosub(&mut self) -> Result<()> {
        if self.stack.is_full() {
            return Err(error!(TooManyGosubs));
        }
        let number = self.expr()?;
        self.stack.push(self.cur.pos())?;
        if !self.branch(number)? {
            return Err(error!(NoSuchSubroutine));
        }
        Ok(())
    }

    fn return_from(&mut self) -> Result<()> {
        let addr = self.stack.pop()?;
        self.cur.seek(addr);
        Ok(())
    }

    fn if_then(&mut self) -> Result<()> {
        self.cur.skip_spaces();
        let lhs = self.expr()?;
        while !matches!(self.cur.peek(), b'<' | b'=' | b'>') {
            if self.cur.is_line_end() {
                return Err(error!(IfExpectsRelation));
            }
            self.cur.advance();
        }
        let first = self.cur.peek();
        self.cur.advance();
        let second = self.cur.peek();
        if matches!(second, b'<' | b'=' | b'>') {
            self.cur.advance();
        }
        let relation = match Relation::from_chars(first, second) {
            Some(relation) => relation,
            None => return Err(error!(IfExpectsRelation)),
        };
        let rhs = self.expr()?;
        self.cur.skip_spaces();
        self.cur.keyword("THEN");
        self.cur.skip_spaces();
        if relation.holds(lhs, rhs) {
            self.statement()
        } else {
            self.cur.skip_to(b'\n');
            Ok(())
        }
    }

    fn rem(&mut self) -> Result<()> {
        self.cur.skip_to(b'\n');
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        self.cur.skip_spaces();
        if matches!(self.cur.peek(), b'\n' | b':' | NUL) {
            let text = self.source.text().to_string();
            self.emit(Event::List(text));
            return Ok(());
        }
        let from = self.expr()?;
        if from == 0 {
            return Err(error!(ListLineZero));
        }
        self.cur.skip_spaces();
        let text = if self.cur.peek() == b',' {
            self.cur.advance();
            let to = self.expr()?;
            self.source.list_range(from, to)?
        } else {
            self.source.list_line(from)?
        };
        self.emit(Event::List(text));
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.state = State::Stopped;
        Ok(())
    }
}
