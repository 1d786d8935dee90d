use super::Address;
use crate::error;
use crate::lang::{line_number, Error, LineNumber, Scanner};
use std::convert::TryFrom;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program text
///
/// The program exactly as loaded. Lines are found by scanning from the
/// top every time; programs are small.

#[derive(Debug, Clone, Default)]
pub struct Source {
    text: Arc<str>,
}

impl Source {
    pub fn new(text: &str) -> Source {
        Source {
            text: Arc::from(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.text.clone())
    }

    /// Address of the first line numbered `number` or higher. The end of
    /// the text when there is none. Callers check for an exact match.
    pub fn find(&self, number: i16) -> Result<Address> {
        if number == 0 {
            return Err(error!(LineNumberZero));
        }
        let mut addr = 0;
        while addr < self.len() && self.number_at(addr) < i32::from(number) {
            addr = self.next_line(addr);
        }
        Ok(addr)
    }

    /// Leading number of the text at `addr`.
    pub fn number_at(&self, addr: Address) -> i32 {
        line_number(&self.text.as_bytes()[addr.min(self.len())..])
    }

    /// Number of the line holding `addr`, if it has a usable one.
    pub fn line_number_of(&self, addr: Address) -> LineNumber {
        let addr = addr.min(self.len());
        let start = match self.text[..addr].rfind('\n') {
            Some(newline) => newline + 1,
            None => 0,
        };
        u16::try_from(self.number_at(start))
            .ok()
            .filter(|num| *num != 0)
    }

    /// The line found for `number`, newline terminated.
    pub fn list_line(&self, number: i16) -> Result<String> {
        let start = self.find(number)?;
        Ok(self.listing(start, self.line_end(start)))
    }

    /// Lines from the one found for `from` through the first line numbered
    /// `to` or higher, newline terminated.
    pub fn list_range(&self, from: i16, to: i16) -> Result<String> {
        let start = self.find(from)?;
        let mut addr = start;
        while addr < self.len() && self.number_at(addr) < i32::from(to) {
            addr = self.next_line(addr);
        }
        Ok(self.listing(start, self.line_end(addr)))
    }

    fn listing(&self, start: Address, end: Address) -> String {
        let text = &self.text[start..end.max(start)];
        let mut s = String::with_capacity(text.len() + 1);
        s.push_str(text.strip_suffix('\n').unwrap_or(text));
        s.push('\n');
        s
    }

    fn line_end(&self, addr: Address) -> Address {
        match self.text[addr..].find('\n') {
            Some(offset) => addr + offset,
            None => self.len(),
        }
    }

    fn next_line(&self, addr: Address) -> Address {
        (self.line_end(addr) + 1).min(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    const PROGRAM: &str = "10 A=1\n20 B=2\n30 C=3\n40 END\n";

    #[test]
    fn test_find() {
        let s = Source::new(PROGRAM);
        assert_eq!(s.find(10).unwrap(), 0);
        assert_eq!(s.find(20).unwrap(), 7);
        assert_eq!(s.number_at(s.find(25).unwrap()), 30);
        assert_eq!(s.find(50).unwrap(), s.len());
        assert_eq!(s.find(-5).unwrap(), 0);
        assert_eq!(s.find(0).unwrap_err().code(), ErrorCode::LineNumberZero);
    }

    #[test]
    fn test_find_without_final_newline() {
        let s = Source::new("10 A=1\n20 END");
        assert_eq!(s.find(20).unwrap(), 7);
        assert_eq!(s.find(30).unwrap(), s.len());
    }

    #[test]
    fn test_line_number_of() {
        let s = Source::new(PROGRAM);
        assert_eq!(s.line_number_of(0), Some(10));
        assert_eq!(s.line_number_of(10), Some(20));
        assert_eq!(s.line_number_of(s.len()), None);
    }

    #[test]
    fn test_list_line() {
        let s = Source::new(PROGRAM);
        assert_eq!(s.list_line(20).unwrap(), "20 B=2\n");
        assert_eq!(s.list_line(15).unwrap(), "20 B=2\n");
        assert_eq!(s.list_line(99).unwrap(), "\n");
    }

    #[test]
    fn test_list_range() {
        let s = Source::new(PROGRAM);
        assert_eq!(s.list_range(20, 30).unwrap(), "20 B=2\n30 C=3\n");
        assert_eq!(s.list_range(15, 25).unwrap(), "20 B=2\n30 C=3\n");
        assert_eq!(s.list_range(30, 1000).unwrap(), "30 C=3\n40 END\n");
        assert_eq!(s.list_range(10, 10).unwrap(), "10 A=1\n");
    }
}
