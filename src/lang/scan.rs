use std::ops::Range;
use std::sync::Arc;

/// Read past the end of the text. Handlers treat it as a line end.
pub const NUL: u8 = b'\0';

/// Compare `pattern` against the start of `text`, skipping any spaces found
/// in `text` before each character of `pattern`. Returns how many bytes of
/// `text` were consumed when the whole pattern matched.
pub fn keyword_match(pattern: &str, text: &[u8]) -> Option<usize> {
    let mut i = 0;
    for p in pattern.bytes() {
        while text.get(i) == Some(&b' ') {
            i += 1;
        }
        if text.get(i) != Some(&p) {
            return None;
        }
        i += 1;
    }
    Some(i)
}

/// Leading decimal number of `text` with C `atoi` rules: optional
/// whitespace, an optional sign, then digits. No digits reads as zero.
pub fn line_number(text: &[u8]) -> i32 {
    let mut i = 0;
    while i < text.len() && matches!(text[i], b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c') {
        i += 1;
    }
    let negative = match text.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let mut num: i64 = 0;
    while i < text.len() && text[i].is_ascii_digit() {
        num = (num * 10 + i64::from(text[i] - b'0')).min(i64::from(i32::MAX) + 1);
        i += 1;
    }
    if negative {
        num = -num;
    }
    num.max(i64::from(i32::MIN)).min(i64::from(i32::MAX)) as i32
}

/// ## Cursor over program text
///
/// The text is shared and never changes; only the position moves.
#[derive(Debug, Clone)]
pub struct Scanner {
    text: Arc<str>,
    pos: usize,
}

impl Scanner {
    pub fn new(text: Arc<str>) -> Scanner {
        Scanner { text, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.text.len());
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> u8 {
        self.text.as_bytes().get(self.pos).copied().unwrap_or(NUL)
    }

    pub fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Newline or the end of the text.
    pub fn is_line_end(&self) -> bool {
        matches!(self.peek(), b'\n' | NUL)
    }

    pub fn remaining(&self) -> &[u8] {
        &self.text.as_bytes()[self.pos..]
    }

    pub fn starts_with(&self, s: &str) -> bool {
        self.remaining().starts_with(s.as_bytes())
    }

    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.text[range]
    }

    /// Text from the cursor up to, not including, the next newline.
    pub fn rest_of_line(&self) -> &str {
        let end = self.find_from(self.pos, b'\n');
        &self.text[self.pos..end]
    }

    pub fn skip_spaces(&mut self) {
        while self.peek() == b' ' {
            self.pos += 1;
        }
    }

    /// Stops on `target`, or at the end of the text when it never occurs.
    pub fn skip_to(&mut self, target: u8) {
        self.pos = self.find_from(self.pos, target);
    }

    /// Advance past `pattern` if it matches here, allowing spaces inside it.
    pub fn keyword(&mut self, pattern: &str) -> bool {
        match keyword_match(pattern, self.remaining()) {
            Some(len) => {
                self.pos += len;
                true
            }
            None => false,
        }
    }

    /// Consume consecutive digits as a 16-bit value, wrapping on overflow.
    pub fn number(&mut self) -> i16 {
        let mut num: i16 = 0;
        while self.peek().is_ascii_digit() {
            num = num
                .wrapping_mul(10)
                .wrapping_add(i16::from(self.peek() - b'0'));
            self.pos += 1;
        }
        num
    }

    /// The number leading the text at the cursor. Does not move.
    pub fn line_number(&self) -> i32 {
        line_number(self.remaining())
    }

    fn find_from(&self, from: usize, target: u8) -> usize {
        let bytes = self.text.as_bytes();
        match bytes[from..].iter().position(|ch| *ch == target) {
            Some(offset) => from + offset,
            None => bytes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(s: &str) -> Scanner {
        Scanner::new(Arc::from(s))
    }

    #[test]
    fn test_keyword_match_with_spaces() {
        assert_eq!(keyword_match("GOTO", b"GOTO 10"), Some(4));
        assert_eq!(keyword_match("GOTO", b"G O T O 10"), Some(7));
        assert_eq!(keyword_match("GOTO", b"  GO TO10"), Some(7));
        assert_eq!(keyword_match("GOTO", b"GOSUB 10"), None);
        assert_eq!(keyword_match("GOTO", b"GOT"), None);
        assert_eq!(keyword_match("", b"A=1"), Some(0));
    }

    #[test]
    fn test_line_number_like_atoi() {
        assert_eq!(line_number(b"10 PRINT"), 10);
        assert_eq!(line_number(b"  \n 42"), 42);
        assert_eq!(line_number(b"-7"), -7);
        assert_eq!(line_number(b"PRINT"), 0);
        assert_eq!(line_number(b""), 0);
        assert_eq!(line_number(b"99999999999"), i32::MAX);
    }

    #[test]
    fn test_skip_to_stops_at_end() {
        let mut s = scanner("abc");
        s.skip_to(b'"');
        assert!(s.at_end());
        assert_eq!(s.peek(), NUL);
        s.advance();
        assert_eq!(s.pos(), 3);
    }

    #[test]
    fn test_skip_spaces_not_newlines() {
        let mut s = scanner("   \n X");
        s.skip_spaces();
        assert_eq!(s.peek(), b'\n');
        assert!(s.is_line_end());
    }

    #[test]
    fn test_number_wraps() {
        let mut s = scanner("32768+");
        assert_eq!(s.number(), -32768);
        assert_eq!(s.peek(), b'+');
    }

    #[test]
    fn test_rest_of_line() {
        let mut s = scanner("10 PRINT 1\n20 END\n");
        s.seek(3);
        assert_eq!(s.rest_of_line(), "PRINT 1");
        assert!(s.keyword("PRINT"));
        assert_eq!(s.rest_of_line(), " 1");
    }
}
