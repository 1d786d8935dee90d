use super::scan::keyword_match;

/// ## Statement keywords
///
/// Resolution tries each word in the order of [`Word::ALL`] and the first
/// tolerant match wins, so longer words must come before their prefixes.
/// `Implied` has an empty keyword, matches anything, and must stay last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Print,
    Pr,
    Input,
    Let,
    Goto,
    Gosub,
    Return,
    If,
    Rem,
    List,
    End,
    Implied,
}

impl Word {
    pub const ALL: [Word; 12] = [
        Word::Print,
        Word::Pr,
        Word::Input,
        Word::Let,
        Word::Goto,
        Word::Gosub,
        Word::Return,
        Word::If,
        Word::Rem,
        Word::List,
        Word::End,
        Word::Implied,
    ];

    pub fn keyword(self) -> &'static str {
        use Word::*;
        match self {
            Print => "PRINT",
            Pr => "PR",
            Input => "INPUT",
            Let => "LET",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Return => "RETURN",
            If => "IF",
            Rem => "REM",
            List => "LIST",
            End => "END",
            Implied => "",
        }
    }

    /// The statement kind at the start of `text` and the number of bytes
    /// its keyword occupies. Anything unrecognized is an implied `LET`.
    pub fn resolve(text: &[u8]) -> (Word, usize) {
        for word in Word::ALL.iter() {
            if let Some(len) = keyword_match(word.keyword(), text) {
                return (*word, len);
            }
        }
        (Word::Implied, 0)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longer_words_win() {
        assert_eq!(Word::resolve(b"PRINT 1"), (Word::Print, 5));
        assert_eq!(Word::resolve(b"PR 1"), (Word::Pr, 2));
        assert_eq!(Word::resolve(b"PRIN 1"), (Word::Pr, 2));
    }

    #[test]
    fn test_goto_gosub_distinct() {
        assert_eq!(Word::resolve(b"GOTO 10"), (Word::Goto, 4));
        assert_eq!(Word::resolve(b"GOSUB 10"), (Word::Gosub, 5));
        assert_eq!(Word::resolve(b"GO SUB 10"), (Word::Gosub, 6));
    }

    #[test]
    fn test_implied_is_last() {
        assert_eq!(Word::ALL.last(), Some(&Word::Implied));
        assert_eq!(Word::resolve(b"A=1"), (Word::Implied, 0));
        assert_eq!(Word::resolve(b"E=1"), (Word::Implied, 0));
        assert_eq!(Word::resolve(b"I=1"), (Word::Implied, 0));
    }

    #[test]
    fn test_every_keyword_resolves_to_itself() {
        for word in Word::ALL.iter().filter(|w| **w != Word::Implied) {
            assert_eq!(Word::resolve(word.keyword().as_bytes()).0, *word);
        }
    }
}
