use super::LineNumber;
use std::borrow::Cow;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: Cow::Borrowed(""),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Process exit status for this error. Every category maps to a
    /// different status once truncated to the 8 bits a process reports.
    pub fn exit_status(&self) -> i32 {
        i32::from(self.code as u16 % 256)
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    CannotLoadSource = 8,
    LineNumberZero = 9,
    LetMissingVariable = 18,
    LetMissingEqual = 20,
    NoLineToGoTo = 37,
    NoSuchSubroutine = 46,
    InputExpectsVariable = 104,
    InputExpectsComma = 123,
    Break = 130,
    ReturnWithoutGosub = 133,
    ListLineZero = 154,
    TooManyGosubs = 188,
    RndZero = 259,
    UsrNotSupported = 303,
    IfExpectsRelation = 330,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            CannotLoadSource => "CANNOT LOAD SOURCE",
            LineNumberZero => "LINE NUMBER 0 NOT ALLOWED",
            LetMissingVariable => "LET IS MISSING A VARIABLE NAME",
            LetMissingEqual => "LET IS MISSING AN =",
            NoLineToGoTo => "NO LINE TO GO TO",
            NoSuchSubroutine => "GOSUB SUBROUTINE DOES NOT EXIST",
            InputExpectsVariable => "INPUT SYNTAX BAD - EXPECTS VARIABLE NAME",
            InputExpectsComma => "INPUT SYNTAX BAD - EXPECTS COMMA",
            Break => "BREAK",
            ReturnWithoutGosub => "RETURN HAS NO MATCHING GOSUB",
            ListLineZero => "CAN'T LIST LINE NUMBER 0",
            TooManyGosubs => "MEMORY OVERFLOW: TOO MANY GOSUB'S",
            RndZero => "RND (0) NOT ALLOWED",
            UsrNotSupported => "USR NOT SUPPORTED",
            IfExpectsRelation => "IF SYNTAX ERROR - EXPECTS RELATION OPERATOR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.code as u16, self.code)?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(NoLineToGoTo, Some(20));
        assert_eq!(e.to_string(), "37: NO LINE TO GO TO IN 20");
        let e = error!(CannotLoadSource; "No such file or directory");
        assert_eq!(
            e.to_string(),
            "8: CANNOT LOAD SOURCE; No such file or directory"
        );
    }

    #[test]
    fn test_line_number_is_sticky() {
        let e = error!(RndZero, Some(10)).in_line_number(Some(99));
        assert_eq!(e.line_number(), Some(10));
    }

    #[test]
    fn test_exit_status_distinct() {
        use ErrorCode::*;
        let codes = [
            CannotLoadSource,
            LineNumberZero,
            LetMissingVariable,
            LetMissingEqual,
            NoLineToGoTo,
            NoSuchSubroutine,
            InputExpectsVariable,
            InputExpectsComma,
            Break,
            ReturnWithoutGosub,
            ListLineZero,
            TooManyGosubs,
            RndZero,
            UsrNotSupported,
            IfExpectsRelation,
        ];
        let mut statuses: Vec<i32> = codes
            .iter()
            .map(|c| Error::new(*c).exit_status())
            .collect();
        assert!(statuses.iter().all(|s| *s > 0 && *s < 256));
        statuses.sort_unstable();
        statuses.dedup();
        assert_eq!(statuses.len(), codes.len());
    }
}
