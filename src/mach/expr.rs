use super::Runtime;
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// Relational operators of `IF`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relation {
    Equal,
    Less,
    LessEqual,
    NotEqual,
    Greater,
    GreaterEqual,
}

impl Relation {
    /// `first` is the operator character, `second` the one after it.
    /// `><` is accepted as well as `<>`.
    pub fn from_chars(first: u8, second: u8) -> Option<Relation> {
        use Relation::*;
        match (first, second) {
            (b'=', _) => Some(Equal),
            (b'<', b'=') => Some(LessEqual),
            (b'<', b'>') => Some(NotEqual),
            (b'<', _) => Some(Less),
            (b'>', b'=') => Some(GreaterEqual),
            (b'>', b'<') => Some(NotEqual),
            (b'>', _) => Some(Greater),
            _ => None,
        }
    }

    pub fn holds(self, lhs: i16, rhs: i16) -> bool {
        use Relation::*;
        match self {
            Equal => lhs == rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            NotEqual => lhs != rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }
}

/// Truncating 16-bit division. Division by zero gives zero.
pub fn divide(lhs: i16, rhs: i16) -> i16 {
    if rhs == 0 {
        0
    } else {
        lhs.wrapping_div(rhs)
    }
}

impl Runtime {
    /// Optional sign followed by an unsigned expression.
    pub(super) fn expr(&mut self) -> Result<i16> {
        self.cur.skip_spaces();
        let negate = match self.cur.peek() {
            b'+' => {
                self.cur.advance();
                false
            }
            b'-' => {
                self.cur.advance();
                true
            }
            _ => false,
        };
        let val = self.unsigned_expr()?;
        Ok(if negate { val.wrapping_neg() } else { val })
    }

    fn unsigned_expr(&mut self) -> Result<i16> {
        self.cur.skip_spaces();
        let mut val = self.term()?;
        loop {
            self.cur.skip_spaces();
            match self.cur.peek() {
                b'+' => {
                    self.cur.advance();
                    val = val.wrapping_add(self.term()?);
                }
                b'-' => {
                    self.cur.advance();
                    val = val.wrapping_sub(self.term()?);
                }
                _ => return Ok(val),
            }
        }
    }

    fn term(&mut self) -> Result<i16> {
        self.cur.skip_spaces();
        let mut val = self.factor()?;
        loop {
            self.cur.skip_spaces();
            match self.cur.peek() {
                b'*' => {
                    self.cur.advance();
                    val = val.wrapping_mul(self.factor()?);
                }
                b'/' => {
                    self.cur.advance();
                    val = divide(val, self.factor()?);
                }
                _ => return Ok(val),
            }
        }
    }

    fn factor(&mut self) -> Result<i16> {
        self.cur.skip_spaces();
        let ch = self.cur.peek();
        if ch == b'(' {
            self.cur.advance();
            let val = self.expr()?;
            self.cur.skip_to(b')');
            self.cur.advance();
            Ok(val)
        } else if ch.is_ascii_uppercase() {
            if self.cur.starts_with("RND") {
                self.cur.skip_to(b'(');
                self.cur.advance();
                let max = self.expr()?;
                if max == 0 {
                    return Err(error!(RndZero));
                }
                let val = self.random(max);
                self.cur.skip_to(b')');
                self.cur.advance();
                Ok(val)
            } else if self.cur.starts_with("USR") {
                Err(error!(UsrNotSupported))
            } else {
                self.cur.advance();
                Ok(self.var.fetch(ch))
            }
        } else if ch.is_ascii_digit() {
            Ok(self.cur.number())
        } else {
            Ok(0)
        }
    }

    /// Uniform in `0..max`, using the magnitude of a negative `max`.
    fn random(&mut self, max: i16) -> i16 {
        self.rng.gen_range(0..max.unsigned_abs()) as i16
    }
}
