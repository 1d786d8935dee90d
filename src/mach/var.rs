/// ## Variable memory
///
/// One signed 16-bit integer for each letter `A` through `Z`.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vars: [i16; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, letter: u8) -> i16 {
        self.vars[Var::index(letter)]
    }

    pub fn store(&mut self, letter: u8, value: i16) {
        self.vars[Var::index(letter)] = value;
    }

    fn index(letter: u8) -> usize {
        debug_assert!(letter.is_ascii_uppercase());
        usize::from(letter - b'A') % 26
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let var = Var::new();
        assert!((b'A'..=b'Z').all(|l| var.fetch(l) == 0));
    }

    #[test]
    fn test_store_fetch() {
        let mut var = Var::new();
        var.store(b'A', 1);
        var.store(b'Z', -26);
        assert_eq!(var.fetch(b'A'), 1);
        assert_eq!(var.fetch(b'Z'), -26);
        assert_eq!(var.fetch(b'M'), 0);
    }
}
