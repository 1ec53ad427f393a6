use thiserror::Error;

/// Largest `n` for which `n!` fits in a `u128`.
pub const MAX_N: u8 = 34;

pub trait Factorial {
    fn get(&self, n: u8) -> u128;

    /// Evaluates `k!` for a signed `k`, rejecting negative and overflowing arguments.
    fn checked(&self, k: i32) -> Result<u128, FactorialError> {
        if k < 0 {
            return Err(FactorialError::Negative(k));
        }
        if k > MAX_N as i32 {
            return Err(FactorialError::Overflow(k));
        }
        Ok(self.get(k as u8))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactorialError {
    #[error("factorial of negative {0} is undefined")]
    Negative(i32),

    #[error("{0}! overflows")]
    Overflow(i32),
}

const MAX_ENTRIES: usize = MAX_N as usize + 1;

/// Factorials of `0..=MAX_N`, accumulated iteratively on construction.
pub struct Lookup {
    entries: [u128; MAX_ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u128 {
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1u128; MAX_ENTRIES];
        for i in 2..MAX_ENTRIES {
            entries[i] = i as u128 * entries[i - 1];
        }
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn lookup() {
        let f = Lookup::default();
        assert_eq!(1, f.get(0));
        assert_eq!(1, f.get(1));
        assert_eq!(2, f.get(2));
        assert_eq!(6, f.get(3));
        assert_eq!(24, f.get(4));
        assert_eq!(40_320, f.get(8));
        assert_eq!(3_628_800, f.get(10));
        assert_eq!(2_432_902_008_176_640_000, f.get(20));
        assert_eq!(295_232_799_039_604_140_847_618_609_643_520_000_000, f.get(MAX_N));
    }

    #[test]
    fn checked_rejects_negative() {
        assert_eq!(Err(FactorialError::Negative(-1)), Lookup::default().checked(-1));
        assert_eq!(Err(FactorialError::Negative(-7)), Lookup::default().checked(-7));
    }

    #[test]
    fn checked_rejects_overflow() {
        let lookup = Lookup::default();
        assert_eq!(Err(FactorialError::Overflow(35)), lookup.checked(35));
        assert_eq!(Ok(lookup.get(MAX_N)), lookup.checked(34));
    }

    #[test]
    fn checked_matches_get() {
        let lookup = Lookup::default();
        for k in 0..=MAX_N {
            assert_eq!(Ok(lookup.get(k)), lookup.checked(k as i32));
        }
    }

    #[test]
    #[should_panic]
    fn lookup_overflow_panics() {
        Lookup::default().get(MAX_N + 1);
    }
}
