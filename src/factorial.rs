//! Factorials up to the largest list a seed can address.

use crate::perm::PermutationError;

/// The longest list whose permutations can be addressed by a `u64` seed.
pub const MAX_ITEMS: usize = 20;

const MAX_ENTRIES: usize = MAX_ITEMS + 1;

pub trait Factorial {
    fn get(&self, n: u8) -> u64;
}

#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> u64 {
        assert!(n as usize <= MAX_ITEMS, "{n}! overflows");
        let mut product = 1u64;
        for i in 2..=n {
            product *= i as u64;
        }
        product
    }
}

/// Precomputed table of `0!` through `20!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    entries: [u64; MAX_ENTRIES],
}
impl Lookup {
    pub const fn new() -> Self {
        let mut entries = [1u64; MAX_ENTRIES];
        let mut i = 1;
        while i < MAX_ENTRIES {
            entries[i] = i as u64 * entries[i - 1];
            i += 1;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// `n!`, or [PermutationError::UnsupportedLength] if `n` is beyond the table.
    #[inline]
    pub fn try_get(&self, n: usize) -> Result<u64, PermutationError> {
        self.entries
            .get(n)
            .copied()
            .ok_or(PermutationError::UnsupportedLength { len: n })
    }
}

impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> u64 {
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self::new()
    }
}

pub static FACTORIALS: Lookup = Lookup::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn calculator() {
        test_impl(Calculator);
    }

    #[test]
    pub fn lookup() {
        test_impl(Lookup::default());
    }

    fn test_impl(f: impl Factorial) {
        assert_eq!(1, f.get(0));
        assert_eq!(1, f.get(1));
        assert_eq!(2, f.get(2));
        assert_eq!(6, f.get(3));
        assert_eq!(24, f.get(4));
        assert_eq!(3_628_800, f.get(10));
        assert_eq!(2_432_902_008_176_640_000, f.get(20));
    }

    #[test]
    fn lookup_agrees_with_calculator() {
        let lookup = Lookup::new();
        assert_eq!(MAX_ENTRIES, lookup.entries().len());
        for n in 0..=MAX_ITEMS as u8 {
            assert_eq!(Calculator.get(n), lookup.get(n), "{n}!");
        }
    }

    #[test]
    fn try_get_beyond_table() {
        assert_eq!(Ok(720), FACTORIALS.try_get(6));
        assert_eq!(
            Err(PermutationError::UnsupportedLength { len: 21 }),
            FACTORIALS.try_get(21)
        );
    }

    #[test]
    #[should_panic = "21! overflows"]
    fn calculator_overflow() {
        Calculator.get(21);
    }
}
