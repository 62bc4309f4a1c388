//! Seed-addressable permutations. A seed in `0..len!` is read as a number in the factorial
//! number system; its digits (the Lehmer code) select, one by one, the next element from a
//! shrinking pool of the remaining elements.

use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::factorial::{Factorial, FACTORIALS, MAX_ITEMS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("unsupported list length {len}: at most {} items can be permuted", MAX_ITEMS)]
    UnsupportedLength { len: usize },

    #[error("seed {seed} is outside the range 0..={max}")]
    SeedOutOfRange { seed: u64, max: u64 },

    #[error("indices are not a permutation of 0..{len}")]
    NotAPermutation { len: usize },
}

/// How the elements picked off the pool are laid out in the resulting permutation.
///
/// Both orders are bijections between `0..len!` and the permutations of a list, but they
/// assign different permutations to the same seed. [PermutationOrder::NaturalOrder] is the
/// canonical mapping: seed `0` leaves the list untouched and seed `len! - 1` reverses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(ascii_case_insensitive)]
pub enum PermutationOrder {
    /// Each picked element is appended, so the most significant digit chooses the first element.
    #[default]
    #[strum(to_string = "natural")]
    NaturalOrder,

    /// Each picked element is pushed to the front, so the most significant digit chooses the
    /// last element. This is the reverse of [PermutationOrder::NaturalOrder].
    #[strum(to_string = "lsf")]
    LeastSignificantFirst,
}

/// The largest valid seed for a list of `len` items, namely `len! - 1`.
pub fn max_randomizer(len: usize) -> Result<u64, PermutationError> {
    Ok(FACTORIALS.try_get(len)? - 1)
}

/// Normalises an arbitrary requested seed into `0..=max`.
#[inline]
pub fn clamp_randomizer(value: i128, max: u64) -> u64 {
    value.clamp(0, max as i128) as u64
}

fn check_seed(seed: u64, len: usize) -> Result<(), PermutationError> {
    let max = max_randomizer(len)?;
    if seed > max {
        return Err(PermutationError::SeedOutOfRange { seed, max });
    }
    Ok(())
}

/// Writes the Lehmer code of `seed` into `digits`, whose length is the length of the list
/// being permuted. `digits[i]` indexes into a pool of `len - i` remaining elements.
pub fn decode(seed: u64, digits: &mut [usize]) -> Result<(), PermutationError> {
    check_seed(seed, digits.len())?;
    decode_unchecked(seed, digits);
    Ok(())
}

#[inline]
fn decode_unchecked(seed: u64, digits: &mut [usize]) {
    let len = digits.len();
    let mut residual = seed;
    for (step, digit) in digits.iter_mut().enumerate() {
        let radix = FACTORIALS.get((len - step - 1) as u8);
        *digit = (residual / radix) as usize;
        residual %= radix;
    }
}

/// Writes the permutation selected by `seed` into `indices`, as positions in the original list.
/// `indices[i]` is the position of the element that lands in slot `i`.
pub fn arrange(
    seed: u64,
    order: PermutationOrder,
    indices: &mut [usize],
) -> Result<(), PermutationError> {
    check_seed(seed, indices.len())?;
    arrange_unchecked(seed, order, indices);
    Ok(())
}

fn arrange_unchecked(seed: u64, order: PermutationOrder, indices: &mut [usize]) {
    decode_unchecked(seed, indices);

    let len = indices.len();
    let mut pool = [0usize; MAX_ITEMS];
    for (position, slot) in pool[..len].iter_mut().enumerate() {
        *slot = position;
    }
    let mut remaining = len;
    for step in 0..len {
        let digit = indices[step];
        indices[step] = pool[digit];
        pool.copy_within(digit + 1..remaining, digit);
        remaining -= 1;
    }

    if order == PermutationOrder::LeastSignificantFirst {
        indices.reverse();
    }
}

/// The permutation of `items` selected by `seed`.
pub fn permute<T: Clone>(
    seed: u64,
    items: &[T],
    order: PermutationOrder,
) -> Result<Vec<T>, PermutationError> {
    let len = items.len();
    check_seed(seed, len)?;
    let mut indices = [0usize; MAX_ITEMS];
    let indices = &mut indices[..len];
    arrange_unchecked(seed, order, indices);
    Ok(indices.iter().map(|&index| items[index].clone()).collect())
}

/// The seed that [arrange] maps to the given `indices`; the inverse of [arrange].
pub fn rank(indices: &[usize], order: PermutationOrder) -> Result<u64, PermutationError> {
    let len = indices.len();
    FACTORIALS.try_get(len)?;
    let mut bitmap = [false; MAX_ITEMS];
    if !is_permutation(indices, &mut bitmap[..len]) {
        return Err(PermutationError::NotAPermutation { len });
    }

    let at = |slot: usize| match order {
        PermutationOrder::NaturalOrder => indices[slot],
        PermutationOrder::LeastSignificantFirst => indices[len - slot - 1],
    };
    let mut seed = 0;
    for slot in 0..len {
        let position = at(slot);
        let digit = (slot + 1..len).filter(|&later| at(later) < position).count();
        seed += digit as u64 * FACTORIALS.get((len - slot - 1) as u8);
    }
    Ok(seed)
}

/// Whether `indices` holds every value in `0..indices.len()` exactly once. `bitmap` must be
/// the same length as `indices`.
pub fn is_permutation(indices: &[usize], bitmap: &mut [bool]) -> bool {
    bitmap.fill(false);
    for &index in indices {
        if index >= bitmap.len() || bitmap[index] {
            return false;
        }
        bitmap[index] = true;
    }
    true
}

/// Enumerates the arranged indices of every seed of a list, in seed order.
#[derive(Debug, Clone)]
pub struct Permutator {
    len: usize,
    order: PermutationOrder,
    permutations: u64,
}
impl Permutator {
    pub fn new(len: usize, order: PermutationOrder) -> Result<Self, PermutationError> {
        let permutations = FACTORIALS.try_get(len)?;
        Ok(Self {
            len,
            order,
            permutations,
        })
    }

    pub fn permutations(&self) -> u64 {
        self.permutations
    }
}

impl IntoIterator for Permutator {
    type Item = Vec<usize>;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            permutator: self,
            seed: 0,
        }
    }
}

pub struct Iter {
    permutator: Permutator,
    seed: u64,
}
impl Iterator for Iter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seed != self.permutator.permutations {
            let mut indices = vec![0; self.permutator.len];
            arrange_unchecked(self.seed, self.permutator.order, &mut indices);
            self.seed += 1;
            Some(indices)
        } else {
            None
        }
    }
}
