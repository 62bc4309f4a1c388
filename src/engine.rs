//! The permutation engine: a [PermutationOrder] applied to item lists and rotation states.

use chrono::NaiveDate;
use tracing::debug;

use crate::factorial::MAX_ITEMS;
use crate::perm;
use crate::perm::{PermutationError, PermutationOrder};
use crate::schedule::{rotate, Rotation};
use crate::state::{State, StateError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    order: PermutationOrder,
}
impl Engine {
    pub fn new(order: PermutationOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> PermutationOrder {
        self.order
    }

    pub fn max_randomizer(&self, len: usize) -> Result<u64, PermutationError> {
        perm::max_randomizer(len)
    }

    pub fn permute<T: Clone>(&self, seed: u64, items: &[T]) -> Result<Vec<T>, PermutationError> {
        perm::permute(seed, items, self.order)
    }

    /// The seed under which `items` permute into `arrangement`. Repeated items are matched
    /// to their earliest unclaimed position.
    pub fn rank<T: PartialEq>(&self, items: &[T], arrangement: &[T]) -> Result<u64, PermutationError> {
        let len = items.len();
        if len > MAX_ITEMS {
            return Err(PermutationError::UnsupportedLength { len });
        }
        if arrangement.len() != len {
            return Err(PermutationError::NotAPermutation { len });
        }

        let mut claimed = [false; MAX_ITEMS];
        let mut indices = [0usize; MAX_ITEMS];
        for (slot, wanted) in arrangement.iter().enumerate() {
            let position = (0..len)
                .find(|&position| !claimed[position] && items[position] == *wanted)
                .ok_or(PermutationError::NotAPermutation { len })?;
            claimed[position] = true;
            indices[slot] = position;
        }
        perm::rank(&indices[..len], self.order)
    }

    /// Permutes the items of `state` by its randomizer and lays them out week by week.
    pub fn rotation(&self, state: &State, today: NaiveDate) -> Result<Rotation, StateError> {
        let permutation = self.permute(state.randomizer(), state.items())?;
        let start = state.rotation_start().resolve(today);
        debug!(
            "seed {} of {} arranges {:?} from {start}",
            state.randomizer(),
            state.max_randomizer(),
            permutation
        );
        Ok(rotate(&permutation, start)?)
    }
}
