//! Deterministic, seed-addressable permutations of a duty roster, laid out as a weekly rotation.
//! Every seed in `0..n!` selects exactly one ordering of an `n`-item list (up to 20 items) via
//! the factorial number system, so a roster can be shared and restored from its items and a
//! single integer.

pub mod engine;
pub mod factorial;
pub mod input;
pub mod perm;
pub mod print;
pub mod schedule;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
