//! Normalisation of raw form input.

use std::num::ParseIntError;

use tracing::warn;

use crate::perm::clamp_randomizer;

/// Splits free text into items, one per line. Items are trimmed and blank lines are discarded.
pub fn parse_items(text: &str) -> Vec<String> {
    normalise_items(text.lines())
}

/// Trims each item, discarding the ones left empty.
pub fn normalise_items<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| {
            let item = item.as_ref().trim();
            (!item.is_empty()).then(|| item.to_owned())
        })
        .collect()
}

/// Parses a signed integer seed. Blank input reads as zero.
pub fn parse_randomizer(text: &str) -> Result<i128, ParseIntError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse()
}

/// Reads a seed from raw input and clamps it into `0..=max`. Input that isn't an integer reads
/// as zero.
pub fn read_randomizer(text: &str, max: u64) -> u64 {
    match parse_randomizer(text) {
        Ok(value) => clamp_randomizer(value, max),
        Err(err) => {
            warn!("ignoring randomizer '{text}': {err}");
            0
        }
    }
}
