//! The persisted state of a rotation, and the transitions driven by form edits.
//!
//! A [State] is immutable: every [Event] yields a new [State]. It is carried between page loads
//! as a URL query string, with one `items` pair per item, a `randomizer` and a `rotationStart`.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::factorial::{Factorial, FACTORIALS};
use crate::input::{normalise_items, parse_items, read_randomizer};
use crate::perm::{clamp_randomizer, max_randomizer, PermutationError};
use crate::schedule::{RotationStart, ScheduleError};

pub const ITEMS_PARAM: &str = "items";
pub const RANDOMIZER_PARAM: &str = "randomizer";
pub const ROTATION_START_PARAM: &str = "rotationStart";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("{0}")]
    Permutation(#[from] PermutationError),

    #[error("{0}")]
    Schedule(#[from] ScheduleError),

    #[error("malformed rotation start '{text}': {source}")]
    MalformedDate {
        text: String,
        source: chrono::ParseError,
    },

    #[error("malformed rotation start '{text}': expected YYYY-MM-DD")]
    NotIsoDate { text: String },
}

/// Whether `text` has the shape `dddd-dd-dd`.
fn is_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Parses an ISO `YYYY-MM-DD` date. Unpadded fields and signed or extended years are refused.
pub fn parse_rotation_start(text: &str) -> Result<NaiveDate, StateError> {
    let trimmed = text.trim();
    if !is_iso_date_shape(trimmed) {
        return Err(StateError::NotIsoDate {
            text: text.to_owned(),
        });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| StateError::MalformedDate {
        text: text.to_owned(),
        source,
    })
}

/// Reads a rotation start, falling back to [RotationStart::Now] if the input is blank or
/// malformed.
fn read_rotation_start(text: &str) -> RotationStart {
    if text.trim().is_empty() {
        return RotationStart::Now;
    }
    match parse_rotation_start(text) {
        Ok(date) => RotationStart::Fixed(date),
        Err(err) => {
            warn!("{err}; starting the rotation from today");
            RotationStart::Now
        }
    }
}

/// An edit made to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The free-text item list was changed.
    ItemsEdited(String),

    /// The randomizer input was changed.
    RandomizerEdited(String),

    /// The rotation start input was changed.
    RotationStartEdited(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    items: Vec<String>,
    randomizer: u64,
    rotation_start: RotationStart,
}
impl State {
    /// Builds a state from raw parts. Items are trimmed (blank ones are dropped) and the
    /// randomizer is clamped to the range permitted by the number of items.
    pub fn new<S: AsRef<str>>(
        items: impl IntoIterator<Item = S>,
        randomizer: i128,
        rotation_start: RotationStart,
    ) -> Result<Self, StateError> {
        let items = normalise_items(items);
        let max = max_randomizer(items.len())?;
        Ok(Self {
            items,
            randomizer: clamp_randomizer(randomizer, max),
            rotation_start,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn randomizer(&self) -> u64 {
        self.randomizer
    }

    pub fn rotation_start(&self) -> RotationStart {
        self.rotation_start
    }

    /// The largest randomizer the current items permit.
    pub fn max_randomizer(&self) -> u64 {
        FACTORIALS.get(self.items.len() as u8) - 1
    }

    /// Decodes a state from a URL query string, with or without the leading `?`. A missing
    /// randomizer reads as zero and a missing or malformed rotation start as
    /// [RotationStart::Now]. Fails only if there are too many items to permute.
    pub fn from_query(query: &str) -> Result<Self, StateError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut items = vec![];
        let mut randomizer = None;
        let mut rotation_start = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                ITEMS_PARAM => items.push(value.into_owned()),
                RANDOMIZER_PARAM if randomizer.is_none() => randomizer = Some(value.into_owned()),
                ROTATION_START_PARAM if rotation_start.is_none() => {
                    rotation_start = Some(value.into_owned())
                }
                _ => debug!("ignoring query parameter {key}={value}"),
            }
        }

        let items = normalise_items(items);
        let max = max_randomizer(items.len())?;
        let randomizer = randomizer
            .map(|text| read_randomizer(&text, max))
            .unwrap_or_default();
        let rotation_start = rotation_start
            .map(|text| read_rotation_start(&text))
            .unwrap_or(RotationStart::Now);
        Ok(Self {
            items,
            randomizer,
            rotation_start,
        })
    }

    /// Encodes the state as a URL query string, without the leading `?`. The rotation start is
    /// always written as a concrete date, resolving [RotationStart::Now] against `today`.
    pub fn to_query(&self, today: NaiveDate) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for item in &self.items {
            serializer.append_pair(ITEMS_PARAM, item);
        }
        serializer.append_pair(RANDOMIZER_PARAM, &self.randomizer.to_string());
        serializer.append_pair(
            ROTATION_START_PARAM,
            &self.rotation_start.resolve(today).format(DATE_FORMAT).to_string(),
        );
        serializer.finish()
    }

    /// The state that results from applying `event`. The receiver is left untouched; on error
    /// the caller keeps the prior state.
    pub fn apply(&self, event: Event) -> Result<Self, StateError> {
        match event {
            Event::ItemsEdited(text) => {
                let items = parse_items(&text);
                let max = max_randomizer(items.len())?;
                Ok(Self {
                    items,
                    randomizer: self.randomizer.min(max),
                    rotation_start: self.rotation_start,
                })
            }
            Event::RandomizerEdited(text) => Ok(Self {
                randomizer: read_randomizer(&text, self.max_randomizer()),
                ..self.clone()
            }),
            Event::RotationStartEdited(text) => Ok(Self {
                rotation_start: read_rotation_start(&text),
                ..self.clone()
            }),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            items: vec![],
            randomizer: 0,
            rotation_start: RotationStart::Now,
        }
    }
}
