//! Rating input value object
//!
//! Ratings arrive loosely typed: a number, a string that may hold a number, or
//! nothing at all. [`RatingInput::coerce`] turns them into an `f64` when it can.
//! The accepted range differs between the two sides of a reading:
//!
//! - readers keep `0 <= r < 5`
//! - works keep `0 <= r <= 4`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exclusive upper bound for ratings stored on a reader
pub const READER_RATING_LIMIT: f64 = 5.0;

/// Inclusive upper bound for ratings stored on a work
pub const WORK_RATING_MAX: f64 = 4.0;

/// A rating as supplied by a caller, before coercion
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    /// No rating given
    #[default]
    Absent,
    /// Numeric rating
    Number(f64),
    /// Textual rating, numeric if it parses
    Text(String),
}

impl RatingInput {
    /// Coerce to a number, `None` when there is nothing numeric to use.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            RatingInput::Absent => None,
            RatingInput::Number(value) => Some(*value),
            RatingInput::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

/// Range check applied on the reader side
pub fn reader_accepts(value: f64) -> bool {
    (0.0..READER_RATING_LIMIT).contains(&value)
}

/// Range check applied on the work side
pub fn work_accepts(value: f64) -> bool {
    (0.0..=WORK_RATING_MAX).contains(&value)
}

/// Mean of the given ratings, 0 when there are none.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count.max(1) as f64
}

impl fmt::Display for RatingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingInput::Absent => write!(f, "none"),
            RatingInput::Number(value) => write!(f, "{}", value),
            RatingInput::Text(text) => write!(f, "{:?}", text),
        }
    }
}

impl From<f64> for RatingInput {
    fn from(value: f64) -> Self {
        RatingInput::Number(value)
    }
}

impl From<i32> for RatingInput {
    fn from(value: i32) -> Self {
        RatingInput::Number(f64::from(value))
    }
}

impl From<&str> for RatingInput {
    fn from(value: &str) -> Self {
        RatingInput::Text(value.to_string())
    }
}

impl From<String> for RatingInput {
    fn from(value: String) -> Self {
        RatingInput::Text(value)
    }
}

impl<T: Into<RatingInput>> From<Option<T>> for RatingInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RatingInput::Absent, Into::into)
    }
}
