// file: src/models/field.rs
// description: per-field extraction outcome with an explicit not-found value
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_FOUND: &str = "Not Found";

/// Outcome of a single field heuristic. `NotFound` is an expected state,
/// never an error, and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field<T> {
    Found(T),
    NotFound,
}

impl<T> Field<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Field::Found(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Found(value) => Some(value),
            Field::NotFound => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::NotFound
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::NotFound, Field::Found)
    }
}

impl Field<Vec<String>> {
    /// Empty collections collapse to `NotFound`.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Field::NotFound
        } else {
            Field::Found(lines)
        }
    }

    pub fn len(&self) -> usize {
        self.as_option().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Field<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Found(value) => write!(f, "{}", value),
            Field::NotFound => write!(f, "{}", NOT_FOUND),
        }
    }
}

impl fmt::Display for Field<Vec<String>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Found(lines) => write!(f, "{}", lines.join("; ")),
            Field::NotFound => write!(f, "{}", NOT_FOUND),
        }
    }
}
