use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One animal entry in a table.
///
/// `name` is the lookup key inside its table. Records are plain values:
/// editing a row replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub name: String,
    #[serde(alias = "imageRef", alias = "imageUrl")]
    pub image_ref: String,
    pub location: String,
    pub size: f64,
}

impl AnimalRecord {
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        location: impl Into<String>,
        size: f64,
    ) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
            location: location.into(),
            size,
        }
    }

    /// True iff every text field is non-empty and `size` is a number > 0.
    pub fn validate(&self) -> bool {
        !self.name.is_empty()
            && !self.image_ref.is_empty()
            && !self.location.is_empty()
            && !self.size.is_nan()
            && self.size > 0.0
    }

    /// Numeric ordering by size, NaN last.
    pub fn compare_size(&self, other: &AnimalRecord) -> Ordering {
        match (self.size.is_nan(), other.size.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.size.partial_cmp(&other.size).unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.location, format_size(self.size))
    }
}

/// Formats a size the way a person would type it: `10`, not `10.0`.
///
/// The output parses back to the same `f64`, so an edit form prefilled
/// with it round-trips unchanged.
pub fn format_size(size: f64) -> String {
    size.to_string()
}
