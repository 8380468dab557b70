//! Heading element.

use crate::error::{require_text, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// A titled heading with a level from 1 (top) to 6.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHeading")]
pub struct Heading {
    text: String,
    level: u8,
}

impl Heading {
    /// Smallest accepted heading level.
    pub const MIN_LEVEL: u8 = 1;

    /// Largest accepted heading level.
    pub const MAX_LEVEL: u8 = 6;

    /// Create a heading, validating that `text` is non-empty and
    /// `level` is within `1..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use scribber::Heading;
    ///
    /// let heading = Heading::new("Introduction", 2).unwrap();
    /// assert_eq!(heading.level(), 2);
    /// assert!(Heading::new("Introduction", 7).is_err());
    /// ```
    pub fn new(text: impl Into<String>, level: u8) -> Result<Self> {
        Ok(Self::validated(text.into(), i64::from(level))?)
    }

    /// Create a top-level heading.
    pub fn title(text: impl Into<String>) -> Result<Self> {
        Self::new(text, Self::MIN_LEVEL)
    }

    /// Get the heading text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the heading level (1-6).
    pub fn level(&self) -> u8 {
        self.level
    }

    fn validated(text: String, level: i64) -> std::result::Result<Self, ValidationError> {
        let text = require_text("heading", "text", text)?;
        let min = i64::from(Self::MIN_LEVEL);
        let max = i64::from(Self::MAX_LEVEL);
        if !(min..=max).contains(&level) {
            return Err(ValidationError::out_of_range(
                "heading", "level", level, min, max,
            ));
        }
        Ok(Self {
            text,
            level: level as u8,
        })
    }
}

#[derive(Deserialize)]
struct RawHeading {
    text: Option<String>,
    #[serde(default = "default_level")]
    level: i64,
}

fn default_level() -> i64 {
    i64::from(Heading::MIN_LEVEL)
}

impl TryFrom<RawHeading> for Heading {
    type Error = ValidationError;

    fn try_from(raw: RawHeading) -> std::result::Result<Self, Self::Error> {
        let text = raw
            .text
            .ok_or_else(|| ValidationError::missing("heading", "text"))?;
        Self::validated(text, raw.level)
    }
}
