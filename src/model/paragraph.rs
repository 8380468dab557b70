//! Paragraph element.

use crate::error::{require_text, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// A paragraph of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParagraph")]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    /// Create a paragraph. Fails if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = require_text("paragraph", "text", text.into())?;
        Ok(Self { text })
    }

    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Approximate word count (whitespace-separated tokens).
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[derive(Deserialize)]
struct RawParagraph {
    text: Option<String>,
}

impl TryFrom<RawParagraph> for Paragraph {
    type Error = ValidationError;

    fn try_from(raw: RawParagraph) -> std::result::Result<Self, Self::Error> {
        let text = raw
            .text
            .ok_or_else(|| ValidationError::missing("paragraph", "text"))?;
        Ok(Self {
            text: require_text("paragraph", "text", text)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        let p = Paragraph::new("text text").unwrap();
        assert_eq!(p.text(), "text text");
        assert_eq!(p.word_count(), 2);
    }

    #[test]
    fn test_paragraph_empty() {
        assert!(Paragraph::new("").is_err());
    }

    #[test]
    fn test_whitespace_is_content() {
        // Only the empty string is rejected.
        assert!(Paragraph::new(" ").is_ok());
    }
}
