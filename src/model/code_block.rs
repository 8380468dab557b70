//! Code block element.

use crate::error::{require_text, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// A block of source code with an optional highlighting hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCodeBlock")]
pub struct CodeBlock {
    code: String,
    style: String,
}

impl CodeBlock {
    /// Create a code block with no style. Fails if `code` is empty.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        Self::with_style(code, "")
    }

    /// Create a code block with a language/highlighting hint.
    ///
    /// The style is free-form and never validated.
    pub fn with_style(code: impl Into<String>, style: impl Into<String>) -> Result<Self> {
        let code = require_text("code_block", "code", code.into())?;
        Ok(Self {
            code,
            style: style.into(),
        })
    }

    /// Get the code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the style hint, `""` when none was given.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Check if a style hint was given.
    pub fn has_style(&self) -> bool {
        !self.style.is_empty()
    }

    /// Number of lines of code.
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}

#[derive(Deserialize)]
struct RawCodeBlock {
    code: Option<String>,
    #[serde(default)]
    style: Option<String>,
}

impl TryFrom<RawCodeBlock> for CodeBlock {
    type Error = ValidationError;

    fn try_from(raw: RawCodeBlock) -> std::result::Result<Self, Self::Error> {
        let code = raw
            .code
            .ok_or_else(|| ValidationError::missing("code_block", "code"))?;
        Ok(Self {
            code: require_text("code_block", "code", code)?,
            style: raw.style.unwrap_or_default(),
        })
    }
}
