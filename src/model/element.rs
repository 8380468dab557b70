//! The closed set of document elements.

use super::{CodeBlock, Heading, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A vertical break between elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlankLine;

impl BlankLine {
    /// Create a blank line.
    pub fn new() -> Self {
        Self
    }
}

/// One unit of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// A titled heading
    Heading(Heading),

    /// A paragraph of text
    Paragraph(Paragraph),

    /// A block of code
    CodeBlock(CodeBlock),

    /// A table
    Table(Table),

    /// A vertical break
    BlankLine(BlankLine),
}

impl Element {
    /// Short name of the element kind, e.g. `"code_block"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Heading(_) => "heading",
            Element::Paragraph(_) => "paragraph",
            Element::CodeBlock(_) => "code_block",
            Element::Table(_) => "table",
            Element::BlankLine(_) => "blank_line",
        }
    }

    /// Check if this element is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Element::Heading(_))
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is a code block.
    pub fn is_code_block(&self) -> bool {
        matches!(self, Element::CodeBlock(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Check if this element is a blank line.
    pub fn is_blank_line(&self) -> bool {
        matches!(self, Element::BlankLine(_))
    }

    /// Get the heading if this element is one.
    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Element::Heading(h) => Some(h),
            _ => None,
        }
    }

    /// Get the paragraph if this element is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Element::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the code block if this element is one.
    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Element::CodeBlock(c) => Some(c),
            _ => None,
        }
    }

    /// Get the table if this element is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Element::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Heading> for Element {
    fn from(heading: Heading) -> Self {
        Element::Heading(heading)
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Element::Paragraph(paragraph)
    }
}

impl From<CodeBlock> for Element {
    fn from(code_block: CodeBlock) -> Self {
        Element::CodeBlock(code_block)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

impl From<BlankLine> for Element {
    fn from(blank: BlankLine) -> Self {
        Element::BlankLine(blank)
    }
}
