//! Builder contract for consuming document elements.
//!
//! A builder receives validated elements one kind at a time and turns them
//! into some target representation (another document, statistics, an
//! exporter's output). The [`Director`](super::Director) drives a builder
//! from a document.
//!
//! # Example
//!
//! ```
//! use scribber::build::{Builder, Director};
//! use scribber::{Document, Heading};
//!
//! #[derive(Default)]
//! struct Outline {
//!     lines: Vec<String>,
//! }
//!
//! impl Builder for Outline {
//!     fn add_heading(&mut self, heading: &Heading) {
//!         let indent = "  ".repeat(heading.level() as usize - 1);
//!         self.lines.push(format!("{}{}", indent, heading.text()));
//!     }
//! }
//!
//! let mut doc = Document::new();
//! doc.add(Heading::new("Intro", 1).unwrap());
//! doc.add(Heading::new("Scope", 2).unwrap());
//!
//! let mut outline = Outline::default();
//! Director::with_builder(&mut outline)
//!     .build_report_from_doc(&doc)
//!     .unwrap();
//! assert_eq!(outline.lines, ["Intro", "  Scope"]);
//! ```

use crate::model::{CodeBlock, Heading, Paragraph, Table};

/// Trait for consuming document elements.
///
/// Every method has an empty default body, so a builder only implements the
/// element kinds it cares about.
pub trait Builder {
    /// Called for each heading.
    fn add_heading(&mut self, heading: &Heading) {
        let _ = heading;
    }

    /// Called for each paragraph.
    fn add_paragraph(&mut self, paragraph: &Paragraph) {
        let _ = paragraph;
    }

    /// Called for each code block.
    fn add_code_block(&mut self, code_block: &CodeBlock) {
        let _ = code_block;
    }

    /// Called for each table.
    fn add_table(&mut self, table: &Table) {
        let _ = table;
    }

    /// Called for each blank line.
    fn add_break(&mut self) {}
}

/// A builder whose accumulated output can be read back.
pub trait ReportBuilder: Builder {
    /// The target representation produced by this builder.
    type Report;

    /// Take the accumulated report.
    ///
    /// Whether this drains the builder is up to the implementation; the
    /// builders in this crate reset to an empty state on every call.
    fn parts(&mut self) -> Self::Report;
}

impl<B: Builder + ?Sized> Builder for &mut B {
    fn add_heading(&mut self, heading: &Heading) {
        (**self).add_heading(heading);
    }

    fn add_paragraph(&mut self, paragraph: &Paragraph) {
        (**self).add_paragraph(paragraph);
    }

    fn add_code_block(&mut self, code_block: &CodeBlock) {
        (**self).add_code_block(code_block);
    }

    fn add_table(&mut self, table: &Table) {
        (**self).add_table(table);
    }

    fn add_break(&mut self) {
        (**self).add_break();
    }
}

/// Builder that ignores every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBuilder;

impl Builder for NullBuilder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct HeadingsOnly {
        headings: Vec<String>,
    }

    impl Builder for HeadingsOnly {
        fn add_heading(&mut self, heading: &Heading) {
            self.headings.push(heading.text().to_string());
        }
    }

    #[test]
    fn test_default_methods_are_no_ops() {
        let mut builder = HeadingsOnly::default();
        builder.add_paragraph(&Paragraph::new("ignored").unwrap());
        builder.add_break();
        builder.add_heading(&Heading::new("kept", 3).unwrap());
        assert_eq!(builder.headings, ["kept"]);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut builder = HeadingsOnly::default();
        let mut by_ref = &mut builder;
        Builder::add_heading(&mut by_ref, &Heading::title("forwarded").unwrap());
        assert_eq!(builder.headings, ["forwarded"]);
    }

    #[test]
    fn test_null_builder() {
        let mut builder = NullBuilder;
        builder.add_table(&Table::new(["a"], vec![vec!["1"]]).unwrap());
        builder.add_break();
    }
}
