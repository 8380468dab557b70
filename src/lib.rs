//! # scribber
//!
//! A small document model with a Builder/Director pipeline.
//!
//! Documents are built from validated elements (headings, paragraphs, code
//! blocks, tables, blank lines) and replayed, in order, into any
//! [`Builder`](build::Builder). Exporters for concrete formats implement
//! the builder trait and live outside this crate.
//!
//! ## Quick Start
//!
//! ```
//! use scribber::{BlankLine, Document, Heading, Paragraph};
//!
//! fn main() -> scribber::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add(Heading::new("Intro", 1)?);
//!     doc.add(Paragraph::new("hello")?);
//!     doc.add(BlankLine);
//!
//!     // Replay through the passthrough builder
//!     let copy = scribber::copy_document(&doc)?;
//!     assert_eq!(copy, doc);
//!
//!     let stats = scribber::collect_stats(&doc)?;
//!     assert_eq!(stats.heading_count, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Validated elements**: invalid attributes are rejected at construction
//!   and on deserialization
//! - **Ordered documents**: append-only, insertion order preserved
//! - **Builder/Director**: exhaustive dispatch over the element kinds
//! - **Thread-safe appends**: [`SharedDocument`] for concurrent writers

pub mod build;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use build::{
    Builder, CompositeBuilder, Director, DocumentBuilder, ElementStats, ReportBuilder,
    StatsBuilder,
};
pub use error::{Error, Result, ValidationError, ValidationErrorKind};
pub use model::{
    BlankLine, Cell, CodeBlock, Document, DocumentStore, Element, Heading, Paragraph,
    SharedDocument, Table,
};

/// Replay a document into a builder.
///
/// # Example
///
/// ```
/// use scribber::{build_report, Document, Paragraph, StatsBuilder};
///
/// let mut doc = Document::new();
/// doc.add(Paragraph::new("one two three").unwrap());
///
/// let mut stats = StatsBuilder::new();
/// build_report(&doc, &mut stats).unwrap();
/// assert_eq!(stats.stats().word_count, 3);
/// ```
pub fn build_report<D>(doc: &D, builder: &mut dyn Builder) -> Result<()>
where
    D: DocumentStore + ?Sized,
{
    Director::with_builder(builder).build_report_from_doc(doc)
}

/// Copy a document by replaying it through a [`DocumentBuilder`].
pub fn copy_document(doc: &Document) -> Result<Document> {
    let mut builder: DocumentBuilder = DocumentBuilder::default();
    build_report(doc, &mut builder)?;
    Ok(builder.parts())
}

/// Count the elements of a document.
pub fn collect_stats(doc: &Document) -> Result<ElementStats> {
    let mut builder = StatsBuilder::new();
    build_report(doc, &mut builder)?;
    Ok(builder.parts())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_document() {
        let mut doc = Document::new();
        doc.add(Heading::new("Intro", 1).unwrap());
        doc.add(Paragraph::new("hello").unwrap());
        doc.add(BlankLine);

        assert_eq!(copy_document(&doc).unwrap(), doc);
    }

    #[test]
    fn test_collect_stats_empty() {
        let stats = collect_stats(&Document::new()).unwrap();
        assert_eq!(stats, ElementStats::default());
    }
}
