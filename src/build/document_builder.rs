//! Passthrough builder that writes elements into another document.

use super::{Builder, ReportBuilder};
use crate::model::{
    BlankLine, CodeBlock, Document, DocumentStore, Element, Heading, Paragraph, Table,
};

/// Builder whose target representation is itself a document.
///
/// Each operation re-appends the received element to the backing store.
/// Reading the result with [`parts`](ReportBuilder::parts) hands the store
/// over and leaves the builder with a fresh, empty one.
///
/// # Example
///
/// ```
/// use scribber::build::{Director, DocumentBuilder, ReportBuilder};
/// use scribber::{BlankLine, Document, Heading, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add(Heading::new("Intro", 1).unwrap());
/// doc.add(Paragraph::new("hello").unwrap());
/// doc.add(BlankLine);
///
/// let mut builder: DocumentBuilder = DocumentBuilder::default();
/// Director::with_builder(&mut builder)
///     .build_report_from_doc(&doc)
///     .unwrap();
///
/// assert_eq!(builder.parts(), doc);
/// assert!(builder.parts().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder<D = Document> {
    report: D,
}

impl<D: DocumentStore + Default> DocumentBuilder<D> {
    /// Create a builder that appends into `doc`.
    pub fn new(doc: D) -> Self {
        Self { report: doc }
    }

    /// Discard the report in progress.
    pub fn reset(&mut self) {
        self.report = D::default();
    }

    /// Peek at the report in progress without resetting.
    pub fn report(&self) -> &D {
        &self.report
    }
}

impl<D: DocumentStore + Default> Builder for DocumentBuilder<D> {
    fn add_heading(&mut self, heading: &Heading) {
        self.report.add(Element::Heading(heading.clone()));
    }

    fn add_paragraph(&mut self, paragraph: &Paragraph) {
        self.report.add(Element::Paragraph(paragraph.clone()));
    }

    fn add_code_block(&mut self, code_block: &CodeBlock) {
        self.report.add(Element::CodeBlock(code_block.clone()));
    }

    fn add_table(&mut self, table: &Table) {
        self.report.add(Element::Table(table.clone()));
    }

    fn add_break(&mut self) {
        self.report.add(Element::BlankLine(BlankLine));
    }
}

impl<D: DocumentStore + Default> ReportBuilder for DocumentBuilder<D> {
    type Report = D;

    /// Take the report, resetting the builder. A second call in a row
    /// returns an empty report.
    fn parts(&mut self) -> D {
        std::mem::take(&mut self.report)
    }
}
