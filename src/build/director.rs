//! Replays a document into a builder.

use super::Builder;
use crate::error::{Error, Result};
use crate::model::{DocumentStore, Element};

/// Drives a [`Builder`] from the elements of a document.
///
/// The director borrows its builder, so the caller keeps ownership and can
/// read the builder's output once the run is over. The builder may be
/// replaced between runs.
#[derive(Default)]
pub struct Director<'b> {
    builder: Option<&'b mut dyn Builder>,
}

impl<'b> Director<'b> {
    /// Create a director with no builder assigned.
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Create a director with a builder assigned.
    pub fn with_builder(builder: &'b mut dyn Builder) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Assign the builder used by subsequent runs.
    pub fn set_builder(&mut self, builder: &'b mut dyn Builder) {
        self.builder = Some(builder);
    }

    /// Get the current builder.
    pub fn builder(&mut self) -> Option<&mut (dyn Builder + 'b)> {
        self.builder.as_deref_mut()
    }

    /// Check if a builder is assigned.
    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Unassign and return the current builder.
    pub fn take_builder(&mut self) -> Option<&'b mut dyn Builder> {
        self.builder.take()
    }

    /// Feed every element of `doc`, in order, to the matching builder
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnconfiguredBuilder`] if no builder is assigned.
    /// Nothing is dispatched in that case.
    pub fn build_report_from_doc<D>(&mut self, doc: &D) -> Result<()>
    where
        D: DocumentStore + ?Sized,
    {
        let Some(builder) = self.builder.as_deref_mut() else {
            log::debug!("Director: no builder assigned");
            return Err(Error::UnconfiguredBuilder);
        };

        let elements = doc.get_result();
        log::debug!("Director: replaying {} elements", elements.len());

        for element in elements {
            log::trace!("Director: dispatching {}", element.kind());
            dispatch(&mut *builder, element);
        }

        Ok(())
    }
}

fn dispatch<B: Builder + ?Sized>(builder: &mut B, element: &Element) {
    match element {
        Element::Heading(h) => builder.add_heading(h),
        Element::Paragraph(p) => builder.add_paragraph(p),
        Element::BlankLine(_) => builder.add_break(),
        Element::Table(t) => builder.add_table(t),
        Element::CodeBlock(c) => builder.add_code_block(c),
    }
}

impl std::fmt::Debug for Director<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("has_builder", &self.has_builder())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlankLine, CodeBlock, Document, Heading, Paragraph, Table};

    /// Records the order of builder calls.
    #[derive(Default)]
    struct CallLog {
        calls: Vec<&'static str>,
    }

    impl Builder for CallLog {
        fn add_heading(&mut self, _heading: &Heading) {
            self.calls.push("heading");
        }

        fn add_paragraph(&mut self, _paragraph: &Paragraph) {
            self.calls.push("paragraph");
        }

        fn add_code_block(&mut self, _code_block: &CodeBlock) {
            self.calls.push("code_block");
        }

        fn add_table(&mut self, _table: &Table) {
            self.calls.push("table");
        }

        fn add_break(&mut self) {
            self.calls.push("break");
        }
    }

    fn mixed_document() -> Document {
        let mut doc = Document::new();
        doc.add(Heading::new("Intro", 1).unwrap());
        doc.add(Paragraph::new("hello").unwrap());
        doc.add(BlankLine);
        doc.add(Table::new(["a"], vec![vec![1]]).unwrap());
        doc.add(CodeBlock::new("x = 1").unwrap());
        doc
    }

    #[test]
    fn test_dispatch_order() {
        let doc = mixed_document();
        let mut log = CallLog::default();

        let mut director = Director::new();
        director.set_builder(&mut log);
        director.build_report_from_doc(&doc).unwrap();

        assert_eq!(
            log.calls,
            ["heading", "paragraph", "break", "table", "code_block"]
        );
    }

    #[test]
    fn test_unconfigured_builder() {
        let mut director = Director::new();
        assert!(!director.has_builder());
        let err = director
            .build_report_from_doc(&mixed_document())
            .unwrap_err();
        assert_eq!(err, Error::UnconfiguredBuilder);
    }

    #[test]
    fn test_empty_document_with_builder() {
        let mut log = CallLog::default();
        Director::with_builder(&mut log)
            .build_report_from_doc(&Document::new())
            .unwrap();
        assert!(log.calls.is_empty());
    }

    #[test]
    fn test_reassign_builder() {
        let doc = mixed_document();
        let mut first = CallLog::default();
        let mut second = CallLog::default();

        let mut director = Director::with_builder(&mut first);
        director.build_report_from_doc(&doc).unwrap();
        director.set_builder(&mut second);
        director.build_report_from_doc(&doc).unwrap();
        director.build_report_from_doc(&doc).unwrap();

        assert_eq!(first.calls.len(), 5);
        assert_eq!(second.calls.len(), 10);
    }

    #[test]
    fn test_take_builder() {
        let mut log = CallLog::default();
        let mut director = Director::with_builder(&mut log);
        assert!(director.builder().is_some());
        assert!(director.take_builder().is_some());
        assert_eq!(
            director.build_report_from_doc(&Document::new()),
            Err(Error::UnconfiguredBuilder)
        );
    }
}
