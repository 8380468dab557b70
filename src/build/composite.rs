//! Fan-out builder.

use super::Builder;
use crate::model::{CodeBlock, Heading, Paragraph, Table};

/// Composite builder that forwards every element to several builders.
///
/// Builders are called in the order they were added. They are borrowed, so
/// each one's output can be read after the run.
///
/// # Example
///
/// ```
/// use scribber::build::{
///     CompositeBuilder, Director, DocumentBuilder, ReportBuilder, StatsBuilder,
/// };
/// use scribber::{Document, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add(Paragraph::new("hello world").unwrap());
///
/// let mut copy: DocumentBuilder = DocumentBuilder::default();
/// let mut stats = StatsBuilder::new();
/// let mut composite = CompositeBuilder::new()
///     .with_builder(&mut copy)
///     .with_builder(&mut stats);
/// Director::with_builder(&mut composite)
///     .build_report_from_doc(&doc)
///     .unwrap();
///
/// assert_eq!(copy.parts(), doc);
/// assert_eq!(stats.parts().word_count, 2);
/// ```
#[derive(Default)]
pub struct CompositeBuilder<'a> {
    builders: Vec<&'a mut dyn Builder>,
}

impl<'a> CompositeBuilder<'a> {
    /// Create a new composite builder.
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Add a builder to the chain.
    pub fn with_builder(mut self, builder: &'a mut dyn Builder) -> Self {
        self.builders.push(builder);
        self
    }

    /// Add a builder to the chain in place.
    pub fn push(&mut self, builder: &'a mut dyn Builder) {
        self.builders.push(builder);
    }

    /// Get the number of builders in the chain.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Builder for CompositeBuilder<'_> {
    fn add_heading(&mut self, heading: &Heading) {
        for builder in &mut self.builders {
            builder.add_heading(heading);
        }
    }

    fn add_paragraph(&mut self, paragraph: &Paragraph) {
        for builder in &mut self.builders {
            builder.add_paragraph(paragraph);
        }
    }

    fn add_code_block(&mut self, code_block: &CodeBlock) {
        for builder in &mut self.builders {
            builder.add_code_block(code_block);
        }
    }

    fn add_table(&mut self, table: &Table) {
        for builder in &mut self.builders {
            builder.add_table(table);
        }
    }

    fn add_break(&mut self) {
        for builder in &mut self.builders {
            builder.add_break();
        }
    }
}

impl std::fmt::Debug for CompositeBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeBuilder")
            .field("builders", &self.builders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagger {
        tag: char,
        out: std::rc::Rc<std::cell::RefCell<String>>,
    }

    impl Builder for Tagger {
        fn add_break(&mut self) {
            self.out.borrow_mut().push(self.tag);
        }
    }

    #[test]
    fn test_calls_in_registration_order() {
        let out = std::rc::Rc::new(std::cell::RefCell::new(String::new()));
        let mut a = Tagger {
            tag: 'a',
            out: out.clone(),
        };
        let mut b = Tagger {
            tag: 'b',
            out: out.clone(),
        };

        let mut composite = CompositeBuilder::new();
        composite.push(&mut a);
        composite.push(&mut b);
        assert_eq!(composite.len(), 2);

        composite.add_break();
        composite.add_break();
        assert_eq!(out.borrow().as_str(), "abab");
    }

    #[test]
    fn test_empty_composite() {
        let mut composite = CompositeBuilder::new();
        assert!(composite.is_empty());
        composite.add_heading(&Heading::title("nobody listens").unwrap());
    }
}
