//! Document-level types.

use super::Element;
use serde::{Deserialize, Serialize};

/// An append-only container of elements.
///
/// Implemented by [`Document`]; builders that write into a document-like
/// backing store are generic over this trait.
pub trait DocumentStore {
    /// Append one element.
    fn add(&mut self, element: Element);

    /// Get every stored element, in insertion order.
    fn get_result(&self) -> &[Element];

    /// Append each element in iteration order.
    fn extend<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Element>,
        Self: Sized,
    {
        for element in elements {
            self.add(element);
        }
    }
}

/// An ordered sequence of document elements.
///
/// Elements are never mutated or removed once added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append an element to the end of the document.
    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Append every element of `elements`, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use scribber::{BlankLine, Document, Element, Paragraph};
    ///
    /// let mut doc = Document::new();
    /// doc.extend([
    ///     Element::from(Paragraph::new("first").unwrap()),
    ///     Element::from(BlankLine),
    /// ]);
    /// assert_eq!(doc.len(), 2);
    /// ```
    pub fn extend<I, E>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        for element in elements {
            self.add(element);
        }
    }

    /// Get every element, in insertion order.
    pub fn get_result(&self) -> &[Element] {
        &self.elements
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Consume the document, returning its elements.
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl DocumentStore for Document {
    fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn get_result(&self) -> &[Element] {
        &self.elements
    }
}

impl<E: Into<Element>> Extend<E> for Document {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        Document::extend(self, iter);
    }
}

impl<E: Into<Element>> FromIterator<E> for Document {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Document {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
