//! Thread-safe document handle.

use super::{Document, Element};
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable handle to a document that may be appended to from
/// several threads.
///
/// `extend` drains its input before taking the lock, so a batch lands as
/// one contiguous run, or not at all if the input panics.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<Mutex<Document>>,
}

impl SharedDocument {
    /// Create a new empty shared document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing document.
    pub fn from_document(doc: Document) -> Self {
        Self {
            inner: Arc::new(Mutex::new(doc)),
        }
    }

    /// Append an element.
    pub fn add(&self, element: impl Into<Element>) {
        self.lock().add(element);
    }

    /// Append every element of `elements` as one contiguous batch.
    ///
    /// The input may read from this same handle; it is fully consumed
    /// before the lock is taken.
    pub fn extend<I, E>(&self, elements: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let batch: Vec<Element> = elements.into_iter().map(Into::into).collect();
        self.lock().extend(batch);
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy the current contents into an owned document.
    pub fn snapshot(&self) -> Document {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            // Writers never run caller code under the lock.
            log::warn!("SharedDocument: recovering from poisoned lock");
            poisoned.into_inner()
        })
    }
}

impl From<Document> for SharedDocument {
    fn from(doc: Document) -> Self {
        Self::from_document(doc)
    }
}
