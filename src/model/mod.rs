//! Document model types.
//!
//! Elements validate their attributes at construction and are read-only
//! afterwards. A [`Document`] holds them in insertion order.

mod code_block;
mod document;
mod element;
mod heading;
mod paragraph;
mod shared;
mod table;

pub use code_block::CodeBlock;
pub use document::{Document, DocumentStore};
pub use element::{BlankLine, Element};
pub use heading::Heading;
pub use paragraph::Paragraph;
pub use shared::SharedDocument;
pub use table::{Cell, Table};
