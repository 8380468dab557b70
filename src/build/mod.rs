//! Builder/Director pipeline for turning documents into other
//! representations.

mod builder;
mod composite;
mod director;
mod document_builder;
mod stats;

pub use builder::{Builder, NullBuilder, ReportBuilder};
pub use composite::CompositeBuilder;
pub use director::Director;
pub use document_builder::DocumentBuilder;
pub use stats::{ElementStats, StatsBuilder};
