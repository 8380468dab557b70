//! Element statistics collected through the builder interface.

use super::{Builder, ReportBuilder};
use crate::model::{CodeBlock, Heading, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Counts of the elements a builder received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Total body rows across all tables
    pub table_row_count: u32,

    /// Number of blank lines
    pub blank_line_count: u32,

    /// Approximate word count of heading and paragraph text
    pub word_count: u32,

    /// Character count of heading and paragraph text (excluding whitespace)
    pub char_count: u32,
}

impl ElementStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of elements counted.
    pub fn element_count(&self) -> u32 {
        [
            self.heading_count,
            self.paragraph_count,
            self.code_block_count,
            self.table_count,
            self.blank_line_count,
        ]
        .into_iter()
        .fold(0, u32::saturating_add)
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        let mut words = 0usize;
        let mut chars = 0usize;
        for word in text.split_whitespace() {
            words += 1;
            chars += word.chars().count();
        }
        bump(&mut self.word_count, words);
        bump(&mut self.char_count, chars);
    }
}

/// Add `n` to a counter, pinning at `u32::MAX`.
fn bump(counter: &mut u32, n: usize) {
    let n = u32::try_from(n).unwrap_or(u32::MAX);
    *counter = counter.saturating_add(n);
}

/// Builder that produces [`ElementStats`].
#[derive(Debug, Clone, Default)]
pub struct StatsBuilder {
    stats: ElementStats,
}

impl StatsBuilder {
    /// Create a new statistics builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the statistics collected so far.
    pub fn stats(&self) -> &ElementStats {
        &self.stats
    }
}

impl Builder for StatsBuilder {
    fn add_heading(&mut self, heading: &Heading) {
        bump(&mut self.stats.heading_count, 1);
        self.stats.count_text(heading.text());
    }

    fn add_paragraph(&mut self, paragraph: &Paragraph) {
        bump(&mut self.stats.paragraph_count, 1);
        self.stats.count_text(paragraph.text());
    }

    fn add_code_block(&mut self, _code_block: &CodeBlock) {
        bump(&mut self.stats.code_block_count, 1);
    }

    fn add_table(&mut self, table: &Table) {
        bump(&mut self.stats.table_count, 1);
        bump(&mut self.stats.table_row_count, table.row_count());
    }

    fn add_break(&mut self) {
        bump(&mut self.stats.blank_line_count, 1);
    }
}

impl ReportBuilder for StatsBuilder {
    type Report = ElementStats;

    fn parts(&mut self) -> ElementStats {
        std::mem::take(&mut self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        let mut stats = ElementStats::new();
        stats.count_text("Hello brave  world");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.char_count, 15);
    }

    #[test]
    fn test_stats_builder() {
        let mut builder = StatsBuilder::new();
        builder.add_heading(&Heading::new("Intro", 1).unwrap());
        builder.add_paragraph(&Paragraph::new("two words").unwrap());
        builder.add_break();
        builder.add_table(&Table::new(["a"], vec![vec![1], vec![2]]).unwrap());
        builder.add_code_block(&CodeBlock::new("ls -la").unwrap());

        let stats = builder.parts();
        assert_eq!(stats.element_count(), 5);
        assert_eq!(stats.table_row_count, 2);
        assert_eq!(stats.word_count, 3);
        assert_eq!(builder.parts(), ElementStats::default());
    }

    #[test]
    fn test_counts_pin_at_max() {
        let mut stats = ElementStats {
            word_count: u32::MAX - 1,
            heading_count: u32::MAX,
            blank_line_count: 1,
            ..Default::default()
        };
        stats.count_text("one two three");
        assert_eq!(stats.word_count, u32::MAX);
        assert_eq!(stats.char_count, 11);
        assert_eq!(stats.element_count(), u32::MAX);

        let mut rows = 7;
        bump(&mut rows, usize::MAX);
        assert_eq!(rows, u32::MAX);
    }
}
