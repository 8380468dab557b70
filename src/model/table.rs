//! Table types.

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A table with a header row and one or more body rows.
///
/// Row width is not checked against the header count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    headers: Vec<String>,
    content: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table. Fails if `headers` or `content` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use scribber::{Cell, Table};
    ///
    /// let table = Table::new(
    ///     ["name", "age"],
    ///     vec![vec![Cell::from("Alice"), Cell::from(30)]],
    /// )
    /// .unwrap();
    /// assert_eq!(table.row_count(), 1);
    /// ```
    pub fn new<H, R, C>(
        headers: impl IntoIterator<Item = H>,
        content: impl IntoIterator<Item = R>,
    ) -> Result<Self>
    where
        H: Into<String>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let content = content
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Ok(Self::validated(headers, content)?)
    }

    /// Get the header labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get the body rows.
    pub fn content(&self) -> &[Vec<Cell>] {
        &self.content
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.content.len()
    }

    /// Get the number of columns (based on the header).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if any row differs in width from the header.
    pub fn is_ragged(&self) -> bool {
        self.content
            .iter()
            .any(|row| row.len() != self.headers.len())
    }

    fn validated(
        headers: Vec<String>,
        content: Vec<Vec<Cell>>,
    ) -> std::result::Result<Self, ValidationError> {
        if headers.is_empty() {
            return Err(ValidationError::empty("table", "headers"));
        }
        if content.is_empty() {
            return Err(ValidationError::empty("table", "content"));
        }
        Ok(Self { headers, content })
    }
}

#[derive(Deserialize)]
struct RawTable {
    headers: Option<Vec<String>>,
    content: Option<Vec<Vec<Cell>>>,
}

impl TryFrom<RawTable> for Table {
    type Error = ValidationError;

    fn try_from(raw: RawTable) -> std::result::Result<Self, Self::Error> {
        let headers = raw
            .headers
            .ok_or_else(|| ValidationError::missing("table", "headers"))?;
        let content = raw
            .content
            .ok_or_else(|| ValidationError::missing("table", "content"))?;
        Self::validated(headers, content)
    }
}

/// A single table cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// No value
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
}

impl Cell {
    /// Check if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the text if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i32> for Cell {
    fn from(i: i32) -> Self {
        Cell::Integer(i64::from(i))
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Integer(i)
    }
}

impl From<u32> for Cell {
    fn from(i: u32) -> Self {
        Cell::Integer(i64::from(i))
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Float(x)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
