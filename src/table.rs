//! Named-factor design tables.
//!
//! A [`DesignTable`] is the wrapper-level view of a design: named columns
//! in the caller's order, rows indexed 1..N, and cells holding the actual
//! factor settings (numeric bounds or category labels) instead of codes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single factor setting in a design table.
///
/// Continuous factors produce [`Number`](LevelValue::Number) cells;
/// categorical factors reproduce whichever values their two levels were
/// specified with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LevelValue {
    /// A numeric setting.
    Number(f64),
    /// A text label.
    Label(String),
    /// A boolean label.
    Flag(bool),
}

impl LevelValue {
    /// Whether this value is numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The numeric value, if this is a [`Number`](LevelValue::Number).
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for LevelValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for LevelValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for LevelValue {
    fn from(v: &str) -> Self {
        Self::Label(v.to_owned())
    }
}

impl From<String> for LevelValue {
    fn from(v: String) -> Self {
        Self::Label(v)
    }
}

impl From<bool> for LevelValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl fmt::Display for LevelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Label(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// A design table with named columns and a 1-based trial index.
///
/// Column order matches the order the factors were supplied in; it is not
/// the internal continuous-then-categorical layout of the coded matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignTable {
    names: Vec<String>,
    index: Vec<usize>,
    columns: Vec<Vec<LevelValue>>,
}

impl DesignTable {
    /// Assemble a table from column names and column data.
    ///
    /// # Panics
    ///
    /// Panics if the number of names differs from the number of columns, or
    /// if columns have unequal lengths.
    pub(crate) fn new(names: Vec<String>, columns: Vec<Vec<LevelValue>>) -> Self {
        assert_eq!(names.len(), columns.len(), "one name per column");
        let rows = columns.first().map_or(0, Vec::len);
        assert!(
            columns.iter().all(|c| c.len() == rows),
            "columns must have equal lengths"
        );

        Self {
            names,
            index: (1..=rows).collect(),
            columns,
        }
    }

    /// Table shape as (rows, columns).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.index.len(), self.columns.len())
    }

    /// Number of trials (rows).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.index.len()
    }

    /// Column names, in table order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The 1-based trial index labels.
    #[must_use]
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[LevelValue]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Get a column by position.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn column_at(&self, idx: usize) -> &[LevelValue] {
        &self.columns[idx]
    }

    /// Get the cell at a 0-based row and column position.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &LevelValue {
        &self.columns[col][row]
    }
}

impl fmt::Display for DesignTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|col| col.iter().map(ToString::to_string).collect())
            .collect();

        let idx_width = self.index.last().map_or(1, |n| n.to_string().len());
        let widths: Vec<usize> = self
            .names
            .iter()
            .zip(&cells)
            .map(|(name, col)| {
                col.iter()
                    .map(String::len)
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:>idx_width$}", "")?;
        for (name, &w) in self.names.iter().zip(&widths) {
            write!(f, "  {name:>w$}")?;
        }
        writeln!(f)?;

        for (r, idx) in self.index.iter().enumerate() {
            write!(f, "{idx:>idx_width$}")?;
            for (col, &w) in cells.iter().zip(&widths) {
                write!(f, "  {:>w$}", col[r])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
