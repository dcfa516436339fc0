//! The [`Grid`] type: a rectangular 2D array of cells.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells outright and is
//! read-only once built, so it can be handed to a worker thread and borrowed
//! by any number of searches at once.

use std::fmt;

use crate::geom::{Pos, Range};

/// A rectangular grid of `T`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Range,
}

impl<T> Grid<T> {
    /// Build a grid from a list of rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Jagged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            bounds: Range::with_size(height as i32, width as i32),
        })
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols() as usize) + (p.col as usize))
    }

    /// Get the cell at a position, or `None` if out of bounds.
    pub fn at(&self, p: Pos) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Row-major iterator over `(Pos, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Positions of every cell matching `pred`, in row-major order.
    pub fn positions(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<Pos> {
        self.iter()
            .filter(|(_, c)| pred(*c))
            .map(|(p, _)| p)
            .collect()
    }
}

impl Grid<String> {
    /// Parse a grid from text, one row per line, cells split by `sep`.
    ///
    /// A trailing `\r` on each line is dropped and trailing blank lines are
    /// ignored. Cells are kept verbatim, so an empty cell is the empty
    /// symbol.
    pub fn parse_delimited(text: &str, sep: char) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let rows = lines
            .into_iter()
            .map(|l| l.split(sep).map(str::to_string).collect())
            .collect();
        Self::from_rows(rows)
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
