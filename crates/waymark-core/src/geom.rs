//! Geometry primitives: [`Pos`] and [`Range`].
//!
//! Positions are addressed as `(row, col)`: rows grow downward, columns grow
//! to the right. Ordering and iteration are row-major everywhere.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid cell position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in the order right, down, left, up.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(-1, 0),
        ]
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Pos,
    pub max: Pos,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Range anchored at the origin covering `rows` × `cols` cells.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows.max(0), cols.max(0))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Row-major iterator over every position in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Pos;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Pos,
}

impl Iterator for RangeIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pos_ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn pos_neighbors_and_adjacency() {
        let p = Pos::new(2, 2);
        let n = p.neighbors_4();
        assert_eq!(n[0], Pos::new(2, 3));
        assert_eq!(n[3], Pos::new(1, 2));
        assert!(n.iter().all(|&q| p.is_adjacent(q)));
        assert!(!p.is_adjacent(Pos::new(3, 3)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn pos_hashes_by_value() {
        let set: HashSet<Pos> = [Pos::new(1, 1), Pos::new(1, 1), Pos::new(2, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn range_iter_row_major() {
        let r = Range::with_size(2, 3);
        let pts: Vec<Pos> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[2], Pos::new(0, 2));
        assert_eq!(pts[3], Pos::new(1, 0));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn range_contains_and_empty() {
        let r = Range::with_size(3, 4);
        assert!(r.contains(Pos::new(2, 3)));
        assert!(!r.contains(Pos::new(3, 0)));
        assert!(!r.contains(Pos::new(0, -1)));
        assert!(Range::with_size(0, 5).is_empty());
        assert_eq!(Range::with_size(0, 5).iter().count(), 0);
    }
}
