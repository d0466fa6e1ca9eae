//! Stable column sorting with per-column direction memory.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::Row;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Per-column memory of the last direction used.
///
/// Each column remembers its own direction independently: re-clicking a
/// column flips it, while switching to another column leaves the first
/// column's memory intact. At most one column's order is applied to the
/// rows at a time — the last one toggled.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    directions: HashMap<usize, SortDirection>,
    applied: Option<usize>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the remembered direction for `column` (first toggle yields
    /// ascending), mark the column as the one currently applied, and return
    /// the direction to sort with.
    pub fn toggle(&mut self, column: usize) -> SortDirection {
        let next = match self.directions.get(&column) {
            Some(direction) => direction.flipped(),
            None => SortDirection::Ascending,
        };
        self.directions.insert(column, next);
        self.applied = Some(column);
        next
    }

    /// The remembered direction for `column`, if it was ever toggled.
    pub fn direction(&self, column: usize) -> Option<SortDirection> {
        self.directions.get(&column).copied()
    }

    /// The column whose order is currently applied, with its direction.
    pub fn applied(&self) -> Option<(usize, SortDirection)> {
        self.applied
            .and_then(|column| self.direction(column).map(|d| (column, d)))
    }
}

/// Numeric interpretation of a cell: strip everything that is not an ASCII
/// digit or `.`, then parse. `$55,000` reads as 55000.
fn numeric_value(cell: &str) -> Option<f64> {
    let digits: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// Collation-style text comparison: case-insensitive primary pass with a
/// code-point tiebreak.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compare two cell texts: numerically when both interpret as numbers,
/// as text otherwise.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => compare_text(a, b),
    }
}

/// Stable in-place reorder of `rows` by the cell text of `column`.
///
/// Descending swaps the operands rather than reversing the result, so rows
/// with equal keys keep their relative order in both directions.
pub fn sort_rows(rows: &mut [Row], column: usize, direction: SortDirection) {
    rows.sort_by(|row_a, row_b| {
        let a = row_a.cell(column);
        let b = row_b.cell(column);
        match direction {
            SortDirection::Ascending => compare_cells(a, b),
            SortDirection::Descending => compare_cells(b, a),
        }
    });
}
