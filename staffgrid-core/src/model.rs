//! Roster data model: employee records, display rows, offices, and columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of office locations offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Office {
    Tokyo,
    Singapore,
    London,
    NewYork,
    Edinburgh,
    SanFrancisco,
}

impl Office {
    /// All offices, in the order the select presents them.
    pub const ALL: [Office; 6] = [
        Office::Tokyo,
        Office::Singapore,
        Office::London,
        Office::NewYork,
        Office::Edinburgh,
        Office::SanFrancisco,
    ];

    /// Human-readable label, as shown in the select and in the table.
    pub fn label(&self) -> &'static str {
        match self {
            Office::Tokyo => "Tokyo",
            Office::Singapore => "Singapore",
            Office::London => "London",
            Office::NewYork => "New York",
            Office::Edinburgh => "Edinburgh",
            Office::SanFrancisco => "San Francisco",
        }
    }

    /// Look an office up by its label.
    pub fn parse(label: &str) -> Option<Office> {
        Office::ALL.into_iter().find(|o| o.label() == label)
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated employee record, as produced by the intake pipeline or read
/// from a roster seed file.
///
/// The office is carried as text: the form's select guarantees one of the
/// [`Office`] labels at intake time, and cell editing may replace it with
/// arbitrary text later anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub position: String,
    pub office: String,
    pub age: i64,
    pub salary: i64,
}

/// Number of cells per row.
pub const CELL_COUNT: usize = 5;

/// Column descriptor: stable id plus display label.
///
/// Value kind (numeric vs text) is inferred per comparison from cell
/// content, never declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
}

/// The table's columns, in display order.
pub const COLUMNS: [Column; CELL_COUNT] = [
    Column { id: "name", label: "Name" },
    Column { id: "position", label: "Position" },
    Column { id: "office", label: "Office" },
    Column { id: "age", label: "Age" },
    Column { id: "salary", label: "Salary" },
];

/// A table row: the five display cells plus the selection flag.
///
/// Row identity is positional. The `active` flag lives on the row itself so
/// that the selection mark travels with the row when sorting reorders the
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: [String; CELL_COUNT],
    pub active: bool,
}

impl Row {
    /// Build a row directly from cell text, in column order.
    pub fn from_cells(cells: [String; CELL_COUNT]) -> Self {
        Self {
            cells,
            active: false,
        }
    }

    /// Render an employee record into its display row.
    ///
    /// Age renders as a plain integer, salary as `$` plus the
    /// thousands-grouped amount.
    pub fn from_employee(employee: &Employee) -> Self {
        Self::from_cells([
            employee.name.clone(),
            employee.position.clone(),
            employee.office.clone(),
            employee.age.to_string(),
            format_salary(employee.salary),
        ])
    }

    /// Cell text at `column`.
    pub fn cell(&self, column: usize) -> &str {
        &self.cells[column]
    }

    /// Replace the cell text at `column`.
    pub fn set_cell(&mut self, column: usize, text: String) {
        self.cells[column] = text;
    }

    /// All cells, in column order.
    pub fn cells(&self) -> &[String; CELL_COUNT] {
        &self.cells
    }
}

/// Format a salary for display: `$55,000`.
pub fn format_salary(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Lenient string-to-number coercion for the intake form's numeric fields.
///
/// Empty input, unparseable input, and non-finite parses all collapse to
/// 0.0, which the presence check then rejects. There is deliberately no
/// dedicated "must be a number" error.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
