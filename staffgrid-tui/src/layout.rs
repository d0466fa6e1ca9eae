//! Screen geometry: where the table, notices, and form land on the frame,
//! and what a click at (x, y) hits. Rendering and hit-testing share one
//! layout so they can never disagree.

use ratatui::layout::Rect;

use staffgrid_core::model::CELL_COUNT;

/// Fixed column widths, in terminal cells, matching `COLUMNS` order.
pub const COLUMN_WIDTHS: [u16; CELL_COUNT] = [20, 24, 15, 6, 12];

/// The intake form's fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Position,
    Age,
    Salary,
    Office,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Position,
        FormField::Age,
        FormField::Salary,
        FormField::Office,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Position => "Position",
            FormField::Age => "Age",
            FormField::Salary => "Salary",
            FormField::Office => "Office",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next field in traversal order, wrapping.
    pub fn next(&self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in traversal order, wrapping.
    pub fn prev(&self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Header { column: usize },
    Cell { row: usize, column: usize },
    Field(FormField),
    SaveButton,
}

/// Frame regions, computed once per draw from the terminal size and the
/// current row and notice counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLayout {
    area: Rect,
    /// Header line plus one line per row.
    pub table: Rect,
    /// One line per visible banner, directly above the form.
    pub notices: Rect,
    /// One line per field plus the save button line.
    pub form: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, row_count: usize, notice_count: usize) -> Self {
        let width = total_width().min(area.width);

        // Title line, blank line, then the table.
        let table_y = area.y + 2;
        let table_height = 1 + row_count as u16;

        let notices_y = table_y + table_height + 1;
        let notices_height = notice_count as u16;

        let form_gap = if notice_count > 0 { 1 } else { 0 };
        let form_y = notices_y + notices_height + form_gap;
        let form_height = FormField::ALL.len() as u16 + 1;

        Self {
            area,
            table: Rect::new(area.x, table_y, width, table_height),
            notices: Rect::new(area.x, notices_y, width, notices_height),
            form: Rect::new(area.x, form_y, width, form_height),
        }
    }

    pub fn title_y(&self) -> u16 {
        self.area.y
    }

    pub fn header_y(&self) -> u16 {
        self.table.y
    }

    pub fn row_y(&self, row: usize) -> u16 {
        self.table.y + 1 + row as u16
    }

    pub fn notice_y(&self, index: usize) -> u16 {
        self.notices.y + index as u16
    }

    pub fn field_y(&self, field: FormField) -> u16 {
        let index = FormField::ALL.iter().position(|f| *f == field).unwrap_or(0);
        self.form.y + index as u16
    }

    pub fn save_y(&self) -> u16 {
        self.form.y + FormField::ALL.len() as u16
    }

    /// Hit-test a click. Anything outside the visible frame, between
    /// regions, or past the last row misses.
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        let position = Rect::new(x, y, 1, 1);
        if !self.area.intersects(position) {
            return None;
        }

        if self.table.intersects(position) {
            let column = column_at_x(x.checked_sub(self.table.x)?)?;
            if y == self.header_y() {
                return Some(Hit::Header { column });
            }
            let row = (y - self.table.y - 1) as usize;
            return Some(Hit::Cell { row, column });
        }

        if self.form.intersects(position) {
            let index = (y - self.form.y) as usize;
            return match FormField::ALL.get(index) {
                Some(field) => Some(Hit::Field(*field)),
                None => Some(Hit::SaveButton),
            };
        }

        None
    }
}

/// Total table width: the columns side by side.
pub fn total_width() -> u16 {
    COLUMN_WIDTHS.iter().sum()
}

/// Which column spans the given x offset from the table's left edge.
pub fn column_at_x(x: u16) -> Option<usize> {
    let mut left = 0;
    for (column, width) in COLUMN_WIDTHS.iter().enumerate() {
        if x >= left && x < left + width {
            return Some(column);
        }
        left += width;
    }
    None
}
