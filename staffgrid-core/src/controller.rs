//! The grid controller: single owner of all shared interaction state.
//!
//! The controller owns the row sequence, the per-column sort memory, the
//! edit session, the intake draft, and the notice board, and mutates them
//! only from its own handlers. Events arrive one at a time and run to
//! completion, so the one-active-row and one-editing-cell invariants hold
//! by sequential guard checks alone.

use log::debug;

use crate::editor::CellEditor;
use crate::intake::IntakeDraft;
use crate::model::{COLUMNS, Row};
use crate::notify::{Notice, NoticeBoard};
use crate::selection;
use crate::sort::{SortState, sort_rows};

/// Dispatch-mechanism-independent interaction events.
///
/// The terminal shell translates raw input into these; tests construct
/// them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// A click on the header cell of `column`.
    HeaderClick { column: usize },
    /// A click anywhere on the row at `row`.
    RowClick { row: usize },
    /// A double-click on the cell at (`row`, `column`).
    CellDoubleClick { row: usize, column: usize },
    /// A character typed into the open edit session.
    EditInput(char),
    /// Backspace in the open edit session.
    EditBackspace,
    /// Enter in the open edit session; routes through the blur path.
    EditEnter,
    /// The edit control lost focus.
    EditBlur,
    /// The intake form was submitted.
    Submit,
}

/// The table controller.
#[derive(Debug, Default)]
pub struct GridController {
    rows: Vec<Row>,
    sort: SortState,
    editor: CellEditor,
    draft: IntakeDraft,
    notices: NoticeBoard,
}

impl GridController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A controller over an initial set of rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell text at (`row`, `column`), if in range.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.cell(column))
    }

    /// Index of the active row, if any.
    pub fn active_row(&self) -> Option<usize> {
        selection::active_index(&self.rows)
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn editor(&self) -> &CellEditor {
        &self.editor
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    /// The intake draft, writable: the form's typing surface.
    pub fn draft_mut(&mut self) -> &mut IntakeDraft {
        &mut self.draft
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    pub fn handle(&mut self, event: GridEvent) {
        match event {
            GridEvent::HeaderClick { column } => self.header_click(column),
            GridEvent::RowClick { row } => self.row_click(row),
            GridEvent::CellDoubleClick { row, column } => self.cell_double_click(row, column),
            GridEvent::EditInput(c) => self.editor.insert_char(c),
            GridEvent::EditBackspace => self.editor.backspace(),
            // Enter and blur share one exit path; Enter never inserts a
            // newline.
            GridEvent::EditEnter | GridEvent::EditBlur => self.edit_exit(),
            GridEvent::Submit => self.submit(),
        }
    }

    /// Toggle the column's remembered direction and re-sort on the rows'
    /// current cell text, so sorting after an edit reflects edited values.
    fn header_click(&mut self, column: usize) {
        if column >= COLUMNS.len() {
            debug!("header click on unknown column {column}, ignored");
            return;
        }
        let direction = self.sort.toggle(column);
        debug!("sorting column {column} {direction:?}");
        sort_rows(&mut self.rows, column, direction);
    }

    fn row_click(&mut self, row: usize) {
        if !selection::activate(&mut self.rows, row) {
            debug!("row click out of range ({row}), ignored");
        }
    }

    fn cell_double_click(&mut self, row: usize, column: usize) {
        let Some(original) = self.cell_text(row, column).map(str::to_string) else {
            debug!("double-click out of range ({row}, {column}), ignored");
            return;
        };
        if !self.editor.begin(row, column, &original) {
            debug!("edit session already open, double-click ignored");
        }
    }

    /// Close the edit session and write the resolved text back into the
    /// cell.
    fn edit_exit(&mut self) {
        if let Some(commit) = self.editor.take_commit()
            && let Some(row) = self.rows.get_mut(commit.row)
        {
            row.set_cell(commit.column, commit.text);
        }
    }

    /// Validate the draft; append the new row and reset the draft on
    /// success, leave the draft untouched on failure. Either way the
    /// outcome lands on the notice board.
    fn submit(&mut self) {
        match self.draft.submit() {
            Ok(employee) => {
                debug!("intake accepted: {}", employee.name);
                self.rows.push(Row::from_employee(&employee));
                self.draft.reset();
                self.notices
                    .post(Notice::success("Employee successfully added"));
            }
            Err(err) => {
                debug!("intake rejected: {err}");
                self.notices.post(Notice::error(err.to_string()));
            }
        }
    }
}
