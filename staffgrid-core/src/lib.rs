//! Headless interaction engine for the staffgrid table editor.
//!
//! Everything with design content lives here, independent of any event
//! dispatch mechanism: the row model, stable column sorting with
//! per-column direction memory, single-row selection, one-cell-at-a-time
//! inline editing, the intake validation pipeline, and the transient
//! notice board. The [`controller::GridController`] ties them together
//! over one shared row sequence; a front end only has to translate raw
//! input into [`controller::GridEvent`]s and render the resulting state.

pub mod controller;
pub mod editor;
pub mod intake;
pub mod model;
pub mod notify;
pub mod selection;
pub mod sort;

pub mod prelude {
    pub use crate::controller::{GridController, GridEvent};
    pub use crate::editor::{CellEditor, EditCommit, EditSession};
    pub use crate::intake::{IntakeDraft, IntakeError};
    pub use crate::model::{CELL_COUNT, COLUMNS, Column, Employee, Office, Row};
    pub use crate::notify::{NOTICE_LIFETIME, Notice, NoticeBoard, NoticeLevel};
    pub use crate::sort::{SortDirection, SortState};
}
