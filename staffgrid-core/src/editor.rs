//! Single-cell inline editing.
//!
//! One cell may be editable at a time across the whole table body. The
//! editor is a two-state machine, `Idle -> Editing -> Idle`: a begin
//! request while a session is open is ignored outright (guard, not a
//! queue), and ending the session resolves the cell's new text.

/// An in-flight edit session.
///
/// The original cell text is remembered on entry; the replacement buffer
/// starts empty, exactly like the cleared cell it stands in for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub row: usize,
    pub column: usize,
    original: String,
    buffer: String,
}

impl EditSession {
    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Resolved outcome of an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub row: usize,
    pub column: usize,
    pub text: String,
}

/// The one-cell-at-a-time editor.
#[derive(Debug, Default)]
pub struct CellEditor {
    session: Option<EditSession>,
}

impl CellEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Begin editing a cell, remembering its trimmed original text.
    ///
    /// Returns false (and changes nothing) while another session is open;
    /// the guard re-opens once that session ends.
    pub fn begin(&mut self, row: usize, column: usize, original: &str) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(EditSession {
            row,
            column,
            original: original.trim().to_string(),
            buffer: String::new(),
        });
        true
    }

    /// Append a character to the edit buffer.
    pub fn insert_char(&mut self, c: char) {
        if let Some(session) = self.session.as_mut() {
            session.buffer.push(c);
        }
    }

    /// Remove the last character from the edit buffer.
    pub fn backspace(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.buffer.pop();
        }
    }

    /// End the session (blur, or Enter routed through the blur path) and
    /// resolve the cell's new text: the trimmed buffer if non-empty, the
    /// remembered original otherwise.
    ///
    /// Returns `None` when no session was open.
    pub fn take_commit(&mut self) -> Option<EditCommit> {
        let session = self.session.take()?;
        let trimmed = session.buffer.trim();
        let text = if trimmed.is_empty() {
            session.original
        } else {
            trimmed.to_string()
        };
        Some(EditCommit {
            row: session.row,
            column: session.column,
            text,
        })
    }
}
