//! Tests for the one-cell-at-a-time editor.

use staffgrid_core::editor::CellEditor;

#[test]
fn test_begin_remembers_trimmed_original_and_clears_buffer() {
    let mut editor = CellEditor::new();
    assert!(editor.begin(1, 0, "  Airi  "));

    let session = editor.session().expect("session open");
    assert_eq!(session.row, 1);
    assert_eq!(session.column, 0);
    assert_eq!(session.buffer(), "");
}

#[test]
fn test_second_begin_is_ignored_while_editing() {
    let mut editor = CellEditor::new();
    assert!(editor.begin(0, 0, "Airi"));
    assert!(!editor.begin(2, 3, "33"));

    // The original session is untouched.
    let session = editor.session().expect("session open");
    assert_eq!((session.row, session.column), (0, 0));
}

#[test]
fn test_guard_reopens_after_exit() {
    let mut editor = CellEditor::new();
    editor.begin(0, 0, "Airi");
    editor.take_commit();
    assert!(editor.begin(2, 3, "33"));
}

#[test]
fn test_commit_with_text_replaces_cell() {
    let mut editor = CellEditor::new();
    editor.begin(0, 0, "Airi");
    for c in "Bob".chars() {
        editor.insert_char(c);
    }
    let commit = editor.take_commit().expect("commit");
    assert_eq!(commit.text, "Bob");
    assert!(!editor.is_editing());
}

#[test]
fn test_commit_with_whitespace_only_reverts_to_original() {
    let mut editor = CellEditor::new();
    editor.begin(0, 0, "Airi");
    editor.insert_char(' ');
    editor.insert_char(' ');
    let commit = editor.take_commit().expect("commit");
    assert_eq!(commit.text, "Airi");
}

#[test]
fn test_commit_with_empty_buffer_reverts_to_original() {
    let mut editor = CellEditor::new();
    editor.begin(0, 4, "$55,000");
    let commit = editor.take_commit().expect("commit");
    assert_eq!(commit.text, "$55,000");
}

#[test]
fn test_committed_text_is_trimmed() {
    let mut editor = CellEditor::new();
    editor.begin(0, 0, "Airi");
    for c in "  Bob  ".chars() {
        editor.insert_char(c);
    }
    let commit = editor.take_commit().expect("commit");
    assert_eq!(commit.text, "Bob");
}

#[test]
fn test_backspace_edits_the_buffer() {
    let mut editor = CellEditor::new();
    editor.begin(0, 0, "Airi");
    for c in "Boc".chars() {
        editor.insert_char(c);
    }
    editor.backspace();
    editor.insert_char('b');
    let commit = editor.take_commit().expect("commit");
    assert_eq!(commit.text, "Bob");
}

#[test]
fn test_take_commit_without_session_is_none() {
    let mut editor = CellEditor::new();
    assert!(editor.take_commit().is_none());
}
