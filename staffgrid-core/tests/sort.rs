//! Tests for column sorting and per-column direction memory.

use staffgrid_core::model::Row;
use staffgrid_core::sort::{SortDirection, SortState, compare_cells, sort_rows};

fn row(cells: [&str; 5]) -> Row {
    Row::from_cells(cells.map(str::to_string))
}

fn column_values(rows: &[Row], column: usize) -> Vec<&str> {
    rows.iter().map(|r| r.cell(column)).collect()
}

#[test]
fn test_numeric_cells_compare_by_value() {
    // "9" sorts before "10" even though it is lexicographically larger.
    assert_eq!(compare_cells("9", "10"), std::cmp::Ordering::Less);
    assert_eq!(compare_cells("10", "9"), std::cmp::Ordering::Greater);
}

#[test]
fn test_currency_cells_compare_numerically() {
    assert_eq!(compare_cells("$55,000", "$162,700"), std::cmp::Ordering::Less);
    assert_eq!(compare_cells("$98,500", "$98,500"), std::cmp::Ordering::Equal);
}

#[test]
fn test_mixed_cells_fall_back_to_text() {
    // One side has no numeric interpretation, so both compare as text.
    assert_eq!(compare_cells("Airi", "Zorita"), std::cmp::Ordering::Less);
    assert_eq!(compare_cells("10", "Airi"), std::cmp::Ordering::Less);
}

#[test]
fn test_text_comparison_ignores_case_first() {
    assert_eq!(compare_cells("airi", "Zorita"), std::cmp::Ordering::Less);
    assert_eq!(compare_cells("Edinburgh", "edinburgh"), std::cmp::Ordering::Less);
}

#[test]
fn test_sort_ascending_by_age() {
    let mut rows = vec![
        row(["Airi", "Dev", "Tokyo", "33", "$98,000"]),
        row(["Brielle", "Dev", "London", "9", "$137,500"]),
        row(["Cedric", "Dev", "London", "10", "$101,000"]),
    ];
    sort_rows(&mut rows, 3, SortDirection::Ascending);
    assert_eq!(column_values(&rows, 3), vec!["9", "10", "33"]);
}

#[test]
fn test_descending_is_exact_reverse_of_ascending_for_distinct_keys() {
    let mut rows = vec![
        row(["Cedric", "Dev", "London", "41", "$101,000"]),
        row(["Airi", "Dev", "Tokyo", "33", "$98,000"]),
        row(["Brielle", "Dev", "London", "29", "$137,500"]),
    ];
    sort_rows(&mut rows, 0, SortDirection::Ascending);
    let ascending = column_values(&rows, 0)
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    sort_rows(&mut rows, 0, SortDirection::Descending);
    let mut descending = column_values(&rows, 0)
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    descending.reverse();

    assert_eq!(ascending, descending);
}

#[test]
fn test_ties_keep_relative_order_in_both_directions() {
    // Two Londons with distinguishable names; sorting by office must not
    // swap them, ascending or descending.
    let mut rows = vec![
        row(["Brielle", "Dev", "London", "29", "$137,500"]),
        row(["Airi", "Dev", "Tokyo", "33", "$98,000"]),
        row(["Cedric", "Dev", "London", "41", "$101,000"]),
    ];

    sort_rows(&mut rows, 2, SortDirection::Ascending);
    assert_eq!(column_values(&rows, 0), vec!["Brielle", "Cedric", "Airi"]);

    sort_rows(&mut rows, 2, SortDirection::Descending);
    assert_eq!(column_values(&rows, 0), vec!["Airi", "Brielle", "Cedric"]);
}

#[test]
fn test_first_toggle_is_ascending_and_reclick_flips() {
    let mut state = SortState::new();
    assert_eq!(state.toggle(3), SortDirection::Ascending);
    assert_eq!(state.toggle(3), SortDirection::Descending);
    assert_eq!(state.toggle(3), SortDirection::Ascending);
}

#[test]
fn test_each_column_remembers_its_own_direction() {
    let mut state = SortState::new();
    state.toggle(0); // name: ascending
    state.toggle(0); // name: descending
    assert_eq!(state.toggle(3), SortDirection::Ascending); // age starts fresh

    // Coming back to name flips its own memory, unaffected by age.
    assert_eq!(state.toggle(0), SortDirection::Ascending);
    assert_eq!(state.direction(3), Some(SortDirection::Ascending));
}

#[test]
fn test_last_toggled_column_is_the_applied_one() {
    let mut state = SortState::new();
    state.toggle(0);
    state.toggle(3);
    assert_eq!(state.applied(), Some((3, SortDirection::Ascending)));

    state.toggle(0);
    assert_eq!(state.applied(), Some((0, SortDirection::Descending)));
}
