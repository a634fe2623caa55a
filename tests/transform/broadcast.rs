//! Integration tests for broadcast transforms
//!
//! Tests whole-row replication and single-cell spreading.

use tablature_foundation::{Row, Value};
use tablature_transform::{broadcast_row, broadcast_table, replicate_table};

// =============================================================================
// Replication
// =============================================================================

#[test]
fn replicate_table_stacks_copies_of_the_row() {
    let row = Row::from(["C", "D", "E", "F"]);
    let table = replicate_table(&row);

    assert_eq!(table.len(), 4);
    for copy in &table {
        assert_eq!(copy, &row);
    }
}

#[test]
fn replicate_table_of_one_cell() {
    let row = Row::from([7]);
    let table = replicate_table(&row);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0], row);
}

#[test]
fn replicate_table_of_empty_is_empty() {
    assert!(replicate_table(&Row::new()).is_empty());
}

// =============================================================================
// Broadcasting
// =============================================================================

#[test]
fn broadcast_table_turns_cells_into_constant_rows() {
    let row = Row::from_values([Value::Int(1), Value::from("C"), Value::Float64(2.5)]);
    let table = broadcast_table(&row);

    assert_eq!(table.len(), 3);
    assert_eq!(table[0], Row::from([1, 1, 1]));
    assert_eq!(table[1], Row::from(["C", "C", "C"]));
    assert_eq!(
        table[2],
        Row::from_values([
            Value::Float64(2.5),
            Value::Float64(2.5),
            Value::Float64(2.5)
        ])
    );
}

#[test]
fn broadcast_table_of_empty_is_empty() {
    assert!(broadcast_table(&Row::new()).is_empty());
}

#[test]
fn broadcast_row_spreads_one_cell() {
    let row = Row::from(["C", "D", "E"]);
    assert_eq!(
        broadcast_row(&row, 2).unwrap(),
        Row::from(["E", "E", "E"])
    );
}

#[test]
fn broadcast_row_spreads_list_cells_by_sharing() {
    let row = Row::from_values([Value::from(vec!["C", "D"]), Value::Int(1)]);
    let spread = broadcast_row(&row, 0).unwrap();
    assert_eq!(spread.len(), 2);
    assert_eq!(spread.get(0), spread.get(1));
}

#[test]
fn broadcast_row_out_of_range_reports() {
    let row = Row::from([1, 2]);
    let err = broadcast_row(&row, 2).unwrap_err();
    assert!(err.is_index_error());
}

#[test]
fn broadcast_row_of_empty_succeeds_for_any_index() {
    assert_eq!(broadcast_row(&Row::new(), 0).unwrap(), Row::new());
    assert_eq!(broadcast_row(&Row::new(), 31).unwrap(), Row::new());
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn broadcast_leaves_the_input_untouched() {
    let row = Row::from([1, 2, 3]);
    let _ = replicate_table(&row);
    let _ = broadcast_table(&row);
    let _ = broadcast_row(&row, 0);
    assert_eq!(row, Row::from([1, 2, 3]));
}
