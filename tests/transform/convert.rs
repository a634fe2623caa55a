//! Integration tests for conversions and lookups
//!
//! Tests array lifting, reverse index lookups, and classification.

use std::collections::HashMap;
use std::sync::Arc;

use tablature_foundation::{Class, Row, Value};
use tablature_grid::Table;
use tablature_transform::{classify, reverse_lookup, to_row};

// =============================================================================
// Array Lifting
// =============================================================================

#[test]
fn to_row_preserves_order_and_classifies_int() {
    let row = to_row([10, 20, 30]);
    assert_eq!(row.len(), 3);
    let cells: Vec<i64> = row.iter().filter_map(Value::as_int).collect();
    assert_eq!(cells, vec![10, 20, 30]);
    for value in row.iter() {
        assert_eq!(classify(value).to_string(), "int");
    }
}

#[test]
fn to_row_lifts_texts() {
    let row = to_row(["G", "A", "B"]);
    assert_eq!(row, Row::from(["G", "A", "B"]));
    assert_eq!(classify(row.get(0).unwrap()), Class::Text);
}

#[test]
fn to_row_lifts_floats() {
    let row = to_row([1.5f32, 2.5f32]);
    assert_eq!(row.get(0), Some(&Value::Float32(1.5)));
    assert_eq!(classify(row.get(0).unwrap()), Class::Unknown);
}

#[test]
fn to_row_matches_the_row_conversion() {
    assert_eq!(to_row([1, 2, 3]), Row::from([1, 2, 3]));
}

// =============================================================================
// Reverse Lookup
// =============================================================================

#[test]
fn reverse_lookup_finds_a_registered_name() {
    let mut map: HashMap<Arc<str>, usize> = HashMap::new();
    map.insert(Arc::from("noteid"), 0);
    map.insert(Arc::from("sound"), 5);

    assert_eq!(reverse_lookup(&map, 5), Some("sound"));
}

#[test]
fn reverse_lookup_misses_as_none_and_empty_text() {
    let map: HashMap<Arc<str>, usize> = HashMap::new();
    assert_eq!(reverse_lookup(&map, 0), None);
    assert_eq!(reverse_lookup(&map, 0).unwrap_or_default(), "");
}

#[test]
fn reverse_lookup_reads_a_table_row_key_index() {
    let mut table = Table::from_rows([Row::from([1]), Row::from([2])]);
    table.set_row_key("first", 0);
    table.set_row_key("second", 1);

    assert_eq!(reverse_lookup(table.row_key_index(), 1), Some("second"));
    assert_eq!(reverse_lookup(table.row_key_index(), 9), None);
}

#[test]
fn reverse_lookup_returns_some_name_under_duplicates() {
    let mut map: HashMap<Arc<str>, usize> = HashMap::new();
    map.insert(Arc::from("a"), 3);
    map.insert(Arc::from("b"), 3);

    // Which of the two comes back is unspecified; it must be one of them.
    let name = reverse_lookup(&map, 3).unwrap();
    assert!(name == "a" || name == "b");
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn classify_agrees_with_value_class() {
    let values = [
        Value::Int(1),
        Value::Float64(1.0),
        Value::Float32(1.0),
        Value::from("C"),
        Value::from(vec!["C"]),
    ];
    for value in &values {
        assert_eq!(classify(value), value.class());
    }
}

#[test]
fn classify_display_matches_the_three_names() {
    assert_eq!(classify(&Value::Int(1)).to_string(), "int");
    assert_eq!(classify(&Value::from("C")).to_string(), "string");
    assert_eq!(classify(&Value::Float64(0.5)).to_string(), "unknown");
}
