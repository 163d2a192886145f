use pretty_assertions::assert_eq;

use crate::field::Field;
use crate::flags::FlagWeights;
use crate::resultset::ResultSet;
use crate::value::Value;

fn field(name: &str) -> Field {
    Field::new(name.to_owned(), 11, 0x03, 0, 0, &FlagWeights::protocol_41())
}

/// fields `id`, `name`; rows `[1, "a"]`, `[2, "b"]`, `[3, "c"]`
fn sample() -> ResultSet {
    let mut res = ResultSet::new(0, 0, 0, String::new());
    res.push_field(field("id"));
    res.push_field(field("name"));
    for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
        res.push_row(vec![Value::Int(id), Value::from(name)]);
    }
    res
}

#[test]
fn fetch_row_returns_each_row_once_in_order_then_none() {
    let res = sample();
    let mut cursor = res.cursor();

    assert_eq!(
        cursor.fetch_row(),
        Some(&[Value::Int(1), Value::from("a")][..])
    );
    assert_eq!(
        cursor.fetch_row(),
        Some(&[Value::Int(2), Value::from("b")][..])
    );
    assert_eq!(
        cursor.fetch_row(),
        Some(&[Value::Int(3), Value::from("c")][..])
    );
    assert_eq!(cursor.fetch_row(), None);
    assert_eq!(cursor.fetch_row(), None);
}

#[test]
fn reset_restores_the_first_row() {
    let res = sample();
    let mut cursor = res.cursor();

    cursor.fetch_row().expect("first row");
    cursor.fetch_row().expect("second row");
    cursor.reset();
    assert_eq!(cursor.position(), 0);
    assert_eq!(
        cursor.fetch_row(),
        Some(&[Value::Int(1), Value::from("a")][..])
    );

    // Reset is idempotent and legal in any state, including exhausted.
    while cursor.fetch_row().is_some() {}
    cursor.reset();
    cursor.reset();
    let map = cursor.fetch_map().expect("row after reset");
    assert_eq!(map.get("id"), Some(&&Value::Int(1)));
}

#[test]
fn fetch_map_pairs_values_with_field_names() {
    let res = sample();
    let mut cursor = res.cursor();

    let map = cursor.fetch_map().expect("first row");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("id"), Some(&&Value::Int(1)));
    assert_eq!(map.get("name"), Some(&&Value::from("a")));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn fetch_map_duplicate_field_name_later_ordinal_wins() {
    let mut res = ResultSet::new(0, 0, 0, String::new());
    res.push_field(field("v"));
    res.push_field(field("other"));
    res.push_field(field("v"));
    res.push_row(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    let mut cursor = res.cursor();
    let map = cursor.fetch_map().expect("row");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("v"), Some(&&Value::Int(3)));
    assert_eq!(map.get("other"), Some(&&Value::Int(2)));
}

#[test]
fn empty_resultset_always_returns_no_row() {
    let mut res = ResultSet::new(0, 0, 0, String::new());
    res.push_field(field("id"));

    let mut cursor = res.cursor();
    for _ in 0..3 {
        assert_eq!(cursor.fetch_row(), None);
        assert!(cursor.fetch_map().is_none());
    }
    cursor.reset();
    assert_eq!(cursor.fetch_row(), None);
}

#[test]
fn end_to_end_example() {
    let mut res = ResultSet::new(0, 0, 0, String::new());
    res.push_field(field("id"));
    res.push_field(field("flags"));
    res.push_row(vec![Value::Int(1), Value::Bool(true)]);
    res.push_row(vec![Value::Int(2), Value::Bool(false)]);
    assert_eq!(res.field_count(), 2);
    assert_eq!(res.row_count(), 2);

    let mut cursor = res.cursor();
    assert_eq!(
        cursor.fetch_row(),
        Some(&[Value::Int(1), Value::Bool(true)][..])
    );
    assert_eq!(cursor.position(), 1);

    let map = cursor.fetch_map().expect("second row");
    assert_eq!(map.get("id"), Some(&&Value::Int(2)));
    assert_eq!(map.get("flags"), Some(&&Value::Bool(false)));
    assert_eq!(cursor.position(), 2);

    assert_eq!(cursor.fetch_row(), None);
}

#[test]
fn status_fields_are_kept_verbatim() {
    let res = ResultSet::new(7, 42, 2, "Rows matched: 7".to_owned());
    assert_eq!(res.affected_rows(), 7);
    assert_eq!(res.insert_id(), 42);
    assert_eq!(res.warning_count(), 2);
    assert_eq!(res.message(), "Rows matched: 7");
    assert_eq!(res.field_count(), 0);
    assert_eq!(res.row_count(), 0);
}

#[test]
#[should_panic(expected = "row arity")]
fn push_row_with_wrong_arity_fails_fast() {
    let mut res = ResultSet::new(0, 0, 0, String::new());
    res.push_field(field("id"));
    res.push_field(field("name"));
    res.push_row(vec![Value::Int(1)]);
}

#[test]
fn cursor_iterates_rows_lazily_and_exactly() {
    let res = sample();

    let cursor = res.cursor();
    assert_eq!(cursor.len(), 3);
    let ids: Vec<&Value> = cursor.filter_map(|row| row.get(0)).collect();
    assert_eq!(ids, vec![&Value::Int(1), &Value::Int(2), &Value::Int(3)]);

    // IntoIterator on &ResultSet is the same cursor.
    assert_eq!((&res).into_iter().count(), 3);
}

#[test]
fn independent_cursors_track_independent_positions() {
    let res = sample();
    let mut a = res.cursor();
    let mut b = res.cursor();

    a.fetch_row().expect("row");
    a.fetch_row().expect("row");
    assert_eq!(a.position(), 2);
    assert_eq!(b.position(), 0);
    assert_eq!(
        b.fetch_row(),
        Some(&[Value::Int(1), Value::from("a")][..])
    );
}

#[test]
fn rows_and_fields_expose_read_only_views() {
    let res = sample();
    let rows = res.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].get(1), Some(&Value::from("b")));
    assert_eq!(rows[1].len(), 2);
    assert!(!rows[1].is_empty());
    assert_eq!(res.fields()[0].name(), "id");
}
