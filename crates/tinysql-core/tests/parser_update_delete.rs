//! Tests for UPDATE and DELETE statements.

mod common;
use common::*;

// ===================================================================
// UPDATE
// ===================================================================

#[test]
fn update_multiple_set() {
    let u = parse_update("UPDATE table1 SET col1 = \"val1\", col2 = 2");
    assert_eq!(u.table, "table1");
    assert_eq!(u.columns, vec!["col1", "col2"]);
    assert_eq!(u.values, vec!["\"val1\"", "2"]);
    assert_eq!(u.where_clause, None);
    round_trip("UPDATE table1 SET col1 = \"val1\", col2 = 2");
}

#[test]
fn update_single_set() {
    let u = parse_update("UPDATE users SET name = 'Bob'");
    assert_eq!(u.assignments().collect::<Vec<_>>(), vec![("name", "'Bob'")]);
}

#[test]
fn update_requires_assign_not_equals() {
    assert_err(
        "UPDATE t SET a == 1",
        "expected =, but got ==: \"==\"",
    );
}

#[test]
fn update_missing_set() {
    assert_err("UPDATE t a = 1", "expected SET, but got identifier: \"a\"");
}

#[test]
fn update_trailing_comma() {
    assert_err(
        "UPDATE t SET a = 1,",
        "expected identifier, but got end: \"\"",
    );
}

#[test]
fn update_dangling_assign() {
    assert_err("UPDATE t SET a =", "expected =");
}

// The grammar does not accept WHERE after UPDATE; the field stays unset.
#[test]
fn update_where_is_not_parsed() {
    assert_err(
        "UPDATE t SET a = 1 WHERE b == 2",
        "expected delimiter, end, but got WHERE: \"WHERE\"",
    );
}

// ===================================================================
// DELETE
// ===================================================================

#[test]
fn delete_simple() {
    let d = parse_delete("DELETE FROM table1");
    assert_eq!(d.table, "table1");
    assert_eq!(d.where_clause, None);
    round_trip("DELETE FROM table1");
}

#[test]
fn delete_missing_from() {
    assert_err("DELETE t1", "expected FROM, but got identifier: \"t1\"");
}

// Same gap as UPDATE: WHERE is modeled but not parsed.
#[test]
fn delete_where_is_not_parsed() {
    assert_err(
        "DELETE FROM t WHERE a == 1",
        "expected end, but got WHERE: \"WHERE\"",
    );
}
