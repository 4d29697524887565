//! Tests for CREATE TABLE and DROP TABLE statements.

mod common;
use common::*;

use tinysql_core::ast::{ColumnDefinition, ColumnType};

#[test]
fn create_table_two_columns() {
    let c = parse_create_table("CREATE TABLE t1 (c1 INTEGER, c2 STRING)");
    assert_eq!(c.name, "t1");
    assert_eq!(
        c.columns,
        vec![
            ColumnDefinition {
                name: String::from("c1"),
                column_type: ColumnType::Integer,
            },
            ColumnDefinition {
                name: String::from("c2"),
                column_type: ColumnType::String,
            },
        ]
    );
    round_trip("CREATE TABLE t1 (c1 INTEGER, c2 STRING)");
}

#[test]
fn create_table_types_any_case() {
    let c = parse_create_table("create table t (a integer, b String)");
    assert_eq!(c.columns[0].column_type, ColumnType::Integer);
    assert_eq!(c.columns[1].column_type, ColumnType::String);
}

#[test]
fn create_table_unknown_type() {
    assert_err(
        "CREATE TABLE t (a TEXT)",
        "expected INTEGER, STRING, but got identifier: \"TEXT\"",
    );
}

#[test]
fn create_table_missing_type() {
    assert_err(
        "CREATE TABLE t (a, b INTEGER)",
        "expected INTEGER, STRING, but got delimiter: \",\"",
    );
}

#[test]
fn create_without_table_keyword() {
    assert_err("CREATE t (a INTEGER)", "expected TABLE, but got identifier: \"t\"");
}

#[test]
fn create_table_unclosed() {
    assert_err(
        "CREATE TABLE t (a INTEGER",
        "expected delimiter, right parenthesis, but got end: \"\"",
    );
}

#[test]
fn drop_table() {
    let d = parse_drop_table("DROP TABLE t1");
    assert_eq!(d.table, "t1");
    round_trip("DROP TABLE t1");
}

#[test]
fn drop_without_table_keyword() {
    assert_err("DROP t1", "expected TABLE, but got identifier: \"t1\"");
}

#[test]
fn drop_table_extra_name() {
    assert_err("DROP TABLE t1 t2", "expected end, but got identifier: \"t2\"");
}
