//! Read-only reporting queries over the hospital schema.
//!
//! Every report returns a column-major [`Table`] — the contract the
//! presentation layer consumes: a named column per projection, values in
//! row order, numeric where aggregated and text where grouped.

pub mod doctors;
pub mod overview;
pub mod patients;
pub mod revenue;
pub mod services;

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::DatabaseError;

/// A single typed cell in a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

/// One named column with its values in row order.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

/// Column-major tabular query result.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Execute a read-only query and shape the result column-major.
pub fn query_table(conn: &Connection, sql: &str) -> Result<Table, DatabaseError> {
    let mut stmt = conn.prepare(sql)?;
    let mut columns: Vec<Column> = stmt
        .column_names()
        .iter()
        .map(|name| Column {
            name: name.to_string(),
            values: Vec::new(),
        })
        .collect();

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        for (i, column) in columns.iter_mut().enumerate() {
            let cell = match row.get_ref(i)? {
                ValueRef::Null => Cell::Null,
                ValueRef::Integer(v) => Cell::Integer(v),
                ValueRef::Real(v) => Cell::Real(v),
                ValueRef::Text(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
                // No blob columns in this schema
                ValueRef::Blob(_) => Cell::Null,
            };
            column.values.push(cell);
        }
    }

    Ok(Table { columns })
}

pub(crate) fn query_scalar_i64(conn: &Connection, sql: &str) -> Result<i64, DatabaseError> {
    let value = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(value)
}

pub(crate) fn query_scalar_f64(conn: &Connection, sql: &str) -> Result<f64, DatabaseError> {
    let value = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(value)
}
