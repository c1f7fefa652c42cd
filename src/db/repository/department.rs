use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Department;

/// Upsert departments by primary key (INSERT OR REPLACE).
pub fn upsert_departments(
    conn: &Connection,
    departments: &[Department],
) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO departments (department_id, name, location)
         VALUES (?1, ?2, ?3)",
    )?;
    for dept in departments {
        stmt.execute(params![dept.id, dept.name, dept.location])?;
    }
    Ok(departments.len())
}

pub fn get_all_departments(conn: &Connection) -> Result<Vec<Department>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT department_id, name, location FROM departments ORDER BY department_id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
