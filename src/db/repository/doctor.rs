use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Doctor;

/// Upsert doctors by primary key (INSERT OR REPLACE).
pub fn upsert_doctors(conn: &Connection, doctors: &[Doctor]) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO doctors (doctor_id, name, specialization, department_id, hire_date, salary)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for doctor in doctors {
        stmt.execute(params![
            doctor.id,
            doctor.name,
            doctor.specialization,
            doctor.department_id,
            doctor.hire_date,
            doctor.salary,
        ])?;
    }
    Ok(doctors.len())
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT doctor_id, name, specialization, department_id, hire_date, salary
         FROM doctors ORDER BY doctor_id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Doctor {
            id: row.get(0)?,
            name: row.get(1)?,
            specialization: row.get(2)?,
            department_id: row.get(3)?,
            hire_date: row.get(4)?,
            salary: row.get(5)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
