use rusqlite::{params, Connection};

use super::parse_enum;
use crate::db::DatabaseError;
use crate::models::Patient;

/// Upsert patients by primary key (INSERT OR REPLACE).
pub fn upsert_patients(conn: &Connection, patients: &[Patient]) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO patients (patient_id, name, age, gender, contact, address, registration_date, emergency_contact)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for patient in patients {
        stmt.execute(params![
            patient.id,
            patient.name,
            patient.age,
            patient.gender.as_str(),
            patient.contact,
            patient.address,
            patient.registration_date,
            patient.emergency_contact,
        ])?;
    }
    Ok(patients.len())
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT patient_id, name, age, gender, contact, address, registration_date, emergency_contact
         FROM patients ORDER BY patient_id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Patient {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            gender: parse_enum(3, &row.get::<_, String>(3)?)?,
            contact: row.get(4)?,
            address: row.get(5)?,
            registration_date: row.get(6)?,
            emergency_contact: row.get(7)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
