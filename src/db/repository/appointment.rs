use rusqlite::{params, Connection};

use super::parse_enum;
use crate::db::DatabaseError;
use crate::models::Appointment;

/// Upsert appointments by primary key (INSERT OR REPLACE).
pub fn upsert_appointments(
    conn: &Connection,
    appointments: &[Appointment],
) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO appointments (appointment_id, patient_id, doctor_id, service_id, appointment_date, appointment_time, status, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for appt in appointments {
        stmt.execute(params![
            appt.id,
            appt.patient_id,
            appt.doctor_id,
            appt.service_id,
            appt.appointment_date,
            appt.appointment_time.format("%H:%M:%S").to_string(),
            appt.status.as_str(),
            appt.notes,
        ])?;
    }
    Ok(appointments.len())
}

pub fn get_all_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT appointment_id, patient_id, doctor_id, service_id, appointment_date, appointment_time, status, notes
         FROM appointments ORDER BY appointment_id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Appointment {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            doctor_id: row.get(2)?,
            service_id: row.get(3)?,
            appointment_date: row.get(4)?,
            appointment_time: row.get(5)?,
            status: parse_enum(6, &row.get::<_, String>(6)?)?,
            notes: row.get(7)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_appointments(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM appointments", [], |row| row.get(0))?;
    Ok(count)
}
