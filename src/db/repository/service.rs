use rusqlite::{params, Connection};

use super::parse_enum;
use crate::db::DatabaseError;
use crate::models::Service;

/// Upsert services by primary key (INSERT OR REPLACE).
pub fn upsert_services(conn: &Connection, services: &[Service]) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO services (service_id, name, type, department_id, cost, duration_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for service in services {
        stmt.execute(params![
            service.id,
            service.name,
            service.service_type.as_str(),
            service.department_id,
            service.cost,
            service.duration_minutes,
        ])?;
    }
    Ok(services.len())
}

pub fn get_all_services(conn: &Connection) -> Result<Vec<Service>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT service_id, name, type, department_id, cost, duration_minutes
         FROM services ORDER BY service_id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Service {
            id: row.get(0)?,
            name: row.get(1)?,
            service_type: parse_enum(2, &row.get::<_, String>(2)?)?,
            department_id: row.get(3)?,
            cost: row.get(4)?,
            duration_minutes: row.get(5)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
