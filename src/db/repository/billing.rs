use rusqlite::{params, Connection};

use super::parse_enum;
use crate::db::DatabaseError;
use crate::models::Billing;

/// Upsert billing records by primary key (INSERT OR REPLACE).
pub fn upsert_billing(conn: &Connection, billing: &[Billing]) -> Result<usize, DatabaseError> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO billing (billing_id, appointment_id, amount, payment_date, payment_status, payment_method)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for bill in billing {
        stmt.execute(params![
            bill.id,
            bill.appointment_id,
            bill.amount,
            bill.payment_date,
            bill.payment_status.as_str(),
            bill.payment_method.as_str(),
        ])?;
    }
    Ok(billing.len())
}

pub fn get_all_billing(conn: &Connection) -> Result<Vec<Billing>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT billing_id, appointment_id, amount, payment_date, payment_status, payment_method
         FROM billing ORDER BY billing_id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Billing {
            id: row.get(0)?,
            appointment_id: row.get(1)?,
            amount: row.get(2)?,
            payment_date: row.get(3)?,
            payment_status: parse_enum(4, &row.get::<_, String>(4)?)?,
            payment_method: parse_enum(5, &row.get::<_, String>(5)?)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_billing(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM billing", [], |row| row.get(0))?;
    Ok(count)
}
