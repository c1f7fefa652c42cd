use rusqlite::Connection;
use serde::Serialize;

use super::{query_scalar_f64, query_scalar_i64, query_table, Table};
use crate::db::DatabaseError;

/// Headline figures for the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewKpis {
    pub total_patients: i64,
    pub total_appointments: i64,
    pub total_revenue: f64,
    pub avg_revenue_per_patient: f64,
}

pub fn total_patients(conn: &Connection) -> Result<i64, DatabaseError> {
    query_scalar_i64(conn, "SELECT COUNT(*) FROM patients")
}

pub fn total_appointments(conn: &Connection) -> Result<i64, DatabaseError> {
    query_scalar_i64(conn, "SELECT COUNT(*) FROM appointments")
}

/// Revenue counts only Paid billing on Completed appointments.
pub fn total_revenue(conn: &Connection) -> Result<f64, DatabaseError> {
    query_scalar_f64(
        conn,
        "SELECT COALESCE(SUM(b.amount), 0) AS total_revenue
         FROM billing b
         JOIN appointments a ON b.appointment_id = a.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'",
    )
}

/// Assemble the overview KPIs in one call.
pub fn overview_kpis(conn: &Connection) -> Result<OverviewKpis, DatabaseError> {
    let total_patients = total_patients(conn)?;
    let total_appointments = total_appointments(conn)?;
    let total_revenue = total_revenue(conn)?;
    let avg_revenue_per_patient = if total_patients > 0 {
        total_revenue / total_patients as f64
    } else {
        0.0
    };

    Ok(OverviewKpis {
        total_patients,
        total_appointments,
        total_revenue,
        avg_revenue_per_patient,
    })
}

/// Monthly revenue over the last 12 months.
pub fn revenue_trend(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            strftime('%Y-%m', b.payment_date) AS month,
            SUM(b.amount) AS revenue
         FROM billing b
         JOIN appointments a ON b.appointment_id = a.appointment_id
         WHERE a.status = 'Completed'
         AND b.payment_status = 'Paid'
         AND b.payment_date >= date('now', '-12 months')
         GROUP BY strftime('%Y-%m', b.payment_date)
         ORDER BY month",
    )
}

/// Ten most used services by completed-appointment count.
pub fn service_utilization(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            s.name AS service_name,
            COUNT(a.appointment_id) AS count
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         WHERE a.status = 'Completed'
         GROUP BY s.service_id, s.name
         ORDER BY count DESC
         LIMIT 10",
    )
}
