use rusqlite::Connection;

use super::{query_table, Table};
use crate::db::DatabaseError;

/// Monthly collected revenue with patient and appointment counts,
/// over the last 24 months.
pub fn monthly_revenue_trends(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            strftime('%Y-%m', b.payment_date) AS month,
            SUM(b.amount) AS revenue,
            COUNT(DISTINCT a.patient_id) AS unique_patients,
            COUNT(a.appointment_id) AS appointments
         FROM billing b
         JOIN appointments a ON b.appointment_id = a.appointment_id
         WHERE a.status = 'Completed'
         AND b.payment_status = 'Paid'
         AND b.payment_date >= date('now', '-24 months')
         GROUP BY strftime('%Y-%m', b.payment_date)
         ORDER BY month",
    )
}

/// Collected revenue per department (through the service's department).
pub fn revenue_by_department(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            d.name AS department_name,
            SUM(b.amount) AS total_revenue,
            COUNT(a.appointment_id) AS appointment_count,
            AVG(b.amount) AS avg_revenue_per_appointment
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         JOIN departments d ON s.department_id = d.department_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY d.department_id, d.name
         ORDER BY total_revenue DESC",
    )
}

/// Collected revenue per service type.
pub fn revenue_by_service_type(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            s.type AS service_type,
            SUM(b.amount) AS revenue,
            COUNT(a.appointment_id) AS appointment_count
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY s.type
         ORDER BY revenue DESC",
    )
}

/// Collected revenue per doctor.
pub fn revenue_per_doctor(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            d.name AS doctor_name,
            d.specialization,
            SUM(b.amount) AS total_revenue,
            COUNT(a.appointment_id) AS appointment_count,
            AVG(b.amount) AS avg_revenue_per_appointment
         FROM appointments a
         JOIN doctors d ON a.doctor_id = d.doctor_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY d.doctor_id, d.name, d.specialization
         ORDER BY total_revenue DESC",
    )
}
