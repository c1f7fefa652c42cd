use rusqlite::Connection;

use super::{query_table, Table};
use crate::db::DatabaseError;

/// Top services by completed-appointment volume, with department context.
pub fn top_services(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            s.name AS service_name,
            s.type AS service_type,
            d.name AS department_name,
            COUNT(a.appointment_id) AS appointment_count,
            AVG(s.cost) AS avg_cost,
            SUM(s.cost) AS total_revenue
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         JOIN departments d ON s.department_id = d.department_id
         WHERE a.status = 'Completed'
         GROUP BY s.service_id, s.name, s.type, d.name
         ORDER BY appointment_count DESC
         LIMIT 10",
    )
}

/// Collected revenue per service (Paid billing only).
pub fn revenue_by_service(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            s.name AS service_name,
            SUM(b.amount) AS total_revenue,
            COUNT(a.appointment_id) AS appointment_count
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY s.service_id, s.name
         ORDER BY total_revenue DESC",
    )
}

/// Monthly utilization per service over the last 12 months.
pub fn service_trends(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            strftime('%Y-%m', a.appointment_date) AS month,
            s.name AS service_name,
            COUNT(a.appointment_id) AS appointments
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         WHERE a.status = 'Completed'
         AND a.appointment_date >= date('now', '-12 months')
         GROUP BY strftime('%Y-%m', a.appointment_date), s.name
         ORDER BY month, appointments DESC",
    )
}

/// Completed-appointment counts per department × service pair.
pub fn department_service_distribution(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            d.name AS department_name,
            s.name AS service_name,
            COUNT(a.appointment_id) AS count
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         JOIN departments d ON s.department_id = d.department_id
         WHERE a.status = 'Completed'
         GROUP BY d.department_id, d.name, s.service_id, s.name
         ORDER BY count DESC",
    )
}
