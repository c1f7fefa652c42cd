use rusqlite::Connection;

use super::{query_table, Table};
use crate::db::DatabaseError;

/// Ten highest-earning doctors by collected revenue.
pub fn top_doctors(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            d.name AS doctor_name,
            d.specialization,
            dept.name AS department_name,
            COUNT(a.appointment_id) AS appointments_handled,
            SUM(b.amount) AS total_revenue,
            AVG(b.amount) AS avg_revenue_per_appointment
         FROM appointments a
         JOIN doctors d ON a.doctor_id = d.doctor_id
         JOIN departments dept ON d.department_id = dept.department_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY d.doctor_id, d.name, d.specialization, dept.name
         ORDER BY total_revenue DESC
         LIMIT 10",
    )
}

/// Per-doctor workload and revenue metrics.
pub fn doctor_performance_metrics(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            d.name AS doctor_name,
            d.specialization,
            COUNT(a.appointment_id) AS appointments_handled,
            SUM(b.amount) AS revenue_generated,
            AVG(b.amount) AS avg_revenue_per_appointment
         FROM appointments a
         JOIN doctors d ON a.doctor_id = d.doctor_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY d.doctor_id, d.name, d.specialization",
    )
}

/// Monthly revenue per doctor over the last 12 months.
pub fn doctor_revenue_trends(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            strftime('%Y-%m', a.appointment_date) AS month,
            d.name AS doctor_name,
            SUM(b.amount) AS revenue
         FROM appointments a
         JOIN doctors d ON a.doctor_id = d.doctor_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed'
         AND b.payment_status = 'Paid'
         AND a.appointment_date >= date('now', '-12 months')
         GROUP BY strftime('%Y-%m', a.appointment_date), d.doctor_id, d.name
         ORDER BY month, revenue DESC",
    )
}

/// Average revenue per doctor, grouped by department.
pub fn department_doctor_performance(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            d.name AS department_name,
            AVG(doctor_revenue.total_revenue) AS avg_revenue_per_doctor,
            COUNT(DISTINCT doc.doctor_id) AS doctor_count
         FROM departments d
         JOIN doctors doc ON d.department_id = doc.department_id
         LEFT JOIN (
            SELECT
                a.doctor_id,
                SUM(b.amount) AS total_revenue
            FROM appointments a
            JOIN billing b ON a.appointment_id = b.appointment_id
            WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
            GROUP BY a.doctor_id
         ) doctor_revenue ON doc.doctor_id = doctor_revenue.doctor_id
         GROUP BY d.department_id, d.name
         ORDER BY avg_revenue_per_doctor DESC",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::generator::{persist, Dataset};
    use chrono::Local;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_store() -> rusqlite::Connection {
        let mut conn = open_memory_database().unwrap();
        let today = Local::now().date_naive();
        let dataset = Dataset::generate(&mut StdRng::seed_from_u64(41), today, 365);
        persist(&mut conn, &dataset).unwrap();
        conn
    }

    #[test]
    fn top_doctors_capped_at_ten() {
        let conn = seeded_store();
        let table = top_doctors(&conn).unwrap();
        assert!(table.row_count() <= 10);
        assert!(table.row_count() > 0);
        assert!(table.column("total_revenue").is_some());
    }

    #[test]
    fn department_doctor_performance_covers_staffed_departments() {
        let conn = seeded_store();
        let table = department_doctor_performance(&conn).unwrap();
        // Every department that employs at least one doctor appears,
        // whether or not it earned anything.
        let staffed: i64 = conn
            .query_row(
                "SELECT COUNT(DISTINCT department_id) FROM doctors",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table.row_count() as i64, staffed);
    }
}
