use rusqlite::Connection;

use super::{query_table, Table};
use crate::db::DatabaseError;

/// Appointment counts per day over the last 90 days.
pub fn daily_appointment_trends(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            a.appointment_date AS date,
            COUNT(a.appointment_id) AS appointments
         FROM appointments a
         WHERE a.appointment_date >= date('now', '-90 days')
         GROUP BY a.appointment_date
         ORDER BY a.appointment_date",
    )
}

/// Appointment counts by day of week over the last year.
pub fn weekly_appointment_patterns(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            CASE
                WHEN strftime('%w', a.appointment_date) = '0' THEN 'Sunday'
                WHEN strftime('%w', a.appointment_date) = '1' THEN 'Monday'
                WHEN strftime('%w', a.appointment_date) = '2' THEN 'Tuesday'
                WHEN strftime('%w', a.appointment_date) = '3' THEN 'Wednesday'
                WHEN strftime('%w', a.appointment_date) = '4' THEN 'Thursday'
                WHEN strftime('%w', a.appointment_date) = '5' THEN 'Friday'
                WHEN strftime('%w', a.appointment_date) = '6' THEN 'Saturday'
            END AS day_of_week,
            COUNT(a.appointment_id) AS appointments
         FROM appointments a
         WHERE a.appointment_date >= date('now', '-365 days')
         GROUP BY strftime('%w', a.appointment_date)
         ORDER BY strftime('%w', a.appointment_date)",
    )
}

/// Appointment counts per month over the last 24 months.
pub fn monthly_appointment_trends(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            strftime('%Y-%m', a.appointment_date) AS month,
            COUNT(a.appointment_id) AS appointments
         FROM appointments a
         WHERE a.appointment_date >= date('now', '-24 months')
         GROUP BY strftime('%Y-%m', a.appointment_date)
         ORDER BY month",
    )
}

/// Appointment counts by season over the last year.
pub fn seasonal_appointment_analysis(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            CASE
                WHEN strftime('%m', a.appointment_date) IN ('12', '01', '02') THEN 'Winter'
                WHEN strftime('%m', a.appointment_date) IN ('03', '04', '05') THEN 'Spring'
                WHEN strftime('%m', a.appointment_date) IN ('06', '07', '08') THEN 'Summer'
                WHEN strftime('%m', a.appointment_date) IN ('09', '10', '11') THEN 'Autumn'
            END AS season,
            COUNT(a.appointment_id) AS appointments
         FROM appointments a
         WHERE a.appointment_date >= date('now', '-365 days')
         GROUP BY season
         ORDER BY appointments DESC",
    )
}

/// Distribution of completed-visit counts across patients.
pub fn visit_frequency(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            visit_counts.visit_count,
            COUNT(*) AS patient_count
         FROM (
            SELECT
                p.patient_id,
                COUNT(a.appointment_id) AS visit_count
            FROM patients p
            LEFT JOIN appointments a ON p.patient_id = a.patient_id
            WHERE a.status = 'Completed'
            GROUP BY p.patient_id
         ) visit_counts
         GROUP BY visit_counts.visit_count
         ORDER BY visit_counts.visit_count",
    )
}

/// Per-patient visit and spending totals (Paid billing only).
pub fn spending_patterns(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            p.patient_id,
            p.name AS patient_name,
            COUNT(a.appointment_id) AS total_visits,
            SUM(b.amount) AS total_spent,
            AVG(b.amount) AS avg_spend_per_visit
         FROM patients p
         JOIN appointments a ON p.patient_id = a.patient_id
         JOIN billing b ON a.appointment_id = b.appointment_id
         WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
         GROUP BY p.patient_id, p.name
         ORDER BY total_spent DESC",
    )
}

/// Patient value segments by lifetime Paid spend.
pub fn patient_segments(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            CASE
                WHEN total_spent >= 50000 THEN 'High Value'
                WHEN total_spent >= 20000 THEN 'Medium Value'
                ELSE 'Low Value'
            END AS segment,
            COUNT(*) AS count
         FROM (
            SELECT
                p.patient_id,
                SUM(b.amount) AS total_spent
            FROM patients p
            JOIN appointments a ON p.patient_id = a.patient_id
            JOIN billing b ON a.appointment_id = b.appointment_id
            WHERE a.status = 'Completed' AND b.payment_status = 'Paid'
            GROUP BY p.patient_id
         ) patient_spending
         GROUP BY segment
         ORDER BY count DESC",
    )
}

/// Fifteen most preferred services by completed-appointment count.
pub fn service_preferences(conn: &Connection) -> Result<Table, DatabaseError> {
    query_table(
        conn,
        "SELECT
            s.name AS service_name,
            COUNT(a.appointment_id) AS preference_score
         FROM appointments a
         JOIN services s ON a.service_id = s.service_id
         WHERE a.status = 'Completed'
         GROUP BY s.service_id, s.name
         ORDER BY preference_score DESC
         LIMIT 15",
    )
}
