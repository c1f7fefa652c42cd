//! Chart directives for the dashboard frontend.
//!
//! The presentation layer receives a [`Report`] per widget: the tabular
//! query result plus a chart-type and axis-mapping directive telling it
//! which columns to plot. Nothing here renders anything.

use rusqlite::Connection;
use serde::Serialize;

use crate::analytics::{self, Table};
use crate::db::DatabaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Scatter,
    Histogram,
    Treemap,
}

/// Axis mapping for one chart. For pie charts `x` is the label column
/// and `y` the value column; `color` adds a series/grouping dimension.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub chart_type: ChartType,
    pub title: String,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartSpec {
    fn new(chart_type: ChartType, title: &str, x: &str, y: &str) -> Self {
        ChartSpec {
            chart_type,
            title: title.to_string(),
            x: x.to_string(),
            y: y.to_string(),
            color: None,
        }
    }

    fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// One dashboard widget: directive plus data.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub spec: ChartSpec,
    pub data: Table,
}

pub fn overview_reports(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    Ok(vec![
        Report {
            spec: ChartSpec::new(ChartType::Line, "Monthly Revenue Trend", "month", "revenue"),
            data: analytics::overview::revenue_trend(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Pie,
                "Service Utilization",
                "service_name",
                "count",
            ),
            data: analytics::overview::service_utilization(conn)?,
        },
    ])
}

pub fn service_reports(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    Ok(vec![
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Top Services by Utilization",
                "service_name",
                "appointment_count",
            ),
            data: analytics::services::top_services(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Revenue by Service",
                "service_name",
                "total_revenue",
            ),
            data: analytics::services::revenue_by_service(conn)?,
        },
        Report {
            spec: ChartSpec::new(ChartType::Line, "Service Trends", "month", "appointments")
                .with_color("service_name"),
            data: analytics::services::service_trends(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Treemap,
                "Department / Service Distribution",
                "department_name",
                "count",
            )
            .with_color("service_name"),
            data: analytics::services::department_service_distribution(conn)?,
        },
    ])
}

pub fn doctor_reports(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    Ok(vec![
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Top Doctors by Revenue",
                "doctor_name",
                "total_revenue",
            ),
            data: analytics::doctors::top_doctors(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Scatter,
                "Doctor Performance",
                "appointments_handled",
                "revenue_generated",
            )
            .with_color("specialization"),
            data: analytics::doctors::doctor_performance_metrics(conn)?,
        },
        Report {
            spec: ChartSpec::new(ChartType::Line, "Doctor Revenue Trends", "month", "revenue")
                .with_color("doctor_name"),
            data: analytics::doctors::doctor_revenue_trends(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Average Revenue per Doctor by Department",
                "department_name",
                "avg_revenue_per_doctor",
            ),
            data: analytics::doctors::department_doctor_performance(conn)?,
        },
    ])
}

pub fn patient_trend_reports(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    Ok(vec![
        Report {
            spec: ChartSpec::new(
                ChartType::Line,
                "Daily Appointment Trends",
                "date",
                "appointments",
            ),
            data: analytics::patients::daily_appointment_trends(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Weekly Appointment Patterns",
                "day_of_week",
                "appointments",
            ),
            data: analytics::patients::weekly_appointment_patterns(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Line,
                "Monthly Appointment Trends",
                "month",
                "appointments",
            ),
            data: analytics::patients::monthly_appointment_trends(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Pie,
                "Seasonal Appointments",
                "season",
                "appointments",
            ),
            data: analytics::patients::seasonal_appointment_analysis(conn)?,
        },
    ])
}

pub fn patient_behavior_reports(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    Ok(vec![
        Report {
            spec: ChartSpec::new(
                ChartType::Histogram,
                "Visit Frequency Distribution",
                "visit_count",
                "patient_count",
            ),
            data: analytics::patients::visit_frequency(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Scatter,
                "Patient Spending Patterns",
                "total_visits",
                "total_spent",
            ),
            data: analytics::patients::spending_patterns(conn)?,
        },
        Report {
            spec: ChartSpec::new(ChartType::Pie, "Patient Segments", "segment", "count"),
            data: analytics::patients::patient_segments(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Service Preferences",
                "service_name",
                "preference_score",
            ),
            data: analytics::patients::service_preferences(conn)?,
        },
    ])
}

pub fn revenue_reports(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    Ok(vec![
        Report {
            spec: ChartSpec::new(
                ChartType::Line,
                "Monthly Revenue Trends",
                "month",
                "revenue",
            ),
            data: analytics::revenue::monthly_revenue_trends(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Revenue by Department",
                "department_name",
                "total_revenue",
            ),
            data: analytics::revenue::revenue_by_department(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Pie,
                "Revenue by Service Type",
                "service_type",
                "revenue",
            ),
            data: analytics::revenue::revenue_by_service_type(conn)?,
        },
        Report {
            spec: ChartSpec::new(
                ChartType::Bar,
                "Revenue per Doctor",
                "doctor_name",
                "total_revenue",
            ),
            data: analytics::revenue::revenue_per_doctor(conn)?,
        },
    ])
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
        let dataset = Dataset::generate(&mut StdRng::seed_from_u64(71), today, 365);
        persist(&mut conn, &dataset).unwrap();
        conn
    }

    #[test]
    fn every_directive_references_existing_columns() {
        let conn = seeded_store();
        let all_reports = [
            overview_reports(&conn).unwrap(),
            service_reports(&conn).unwrap(),
            doctor_reports(&conn).unwrap(),
            patient_trend_reports(&conn).unwrap(),
            patient_behavior_reports(&conn).unwrap(),
            revenue_reports(&conn).unwrap(),
        ];

        for report in all_reports.iter().flatten() {
            let title = &report.spec.title;
            assert!(
                report.data.column(&report.spec.x).is_some(),
                "{title}: x column {} missing",
                report.spec.x
            );
            assert!(
                report.data.column(&report.spec.y).is_some(),
                "{title}: y column {} missing",
                report.spec.y
            );
            if let Some(color) = &report.spec.color {
                assert!(
                    report.data.column(color).is_some(),
                    "{title}: color column {color} missing"
                );
            }
        }
    }

    #[test]
    fn reports_serialize_to_json() {
        let conn = seeded_store();
        let reports = overview_reports(&conn).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        let first = &json[0];
        assert_eq!(first["spec"]["chart_type"], "line");
        assert_eq!(first["spec"]["x"], "month");
        assert!(first["data"]["columns"].is_array());
    }
}
