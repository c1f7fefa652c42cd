use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub department_id: i64,
    pub hire_date: NaiveDate,
    pub salary: f64,
}
