use serde::{Deserialize, Serialize};

use super::enums::ServiceType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub service_type: ServiceType,
    pub department_id: i64,
    pub cost: f64,
    pub duration_minutes: i64,
}
