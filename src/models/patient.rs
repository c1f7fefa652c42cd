use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Gender;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    pub registration_date: NaiveDate,
    pub emergency_contact: String,
}
