use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Billing {
    pub id: i64,
    pub appointment_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
}
