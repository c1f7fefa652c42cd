use std::collections::HashMap;

use chrono::Duration;
use rand::Rng;

use crate::models::{Appointment, AppointmentStatus, Billing, PaymentMethod, PaymentStatus, Service};

/// Paid outweighs the other outcomes 3:1:1.
const PAYMENT_STATUS_POOL: [PaymentStatus; 5] = [
    PaymentStatus::Paid,
    PaymentStatus::Paid,
    PaymentStatus::Paid,
    PaymentStatus::Pending,
    PaymentStatus::Overdue,
];

const PAYMENT_METHODS: [PaymentMethod; 4] = [
    PaymentMethod::Cash,
    PaymentMethod::Card,
    PaymentMethod::BankTransfer,
    PaymentMethod::Insurance,
];

/// Generate billing records for Completed appointments only.
///
/// The amount is the service's catalog cost scaled by uniform noise in
/// [0.9, 1.1] and rounded to cents; an appointment whose service id has
/// no cost entry bills 0 rather than failing. Payment lands 0–30 days
/// after the appointment. Ids are dense over the filtered set, so they
/// do not line up with appointment ids.
pub fn generate_billing<R: Rng>(
    rng: &mut R,
    appointments: &[Appointment],
    services: &[Service],
) -> Vec<Billing> {
    let cost_by_service: HashMap<i64, f64> =
        services.iter().map(|s| (s.id, s.cost)).collect();

    let mut billing = Vec::new();
    for appt in appointments {
        if appt.status != AppointmentStatus::Completed {
            continue;
        }

        let cost = cost_by_service.get(&appt.service_id).copied().unwrap_or(0.0);
        let amount = (cost * rng.gen_range(0.9..=1.1) * 100.0).round() / 100.0;

        billing.push(Billing {
            id: billing.len() as i64 + 1,
            appointment_id: appt.id,
            amount,
            payment_date: appt.appointment_date + Duration::days(rng.gen_range(0..=30)),
            payment_status: PAYMENT_STATUS_POOL[rng.gen_range(0..PAYMENT_STATUS_POOL.len())],
            payment_method: PAYMENT_METHODS[rng.gen_range(0..PAYMENT_METHODS.len())],
        });
    }

    billing
}
