use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

use crate::models::{Appointment, AppointmentStatus, Doctor, Patient, Service};

/// Completed outweighs the other outcomes 3:1:1.
const STATUS_POOL: [AppointmentStatus; 5] = [
    AppointmentStatus::Completed,
    AppointmentStatus::Completed,
    AppointmentStatus::Completed,
    AppointmentStatus::NoShow,
    AppointmentStatus::Cancelled,
];

const NOTES_POOL: [Option<&str>; 4] = [
    None,
    Some("Follow-up required"),
    Some("Patient requested"),
    Some("Regular check-up"),
];

/// Generate appointments over the `window_days`-day window ending at
/// `today` (both endpoints included).
///
/// Each day draws a nominal 5–15 candidate slots. Every candidate picks
/// a patient, doctor and service independently and uniformly; a candidate
/// whose service belongs to a different department than its doctor is
/// discarded outright — no retry, no correction — so realized daily
/// volume sits below the nominal draw by the department-mismatch rate.
///
/// Ids come from a single counter advanced per kept candidate, day-major,
/// so id order matches chronological order.
pub fn generate_appointments<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    window_days: i64,
    patients: &[Patient],
    doctors: &[Doctor],
    services: &[Service],
) -> Vec<Appointment> {
    let mut appointments = Vec::new();
    let mut next_id: i64 = 1;

    let mut day = today - Duration::days(window_days);
    while day <= today {
        let daily_slots = rng.gen_range(5..=15);

        for _ in 0..daily_slots {
            let patient = &patients[rng.gen_range(0..patients.len())];
            let doctor = &doctors[rng.gen_range(0..doctors.len())];
            let service = &services[rng.gen_range(0..services.len())];

            if service.department_id != doctor.department_id {
                continue;
            }

            // Business hours, whole minutes: 08:00–17:59.
            let appointment_time =
                NaiveTime::from_hms_opt(rng.gen_range(8..=17), rng.gen_range(0..=59), 0)
                    .unwrap_or_default();

            appointments.push(Appointment {
                id: next_id,
                patient_id: patient.id,
                doctor_id: doctor.id,
                service_id: service.id,
                appointment_date: day,
                appointment_time,
                status: STATUS_POOL[rng.gen_range(0..STATUS_POOL.len())],
                notes: NOTES_POOL[rng.gen_range(0..NOTES_POOL.len())].map(String::from),
            });
            next_id += 1;
        }

        day += Duration::days(1);
    }

    appointments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{
        departments::department_catalog, doctors::generate_doctors, patients::generate_patients,
        services::service_catalog,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture(seed: u64, window_days: i64) -> (Vec<Doctor>, Vec<Service>, Vec<Appointment>) {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let departments = department_catalog();
        let doctors = generate_doctors(&mut rng, today, &departments);
        let services = service_catalog();
        let patients = generate_patients(&mut rng, today);
        let appointments = generate_appointments(
            &mut rng,
            today,
            window_days,
            &patients,
            &doctors,
            &services,
        );
        (doctors, services, appointments)
    }

    #[test]
    fn service_department_always_matches_doctor_department() {
        let (doctors, services, appointments) = fixture(11, 120);
        assert!(!appointments.is_empty());
        for appt in &appointments {
            let doctor = doctors.iter().find(|d| d.id == appt.doctor_id).unwrap();
            let service = services.iter().find(|s| s.id == appt.service_id).unwrap();
            assert_eq!(service.department_id, doctor.department_id);
        }
    }

    #[test]
    fn ids_are_dense_and_chronological() {
        let (_, _, appointments) = fixture(12, 60);
        for (i, appt) in appointments.iter().enumerate() {
            assert_eq!(appt.id, i as i64 + 1);
        }
        for pair in appointments.windows(2) {
            assert!(pair[0].appointment_date <= pair[1].appointment_date);
        }
    }

    #[test]
    fn times_within_business_hours() {
        let (_, _, appointments) = fixture(13, 60);
        let open = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        for appt in &appointments {
            assert!(appt.appointment_time >= open && appt.appointment_time < close);
        }
    }

    #[test]
    fn volume_stays_below_nominal_draw() {
        let window_days = 365;
        let (_, _, appointments) = fixture(14, window_days);
        let days = window_days + 1; // both endpoints inclusive
        assert!(appointments.len() as i64 <= days * 15);
        // With mismatched candidates discarded, realized volume lands well
        // under the nominal minimum of 5/day.
        assert!((appointments.len() as i64) < days * 5);
        assert!(!appointments.is_empty());
    }

    #[test]
    fn dates_stay_inside_window() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let (_, _, appointments) = fixture(15, 90);
        let start = today - Duration::days(90);
        for appt in &appointments {
            assert!(appt.appointment_date >= start && appt.appointment_date <= today);
        }
    }
}
