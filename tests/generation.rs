//! End-to-end properties of the generation pipeline against a real store.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lanka_analytics::db::{open_memory_database, repository};
use lanka_analytics::generator::{persist, Dataset};
use lanka_analytics::models::AppointmentStatus;

const WINDOW_DAYS: i64 = 730;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn full_run(seed: u64) -> Dataset {
    Dataset::generate(&mut StdRng::seed_from_u64(seed), anchor(), WINDOW_DAYS)
}

#[test]
fn appointment_departments_always_match() {
    let dataset = full_run(100);
    let doctor_dept: HashMap<i64, i64> = dataset
        .doctors
        .iter()
        .map(|d| (d.id, d.department_id))
        .collect();
    let service_dept: HashMap<i64, i64> = dataset
        .services
        .iter()
        .map(|s| (s.id, s.department_id))
        .collect();

    assert!(!dataset.appointments.is_empty());
    for appt in &dataset.appointments {
        assert_eq!(
            doctor_dept[&appt.doctor_id], service_dept[&appt.service_id],
            "appointment {} pairs a doctor and service from different departments",
            appt.id
        );
    }
}

#[test]
fn billing_references_only_completed_appointments() {
    let dataset = full_run(101);
    let status_by_id: HashMap<i64, AppointmentStatus> = dataset
        .appointments
        .iter()
        .map(|a| (a.id, a.status))
        .collect();

    assert!(!dataset.billing.is_empty());
    for bill in &dataset.billing {
        assert_eq!(status_by_id[&bill.appointment_id], AppointmentStatus::Completed);
    }

    let completed = dataset
        .appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .count();
    assert_eq!(dataset.billing.len(), completed);
}

#[test]
fn billing_amounts_and_payment_dates_within_bounds() {
    let dataset = full_run(102);
    let cost_by_service: HashMap<i64, f64> =
        dataset.services.iter().map(|s| (s.id, s.cost)).collect();
    let appt_by_id: HashMap<i64, _> = dataset.appointments.iter().map(|a| (a.id, a)).collect();

    for bill in &dataset.billing {
        let appt = appt_by_id[&bill.appointment_id];
        let cost = cost_by_service[&appt.service_id];

        assert!(bill.amount >= cost * 0.9 - 0.01, "amount below noise band");
        assert!(bill.amount <= cost * 1.1 + 0.01, "amount above noise band");

        let offset = (bill.payment_date - appt.appointment_date).num_days();
        assert!((0..=30).contains(&offset), "payment offset {offset} days");
    }
}

#[test]
fn regenerating_keeps_all_existing_ids() {
    let mut conn = open_memory_database().unwrap();

    let first = full_run(103);
    persist(&mut conn, &first).unwrap();
    let first_ids: HashSet<i64> = repository::get_all_appointments(&conn)
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();

    // A different seed produces a different (typically smaller or larger)
    // appointment set; upsert must overwrite matching ids and leave the
    // rest in place, never delete.
    let second = full_run(104);
    persist(&mut conn, &second).unwrap();
    let after_ids: HashSet<i64> = repository::get_all_appointments(&conn)
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();

    assert!(after_ids.is_superset(&first_ids));
    let expected = first.appointments.len().max(second.appointments.len());
    assert_eq!(after_ids.len(), expected);
}

#[test]
fn ages_and_times_within_domain_bands() {
    let dataset = full_run(105);
    for patient in &dataset.patients {
        assert!((18..=80).contains(&patient.age));
    }

    let open = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    for appt in &dataset.appointments {
        assert!(appt.appointment_time >= open);
        assert!(appt.appointment_time < close);
    }
}

#[test]
fn seeded_volume_within_expected_envelope() {
    let dataset = full_run(106);
    let days = WINDOW_DAYS + 1; // window endpoints inclusive

    // Fraction of candidate (doctor, service) pairs whose departments
    // match, given this run's random doctor assignments.
    let mut doctors_per_dept: HashMap<i64, usize> = HashMap::new();
    for doctor in &dataset.doctors {
        *doctors_per_dept.entry(doctor.department_id).or_default() += 1;
    }
    let mut services_per_dept: HashMap<i64, usize> = HashMap::new();
    for service in &dataset.services {
        *services_per_dept.entry(service.department_id).or_default() += 1;
    }
    let match_fraction: f64 = doctors_per_dept
        .iter()
        .map(|(dept, doctors)| {
            let services = services_per_dept.get(dept).copied().unwrap_or(0);
            (*doctors as f64 / dataset.doctors.len() as f64)
                * (services as f64 / dataset.services.len() as f64)
        })
        .sum();

    let count = dataset.appointments.len() as f64;
    assert!(count <= (days * 15) as f64);
    // Generous slack below the expected floor to absorb sampling noise.
    let floor = days as f64 * 5.0 * match_fraction * 0.5;
    assert!(count >= floor, "count {count} below floor {floor}");

    let completed = dataset
        .appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .count();
    assert_eq!(dataset.billing.len(), completed);
}

#[test]
fn two_year_window_matches_appointment_date_span() {
    let dataset = full_run(107);
    let start = anchor() - Duration::days(WINDOW_DAYS);
    let min = dataset
        .appointments
        .iter()
        .map(|a| a.appointment_date)
        .min()
        .unwrap();
    let max = dataset
        .appointments
        .iter()
        .map(|a| a.appointment_date)
        .max()
        .unwrap();
    assert!(min >= start);
    assert!(max <= anchor());
    // With ~10 nominal slots/day over two years, both window edges see
    // appointments in practice.
    assert!(min < start + Duration::days(14));
    assert!(max > anchor() - Duration::days(14));
}
