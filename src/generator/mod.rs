//! Synthetic data pipeline for the hospital schema.
//!
//! Six steps in strict dependency order: departments → doctors/services →
//! patients → appointments → billing. Each step is a pure function taking
//! an explicit RNG, so a seeded `StdRng` reproduces the full dataset.

pub mod appointments;
pub mod billing;
pub mod departments;
pub mod doctors;
pub mod patients;
pub mod services;

use chrono::NaiveDate;
use rand::Rng;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::{repository, DatabaseError};
use crate::models::*;

/// One full generation run: all six entity collections, referentially
/// consistent with each other.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub departments: Vec<Department>,
    pub doctors: Vec<Doctor>,
    pub services: Vec<Service>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub billing: Vec<Billing>,
}

impl Dataset {
    /// Run the pipeline. `today` anchors every relative date draw
    /// (hire dates, registration dates, the appointment window), and
    /// `window_days` is the length of the appointment window ending at
    /// `today`.
    pub fn generate<R: Rng>(rng: &mut R, today: NaiveDate, window_days: i64) -> Self {
        let departments = departments::department_catalog();
        let doctors = doctors::generate_doctors(rng, today, &departments);
        let services = services::service_catalog();
        let patients = patients::generate_patients(rng, today);
        let appointments = appointments::generate_appointments(
            rng,
            today,
            window_days,
            &patients,
            &doctors,
            &services,
        );
        let billing = billing::generate_billing(rng, &appointments, &services);

        tracing::debug!(
            appointments = appointments.len(),
            billing = billing.len(),
            "Generated dataset"
        );

        Dataset {
            departments,
            doctors,
            services,
            patients,
            appointments,
            billing,
        }
    }
}

/// Row counts written by a persistence run.
#[derive(Debug, Clone, Serialize)]
pub struct PersistSummary {
    pub departments: usize,
    pub doctors: usize,
    pub services: usize,
    pub patients: usize,
    pub appointments: usize,
    pub billing: usize,
}

impl PersistSummary {
    pub fn total(&self) -> usize {
        self.departments
            + self.doctors
            + self.services
            + self.patients
            + self.appointments
            + self.billing
    }
}

/// Upsert all six collections inside a single transaction.
///
/// INSERT OR REPLACE by primary key: rows with matching ids are
/// overwritten, rows absent from this run are left untouched. Any failure
/// rolls back the whole run.
pub fn persist(conn: &mut Connection, dataset: &Dataset) -> Result<PersistSummary, DatabaseError> {
    let tx = conn.transaction()?;

    let summary = PersistSummary {
        departments: repository::upsert_departments(&tx, &dataset.departments)?,
        doctors: repository::upsert_doctors(&tx, &dataset.doctors)?,
        services: repository::upsert_services(&tx, &dataset.services)?,
        patients: repository::upsert_patients(&tx, &dataset.patients)?,
        appointments: repository::upsert_appointments(&tx, &dataset.appointments)?,
        billing: repository::upsert_billing(&tx, &dataset.billing)?,
    };

    tx.commit()?;

    tracing::info!(
        departments = summary.departments,
        doctors = summary.doctors,
        services = summary.services,
        patients = summary.patients,
        appointments = summary.appointments,
        billing = summary.billing,
        "Persisted dataset"
    );

    Ok(summary)
}
