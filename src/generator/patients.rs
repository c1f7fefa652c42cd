use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{Gender, Patient};

const PATIENT_NAMES: [&str; 30] = [
    "A.M. Silva",
    "K.L. Fernando",
    "P.R. Perera",
    "N.S. Bandara",
    "M.K. Jayawardena",
    "S.T. Mendis",
    "R.D. Wijesekara",
    "L.A. Rathnayake",
    "C.B. Abeysekara",
    "G.M. Perera",
    "D.K. Gunasekara",
    "I.S. Fernando",
    "T.N. Silva",
    "N.R. Jayawardena",
    "C.M. Mendis",
    "G.L. Wijesekara",
    "N.A. Rathnayake",
    "I.B. Abeysekara",
    "C.M. Perera",
    "D.S. Gunasekara",
    "A.K. Silva",
    "K.M. Fernando",
    "P.S. Perera",
    "N.K. Bandara",
    "M.S. Jayawardena",
    "S.L. Mendis",
    "R.M. Wijesekara",
    "L.K. Rathnayake",
    "C.S. Abeysekara",
    "G.K. Perera",
];

/// Synthetic local mobile number: leading zero, two-digit prefix in
/// 70–77, then seven digits.
fn phone_number<R: Rng>(rng: &mut R) -> String {
    format!(
        "0{}{}",
        rng.gen_range(70..=77),
        rng.gen_range(1_000_000..=9_999_999)
    )
}

/// Generate the fixed 30-patient roster with randomized attributes.
///
/// The emergency contact is drawn independently of the patient's own
/// number, so the two never intentionally correlate.
pub fn generate_patients<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<Patient> {
    PATIENT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Patient {
            id: i as i64 + 1,
            name: (*name).to_string(),
            age: rng.gen_range(18..=80),
            gender: if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            },
            contact: phone_number(rng),
            address: format!("Address {}, Matugama", i + 1),
            registration_date: today - Duration::days(rng.gen_range(30..=1095)),
            emergency_contact: phone_number(rng),
        })
        .collect()
}
