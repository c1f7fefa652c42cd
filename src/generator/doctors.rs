use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{Department, Doctor};

const DOCTOR_NAMES: [&str; 20] = [
    "Dr. Anil Perera",
    "Dr. Sunil Fernando",
    "Dr. Priya Silva",
    "Dr. Rajith Bandara",
    "Dr. Nimal Jayawardena",
    "Dr. Kamal Mendis",
    "Dr. Dilini Wijesekara",
    "Dr. Ashan Rathnayake",
    "Dr. Tharindu Abeysekara",
    "Dr. Sanduni Perera",
    "Dr. Dinesh Gunasekara",
    "Dr. Lakshmi Fernando",
    "Dr. Ramesh Silva",
    "Dr. Nadeeka Jayawardena",
    "Dr. Chaminda Mendis",
    "Dr. Gayani Wijesekara",
    "Dr. Nuwan Rathnayake",
    "Dr. Ishara Abeysekara",
    "Dr. Chathura Perera",
    "Dr. Dinusha Gunasekara",
];

const SPECIALIZATIONS: [&str; 10] = [
    "General Physician",
    "Cardiologist",
    "Surgeon",
    "Pediatrician",
    "Orthopedic Surgeon",
    "Gynecologist",
    "Radiologist",
    "Pathologist",
    "Emergency Medicine",
    "Internal Medicine",
];

/// Generate the fixed 20-doctor roster with randomized attributes.
///
/// Department and specialization are drawn independently of each other,
/// so a doctor's specialization may not match their department. Hire
/// dates fall 1–7 years before `today`.
pub fn generate_doctors<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    departments: &[Department],
) -> Vec<Doctor> {
    DOCTOR_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let dept = &departments[rng.gen_range(0..departments.len())];
            Doctor {
                id: i as i64 + 1,
                name: (*name).to_string(),
                specialization: SPECIALIZATIONS[rng.gen_range(0..SPECIALIZATIONS.len())]
                    .to_string(),
                department_id: dept.id,
                hire_date: today - Duration::days(rng.gen_range(365..=2555)),
                salary: rng.gen_range(80_000..=200_000) as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::departments::department_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn twenty_doctors_with_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let doctors = generate_doctors(&mut rng, anchor(), &department_catalog());
        assert_eq!(doctors.len(), 20);
        for (i, doctor) in doctors.iter().enumerate() {
            assert_eq!(doctor.id, i as i64 + 1);
        }
    }

    #[test]
    fn department_references_are_valid() {
        let departments = department_catalog();
        let mut rng = StdRng::seed_from_u64(2);
        let doctors = generate_doctors(&mut rng, anchor(), &departments);
        for doctor in &doctors {
            assert!(departments.iter().any(|d| d.id == doctor.department_id));
        }
    }

    #[test]
    fn hire_dates_and_salaries_within_bands() {
        let today = anchor();
        let mut rng = StdRng::seed_from_u64(3);
        let doctors = generate_doctors(&mut rng, today, &department_catalog());
        for doctor in &doctors {
            let days_back = (today - doctor.hire_date).num_days();
            assert!((365..=2555).contains(&days_back), "hire_date out of band");
            assert!(
                (80_000.0..=200_000.0).contains(&doctor.salary),
                "salary out of band"
            );
            assert!(SPECIALIZATIONS.contains(&doctor.specialization.as_str()));
        }
    }
}
