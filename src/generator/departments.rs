use crate::models::Department;

/// Fixed catalog of the hospital's ten departments.
///
/// Ids are stable and never randomized — every downstream entity
/// (doctors, services, and through them appointments) references them.
pub fn department_catalog() -> Vec<Department> {
    [
        (1, "General Medicine", "Ground Floor"),
        (2, "Surgery", "First Floor"),
        (3, "Cardiology", "Second Floor"),
        (4, "Pediatrics", "Ground Floor"),
        (5, "Orthopedics", "First Floor"),
        (6, "Gynecology", "Second Floor"),
        (7, "Radiology", "Basement"),
        (8, "Laboratory", "Basement"),
        (9, "Pharmacy", "Ground Floor"),
        (10, "Emergency", "Ground Floor"),
    ]
    .iter()
    .map(|&(id, name, location)| Department {
        id,
        name: name.to_string(),
        location: location.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exactly_ten_departments_with_fixed_ids() {
        let departments = department_catalog();
        assert_eq!(departments.len(), 10);
        for (i, dept) in departments.iter().enumerate() {
            assert_eq!(dept.id, i as i64 + 1);
        }
    }

    #[test]
    fn department_names_are_unique() {
        let departments = department_catalog();
        let names: HashSet<_> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), departments.len());
    }
}
