use crate::models::{Service, ServiceType};

/// Fixed, hand-curated service catalog.
///
/// Costs, durations and department assignments are domain knowledge
/// (major surgery costs far more than a follow-up consultation) and are
/// never randomized; downstream revenue reports depend on these values.
/// Ids are assigned sequentially over the list.
pub fn service_catalog() -> Vec<Service> {
    use ServiceType::*;

    let entries: [(&str, ServiceType, i64, f64, i64); 28] = [
        // General Medicine
        ("General Consultation", Consultation, 1, 1500.0, 30),
        ("Follow-up Consultation", Consultation, 1, 1000.0, 20),
        ("Health Check-up", CheckUp, 1, 2500.0, 60),
        // Surgery
        ("Minor Surgery", Surgery, 2, 25000.0, 120),
        ("Major Surgery", Surgery, 2, 75000.0, 240),
        ("Surgical Consultation", Consultation, 2, 2000.0, 45),
        // Cardiology
        ("ECG", Diagnostic, 3, 3000.0, 30),
        ("Echocardiogram", Diagnostic, 3, 8000.0, 60),
        ("Cardiac Consultation", Consultation, 3, 2500.0, 45),
        // Pediatrics
        ("Child Consultation", Consultation, 4, 1200.0, 30),
        ("Vaccination", Treatment, 4, 800.0, 15),
        ("Growth Monitoring", CheckUp, 4, 1500.0, 45),
        // Orthopedics
        ("X-Ray", Diagnostic, 5, 2500.0, 30),
        ("Physiotherapy", Treatment, 5, 2000.0, 60),
        ("Orthopedic Consultation", Consultation, 5, 2000.0, 45),
        // Gynecology
        ("Gynecological Consultation", Consultation, 6, 2000.0, 45),
        ("Ultrasound Scan", Diagnostic, 6, 5000.0, 45),
        ("Prenatal Care", CheckUp, 6, 3000.0, 60),
        // Radiology
        ("CT Scan", Diagnostic, 7, 15000.0, 45),
        ("MRI Scan", Diagnostic, 7, 25000.0, 60),
        ("Ultrasound", Diagnostic, 7, 4000.0, 30),
        // Laboratory
        ("Blood Test", Diagnostic, 8, 1500.0, 15),
        ("Urine Test", Diagnostic, 8, 800.0, 15),
        ("Stool Test", Diagnostic, 8, 1000.0, 15),
        // Pharmacy
        ("Medicine Dispensing", Treatment, 9, 500.0, 10),
        ("Prescription Review", Consultation, 9, 300.0, 15),
        // Emergency
        ("Emergency Consultation", Consultation, 10, 3000.0, 30),
        ("Emergency Treatment", Treatment, 10, 5000.0, 60),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (name, service_type, department_id, cost, duration))| Service {
            id: i as i64 + 1,
            name: (*name).to_string(),
            service_type: *service_type,
            department_id: *department_id,
            cost: *cost,
            duration_minutes: *duration,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::departments::department_catalog;

    #[test]
    fn sequential_ids_over_fixed_list() {
        let services = service_catalog();
        assert_eq!(services.len(), 28);
        for (i, service) in services.iter().enumerate() {
            assert_eq!(service.id, i as i64 + 1);
        }
    }

    #[test]
    fn every_service_references_a_department() {
        let departments = department_catalog();
        for service in service_catalog() {
            assert!(departments.iter().any(|d| d.id == service.department_id));
        }
    }

    #[test]
    fn costs_encode_domain_knowledge() {
        let services = service_catalog();
        let cost = |name: &str| {
            services
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.cost)
                .unwrap()
        };
        assert!(cost("Major Surgery") > cost("Minor Surgery"));
        assert!(cost("Minor Surgery") > cost("Follow-up Consultation"));
        assert_eq!(cost("Major Surgery"), 75000.0);
    }
}
