// libs/doctor-cell/tests/registry_test.rs

use assert_matches::assert_matches;
use chrono::{NaiveTime, Weekday};
use serde_json::json;

use doctor_cell::{
    ClinicRegistry, ClinicSite, CreateDoctorRequest, Doctor, DoctorAvailability, DoctorError,
};

fn morning_shift() -> DoctorAvailability {
    DoctorAvailability::new(
        vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        30,
    )
    .unwrap()
}

fn site(code: &str, city: &str) -> ClinicSite {
    ClinicSite::new(code, &format!("Clinic {}", code), city).unwrap()
}

fn doctor(id: &str, clinic_code: &str) -> Doctor {
    Doctor::new(id, "Ana Beltran", "General Medicine", clinic_code, morning_shift()).unwrap()
}

fn registry_with_sites() -> ClinicRegistry {
    let mut registry = ClinicRegistry::new();
    assert!(registry.add_clinic_site(site("BOG-01", "Bogota")));
    assert!(registry.add_clinic_site(site("MED-01", "Medellin")));
    registry
}

#[test]
fn test_site_codes_are_unique_ignoring_case() {
    let mut registry = registry_with_sites();

    assert!(!registry.add_clinic_site(site("bog-01", "Elsewhere")));
    assert_eq!(registry.list_clinic_sites().len(), 2);
    assert_eq!(registry.find_clinic_site("BOG-01").unwrap().city(), "Bogota");
}

#[test]
fn test_find_clinic_site_ignores_case() {
    let registry = registry_with_sites();

    assert_eq!(registry.find_clinic_site("med-01").unwrap().code(), "MED-01");
    assert!(registry.find_clinic_site("CAL-01").is_none());
}

#[test]
fn test_add_doctor_requires_registered_site() {
    let mut registry = registry_with_sites();

    let result = registry.add_doctor(doctor("MED-900", "CAL-01"));

    assert_matches!(result, Err(DoctorError::UnknownClinicSite(code)) if code == "CAL-01");
    assert!(registry.list_doctors().is_empty());
}

#[test]
fn test_doctor_ids_are_unique_ignoring_case() {
    let mut registry = registry_with_sites();

    assert_eq!(registry.add_doctor(doctor("MED-100", "BOG-01")), Ok(true));
    assert_eq!(registry.add_doctor(doctor("med-100", "MED-01")), Ok(false));
    assert_eq!(registry.list_doctors().len(), 1);
    assert_eq!(registry.find_doctor("med-100").unwrap().clinic_code(), "BOG-01");
}

#[test]
fn test_doctor_site_lookup_ignores_case() {
    let mut registry = registry_with_sites();

    assert_eq!(registry.add_doctor(doctor("MED-100", "bog-01")), Ok(true));
    assert_eq!(registry.doctors_by_clinic_site("BOG-01").len(), 1);
}

#[test]
fn test_listings_preserve_insertion_order() {
    let mut registry = registry_with_sites();
    registry.add_doctor(doctor("MED-101", "BOG-01")).unwrap();
    registry.add_doctor(doctor("MED-200", "MED-01")).unwrap();
    registry.add_doctor(doctor("MED-100", "BOG-01")).unwrap();

    let ids: Vec<String> = registry.list_doctors().iter().map(|d| d.id().to_string()).collect();
    assert_eq!(ids, vec!["MED-101", "MED-200", "MED-100"]);

    let bogota: Vec<String> = registry
        .doctors_by_clinic_site("BOG-01")
        .iter()
        .map(|d| d.id().to_string())
        .collect();
    assert_eq!(bogota, vec!["MED-101", "MED-100"]);

    let codes: Vec<String> = registry.list_clinic_sites().iter().map(|s| s.code().to_string()).collect();
    assert_eq!(codes, vec!["BOG-01", "MED-01"]);
}

#[test]
fn test_returned_lists_are_independent_copies() {
    let mut registry = registry_with_sites();
    registry.add_doctor(doctor("MED-100", "BOG-01")).unwrap();

    let mut sites = registry.list_clinic_sites();
    sites.clear();
    let mut doctors = registry.list_doctors();
    doctors.push(doctor("MED-999", "BOG-01"));
    let mut by_site = registry.doctors_by_clinic_site("BOG-01");
    by_site.clear();

    assert_eq!(registry.list_clinic_sites().len(), 2);
    assert_eq!(registry.list_doctors().len(), 1);
    assert_eq!(registry.doctors_by_clinic_site("BOG-01").len(), 1);
}

#[test]
fn test_clear_empties_sites_and_doctors() {
    let mut registry = registry_with_sites();
    registry.add_doctor(doctor("MED-100", "BOG-01")).unwrap();

    registry.clear();

    assert!(registry.list_clinic_sites().is_empty());
    assert!(registry.list_doctors().is_empty());
}

#[test]
fn test_blank_fields_fail_validation() {
    assert_matches!(ClinicSite::new("  ", "Central", "Bogota"), Err(DoctorError::ValidationError(_)));
    assert_matches!(
        Doctor::new("MED-1", "", "Cardiology", "BOG-01", morning_shift()),
        Err(DoctorError::ValidationError(_))
    );

    let trimmed = ClinicSite::new(" BOG-01 ", " Central ", " Bogota ").unwrap();
    assert_eq!(trimmed.code(), "BOG-01");
    assert_eq!(trimmed.to_string(), "Central (Bogota)");
}

#[test]
fn test_create_doctor_request_builds_validated_doctor() {
    let request: CreateDoctorRequest = serde_json::from_value(json!({
        "id": "MED-300",
        "name": "Laura Munoz",
        "specialty": "Internal Medicine",
        "clinic_code": "CAL-01",
        "available_days": ["Mon", "Wed"],
        "start_time": "14:00:00",
        "end_time": "18:00:00",
        "slot_duration_minutes": 30
    }))
    .unwrap();

    let doctor = Doctor::try_from(request.clone()).unwrap();
    assert_eq!(doctor.availability().generate_slots().len(), 8);
    assert!(doctor.availability().is_available_on(Weekday::Wed));

    let mut broken = request;
    broken.available_days.clear();
    assert_matches!(Doctor::try_from(broken), Err(DoctorError::InvalidAvailability(_)));
}
