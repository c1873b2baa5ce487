// Shared fixtures for appointment-cell tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use appointment_cell::{Appointment, AppointmentType, HealthSystem, Patient, PatientCategory};
use doctor_cell::{ClinicSite, Doctor, DoctorAvailability};

/// Monday 7 January 2030.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 7).unwrap()
}

pub fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 12).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(time(hour, minute))
}

pub fn weekdays() -> Vec<Weekday> {
    vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
}

pub fn bogota() -> ClinicSite {
    ClinicSite::new("BOG-01", "Clinica Central Bogota", "Bogota").unwrap()
}

pub fn medellin() -> ClinicSite {
    ClinicSite::new("MED-01", "Clinica Las Palmas", "Medellin").unwrap()
}

/// Mon-Fri, 08:00-12:00, 30 minute slots at BOG-01.
pub fn morning_doctor() -> Doctor {
    let availability = DoctorAvailability::new(weekdays(), time(8, 0), time(12, 0), 30).unwrap();
    Doctor::new("MED-100", "Ana Beltran", "General Medicine", "BOG-01", availability).unwrap()
}

/// Mon-Fri, 14:00-18:00, 30 minute slots at BOG-01.
pub fn afternoon_doctor() -> Doctor {
    let availability = DoctorAvailability::new(weekdays(), time(14, 0), time(18, 0), 30).unwrap();
    Doctor::new("MED-101", "Carlos Henao", "General Medicine", "BOG-01", availability).unwrap()
}

pub fn patient(document: &str, category: PatientCategory) -> Patient {
    let birth_date = NaiveDate::from_ymd_opt(1980, 3, 15).unwrap();
    Patient::new(document, "Laura Gomez", birth_date, category).unwrap()
}

pub fn appointment(document: &str, category: PatientCategory, doctor: &Doctor, schedule: NaiveDateTime) -> Appointment {
    Appointment::new(
        patient(document, category),
        doctor.clone(),
        bogota(),
        AppointmentType::GeneralConsultation,
        schedule,
    )
}

/// System with BOG-01, MED-01 and both BOG-01 doctors registered.
pub fn seeded_system() -> HealthSystem {
    let mut system = HealthSystem::new();
    assert!(system.add_clinic_site(bogota()));
    assert!(system.add_clinic_site(medellin()));
    assert_eq!(system.add_doctor(morning_doctor()), Ok(true));
    assert_eq!(system.add_doctor(afternoon_doctor()), Ok(true));
    system
}
