// libs/appointment-cell/src/services/system.rs
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use doctor_cell::{ClinicRegistry, ClinicSite, Doctor, DoctorError};

use crate::models::Appointment;
use crate::services::booking::BookingEngine;
use crate::services::conflict::BookingRejection;

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// One scheduling instance: clinic sites, doctors and their bookings.
///
/// Owned and passed explicitly; callers sharing it across tasks wrap the
/// whole value in a single lock (see `AppState`).
#[derive(Debug, Default, Clone)]
pub struct HealthSystem {
    registry: ClinicRegistry,
    bookings: BookingEngine,
}

impl HealthSystem {
    pub fn new() -> Self {
        Self::default()
    }

    // Clinic sites

    pub fn add_clinic_site(&mut self, site: ClinicSite) -> bool {
        self.registry.add_clinic_site(site)
    }

    pub fn list_clinic_sites(&self) -> Vec<ClinicSite> {
        self.registry.list_clinic_sites()
    }

    pub fn find_clinic_site(&self, code: &str) -> Option<ClinicSite> {
        self.registry.find_clinic_site(code)
    }

    // Doctors

    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<bool, DoctorError> {
        self.registry.add_doctor(doctor)
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.registry.list_doctors()
    }

    pub fn find_doctor(&self, id: &str) -> Option<Doctor> {
        self.registry.find_doctor(id)
    }

    pub fn doctors_by_clinic_site(&self, code: &str) -> Vec<Doctor> {
        self.registry.doctors_by_clinic_site(code)
    }

    // Appointments

    pub fn add_appointment(&mut self, appointment: Appointment) -> bool {
        self.bookings.admit_appointment(appointment)
    }

    pub fn book_appointment(&mut self, appointment: Appointment) -> Result<(), BookingRejection> {
        self.bookings.book(appointment)
    }

    pub fn cancel_appointment(&mut self, document: &str, schedule: NaiveDateTime) -> Option<Appointment> {
        self.bookings.cancel(document, schedule)
    }

    pub fn available_dates(&self, doctor: &Doctor, days_ahead: u32) -> Vec<NaiveDate> {
        self.available_dates_from(doctor, today(), days_ahead)
    }

    pub fn available_dates_from(&self, doctor: &Doctor, from: NaiveDate, days_ahead: u32) -> Vec<NaiveDate> {
        self.bookings.available_dates(doctor, from, days_ahead)
    }

    pub fn available_time_slots(&self, doctor: &Doctor, date: NaiveDate) -> Vec<NaiveTime> {
        self.bookings.available_time_slots(doctor, date)
    }

    pub fn peek_appointment(&self) -> Option<Appointment> {
        self.bookings.peek().cloned()
    }

    pub fn poll_appointment(&mut self) -> Option<Appointment> {
        self.bookings.pop()
    }

    pub fn preview_appointments(&self, limit: usize) -> Vec<Appointment> {
        self.bookings.preview(limit)
    }

    pub fn active_appointments(&self) -> Vec<Appointment> {
        self.bookings.active_appointments()
    }

    pub fn clear_all(&mut self) {
        self.registry.clear();
        self.bookings.clear();
        info!("Cleared all clinic sites, doctors and appointments");
    }
}
