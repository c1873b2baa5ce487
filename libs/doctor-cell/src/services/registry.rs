use tracing::{debug, info, warn};

use crate::error::DoctorError;
use crate::models::{ClinicSite, Doctor};

/// In-memory catalog of clinic sites and the doctors working at them.
///
/// Keys (site code, doctor id) are matched without regard to ASCII case.
/// Every list accessor hands back an owned copy in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ClinicRegistry {
    sites: Vec<ClinicSite>,
    doctors: Vec<Doctor>,
}

impl ClinicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false, leaving the registry untouched, when the code is taken.
    pub fn add_clinic_site(&mut self, site: ClinicSite) -> bool {
        if self.sites.iter().any(|existing| existing.has_code(site.code())) {
            debug!("Clinic site {} already registered", site.code());
            return false;
        }

        info!("Registered clinic site {} ({})", site.code(), site.city());
        self.sites.push(site);
        true
    }

    pub fn find_clinic_site(&self, code: &str) -> Option<ClinicSite> {
        self.sites.iter().find(|site| site.has_code(code)).cloned()
    }

    pub fn list_clinic_sites(&self) -> Vec<ClinicSite> {
        self.sites.clone()
    }

    /// Fails with `UnknownClinicSite` when the doctor's site is not
    /// registered; returns `Ok(false)` when the doctor id is taken.
    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<bool, DoctorError> {
        if self.find_clinic_site(doctor.clinic_code()).is_none() {
            warn!(
                "Rejected doctor {}: clinic site {} does not exist",
                doctor.id(),
                doctor.clinic_code()
            );
            return Err(DoctorError::UnknownClinicSite(doctor.clinic_code().to_string()));
        }

        if self.doctors.iter().any(|existing| existing.has_id(doctor.id())) {
            debug!("Doctor {} already registered", doctor.id());
            return Ok(false);
        }

        info!("Registered doctor {} at {}", doctor.id(), doctor.clinic_code());
        self.doctors.push(doctor);
        Ok(true)
    }

    pub fn find_doctor(&self, id: &str) -> Option<Doctor> {
        self.doctors.iter().find(|doctor| doctor.has_id(id)).cloned()
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }

    pub fn doctors_by_clinic_site(&self, code: &str) -> Vec<Doctor> {
        self.doctors
            .iter()
            .filter(|doctor| doctor.works_at(code))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.sites.clear();
        self.doctors.clear();
    }
}
