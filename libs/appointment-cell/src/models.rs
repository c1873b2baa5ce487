// libs/appointment-cell/src/models.rs
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use doctor_cell::{ClinicSite, Doctor};

use crate::error::AppointmentError;

// ==============================================================================
// PATIENT CATEGORY & PRIORITY
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientCategory {
    Emergency,
    Senior,
    Adult,
    Minor,
}

impl PatientCategory {
    pub const SENIOR_MIN_AGE: u32 = 60;
    pub const ADULT_MIN_AGE: u32 = 15;

    pub fn from_age(age: u32) -> Self {
        if age < Self::ADULT_MIN_AGE {
            PatientCategory::Minor
        } else if age < Self::SENIOR_MIN_AGE {
            PatientCategory::Adult
        } else {
            PatientCategory::Senior
        }
    }

    /// Age-derived category as of `as_of`. Never yields `Emergency`.
    pub fn from_birth_date(birth_date: NaiveDate, as_of: NaiveDate) -> Self {
        Self::from_age(age_on(birth_date, as_of))
    }
}

impl fmt::Display for PatientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientCategory::Emergency => write!(f, "emergency"),
            PatientCategory::Senior => write!(f, "senior"),
            PatientCategory::Adult => write!(f, "adult"),
            PatientCategory::Minor => write!(f, "minor"),
        }
    }
}

/// Completed years between `birth_date` and `as_of`; zero when born later.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    if birth_date >= as_of {
        return 0;
    }
    let mut years = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Emergency,
    Senior,
    Adult,
    Minor,
}

impl PriorityLevel {
    /// Lower weight is served first.
    pub fn weight(&self) -> u8 {
        match self {
            PriorityLevel::Emergency => 0,
            PriorityLevel::Senior => 1,
            PriorityLevel::Adult => 2,
            PriorityLevel::Minor => 3,
        }
    }

    pub fn from_category(category: PatientCategory) -> Self {
        match category {
            PatientCategory::Emergency => PriorityLevel::Emergency,
            PatientCategory::Senior => PriorityLevel::Senior,
            PatientCategory::Adult => PriorityLevel::Adult,
            PatientCategory::Minor => PriorityLevel::Minor,
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::Emergency => write!(f, "Emergency"),
            PriorityLevel::Senior => write!(f, "Senior"),
            PriorityLevel::Adult => write!(f, "Adult"),
            PriorityLevel::Minor => write!(f, "Minor"),
        }
    }
}

// ==============================================================================
// APPOINTMENT TYPE
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum AppointmentType {
    #[serde(alias = "general_consultation", alias = "consultation", alias = "general")]
    GeneralConsultation,

    #[serde(alias = "follow_up", alias = "followup")]
    FollowUp,

    #[serde(alias = "specialist", alias = "specialty_consultation")]
    Specialist,

    #[serde(alias = "procedure")]
    Procedure,

    #[serde(alias = "vaccination")]
    Vaccination,

    #[serde(alias = "health_screening", alias = "screening")]
    HealthScreening,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::GeneralConsultation => write!(f, "GeneralConsultation"),
            AppointmentType::FollowUp => write!(f, "FollowUp"),
            AppointmentType::Specialist => write!(f, "Specialist"),
            AppointmentType::Procedure => write!(f, "Procedure"),
            AppointmentType::Vaccination => write!(f, "Vaccination"),
            AppointmentType::HealthScreening => write!(f, "HealthScreening"),
        }
    }
}

// ==============================================================================
// PATIENT
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    document: String,
    name: String,
    birth_date: NaiveDate,
    category: PatientCategory,
}

impl Patient {
    pub fn new(
        document: &str,
        name: &str,
        birth_date: NaiveDate,
        category: PatientCategory,
    ) -> Result<Self, AppointmentError> {
        Ok(Self {
            document: require_non_empty(document, "document")?,
            name: require_non_empty(name, "name")?,
            birth_date,
            category,
        })
    }

    /// Patient whose category comes from their age on `as_of`.
    pub fn with_derived_category(
        document: &str,
        name: &str,
        birth_date: NaiveDate,
        as_of: NaiveDate,
    ) -> Result<Self, AppointmentError> {
        Self::new(document, name, birth_date, PatientCategory::from_birth_date(birth_date, as_of))
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn category(&self) -> PatientCategory {
        self.category
    }
}

// ==============================================================================
// APPOINTMENT
// ==============================================================================

/// A booking of one patient with one doctor at one clinic site.
///
/// Two appointments are the same booking when they share the patient
/// document and the scheduled date-time; `PartialEq` and `Hash` follow that
/// identity. The priority is fixed when the appointment is built.
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    patient: Patient,
    doctor: Doctor,
    clinic: ClinicSite,
    appointment_type: AppointmentType,
    schedule: NaiveDateTime,
    priority: PriorityLevel,
}

impl Appointment {
    pub fn new(
        patient: Patient,
        doctor: Doctor,
        clinic: ClinicSite,
        appointment_type: AppointmentType,
        schedule: NaiveDateTime,
    ) -> Self {
        let priority = PriorityLevel::from_category(patient.category());
        Self {
            patient,
            doctor,
            clinic,
            appointment_type,
            schedule,
            priority,
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn clinic(&self) -> &ClinicSite {
        &self.clinic
    }

    pub fn appointment_type(&self) -> AppointmentType {
        self.appointment_type
    }

    pub fn schedule(&self) -> NaiveDateTime {
        self.schedule
    }

    pub fn priority(&self) -> PriorityLevel {
        self.priority
    }

    pub fn is_for(&self, document: &str, schedule: NaiveDateTime) -> bool {
        self.patient.document() == document && self.schedule == schedule
    }
}

impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.is_for(other.patient.document(), other.schedule)
    }
}

impl Eq for Appointment {}

impl Hash for Appointment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.patient.document().hash(state);
        self.schedule.hash(state);
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | Priority: {} | Doctor: {} | Type: {} | Site: {} | Date: {}",
            self.patient.name(),
            self.patient.document(),
            self.priority,
            self.doctor.name(),
            self.appointment_type,
            self.clinic,
            self.schedule.format("%Y-%m-%d %H:%M"),
        )
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRequest {
    pub document: String,
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub emergency: bool,
}

impl PatientRequest {
    pub fn into_patient(self, as_of: NaiveDate) -> Result<Patient, AppointmentError> {
        if self.emergency {
            Patient::new(&self.document, &self.name, self.birth_date, PatientCategory::Emergency)
        } else {
            Patient::with_derived_category(&self.document, &self.name, self.birth_date, as_of)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient: PatientRequest,
    pub doctor_id: String,
    pub clinic_code: Option<String>, // Defaults to the doctor's own site
    pub appointment_type: AppointmentType,
    pub scheduled_at: NaiveDateTime,
}

fn require_non_empty(value: &str, field: &str) -> Result<String, AppointmentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppointmentError::ValidationError(format!("Field {} is required", field)));
    }
    Ok(trimmed.to_string())
}
