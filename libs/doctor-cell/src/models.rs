use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DoctorError;

// ==============================================================================
// CLINIC SITES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClinicSite {
    code: String,
    name: String,
    city: String,
}

impl ClinicSite {
    pub fn new(code: &str, name: &str, city: &str) -> Result<Self, DoctorError> {
        Ok(Self {
            code: require_non_empty(code, "code")?,
            name: require_non_empty(name, "name")?,
            city: require_non_empty(city, "city")?,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Site codes are compared without regard to ASCII case.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for ClinicSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.city)
    }
}

// ==============================================================================
// DOCTORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    id: String,
    name: String,
    specialty: String,
    clinic_code: String,
    availability: DoctorAvailability,
}

impl Doctor {
    pub fn new(
        id: &str,
        name: &str,
        specialty: &str,
        clinic_code: &str,
        availability: DoctorAvailability,
    ) -> Result<Self, DoctorError> {
        Ok(Self {
            id: require_non_empty(id, "id")?,
            name: require_non_empty(name, "name")?,
            specialty: require_non_empty(specialty, "specialty")?,
            clinic_code: require_non_empty(clinic_code, "clinic_code")?,
            availability,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn clinic_code(&self) -> &str {
        &self.clinic_code
    }

    pub fn availability(&self) -> &DoctorAvailability {
        &self.availability
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id.trim())
    }

    pub fn works_at(&self, clinic_code: &str) -> bool {
        self.clinic_code.eq_ignore_ascii_case(clinic_code.trim())
    }
}

// ==============================================================================
// AVAILABILITY
// ==============================================================================

/// Recurring weekly working window, sliced into fixed-length slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorAvailability {
    available_days: Vec<Weekday>,
    start_time: NaiveTime,
    end_time: NaiveTime,
    slot_duration_minutes: i32,
}

impl DoctorAvailability {
    pub fn new(
        available_days: impl IntoIterator<Item = Weekday>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        slot_duration_minutes: i32,
    ) -> Result<Self, DoctorError> {
        let mut days: Vec<Weekday> = available_days.into_iter().collect();
        days.sort_by_key(|day| day.num_days_from_monday());
        days.dedup();

        if days.is_empty() {
            return Err(DoctorError::InvalidAvailability(
                "At least one available day is required".to_string(),
            ));
        }
        if end_time <= start_time {
            return Err(DoctorError::InvalidAvailability(
                "End time must be after start time".to_string(),
            ));
        }
        if slot_duration_minutes <= 0 {
            return Err(DoctorError::InvalidAvailability(
                "Slot duration must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            available_days: days,
            start_time,
            end_time,
            slot_duration_minutes,
        })
    }

    /// Days in Monday-first order, without duplicates.
    pub fn available_days(&self) -> Vec<Weekday> {
        self.available_days.clone()
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn slot_duration_minutes(&self) -> i32 {
        self.slot_duration_minutes
    }

    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    /// True when `time` falls inside `[start_time, end_time)`.
    pub fn within_hours(&self, time: NaiveTime) -> bool {
        time >= self.start_time && time < self.end_time
    }

    pub fn is_slot_start(&self, time: NaiveTime) -> bool {
        self.generate_slots().contains(&time)
    }

    /// Every slot start time for a working day, ascending. A slot is only
    /// emitted when it ends at or before `end_time`.
    pub fn generate_slots(&self) -> Vec<NaiveTime> {
        // Seconds since midnight so the walk can never wrap past 24:00.
        let step = i64::from(self.slot_duration_minutes) * 60;
        let end = i64::from(self.end_time.num_seconds_from_midnight());
        let mut current = i64::from(self.start_time.num_seconds_from_midnight());

        let mut slots = Vec::new();
        while current + step <= end {
            if let Some(slot) = NaiveTime::from_num_seconds_from_midnight_opt(current as u32, 0) {
                slots.push(slot);
            }
            current += step;
        }
        slots
    }
}

// ==============================================================================
// REQUEST DTOs
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClinicSiteRequest {
    pub code: String,
    pub name: String,
    pub city: String,
}

impl TryFrom<CreateClinicSiteRequest> for ClinicSite {
    type Error = DoctorError;

    fn try_from(request: CreateClinicSiteRequest) -> Result<Self, Self::Error> {
        ClinicSite::new(&request.code, &request.name, &request.city)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub clinic_code: String,
    pub available_days: Vec<Weekday>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_duration_minutes: i32,
}

impl TryFrom<CreateDoctorRequest> for Doctor {
    type Error = DoctorError;

    fn try_from(request: CreateDoctorRequest) -> Result<Self, Self::Error> {
        let availability = DoctorAvailability::new(
            request.available_days,
            request.start_time,
            request.end_time,
            request.slot_duration_minutes,
        )?;
        Doctor::new(
            &request.id,
            &request.name,
            &request.specialty,
            &request.clinic_code,
            availability,
        )
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<String, DoctorError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DoctorError::ValidationError(format!("Field {} is required", field)));
    }
    Ok(trimmed.to_string())
}
