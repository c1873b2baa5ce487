// libs/appointment-cell/src/services/conflict.rs
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use doctor_cell::Doctor;

use crate::models::Appointment;

/// Why an otherwise valid appointment could not be admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingRejection {
    DuplicateBooking,
    DayNotAvailable,
    OutsideWorkingHours,
    OffGridTime,
    SlotTaken,
}

impl fmt::Display for BookingRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingRejection::DuplicateBooking => {
                write!(f, "Patient already has an appointment at this time")
            }
            BookingRejection::DayNotAvailable => write!(f, "Doctor does not work on this day"),
            BookingRejection::OutsideWorkingHours => {
                write!(f, "Requested time is outside the doctor's working hours")
            }
            BookingRejection::OffGridTime => {
                write!(f, "Requested time does not match a slot start")
            }
            BookingRejection::SlotTaken => write!(f, "Appointment slot not available"),
        }
    }
}

/// Runs every admission rule, in order, against the active appointments.
pub fn check_admission(
    active: &[Appointment],
    candidate: &Appointment,
) -> Result<(), BookingRejection> {
    if active.iter().any(|existing| existing == candidate) {
        return Err(BookingRejection::DuplicateBooking);
    }

    let availability = candidate.doctor().availability();
    let schedule = candidate.schedule();

    if !availability.is_available_on(schedule.weekday()) {
        return Err(BookingRejection::DayNotAvailable);
    }

    let time = schedule.time();
    if !availability.within_hours(time) {
        return Err(BookingRejection::OutsideWorkingHours);
    }
    if !availability.is_slot_start(time) {
        return Err(BookingRejection::OffGridTime);
    }

    if !is_slot_free(active, candidate.doctor(), schedule) {
        return Err(BookingRejection::SlotTaken);
    }

    Ok(())
}

/// True unless an active appointment holds this doctor at exactly `schedule`.
pub fn is_slot_free(active: &[Appointment], doctor: &Doctor, schedule: NaiveDateTime) -> bool {
    !active
        .iter()
        .any(|existing| existing.doctor().has_id(doctor.id()) && existing.schedule() == schedule)
}
