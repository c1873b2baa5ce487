// libs/appointment-cell/src/services/booking.rs
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

use booking_queue_cell::PriorityQueue;
use doctor_cell::Doctor;

use crate::models::Appointment;
use crate::services::conflict::{self, BookingRejection};
use crate::services::ordering::compare_appointments;

/// Owns the active appointments and the service-order queue over them.
///
/// Both collections always hold the same set: every insertion and removal
/// touches both within one call.
#[derive(Debug, Clone)]
pub struct BookingEngine {
    active: Vec<Appointment>,
    queue: PriorityQueue<Appointment>,
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingEngine {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            queue: PriorityQueue::<Appointment>::new(compare_appointments),
        }
    }

    /// Admits the appointment or reports why it was turned away. Nothing
    /// changes on rejection.
    pub fn book(&mut self, appointment: Appointment) -> Result<(), BookingRejection> {
        if let Err(rejection) = conflict::check_admission(&self.active, &appointment) {
            debug!(
                "Rejected booking for {} with doctor {} at {}: {}",
                appointment.patient().document(),
                appointment.doctor().id(),
                appointment.schedule(),
                rejection
            );
            return Err(rejection);
        }

        info!(
            "Booked {} with doctor {} at {} (priority {})",
            appointment.patient().document(),
            appointment.doctor().id(),
            appointment.schedule(),
            appointment.priority()
        );
        self.queue.push(appointment.clone());
        self.active.push(appointment);
        Ok(())
    }

    pub fn admit_appointment(&mut self, appointment: Appointment) -> bool {
        self.book(appointment).is_ok()
    }

    pub fn is_slot_free(&self, doctor: &Doctor, schedule: NaiveDateTime) -> bool {
        conflict::is_slot_free(&self.active, doctor, schedule)
    }

    /// Unbooked slot start times for `doctor` on `date`, ascending.
    pub fn available_time_slots(&self, doctor: &Doctor, date: NaiveDate) -> Vec<NaiveTime> {
        let availability = doctor.availability();
        if !availability.is_available_on(date.weekday()) {
            return Vec::new();
        }

        availability
            .generate_slots()
            .into_iter()
            .filter(|slot| self.is_slot_free(doctor, date.and_time(*slot)))
            .collect()
    }

    /// Dates from `from` through `from + days_ahead` on which the doctor
    /// works and still has at least one free slot. The walk stops at the end
    /// of the calendar.
    pub fn available_dates(&self, doctor: &Doctor, from: NaiveDate, days_ahead: u32) -> Vec<NaiveDate> {
        (0..=u64::from(days_ahead))
            .map_while(|offset| from.checked_add_days(Days::new(offset)))
            .filter(|date| doctor.availability().is_available_on(date.weekday()))
            .filter(|date| !self.available_time_slots(doctor, *date).is_empty())
            .collect()
    }

    pub fn peek(&self) -> Option<&Appointment> {
        self.queue.peek()
    }

    /// Serves the next appointment, releasing its slot.
    pub fn pop(&mut self) -> Option<Appointment> {
        let next = self.queue.pop()?;
        self.remove_active(next.patient().document(), next.schedule());
        info!("Serving {} at {}", next.patient().document(), next.schedule());
        Some(next)
    }

    pub fn preview(&self, limit: usize) -> Vec<Appointment> {
        self.queue.preview(limit)
    }

    /// Drops an active booking from both the active list and the queue.
    pub fn cancel(&mut self, document: &str, schedule: NaiveDateTime) -> Option<Appointment> {
        let cancelled = self.remove_active(document, schedule)?;
        self.queue.remove_first(|queued| queued.is_for(document, schedule));
        info!("Cancelled {} at {}", document, schedule);
        Some(cancelled)
    }

    /// Active appointments in booking order.
    pub fn active_appointments(&self) -> Vec<Appointment> {
        self.active.clone()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.queue.clear();
    }

    fn remove_active(&mut self, document: &str, schedule: NaiveDateTime) -> Option<Appointment> {
        let position = self
            .active
            .iter()
            .position(|appointment| appointment.is_for(document, schedule))?;
        Some(self.active.remove(position))
    }
}
