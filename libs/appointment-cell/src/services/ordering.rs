use std::cmp::Ordering;

use crate::models::Appointment;

/// Service order: priority weight, then scheduled time, then patient document.
///
/// Total on any set of active appointments, since two active appointments
/// never share both document and schedule.
pub fn compare_appointments(a: &Appointment, b: &Appointment) -> Ordering {
    a.priority()
        .weight()
        .cmp(&b.priority().weight())
        .then_with(|| a.schedule().cmp(&b.schedule()))
        .then_with(|| a.patient().document().cmp(b.patient().document()))
}
