// libs/appointment-cell/src/router.rs
use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::SharedState;

pub fn clinic_routes(state: SharedState) -> Router {
    Router::new()
        // Clinic sites
        .route("/clinic-sites", post(handlers::create_clinic_site).get(handlers::list_clinic_sites))
        .route("/clinic-sites/{code}", get(handlers::get_clinic_site))
        .route("/clinic-sites/{code}/doctors", get(handlers::get_clinic_site_doctors))

        // Doctors and their open slots
        .route("/doctors", post(handlers::create_doctor).get(handlers::list_doctors))
        .route("/doctors/{doctor_id}/available-dates", get(handlers::get_available_dates))
        .route("/doctors/{doctor_id}/available-slots", get(handlers::get_available_slots))

        // Booking and service queue
        .route("/appointments", post(handlers::book_appointment).delete(handlers::cancel_appointment))
        .route("/appointments/next", get(handlers::peek_next_appointment))
        .route("/appointments/next/serve", post(handlers::serve_next_appointment))
        .route("/appointments/preview", get(handlers::preview_appointments))

        .route("/reset", post(handlers::reset))
        .with_state(state)
}
