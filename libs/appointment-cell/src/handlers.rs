// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use doctor_cell::{ClinicSite, CreateClinicSiteRequest, CreateDoctorRequest, Doctor};
use shared_models::error::AppError;

use crate::error::AppointmentError;
use crate::models::{Appointment, BookAppointmentRequest};
use crate::services::system::today;
use crate::state::SharedState;

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct AvailableDatesQuery {
    pub days_ahead: Option<u32>,
    pub from: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct CancelAppointmentQuery {
    pub document: String,
    pub schedule: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub limit: Option<usize>,
}

// ==============================================================================
// CLINIC SITE HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_clinic_site(
    State(state): State<SharedState>,
    Json(request): Json<CreateClinicSiteRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let site = ClinicSite::try_from(request)?;

    let mut system = state.system.lock().await;
    if !system.add_clinic_site(site.clone()) {
        return Err(AppError::Conflict(format!(
            "Clinic site with code {} already exists",
            site.code()
        )));
    }

    Ok((StatusCode::CREATED, Json(json!({ "clinic_site": site }))))
}

#[axum::debug_handler]
pub async fn list_clinic_sites(
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let sites = state.system.lock().await.list_clinic_sites();

    Ok(Json(json!({
        "clinic_sites": sites,
        "total": sites.len()
    })))
}

#[axum::debug_handler]
pub async fn get_clinic_site(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let site = state
        .system
        .lock()
        .await
        .find_clinic_site(&code)
        .ok_or(AppointmentError::ClinicSiteNotFound(code))?;

    Ok(Json(json!(site)))
}

#[axum::debug_handler]
pub async fn get_clinic_site_doctors(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let system = state.system.lock().await;
    if system.find_clinic_site(&code).is_none() {
        return Err(AppointmentError::ClinicSiteNotFound(code).into());
    }

    let doctors = system.doctors_by_clinic_site(&code);
    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

// ==============================================================================
// DOCTOR HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<SharedState>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor = Doctor::try_from(request)?;

    let mut system = state.system.lock().await;
    if !system.add_doctor(doctor.clone())? {
        return Err(AppError::Conflict(format!(
            "Doctor with id {} already exists",
            doctor.id()
        )));
    }

    Ok((StatusCode::CREATED, Json(json!({ "doctor": doctor }))))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.system.lock().await.list_doctors();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_available_dates(
    State(state): State<SharedState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<AvailableDatesQuery>,
) -> Result<Json<Value>, AppError> {
    let horizon = state.config.booking_horizon_days;
    let days_ahead = query.days_ahead.unwrap_or(horizon);
    if days_ahead > horizon {
        return Err(AppError::BadRequest(format!(
            "days_ahead must be at most {}",
            horizon
        )));
    }
    let from = query.from.unwrap_or_else(today);

    let system = state.system.lock().await;
    let doctor = system
        .find_doctor(&doctor_id)
        .ok_or(AppointmentError::DoctorNotFound(doctor_id))?;
    let dates = system.available_dates_from(&doctor, from, days_ahead);

    debug!("Doctor {} has {} open dates from {}", doctor.id(), dates.len(), from);
    Ok(Json(json!({
        "doctor_id": doctor.id(),
        "from": from,
        "days_ahead": days_ahead,
        "dates": dates
    })))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<SharedState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let system = state.system.lock().await;
    let doctor = system
        .find_doctor(&doctor_id)
        .ok_or(AppointmentError::DoctorNotFound(doctor_id))?;
    let slots = system.available_time_slots(&doctor, query.date);

    Ok(Json(json!({
        "doctor_id": doctor.id(),
        "date": query.date,
        "slots": slots
    })))
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<SharedState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let patient = request.patient.into_patient(today())?;

    let mut system = state.system.lock().await;
    let doctor = system
        .find_doctor(&request.doctor_id)
        .ok_or_else(|| AppointmentError::DoctorNotFound(request.doctor_id.clone()))?;

    let clinic_code = request
        .clinic_code
        .unwrap_or_else(|| doctor.clinic_code().to_string());
    let clinic = system
        .find_clinic_site(&clinic_code)
        .ok_or_else(|| AppointmentError::ClinicSiteNotFound(clinic_code.clone()))?;
    if !doctor.works_at(clinic.code()) {
        return Err(AppointmentError::ValidationError(format!(
            "Doctor {} does not work at clinic site {}",
            doctor.id(),
            clinic.code()
        ))
        .into());
    }

    let appointment = Appointment::new(
        patient,
        doctor,
        clinic,
        request.appointment_type,
        request.scheduled_at,
    );

    match system.book_appointment(appointment.clone()) {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "booked": true,
                "appointment": appointment,
                "summary": appointment.to_string()
            })),
        )),
        Err(rejection) => Err(AppError::Conflict(rejection.to_string())),
    }
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<SharedState>,
    Query(query): Query<CancelAppointmentQuery>,
) -> Result<Json<Value>, AppError> {
    let document = query.document.trim();
    let cancelled = state
        .system
        .lock()
        .await
        .cancel_appointment(document, query.schedule)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No active appointment for {} at {}",
                document, query.schedule
            ))
        })?;

    Ok(Json(json!({ "cancelled": cancelled })))
}

#[axum::debug_handler]
pub async fn peek_next_appointment(
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let next = state
        .system
        .lock()
        .await
        .peek_appointment()
        .ok_or_else(|| AppError::NotFound("No appointments in queue".to_string()))?;

    Ok(Json(json!({
        "appointment": next,
        "summary": next.to_string()
    })))
}

#[axum::debug_handler]
pub async fn serve_next_appointment(
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let served = state
        .system
        .lock()
        .await
        .poll_appointment()
        .ok_or_else(|| AppError::NotFound("No appointments in queue".to_string()))?;

    Ok(Json(json!({
        "served": served,
        "summary": served.to_string()
    })))
}

#[axum::debug_handler]
pub async fn preview_appointments(
    State(state): State<SharedState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<Value>, AppError> {
    let limit = query.limit.unwrap_or(state.config.preview_limit);
    let appointments = state.system.lock().await.preview_appointments(limit);

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len(),
        "limit": limit
    })))
}

#[axum::debug_handler]
pub async fn reset(
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    state.system.lock().await.clear_all();

    Ok(Json(json!({ "cleared": true })))
}
