use doctor_cell::DoctorError;
use shared_models::error::AppError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Clinic site not found: {0}")]
    ClinicSiteNotFound(String),

    #[error(transparent)]
    Doctor(#[from] DoctorError),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::ValidationError(_) => AppError::ValidationError(err.to_string()),
            AppointmentError::DoctorNotFound(_) | AppointmentError::ClinicSiteNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            AppointmentError::Doctor(inner) => AppError::from(inner),
        }
    }
}
