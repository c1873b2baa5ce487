use shared_models::error::AppError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoctorError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid availability: {0}")]
    InvalidAvailability(String),

    #[error("Clinic site not registered: {0}")]
    UnknownClinicSite(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::UnknownClinicSite(_) => AppError::NotFound(err.to_string()),
            DoctorError::ValidationError(_) | DoctorError::InvalidAvailability(_) => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}
