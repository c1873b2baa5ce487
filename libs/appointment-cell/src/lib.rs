pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use error::AppointmentError;
pub use models::*;
pub use router::clinic_routes;
pub use services::*;
pub use state::{AppState, SharedState};
