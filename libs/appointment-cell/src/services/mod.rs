pub mod booking;
pub mod conflict;
pub mod ordering;
pub mod system;

pub use booking::BookingEngine;
pub use conflict::BookingRejection;
pub use ordering::compare_appointments;
pub use system::HealthSystem;
