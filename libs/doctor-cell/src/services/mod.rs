pub mod registry;

pub use registry::ClinicRegistry;
