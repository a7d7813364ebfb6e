//! Business logic that composes repository calls.

pub mod parking_status;

pub use parking_status::ParkingStatusService;
