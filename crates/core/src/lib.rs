//! Domain logic for the airport parking realtime backend.
//!
//! Pure code only: enumerations, status derivation, input validation and
//! seed fixtures. Database access lives in `parking-db`.

pub mod error;
pub mod parking;
pub mod seed;
pub mod types;
