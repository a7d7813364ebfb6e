//! Row types and DTOs for the status store.

pub mod parking_lot_status;
