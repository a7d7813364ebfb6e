//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data access.
//! Functions take any Postgres executor, so callers can pass `&PgPool`
//! or `&mut *tx` to run inside a transaction.

pub mod parking_lot_status_repo;

pub use parking_lot_status_repo::ParkingLotStatusRepo;
