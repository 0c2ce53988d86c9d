//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and follows these patterns:
//! - One statement per call, fully parameterized
//! - Single-row lookups return `DbError::NotFound` instead of an empty value
//! - Failed statements are logged at `error` before being returned

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
