//! Row types returned by the store and the payloads used to insert them.
//!
//! Rows are never cached; every value here is a copy of what one query
//! returned.

pub mod property;
pub mod reservation;
pub mod search;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{GuestReservation, Reservation};
pub use search::PropertySearch;
pub use user::{NewUser, User};

/// Row cap used when the caller does not pass one.
pub const DEFAULT_LIMIT: i64 = 10;
