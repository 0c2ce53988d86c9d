//! lightbnb-db: data access for the LightBnB listing application
//!
//! Translates application calls into parameterized SQL against the
//! `users`, `properties`, `reservations` and `property_reviews` tables and
//! maps the rows into typed values.
//!
//! ```ignore
//! let config = DbConfig::load()?;
//! let db = Database::connect(&config).await?;
//!
//! let user = db.users().get_by_email("tristanjacobs@gmail.com").await?;
//! let stays = db.reservations().list_for_guest(user.id, DEFAULT_LIMIT).await?;
//! let cheap = db
//!     .properties()
//!     .search(&PropertySearch::default().city("Vancouver"), DEFAULT_LIMIT)
//!     .await?;
//!
//! db.close().await;
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pool;
pub mod repos;

pub use config::DbConfig;
pub use error::{DbError, Result};
pub use models::{
    GuestReservation, NewProperty, NewUser, Property, PropertyListing, PropertySearch,
    Reservation, User, DEFAULT_LIMIT,
};
pub use pool::{create_pool, create_pool_with_options, Database};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
