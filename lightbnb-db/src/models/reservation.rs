//! Reservations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::Property;

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// A guest's past stay with the property it was for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestReservation {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: Option<f64>,
}

// The row carries `properties.*` plus reservation columns aliased so they do
// not collide with the property's own `id`.
impl<'r> FromRow<'r, PgRow> for GuestReservation {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            reservation: Reservation {
                id: row.try_get("reservation_id")?,
                guest_id: row.try_get("guest_id")?,
                property_id: row.try_get("property_id")?,
                start_date: row.try_get("start_date")?,
                end_date: row.try_get("end_date")?,
            },
            property: Property::from_row(row)?,
            average_rating: row.try_get("average_rating")?,
        })
    }
}
