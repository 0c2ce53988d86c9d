//! Reservation repository
//!
//! Lists a guest's completed stays with each property's review average,
//! in one JOIN query.

use sqlx::PgPool;
use tracing::{debug, error};

use crate::error::Result;
use crate::models::GuestReservation;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Past reservations for a guest, oldest check-in first.
    ///
    /// Only stays whose `end_date` is before today are returned. Properties
    /// without reviews drop out of the inner join. An empty list is not an
    /// error.
    pub async fn list_for_guest(&self, guest_id: i32, limit: i64) -> Result<Vec<GuestReservation>> {
        debug!(guest_id, limit, "listing reservations for guest");

        let rows = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT
                properties.*,
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.property_id,
                reservations.start_date,
                reservations.end_date,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1
              AND reservations.end_date < now()::date
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date ASC
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .inspect_err(|e| error!(guest_id, error = %e, "list reservations failed"))?;

        debug!(guest_id, count = rows.len(), "reservations fetched");
        Ok(rows)
    }
}
