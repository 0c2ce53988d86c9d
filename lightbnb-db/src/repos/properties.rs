//! Property repository
//!
//! - search: optional filters assembled with `FilterClause`, averages review
//!   ratings per property, cheapest first
//! - create: INSERT of every column in fixed order, RETURNING the row

use sqlx::PgPool;
use tracing::{debug, error};

use crate::error::{DbError, Result};
use crate::filter::{BuiltQuery, FilterClause};
use crate::models::{NewProperty, Property, PropertyListing, PropertySearch};

const SEARCH_HEAD: &str = r#"
SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON property_reviews.property_id = properties.id
"#;

/// Build the search statement for a set of filters.
///
/// Price bounds are exclusive and only applied as a pair; the rating
/// threshold applies to the per-property average.
pub fn search_query(search: &PropertySearch, limit: i64) -> BuiltQuery {
    let mut clause = FilterClause::new(SEARCH_HEAD);

    if let Some(city) = search.city_filter() {
        clause.and_where("properties.city", "LIKE", format!("%{}%", city));
    }

    if let Some(owner_id) = search.owner_id {
        clause.and_where("properties.owner_id", "=", owner_id);
    }

    if let Some((minimum, maximum)) = search.price_range() {
        clause
            .and_where("properties.cost_per_night", ">", minimum)
            .and_where("properties.cost_per_night", "<", maximum);
    }

    clause.group_by("properties.id");

    if let Some(rating) = search.minimum_rating {
        clause.and_having("AVG(property_reviews.rating)", ">", rating);
    }

    clause.order_by("properties.cost_per_night ASC");
    clause.build(limit)
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, cheapest first, capped at `limit`.
    pub async fn search(&self, search: &PropertySearch, limit: i64) -> Result<Vec<PropertyListing>> {
        let query = search_query(search, limit);
        debug!(?search, limit, params = query.params.len(), "searching properties");

        let rows = query
            .query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await
            .inspect_err(|e| error!(?search, error = %e, "property search failed"))?;

        debug!(count = rows.len(), "properties fetched");
        Ok(rows)
    }

    /// Get a single property by id.
    pub async fn get(&self, id: i32) -> Result<Property> {
        debug!(id, "fetching property");

        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .inspect_err(|e| error!(id, error = %e, "get property failed"))?
            .ok_or_else(|| DbError::not_found("property", id))
    }

    /// Add a property, returning the stored row with its id.
    ///
    /// An unknown `owner_id` is reported as `DbError::Conflict`.
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        debug!(owner_id = property.owner_id, title = %property.title, "creating property");

        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url,
                cover_photo_url, cost_per_night, parking_spaces,
                number_of_bathrooms, number_of_bedrooms, country,
                street, city, province, post_code
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14
            )
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert("property", e))
        .inspect_err(|e| {
            error!(owner_id = property.owner_id, error = %e, "create property failed")
        })
    }
}
