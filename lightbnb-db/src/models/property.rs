//! Properties and search listings

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Property with the average of its review ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Insert payload for `properties`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl NewProperty {
    /// True when `property` holds exactly these values.
    pub fn matches(&self, property: &Property) -> bool {
        self.owner_id == property.owner_id
            && self.title == property.title
            && self.description == property.description
            && self.thumbnail_photo_url == property.thumbnail_photo_url
            && self.cover_photo_url == property.cover_photo_url
            && self.cost_per_night == property.cost_per_night
            && self.parking_spaces == property.parking_spaces
            && self.number_of_bathrooms == property.number_of_bathrooms
            && self.number_of_bedrooms == property.number_of_bedrooms
            && self.country == property.country
            && self.street == property.street
            && self.city == property.city
            && self.province == property.province
            && self.post_code == property.post_code
    }
}
