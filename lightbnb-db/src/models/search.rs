//! Property search filters

use serde::{Deserialize, Serialize};

/// Optional, conjunctive filters for property search.
///
/// Absent fields apply no predicate. The price range only applies when
/// both bounds are given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub minimum_price_per_night: Option<i32>,
    #[serde(default)]
    pub maximum_price_per_night: Option<i32>,
    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price_between(mut self, minimum: i32, maximum: i32) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn rated_above(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City substring, with an empty string treated as absent.
    pub fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// Exclusive price bounds, only when both are present.
    pub fn price_range(&self) -> Option<(i32, i32)> {
        self.minimum_price_per_night
            .zip(self.maximum_price_per_night)
    }
}
