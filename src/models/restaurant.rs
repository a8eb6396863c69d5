use serde::Deserialize;

use crate::models::business::BusinessSummary;

/// Body of `GET /businesses/search`.
#[derive(Clone, Deserialize, Debug)]
pub struct SearchResponse {
    pub businesses: Vec<Restaurant>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub rating: f64,
    /// Metres from the search location; only present on search hits.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl From<Restaurant> for BusinessSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            name: restaurant.name,
            rating: restaurant.rating,
        }
    }
}

/// Body of `GET /businesses/{id}`.
#[derive(Clone, Deserialize, Debug)]
pub struct RestaurantDetail {
    pub name: String,
    pub location: Location,
    #[serde(default)]
    pub display_phone: String,
    pub rating: f64,
    #[serde(default)]
    pub hours: Vec<Hours>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Location {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Hours {
    #[serde(default)]
    pub is_open_now: Option<bool>,
}

impl RestaurantDetail {
    pub fn is_open_now(&self) -> Option<bool> {
        self.hours.first().and_then(|hours| hours.is_open_now)
    }
}
