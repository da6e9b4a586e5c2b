use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Raw location data from the API's `location/{id}` endpoint.
///
/// The API omits fields it has no data for rather than sending nulls, so
/// every field falls back to its empty value when absent. `reviews` is only
/// populated by the combined endpoint variant that embeds reviews in the
/// location document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationResponse {
    pub name: String,
    pub num_reviews: String,
    pub category: Option<Category>,
    pub sub_category: Option<Category>,
    #[serde(rename = "address_obj")]
    pub address: Option<Address>,
    pub latitude: String,
    pub longitude: String,
    pub rating: String,
    pub location_id: String,
    pub trip_types: Vec<TripType>,
    pub reviews: Vec<Review>,
    #[serde(rename = "write_review")]
    pub write_review_url: String,
    pub ancestors: Vec<Ancestor>,
    pub percent_recommended: i32,
    /// Count of reviews per rating bucket, keyed by the bucket label
    /// ("1" through "5"). Counts arrive as strings.
    pub review_rating_count: HashMap<String, String>,
    pub photo_count: String,
    pub location_string: String,
    pub web_url: String,
    pub price_level: String,
    pub rating_image_url: String,
    pub awards: Vec<Award>,
    pub see_all_photos: String,
}

/// Address details for a location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postalcode: String,
    #[serde(rename = "address_string")]
    pub full_address: String,
}

/// A category or sub-category a location is filed under.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    pub localized_name: String,
}

/// A trip type bucket (family, couples, solo, ...) with its review count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripType {
    pub name: String,
    pub value: String,
    pub localized_name: String,
}

/// A geographic ancestor of a location (city, region, country).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ancestor {
    pub abbrv: String,
    pub level: String,
    pub name: String,
    pub location_id: String,
}

/// An award granted to a location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub award_type: String,
    pub year: String,
    /// Award badge images keyed by size label (eg "small", "large").
    pub images: HashMap<String, String>,
    pub categories: Vec<String>,
    pub display_name: String,
}
