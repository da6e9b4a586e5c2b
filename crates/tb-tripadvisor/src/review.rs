use serde::{Deserialize, Serialize};

/// Raw data from the API's `location/{id}/reviews` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewResponse {
    /// Reviews in the order the API returned them.
    pub data: Vec<Review>,
}

/// A single user-submitted review of a location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: String,
    #[serde(rename = "lang")]
    pub language_code: String,
    pub location_id: String,
    pub published_date: String,
    /// Rating from 1 to 5.
    pub rating: i32,
    pub helpful_votes: String,
    pub rating_image_url: String,
    pub url: String,
    pub trip_type: String,
    pub travel_date: String,
    pub text: String,
    pub title: String,
    pub user: Option<User>,
}

/// The user who wrote a review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub username: String,
    pub user_location: Option<UserLocation>,
}

/// Where a reviewing user is from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLocation {
    pub name: String,
    pub id: String,
}
