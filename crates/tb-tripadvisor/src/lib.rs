//! An async client for the TripAdvisor partner content API.
//!
//! Two read operations are exposed: fetching a location's details and
//! fetching its reviews. Configure a [`Client`] with an API key and call
//! away; responses decode into the types in [`location`] and [`review`].
//!
//! ```no_run
//! use tb_tripadvisor::{Client, Config, LocationApi};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder().key("YOUR-API-KEY").build()?;
//! let client = Client::new(config)?;
//! let location = client.get_location(3539289).await?;
//! println!("{} - {} reviews", location.name, location.num_reviews);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod constants;
pub mod error;
pub mod location;
pub mod review;

pub use client::{Client, LocationApi};
pub use config::{Config, ConfigBuilder, ConfigBuilderError};
pub use error::{ClientInitError, GetError};
