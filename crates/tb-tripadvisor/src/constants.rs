use std::time::Duration;

/// The default base endpoint for the TripAdvisor partner content API.
///
/// Versions newer than 2.0, or anything older than it, are not currently
/// supported.
pub const DEFAULT_ENDPOINT: &str = "https://api.tripadvisor.com/api/partner/2.0/";

/// The default language code for a client configuration.
///
/// A full list of supported codes can be found here:
/// https://developer-tripadvisor.com/content-api/supported-languages/
pub const DEFAULT_LANGUAGE_CODE: &str = "en_UK";

/// The default timeout applied to each API request as a whole.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
