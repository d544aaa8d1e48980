//! Earth date validation and Mars Rover image requests.
//! Used by: handlers::photos.

pub mod earth_date;
pub mod fetch;
