pub mod geolocation;
pub mod place;
