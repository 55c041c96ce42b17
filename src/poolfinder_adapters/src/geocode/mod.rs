pub mod google_geocode_client;

pub use google_geocode_client::GoogleGeocodeClient;
