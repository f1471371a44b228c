pub mod error;
pub mod geocode_client;
pub mod geocode_provider;
pub mod nominatim_api;
