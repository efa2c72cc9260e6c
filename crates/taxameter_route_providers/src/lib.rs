pub mod as_the_crow_flies;
pub mod mapbox_api;
pub mod route_client;
pub mod route_estimate;
pub mod route_provider;
