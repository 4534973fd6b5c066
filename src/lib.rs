pub mod config;
pub mod derive;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod model;
pub mod profile_fetch;
pub mod provider;
pub mod routes;
pub mod state;
pub mod view;
