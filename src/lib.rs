pub mod config;
pub mod delivery;
pub mod display;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;
