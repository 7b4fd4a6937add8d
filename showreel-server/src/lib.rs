//! # Showreel Server
//!
//! Persistence endpoint for the Showreel catalog. A single `POST` route
//! accepts a JSON object (raw or in the `data` field of a form post) and
//! replaces the data file with it, pretty-printed.

pub mod handlers;
pub mod infra;
pub mod routes;
pub mod store;

pub use infra::app_state::AppState;
pub use infra::errors::SaveError;
pub use store::{JsonFileStore, StoreError};
