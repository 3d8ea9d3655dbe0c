//! Talks feature
//!
//! CRUD for talks nested under a camp's moniker.

pub mod commands;
pub mod queries;
pub mod routes;


pub use routes::talks_routes;
