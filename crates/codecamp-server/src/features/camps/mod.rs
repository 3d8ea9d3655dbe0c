//! Camps feature
//!
//! CRUD and date search over camps, exposed on versioned routes.

pub mod commands;
pub mod queries;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use routes::{camps_routes, ApiVersion};
