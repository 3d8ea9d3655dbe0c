//! Operations feature
//!
//! Administrative endpoints, currently just runtime config reload.

pub mod routes;

pub use routes::operations_routes;
