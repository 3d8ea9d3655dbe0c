//! CodeCamp Server Library
//!
//! HTTP server exposing the CodeCamp REST API.
//!
//! # Overview
//!
//! - **API Endpoints**: versioned camps surface, talks nested under a
//!   camp, administrative operations
//! - **Database Management**: PostgreSQL integration with SQLx
//! - **Configuration**: environment-based, reloadable at runtime
//! - **Middleware**: CORS and request tracing
//!
//! # Architecture
//!
//! Each feature is a vertical slice with commands (writes) and queries
//! (reads) as standalone async `handle` functions, plus a routes module
//! that maps their error enums onto HTTP status codes. Data access goes
//! through the [`store::CampStore`] trait, with a Postgres
//! implementation for production and an in-memory one for tests.

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod links;
pub mod mapping;
pub mod middleware;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use db::{DbError, DbResult};
pub use features::AppState;
