//! Shared utilities for CodeCamp components
//!
//! Currently provides:
//!
//! - **logging**: centralized tracing configuration shared by every binary

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, LogOutput};
