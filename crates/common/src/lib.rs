//! Shared utilities, configuration, and error handling for Vagas
//!
//! This crate provides common functionality used across the Vagas application:
//! - Configuration management following 12-factor principles
//! - Error types and handling

pub mod config;
pub mod de;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
