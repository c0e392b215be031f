//! Common utilities shared by the console and its tests.
//!
//! This crate provides:
//! - Unified error handling for remote API calls
//! - Configuration structures for the API connection

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
