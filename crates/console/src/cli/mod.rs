//! CLI module - Command-line interface for the console.
//!
//! Provides commands for:
//! - `login` - Check credentials and show the landing route
//! - `register` - Self-registration
//! - `profile` - Own profile
//! - `users` - User administration (list, add, delete)

pub mod args;

pub use args::{Cli, Commands};
