//! User Admin Console Library
//!
//! Client-side front end for a user-management REST API: login,
//! registration, own profile and an admin user table.
//!
//! # Layers
//!
//! - **clients**: `UserApi` trait and its `reqwest` implementation
//! - **forms**: Form state controller (validation timing, submit phases)
//! - **screens**: Screen controllers built on the forms and the client
//! - **routes**: Role-gated navigation
//! - **cli** / **commands**: Command-line front end

pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod forms;
pub mod routes;
pub mod screens;
pub mod session;
pub mod state;

pub use clients::{HttpUserApi, UserApi};
pub use config::ConsoleConfig;
pub use routes::{resolve, Route};
pub use session::{CredentialPolicy, Credentials, Session};
pub use state::AppState;
