//! Form state handling shared by the registration and user-table screens.

mod controller;

pub use controller::{FormController, FormPhase, Submit, ValidationPolicy};
