//! Clients for the remote user-management API.

mod http_client;
mod user_api;

pub use http_client::HttpUserApi;
pub use user_api::UserApi;

#[cfg(test)]
pub use user_api::MockUserApi;
