pub mod api_client;
pub mod auth_service;

pub use api_client::ApiClient;
pub use auth_service::{auth_token, is_authenticated};
