pub mod api_client;
pub mod auth_service;
pub mod recommendation_service;

pub use api_client::ApiClient;
pub use auth_service::{perform_login_with, AuthApi};
pub use recommendation_service::request_recommendation;
