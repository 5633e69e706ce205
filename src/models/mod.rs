pub mod auth;
pub mod geo;
pub mod recommendation;

pub use auth::{AgeGroup, LoginRequest, Sex, TokenResponse, User, UserRole};
pub use geo::Coordinates;
pub use recommendation::{OptimizationMode, RecommendationPayload, RecommendationRequest};
