//! Recruit API data models

mod auth;
mod error_body;
mod offer;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use error_body::extract_message;
pub use offer::{Application, Offer};
