//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and registration
//! - [`OfferApi`] - Offer and application listings
//!
//! The [`RecruitApi`](super::RecruitApi) super-trait combines both.

mod auth;
mod offer;

pub use auth::AuthApi;
pub use offer::OfferApi;
