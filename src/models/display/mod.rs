//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod application;
mod common;
mod offer;

pub use application::ApplicationDisplay;
pub use offer::OfferDisplay;
