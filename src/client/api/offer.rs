//! Offer API trait

use async_trait::async_trait;

use crate::client::models::{Application, Offer};
use crate::error::Result;

/// Offer and application listings. All calls require a bearer token.
#[async_trait]
pub trait OfferApi: Send + Sync {
    /// Active offers visible to candidates
    async fn list_offers(&self) -> Result<Vec<Offer>>;

    /// Applications submitted by the signed-in candidate
    async fn my_applications(&self) -> Result<Vec<Application>>;

    /// Offers published by the signed-in recruiter
    async fn my_offers(&self) -> Result<Vec<Offer>>;
}
