//! Recruit API client

pub mod api;
pub mod interceptor;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod recruit;

pub use api::{AuthApi, OfferApi};
pub use interceptor::InterceptedClient;
#[cfg(test)]
pub use mock::MockRecruitClient;
pub use recruit::RecruitClient;

/// Full Recruit API surface
pub trait RecruitApi: AuthApi + OfferApi {}

impl<T: AuthApi + OfferApi> RecruitApi for T {}
