//! Offer display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, or_none, truncate_string};
use crate::client::models::Offer;

/// Offer display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OfferDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "CONTRACT")]
    pub contract: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,

    /// Whether the offer still accepts applications
    #[tabled(rename = "OPEN")]
    pub open: String,
}

impl From<Offer> for OfferDisplay {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            title: truncate_string(&offer.title, 40),
            company: offer.company,
            location: or_none(offer.location.as_deref()),
            contract: or_none(offer.contract_type.as_deref()),
            expires: offer
                .expiration_date
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| or_none(None)),
            open: if offer.active {
                "\u{2713}".to_string() // checkmark
            } else {
                String::new()
            },
        }
    }
}
