//! Job offer and application models

use serde::{Deserialize, Serialize};

/// Job offer published by a recruiter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub company: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Contract type (CDI, CDD, internship, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// A candidate's application to an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,

    pub offer_id: i64,

    pub offer_title: String,

    pub company: String,

    /// Only present in recruiter-facing listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,

    pub application_date: String,

    /// PENDING, ACCEPTED or REJECTED
    pub status: String,
}
