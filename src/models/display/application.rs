//! Application display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, truncate_string};
use crate::client::models::Application;

/// Application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ApplicationDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "OFFER")]
    pub offer: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "APPLIED")]
    pub applied: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Application> for ApplicationDisplay {
    fn from(app: Application) -> Self {
        Self {
            id: app.id,
            offer: truncate_string(&app.offer_title, 40),
            company: app.company,
            applied: format_date(&app.application_date),
            status: app.status,
        }
    }
}

impl ApplicationDisplay {
    /// Status colored for pretty output
    pub fn colored_status(&self) -> String {
        match self.status.as_str() {
            "ACCEPTED" => self.status.green().to_string(),
            "REJECTED" => self.status.red().to_string(),
            "PENDING" => self.status.yellow().to_string(),
            other => other.to_string(),
        }
    }
}
