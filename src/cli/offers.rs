//! Candidate and recruiter listing commands
//!
//! Each command enters its area through the router first, so a missing or
//! wrong-role session is rejected before any request goes out.

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::OfferApi;
use crate::error::Result;
use crate::models::{ApplicationDisplay, OfferDisplay};
use crate::output::Formattable;
use crate::routing::ROOT_PATH;

/// `recruit candidate offers`
pub async fn candidate_offers(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, ROOT_PATH)?;
    ctx.enter("/candidate/offers")?;

    let display = open_offers(&ctx.client).await?;
    display.print(ctx.format)
}

/// Offers a candidate can still apply to
async fn open_offers(api: &impl OfferApi) -> Result<Vec<OfferDisplay>> {
    let offers = api.list_offers().await?;
    log::debug!("Fetched {} offers", offers.len());

    Ok(offers
        .into_iter()
        .filter(|o| o.active)
        .map(OfferDisplay::from)
        .collect())
}

/// `recruit candidate applications`
pub async fn candidate_applications(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, ROOT_PATH)?;
    ctx.enter("/candidate/applications")?;

    let display = own_applications(&ctx.client).await?;

    if ctx.format == OutputFormat::Pretty && !display.is_empty() {
        for app in &display {
            println!(
                "#{} {} @ {}  applied {}  {}",
                app.id,
                app.offer.bold(),
                app.company,
                app.applied.dimmed(),
                app.colored_status()
            );
        }
        return Ok(());
    }
    display.print(ctx.format)
}

async fn own_applications(api: &impl OfferApi) -> Result<Vec<ApplicationDisplay>> {
    let applications = api.my_applications().await?;
    log::debug!("Fetched {} applications", applications.len());

    Ok(applications
        .into_iter()
        .map(ApplicationDisplay::from)
        .collect())
}

/// `recruit recruiter offers`
pub async fn recruiter_offers(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, ROOT_PATH)?;
    ctx.enter("/recruiter/my-offers")?;

    let offers = ctx.client.my_offers().await?;
    log::debug!("Fetched {} published offers", offers.len());

    let display: Vec<OfferDisplay> = offers.into_iter().map(OfferDisplay::from).collect();
    display.print(ctx.format)
}
