//! Status command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::{json, table};
use crate::routing::{ROOT_PATH, landing_path};
use crate::session::Role;

/// Snapshot of the session and where it is stored
#[derive(Debug, Serialize)]
struct StatusReport {
    authenticated: bool,
    subject: Option<String>,
    role: Option<Role>,
    expires_at: Option<DateTime<Utc>>,
    landing: Option<&'static str>,
    api_host: String,
    origin: String,
    store: String,
    config: String,
}

/// Run the status command to display the current session
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, ROOT_PATH)?;
    let authenticated = ctx.session.is_authenticated();
    let identity = ctx.session.current_identity();
    let storage = ctx.store.storage();

    let report = StatusReport {
        authenticated,
        subject: identity.as_ref().and_then(|i| i.subject.clone()),
        role: identity.as_ref().and_then(|i| i.role.clone()),
        expires_at: identity.as_ref().and_then(|i| i.expires_at),
        landing: identity
            .as_ref()
            .and_then(|i| i.role.as_ref())
            .and_then(landing_path),
        api_host: ctx.api_host.clone(),
        origin: storage.origin().to_string(),
        store: storage.path().display().to_string(),
        config: Config::resolve_path(opts.config_ref())?
            .display()
            .to_string(),
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&report)?),
        OutputFormat::Table => println!("{}", table::format_details(&details(&report))),
        OutputFormat::Pretty => print_pretty(&report),
    }

    Ok(())
}

fn details(report: &StatusReport) -> Vec<(&'static str, String)> {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    vec![
        ("Authenticated", report.authenticated.to_string()),
        ("Subject", or_dash(report.subject.clone())),
        ("Role", or_dash(report.role.as_ref().map(Role::to_string))),
        ("Expires", or_dash(report.expires_at.map(|t| t.to_rfc3339()))),
        ("API host", report.api_host.clone()),
        ("Store", report.store.clone()),
    ]
}

fn print_pretty(report: &StatusReport) {
    println!("{}\n", "Recruit Session Status".bold());
    println!("API host: {}", report.api_host.cyan());
    println!("Config file: {}", report.config.dimmed());
    println!("Credential store: {}", report.store.dimmed());
    println!();

    if !report.authenticated {
        println!("{} Not signed in", "✗".red());
        println!("  → Run 'recruit login' to sign in");
        println!();
        return;
    }

    println!(
        "{} Signed in as {}",
        "✓".green(),
        report.subject.as_deref().unwrap_or("unknown user").bold()
    );

    match &report.role {
        Some(role) if role.is_known() => println!("{} Role: {}", "✓".green(), role),
        Some(role) => println!(
            "{} Role: {} (no area on this platform)",
            "⚠".yellow(),
            role
        ),
        None => println!("{} Token carries no role", "⚠".yellow()),
    }

    match report.expires_at {
        Some(expires) => {
            let remaining = expires.signed_duration_since(Utc::now());
            println!(
                "{} Session valid (expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        None => println!("{} Session has no expiry", "○".dimmed()),
    }

    if let Some(landing) = report.landing {
        println!("  Your area: {}", landing.cyan());
    }
    println!();
}
