//! Login and logout commands

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::LoginRequest;
use crate::error::Result;
use crate::output::json;
use crate::routing::{LOGIN_PATH, Navigation, Navigator, post_login_landing};
use crate::session::{CredentialStore, Identity};

/// Result of a successful login
#[derive(Debug, Serialize)]
struct LoginReport {
    identity: Identity,
    landing: Navigation,
}

/// Run the login command.
///
/// The location starts on the login entry point, so an authentication
/// failure on submit leaves any existing session alone.
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts, LOGIN_PATH)?;

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let spinner = spinner("Signing in...");
    let result = ctx
        .session
        .login(&ctx.client, &LoginRequest { email, password })
        .await;
    spinner.finish_and_clear();
    let identity = result?;

    let target = post_login_landing(ctx.session.is_authenticated(), identity.role.as_ref());
    let landing = ctx.router.navigate(target);

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&LoginReport { identity, landing })?);
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            println!(
                "{} Signed in as {} ({})",
                "✓".green(),
                identity.subject.as_deref().unwrap_or("unknown user").bold(),
                identity
                    .role
                    .as_ref()
                    .map(|r| r.as_str())
                    .unwrap_or("no role")
            );
            println!("  Landing: {}", ctx.location.current_path().cyan());
        }
    }

    Ok(())
}

/// Run the logout command. Succeeds when already signed out.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, LOGIN_PATH)?;
    let was_signed_in = ctx.store.load()?.is_some();

    ctx.session.logout();

    match ctx.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "signed_out": was_signed_in,
                "location": ctx.location.current_path(),
            });
            println!("{}", json::format_json(&report)?);
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            if was_signed_in {
                println!("{} Signed out", "✓".green());
            } else {
                println!("{} Not signed in", "○".dimmed());
            }
        }
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
