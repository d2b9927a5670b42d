//! Account registration commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, RegisterArgs};
use crate::client::AuthApi;
use crate::client::models::RegisterRequest;
use crate::error::Result;
use crate::output::json;
use crate::routing::{LOGIN_PATH, REGISTER_CANDIDATE_PATH};

/// Which account type to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Candidate,
    Recruiter,
}

impl AccountKind {
    fn label(self) -> &'static str {
        match self {
            AccountKind::Candidate => "candidate",
            AccountKind::Recruiter => "recruiter",
        }
    }
}

/// Run a registration command.
///
/// Registration does not sign in: the returned token is ignored and the
/// user is pointed at `recruit login`.
pub async fn run(opts: &GlobalOptions, kind: AccountKind, args: RegisterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, REGISTER_CANDIDATE_PATH)?;
    let request = complete(args)?;

    log::debug!("Registering {} account for {}", kind.label(), request.email);
    match kind {
        AccountKind::Candidate => ctx.client.register_candidate(&request).await?,
        AccountKind::Recruiter => ctx.client.register_recruiter(&request).await?,
    }

    match ctx.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "registered": request.email,
                "account": kind.label(),
                "next": LOGIN_PATH,
            });
            println!("{}", json::format_json(&report)?);
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            println!(
                "{} Registered {} account {}",
                "✓".green(),
                kind.label(),
                request.email.bold()
            );
            println!("  → Run {} to sign in", "recruit login".cyan());
        }
    }

    Ok(())
}

/// Prompt for whatever the flags left out
fn complete(args: RegisterArgs) -> Result<RegisterRequest> {
    let theme = ColorfulTheme::default();
    let prompt = |value: Option<String>, label: &str| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => Ok(Input::with_theme(&theme).with_prompt(label).interact_text()?),
        }
    };

    let email = prompt(args.email, "Email")?;
    let first_name = prompt(args.first_name, "First name")?;
    let last_name = prompt(args.last_name, "Last name")?;
    let password = match args.password {
        Some(p) => p,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    Ok(RegisterRequest {
        email,
        password,
        first_name,
        last_name,
    })
}
