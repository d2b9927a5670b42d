//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

const FORMAT_NAMES: [&str; 3] = ["pretty", "table", "json"];

/// Run the init command.
///
/// Writes the API host and output preference. Signing in is a separate
/// step (`recruit login`), so init never touches the credential store.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Recruit!".bold().green());
    println!("Let's point the CLI at your platform.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    let current_host = config.api_host(opts.api_host_ref())?;

    let api_host: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API gateway URL")
        .default(current_host)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://".to_string())
            }
        })
        .interact_text()?;

    let current_format = config
        .preferences
        .format
        .as_deref()
        .and_then(OutputFormat::from_name)
        .unwrap_or_default();
    let default_index = FORMAT_NAMES
        .iter()
        .position(|name| OutputFormat::from_name(name) == Some(current_format))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default output format")
        .items(&FORMAT_NAMES[..])
        .default(default_index)
        .interact_opt()?;

    config.api_host = Some(api_host.trim_end_matches('/').to_string());
    if let Some(idx) = selection {
        config.preferences.format = Some(FORMAT_NAMES[idx].to_string());
    }
    // Validate before writing
    config.api_host(None)?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Sign in", "recruit login".cyan());
    println!("  {} - Show session status", "recruit status".cyan());

    Ok(())
}
