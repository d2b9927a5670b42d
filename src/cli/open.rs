//! Open command: navigate to a path and report the outcome

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::{json, table};
use crate::routing::{Navigation, ROOT_PATH};

/// Run the open command.
///
/// A denied navigation is a normal outcome here, not an error.
pub fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, ROOT_PATH)?;
    let outcome = ctx.router.navigate(path);

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&outcome)?),
        OutputFormat::Table => println!("{}", table::format_details(&details(&outcome))),
        OutputFormat::Pretty => match &outcome {
            Navigation::Activated { path, view } => {
                println!("{} {} ({:?})", "✓".green(), path.cyan(), view);
            }
            Navigation::Denied {
                requested,
                redirected_to,
            } => {
                println!(
                    "{} {} is not available, redirected to {}",
                    "✗".red(),
                    requested,
                    redirected_to.cyan()
                );
            }
        },
    }

    Ok(())
}

fn details(outcome: &Navigation) -> Vec<(&'static str, String)> {
    match outcome {
        Navigation::Activated { path, view } => vec![
            ("Outcome", "activated".to_string()),
            ("Path", path.clone()),
            ("View", format!("{:?}", view)),
        ],
        Navigation::Denied {
            requested,
            redirected_to,
        } => vec![
            ("Outcome", "denied".to_string()),
            ("Requested", requested.clone()),
            ("Redirected to", redirected_to.clone()),
        ],
    }
}
