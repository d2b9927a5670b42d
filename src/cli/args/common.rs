//! Common CLI types shared across commands

use clap::Args;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - machine-parseable, one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Parse a format name as written in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Account details for either registration command.
///
/// Anything omitted is prompted for.
#[derive(Debug, Clone, Args, Default)]
pub struct RegisterArgs {
    /// Account email
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "RECRUIT_PASSWORD", hide_env = true)]
    pub password: Option<String>,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,
}
