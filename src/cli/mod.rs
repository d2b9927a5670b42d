//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod init;
pub mod offers;
pub mod open;
pub mod register;
pub mod session;
pub mod status;

pub use args::{OutputFormat, RegisterArgs};
pub use context::CommandContext;

/// Recruit CLI - sign in to the recruitment platform and browse your area
#[derive(Parser, Debug)]
#[command(name = "recruit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "RECRUIT_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "RECRUIT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the directory holding the credential store
    #[arg(long, global = true, env = "RECRUIT_DATA_DIR", hide_env = true)]
    pub data_dir: Option<String>,

    /// Override the API gateway URL
    #[arg(long, global = true, env = "RECRUIT_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "RECRUIT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Recruit configuration
    Init,

    /// Sign in and store the session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "RECRUIT_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Sign out and forget the stored token
    Logout,

    /// Show the current session
    Status,

    /// Create an account
    #[command(subcommand)]
    Register(RegisterCommands),

    /// Navigate to a platform path and report where you land
    #[command(after_help = "EXAMPLES:\n  \
        recruit open /candidate                   # Candidate dashboard\n  \
        recruit open /recruiter/offers/42/applications")]
    Open {
        /// Path to navigate to (e.g. /candidate/offers)
        path: String,
    },

    /// Candidate area
    #[command(subcommand)]
    Candidate(CandidateCommands),

    /// Recruiter area
    #[command(subcommand)]
    Recruiter(RecruiterCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   recruit completion bash > /etc/bash_completion.d/recruit
  zsh:    recruit completion zsh > \"${fpath[1]}/_recruit\"
  fish:   recruit completion fish > ~/.config/fish/completions/recruit.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Account registration subcommands
#[derive(Subcommand, Debug)]
pub enum RegisterCommands {
    /// Register as a candidate
    Candidate(RegisterArgs),

    /// Register as a recruiter
    Recruiter(RegisterArgs),
}

/// Candidate area subcommands
#[derive(Subcommand, Debug)]
pub enum CandidateCommands {
    /// Browse open offers
    Offers,

    /// List your applications
    Applications,
}

/// Recruiter area subcommands
#[derive(Subcommand, Debug)]
pub enum RecruiterCommands {
    /// List the offers you published
    Offers,
}
