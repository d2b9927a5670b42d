//! Recruit CLI - command-line client for the recruitment platform

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod routing;
mod session;
mod storage;

use cli::args::GlobalOptions;
use cli::register::AccountKind;
use cli::{CandidateCommands, Cli, Commands, RecruiterCommands, RegisterCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "warn,recruit=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Login { email, password } => cli::session::login(&opts, email, password).await,
        Commands::Logout => cli::session::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Register(cmd) => match cmd {
            RegisterCommands::Candidate(args) => {
                cli::register::run(&opts, AccountKind::Candidate, args).await
            }
            RegisterCommands::Recruiter(args) => {
                cli::register::run(&opts, AccountKind::Recruiter, args).await
            }
        },
        Commands::Open { path } => cli::open::run(&opts, &path),
        Commands::Candidate(cmd) => match cmd {
            CandidateCommands::Offers => cli::offers::candidate_offers(&opts).await,
            CandidateCommands::Applications => cli::offers::candidate_applications(&opts).await,
        },
        Commands::Recruiter(cmd) => match cmd {
            RecruiterCommands::Offers => cli::offers::recruiter_offers(&opts).await,
        },
        Commands::Version => {
            println!("recruit version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "recruit", &mut std::io::stdout());
            Ok(())
        }
    }
}
