//! Command execution context
//!
//! Wires the session core together for one command: config, the origin
//! scoped credential store, the in-process location, the session, the
//! intercepted API client and the router.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{InterceptedClient, RecruitClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::routing::{Location, Navigation, Router, View};
use crate::session::{LocalCredentialStore, Session, SystemClock};
use crate::storage::LocalStorage;

/// Context for command execution.
///
/// Building it restores the session from the credential store, so every
/// command starts from the same identity the last one left behind.
pub struct CommandContext {
    /// Resolved API gateway URL
    pub api_host: String,
    /// Output format preference
    pub format: OutputFormat,
    /// Persistent token slot for the resolved origin
    pub store: Arc<LocalCredentialStore>,
    /// Current in-process location
    pub location: Arc<Location>,
    /// Session state
    pub session: Arc<Session>,
    /// API client behind the failure interceptor
    pub client: InterceptedClient<RecruitClient>,
    /// Route table and guards
    pub router: Router,
}

impl CommandContext {
    /// Create a context whose location starts at `start_path`.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, the API host is invalid or
    /// the credential store cannot be opened.
    pub fn new(opts: &GlobalOptions, start_path: &str) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let api_host = config.api_host(opts.api_host_ref())?;
        let format = resolve_format(opts.format, &config);

        let storage = LocalStorage::open(opts.data_dir_ref(), &api_host)?;
        log::debug!(
            "Using credential store {} (origin {})",
            storage.path().display(),
            storage.origin()
        );
        let store = Arc::new(LocalCredentialStore::new(storage));

        let location = Arc::new(Location::new(start_path));
        let session = Arc::new(Session::new(
            store.clone(),
            location.clone(),
            Arc::new(SystemClock),
        ));

        let client = InterceptedClient::new(
            RecruitClient::new(&api_host, store.clone())?,
            session.clone(),
            location.clone(),
        );
        let router = Router::new(session.clone(), location.clone());

        Ok(Self {
            api_host,
            format,
            store,
            location,
            session,
            client,
            router,
        })
    }

    /// Navigate to a guarded area, failing when a guard redirects away
    pub fn enter(&self, path: &str) -> Result<View> {
        match self.router.navigate(path) {
            Navigation::Activated { view, .. } => Ok(view),
            Navigation::Denied {
                requested,
                redirected_to,
            } => Err(Error::Redirected {
                requested,
                redirected_to,
            }),
        }
    }
}

/// Format precedence: flag or env > config preference > pretty
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
    })
    .unwrap_or_default()
}
