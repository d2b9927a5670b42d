//! Route table, guards and navigation
//!
//! Paths mirror the platform's web routes so redirects and landing areas
//! mean the same thing on every client.

pub mod guard;
pub mod navigator;
pub mod policy;

use std::sync::Arc;

use serde::Serialize;

use crate::session::Session;

pub use guard::RouteGuard;
pub use navigator::{Location, Navigator};
pub use policy::{landing_path, post_login_landing};

/// Login entry point
pub const LOGIN_PATH: &str = "/auth/login";
/// Application root
pub const ROOT_PATH: &str = "/";
/// Candidate registration
pub const REGISTER_CANDIDATE_PATH: &str = "/auth/register-candidate";
/// Candidate default landing area
pub const CANDIDATE_LANDING: &str = "/candidate/dashboard";
/// Recruiter default landing area
pub const RECRUITER_LANDING: &str = "/recruiter/dashboard";

/// Upper bound on configured redirects followed in one navigation
const MAX_REDIRECTS: usize = 8;

/// Screen a path resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum View {
    Login,
    RegisterCandidate,
    CandidateDashboard,
    CandidateProfile,
    CandidateOffers,
    CandidateApplications,
    RecruiterDashboard,
    RecruiterMyOffers,
    RecruiterOfferCreate,
    RecruiterOfferApplications { offer_id: String },
    RecruiterAiAnalysis { offer_id: String },
}

/// Result of matching a path against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolved {
    Redirect(&'static str),
    Public(View),
    Guarded(RouteGuard, View),
}

fn resolve(path: &str) -> Resolved {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Resolved::Redirect(LOGIN_PATH),

        ["auth", "login"] => Resolved::Public(View::Login),
        ["auth", "register-candidate"] => Resolved::Public(View::RegisterCandidate),

        ["candidate"] => Resolved::Redirect(CANDIDATE_LANDING),
        ["candidate", rest @ ..] => {
            let view = match rest {
                ["dashboard"] => View::CandidateDashboard,
                ["profile"] => View::CandidateProfile,
                ["offers"] => View::CandidateOffers,
                ["applications"] => View::CandidateApplications,
                _ => return Resolved::Redirect(LOGIN_PATH),
            };
            Resolved::Guarded(RouteGuard::CANDIDATE, view)
        }

        ["recruiter"] => Resolved::Redirect(RECRUITER_LANDING),
        ["recruiter", rest @ ..] => {
            let view = match rest {
                ["dashboard"] => View::RecruiterDashboard,
                ["my-offers"] => View::RecruiterMyOffers,
                ["offers", "create"] => View::RecruiterOfferCreate,
                ["offers", id, "applications"] => View::RecruiterOfferApplications {
                    offer_id: id.to_string(),
                },
                ["ai-analysis", id] => View::RecruiterAiAnalysis {
                    offer_id: id.to_string(),
                },
                _ => return Resolved::Redirect(LOGIN_PATH),
            };
            Resolved::Guarded(RouteGuard::RECRUITER, view)
        }

        _ => Resolved::Redirect(LOGIN_PATH),
    }
}

/// Outcome of a navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// The view was entered at `path`
    Activated { path: String, view: View },
    /// A guard refused entry and redirected
    Denied {
        requested: String,
        redirected_to: String,
    },
}

/// Resolves paths, follows configured redirects and runs guards
pub struct Router {
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl Router {
    pub fn new(session: Arc<Session>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Navigate to `path`, evaluating guards synchronously
    pub fn navigate(&self, path: &str) -> Navigation {
        let requested = path.to_string();
        let mut target = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            match resolve(&target) {
                Resolved::Redirect(to) => {
                    log::debug!("Route {} redirects to {}", target, to);
                    target = to.to_string();
                }
                Resolved::Public(view) => return self.activate(target, view),
                Resolved::Guarded(guard, view) => {
                    if guard.can_activate(&self.session, self.navigator.as_ref()) {
                        return self.activate(target, view);
                    }
                    let redirected_to = self.settle(self.navigator.current_path());
                    return Navigation::Denied {
                        requested,
                        redirected_to,
                    };
                }
            }
        }

        // The route table has no cycles; this only guards against future edits
        log::warn!("Too many redirects navigating to {}", requested);
        self.activate(LOGIN_PATH.to_string(), View::Login)
    }

    /// Follow redirect-only routes from a guard's redirect target
    fn settle(&self, mut path: String) -> String {
        let start = path.clone();
        for _ in 0..MAX_REDIRECTS {
            match resolve(&path) {
                Resolved::Redirect(to) => path = to.to_string(),
                _ => break,
            }
        }
        if path != start {
            log::debug!("Redirect target {} settles on {}", start, path);
            self.navigator.navigate(&path);
        }
        path
    }

    fn activate(&self, path: String, view: View) -> Navigation {
        self.navigator.navigate(&path);
        Navigation::Activated { path, view }
    }
}
