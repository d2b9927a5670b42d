//! Route guards
//!
//! Thin adapters over [`authorize`]: read the session, apply the policy,
//! navigate on denial. Guards never change the session themselves.

use crate::session::Session;

use super::Navigator;
use super::policy::{Decision, Partition, authorize};

/// Guard protecting one route partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    partition: Partition,
}

impl RouteGuard {
    pub const CANDIDATE: RouteGuard = RouteGuard::new(Partition::Candidate);
    pub const RECRUITER: RouteGuard = RouteGuard::new(Partition::Recruiter);
    #[allow(dead_code)]
    pub const AUTHENTICATED: RouteGuard = RouteGuard::new(Partition::Authenticated);

    pub const fn new(partition: Partition) -> Self {
        Self { partition }
    }

    #[allow(dead_code)]
    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Evaluate the guard at navigation time.
    ///
    /// Returns `true` to let navigation proceed. On denial, navigates to the
    /// policy's redirect target and returns `false`.
    pub fn can_activate(&self, session: &Session, navigator: &dyn Navigator) -> bool {
        let authenticated = session.is_authenticated();
        let role = session.current_role();

        match authorize(authenticated, role.as_ref(), self.partition) {
            Decision::Allow => true,
            Decision::Deny(redirect) => {
                log::warn!(
                    "Access to {:?} area denied (authenticated: {}, role: {:?}), redirecting to {}",
                    self.partition,
                    authenticated,
                    role,
                    redirect.path()
                );
                navigator.navigate(redirect.path());
                false
            }
        }
    }
}
