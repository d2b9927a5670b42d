//! Authorization policy
//!
//! The one table every guard consults:
//!
//! | authenticated | role vs. partition          | outcome                        |
//! |---------------|-----------------------------|--------------------------------|
//! | no            | any                         | redirect to login              |
//! | yes           | matches                     | allow                          |
//! | yes           | another known role          | redirect to that role's area   |
//! | yes           | unknown or missing role     | redirect to application root   |

use crate::session::Role;

use super::{CANDIDATE_LANDING, LOGIN_PATH, RECRUITER_LANDING, ROOT_PATH};

/// A set of routes gated on the same requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Candidate,
    Recruiter,
    /// Any signed-in user, whatever the role
    Authenticated,
}

impl Partition {
    /// Role required to enter, `None` when any identity will do
    pub fn required_role(self) -> Option<Role> {
        match self {
            Partition::Candidate => Some(Role::Candidate),
            Partition::Recruiter => Some(Role::Recruiter),
            Partition::Authenticated => None,
        }
    }
}

/// Where a denied navigation is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Login,
    /// Default landing area of the user's own (known) role
    OwnArea(Role),
    Root,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => LOGIN_PATH,
            Redirect::OwnArea(role) => landing_path(role).unwrap_or(ROOT_PATH),
            Redirect::Root => ROOT_PATH,
        }
    }
}

/// Outcome of an authorization check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Redirect),
}

/// Default landing area for a known role
pub fn landing_path(role: &Role) -> Option<&'static str> {
    match role {
        Role::Candidate => Some(CANDIDATE_LANDING),
        Role::Recruiter => Some(RECRUITER_LANDING),
        Role::Other(_) => None,
    }
}

/// Where a freshly signed-in user lands.
///
/// An authenticated identity without a known role is sent to the candidate
/// area, whose guard then routes it to the root.
pub fn post_login_landing(authenticated: bool, role: Option<&Role>) -> &'static str {
    if !authenticated {
        return ROOT_PATH;
    }
    role.and_then(landing_path).unwrap_or(CANDIDATE_LANDING)
}

/// Decide whether a user may enter `partition`
pub fn authorize(authenticated: bool, role: Option<&Role>, partition: Partition) -> Decision {
    if !authenticated {
        return Decision::Deny(Redirect::Login);
    }

    let Some(required) = partition.required_role() else {
        return Decision::Allow;
    };

    match role {
        Some(role) if *role == required => Decision::Allow,
        Some(role) if role.is_known() => Decision::Deny(Redirect::OwnArea(role.clone())),
        _ => Decision::Deny(Redirect::Root),
    }
}
