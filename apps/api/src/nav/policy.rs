//! Navigation policy — pure access decisions over (view, user-or-absence).
//!
//! Kept free of store and rendering concerns so every rule is testable as a
//! plain function. Denials distinguish "not signed in" from "signed in but
//! wrong side of the marketplace"; the two drive different user-facing copy.

use thiserror::Error;

use crate::models::user::User;
use crate::nav::catalog::{
    self, default_dashboard, UserType, View, CANDIDATE_VIEWS, PUBLIC_VIEWS, RECRUITER_VIEWS,
};

/// Why a navigation attempt was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavDenial {
    #[error("{}", catalog::messages::UNAUTHORIZED)]
    Unauthenticated,

    #[error("{}", catalog::messages::FORBIDDEN)]
    Forbidden,
}

/// True iff the view is reachable regardless of authentication state.
pub fn is_public(view: View) -> bool {
    PUBLIC_VIEWS.contains(&view)
}

/// The dashboard a freshly signed-in user of the given type lands on.
pub fn dashboard_for(user_type: UserType) -> View {
    default_dashboard(user_type)
}

/// Whether `user` (or an anonymous visitor, when `None`) may reach `view`.
pub fn can_access(view: View, user: Option<&User>) -> bool {
    if is_public(view) {
        return true;
    }

    let Some(user) = user else {
        return false;
    };

    match user.user_type {
        UserType::Candidate => CANDIDATE_VIEWS.contains(&view),
        UserType::Recruiter => RECRUITER_VIEWS.contains(&view),
    }
}

/// Full navigate/deny decision. `Err` carries the exact copy to surface.
pub fn validate_navigation(view: View, user: Option<&User>) -> Result<(), NavDenial> {
    if can_access(view, user) {
        return Ok(());
    }

    if user.is_none() {
        Err(NavDenial::Unauthenticated)
    } else {
        Err(NavDenial::Forbidden)
    }
}
