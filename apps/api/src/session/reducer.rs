//! The closed set of state transitions and the pure function that applies
//! them. Nothing here spawns timers or logs; the store layers those on.

use crate::models::user::User;
use crate::nav::catalog::View;
use crate::session::state::SessionState;

/// One atomic state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetView(View),
    SetUser(Option<User>),
    SetLoading(bool),
    SetError(Option<String>),
    SignupSuccess { user: User, redirect_to: View },
    SigninSuccess { user: User, redirect_to: View },
    SignOut,
    Reset,
}

/// Applies one action. Total and exhaustive over `Action`; no intermediate
/// state is ever observable.
pub fn reduce(state: &SessionState, action: Action) -> SessionState {
    match action {
        Action::SetView(view) => SessionState {
            current_view: view,
            error: None,
            ..state.clone()
        },

        Action::SetUser(user) => SessionState {
            user,
            error: None,
            ..state.clone()
        },

        Action::SetLoading(is_loading) => SessionState {
            is_loading,
            ..state.clone()
        },

        // A surfaced error always ends any loading phase.
        Action::SetError(error) => SessionState {
            error,
            is_loading: false,
            ..state.clone()
        },

        Action::SignupSuccess { user, redirect_to } => SessionState {
            user: Some(user),
            current_view: redirect_to,
            is_loading: false,
            error: None,
        },

        Action::SigninSuccess { user, redirect_to } => SessionState {
            user: Some(user),
            current_view: redirect_to,
            error: None,
            ..state.clone()
        },

        Action::SignOut | Action::Reset => SessionState::initial(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::catalog::UserType;

    fn jane() -> User {
        User::new(UserType::Candidate, "jane@example.com", "Jane Doe")
    }

    #[test]
    fn test_set_view_clears_error() {
        let state = SessionState {
            error: Some("old".to_string()),
            ..SessionState::initial()
        };
        let next = reduce(&state, Action::SetView(View::JobSearch));
        assert_eq!(next.current_view, View::JobSearch);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_set_user_derives_authenticated() {
        let next = reduce(&SessionState::initial(), Action::SetUser(Some(jane())));
        assert!(next.is_authenticated());
        let cleared = reduce(&next, Action::SetUser(None));
        assert!(!cleared.is_authenticated());
    }

    #[test]
    fn test_set_error_stops_loading() {
        let state = SessionState {
            is_loading: true,
            ..SessionState::initial()
        };
        let next = reduce(&state, Action::SetError(Some("boom".to_string())));
        assert_eq!(next.error.as_deref(), Some("boom"));
        assert!(!next.is_loading);
    }

    #[test]
    fn test_signup_success_is_atomic() {
        let state = SessionState {
            is_loading: true,
            error: Some("stale".to_string()),
            ..SessionState::initial()
        };
        let next = reduce(
            &state,
            Action::SignupSuccess {
                user: jane(),
                redirect_to: View::CandidateDashboard,
            },
        );
        assert_eq!(next.current_view, View::CandidateDashboard);
        assert!(next.is_authenticated());
        assert!(!next.is_loading);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_signin_success_leaves_loading_alone() {
        let state = SessionState {
            is_loading: true,
            ..SessionState::initial()
        };
        let next = reduce(
            &state,
            Action::SigninSuccess {
                user: jane(),
                redirect_to: View::CandidateDashboard,
            },
        );
        assert!(next.is_loading);
        assert_eq!(next.current_view, View::CandidateDashboard);
    }

    #[test]
    fn test_sign_out_restores_initial_state_exactly() {
        let state = SessionState {
            current_view: View::Profile,
            user: Some(jane()),
            is_loading: true,
            error: Some("x".to_string()),
        };
        assert_eq!(reduce(&state, Action::SignOut), SessionState::initial());
        assert_eq!(reduce(&state, Action::Reset), SessionState::initial());
    }
}
