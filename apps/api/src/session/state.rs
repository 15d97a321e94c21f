use serde::Serialize;

use crate::models::user::User;
use crate::nav::catalog::View;

/// The whole per-session application state. `is_authenticated` is derived
/// from `user`, never stored, so the two can't drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub current_view: View,
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn initial() -> Self {
        SessionState {
            current_view: View::Landing,
            user: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::initial()
    }
}
