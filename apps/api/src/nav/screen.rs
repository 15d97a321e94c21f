//! Headless view renderer: maps the current view to the screen descriptor a
//! rendering client draws. The mapping is total over the closed view set, so
//! there is no unknown-view fallback to take; unknown view strings never get
//! past the wire boundary.

use serde::Serialize;

use crate::models::user::User;
use crate::nav::catalog::View;
use crate::nav::flows::{call_to_action, navigation_context, NavigationContext};

/// Everything a client needs to render the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenDescriptor {
    pub view: View,
    pub title: &'static str,
    pub label: &'static str,
    pub call_to_action: &'static str,
    pub navigation: NavigationContext,
}

pub fn screen(view: View, user: Option<&User>) -> ScreenDescriptor {
    let user_type = user.map(|u| u.user_type);
    ScreenDescriptor {
        view,
        title: view.title(),
        label: view.label(),
        call_to_action: call_to_action(view, user.is_some()),
        navigation: navigation_context(view, user_type),
    }
}
