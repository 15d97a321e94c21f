#![allow(dead_code)]

//! Per-view navigation flow records: where "back" leads, which views carry
//! navigation chrome, and the breadcrumb trail shown to signed-in users.
//!
//! Every view has exactly one flow record. The dashboard destination mapping
//! is identical for every record and total over user types, so it lives once
//! in `catalog::default_dashboard` rather than being repeated per view.

use serde::Serialize;

use crate::nav::catalog::{default_dashboard, UserType, View};
use crate::nav::policy::is_public;

/// Static flow record for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavFlow {
    pub back_destination: Option<View>,
    pub requires_auth: bool,
}

/// Total lookup: the flow record for any view.
pub fn flow(view: View) -> NavFlow {
    let back_destination = match view {
        View::Landing | View::CandidateDashboard | View::RecruiterDashboard => None,
        View::Signup => Some(View::Landing),
        // Back from the candidate-leaning feature pages lands on the
        // candidate dashboard unless the signed-in type says otherwise
        // (see `back_destination`).
        View::SkillChallenge | View::InterviewExperience | View::JobSearch | View::Profile => {
            Some(View::CandidateDashboard)
        }
    };

    NavFlow {
        back_destination,
        requires_auth: !is_public(view),
    }
}

/// Where the back control leads from `view`. Profile's destination follows
/// the signed-in user's own dashboard.
pub fn back_destination(view: View, user_type: Option<UserType>) -> Option<View> {
    let record = flow(view);
    record.back_destination?;

    if view == View::Profile {
        if let Some(user_type) = user_type {
            return Some(default_dashboard(user_type));
        }
    }

    record.back_destination
}

/// Landing and signup render without navigation chrome.
pub fn shows_navigation_controls(view: View) -> bool {
    !matches!(view, View::Landing | View::Signup)
}

pub fn shows_back_button(view: View) -> bool {
    flow(view).back_destination.is_some()
}

/// The dashboard link appears on every chromed view except the user's own
/// dashboard, and never for anonymous visitors.
pub fn shows_dashboard_link(view: View, user_type: Option<UserType>) -> bool {
    if !shows_navigation_controls(view) {
        return false;
    }
    let Some(user_type) = user_type else {
        return false;
    };
    view != default_dashboard(user_type)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: &'static str,
    pub view: View,
}

/// Breadcrumb trail for a view: the user's dashboard, then the current page.
/// Empty for anonymous visitors and on the chromeless views.
pub fn breadcrumbs(view: View, user_type: Option<UserType>) -> Vec<Breadcrumb> {
    let Some(user_type) = user_type else {
        return Vec::new();
    };
    if matches!(view, View::Landing | View::Signup) {
        return Vec::new();
    }

    let dashboard = default_dashboard(user_type);
    if view == dashboard {
        return Vec::new();
    }

    vec![
        Breadcrumb {
            label: dashboard.label(),
            view: dashboard,
        },
        Breadcrumb {
            label: view.label(),
            view,
        },
    ]
}

/// Everything the rendering client needs to draw navigation chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    pub show_back_button: bool,
    pub show_dashboard_link: bool,
    pub back_destination: Option<View>,
    pub dashboard_destination: Option<View>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

pub fn navigation_context(view: View, user_type: Option<UserType>) -> NavigationContext {
    NavigationContext {
        show_back_button: shows_back_button(view),
        show_dashboard_link: shows_dashboard_link(view, user_type),
        back_destination: back_destination(view, user_type),
        dashboard_destination: user_type.map(default_dashboard),
        breadcrumbs: breadcrumbs(view, user_type),
    }
}

/// Primary call-to-action copy, keyed on the view and whether a user is
/// signed in. Anonymous visitors get the sign-up nudge variants.
pub fn call_to_action(view: View, signed_in: bool) -> &'static str {
    if signed_in {
        match view {
            View::SkillChallenge => "Start Challenge",
            View::InterviewExperience => "Begin Interview",
            View::JobSearch => "Apply Now",
            _ => "Continue",
        }
    } else {
        match view {
            View::SkillChallenge => "Try Challenge (Sign up to save progress)",
            View::InterviewExperience => "Demo Interview (Sign up for full experience)",
            View::JobSearch => "View Job (Sign up to apply)",
            _ => "Sign Up to Continue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_has_a_flow_record() {
        for view in View::ALL {
            // Total by construction; also pin the auth flag to the policy.
            let record = flow(view);
            assert_eq!(record.requires_auth, !is_public(view), "{view}");
        }
    }

    #[test]
    fn test_dashboards_and_landing_have_no_back() {
        assert_eq!(back_destination(View::Landing, None), None);
        assert_eq!(back_destination(View::CandidateDashboard, Some(UserType::Candidate)), None);
        assert_eq!(back_destination(View::RecruiterDashboard, Some(UserType::Recruiter)), None);
    }

    #[test]
    fn test_signup_goes_back_to_landing() {
        assert_eq!(back_destination(View::Signup, None), Some(View::Landing));
    }

    #[test]
    fn test_profile_back_follows_user_type() {
        assert_eq!(
            back_destination(View::Profile, Some(UserType::Recruiter)),
            Some(View::RecruiterDashboard)
        );
        assert_eq!(
            back_destination(View::Profile, Some(UserType::Candidate)),
            Some(View::CandidateDashboard)
        );
        // Without a signed-in type the static default applies.
        assert_eq!(back_destination(View::Profile, None), Some(View::CandidateDashboard));
    }

    #[test]
    fn test_no_chrome_on_landing_or_signup() {
        assert!(!shows_navigation_controls(View::Landing));
        assert!(!shows_navigation_controls(View::Signup));
        assert!(shows_navigation_controls(View::JobSearch));
    }

    #[test]
    fn test_dashboard_link_hidden_on_own_dashboard() {
        assert!(!shows_dashboard_link(View::CandidateDashboard, Some(UserType::Candidate)));
        assert!(shows_dashboard_link(View::JobSearch, Some(UserType::Candidate)));
        assert!(!shows_dashboard_link(View::JobSearch, None));
    }

    #[test]
    fn test_breadcrumbs_empty_for_anonymous() {
        assert!(breadcrumbs(View::JobSearch, None).is_empty());
    }

    #[test]
    fn test_breadcrumbs_empty_on_own_dashboard() {
        assert!(breadcrumbs(View::CandidateDashboard, Some(UserType::Candidate)).is_empty());
    }

    #[test]
    fn test_breadcrumbs_dashboard_then_page() {
        let trail = breadcrumbs(View::SkillChallenge, Some(UserType::Recruiter));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].view, View::RecruiterDashboard);
        assert_eq!(trail[0].label, "Recruiter Dashboard");
        assert_eq!(trail[1].view, View::SkillChallenge);
        assert_eq!(trail[1].label, "Skill Challenge");
    }

    #[test]
    fn test_navigation_context_for_candidate_on_profile() {
        let ctx = navigation_context(View::Profile, Some(UserType::Candidate));
        assert!(ctx.show_back_button);
        assert!(ctx.show_dashboard_link);
        assert_eq!(ctx.back_destination, Some(View::CandidateDashboard));
        assert_eq!(ctx.dashboard_destination, Some(View::CandidateDashboard));
        assert_eq!(ctx.breadcrumbs.len(), 2);
    }

    #[test]
    fn test_cta_varies_with_authentication() {
        assert_eq!(call_to_action(View::JobSearch, true), "Apply Now");
        assert_eq!(call_to_action(View::JobSearch, false), "View Job (Sign up to apply)");
        assert_eq!(call_to_action(View::Profile, true), "Continue");
        assert_eq!(call_to_action(View::Profile, false), "Sign Up to Continue");
    }
}
