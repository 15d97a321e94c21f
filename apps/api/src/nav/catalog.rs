#![allow(dead_code)]

//! View catalog — the closed set of screens, their titles, and their access
//! classification. Pure data; every lookup is total over the enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named screen in the fixed navigation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Landing,
    Signup,
    CandidateDashboard,
    RecruiterDashboard,
    SkillChallenge,
    InterviewExperience,
    JobSearch,
    Profile,
}

/// Which side of the marketplace a signed-in user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Candidate,
    Recruiter,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Landing,
        View::Signup,
        View::CandidateDashboard,
        View::RecruiterDashboard,
        View::SkillChallenge,
        View::InterviewExperience,
        View::JobSearch,
        View::Profile,
    ];

    /// Short human-readable label, used for breadcrumbs and nav controls.
    pub fn label(self) -> &'static str {
        match self {
            View::Landing => "Home",
            View::Signup => "Sign Up",
            View::CandidateDashboard => "Dashboard",
            View::RecruiterDashboard => "Recruiter Dashboard",
            View::SkillChallenge => "Skill Challenge",
            View::InterviewExperience => "Interviews",
            View::JobSearch => "Browse Jobs",
            View::Profile => "Profile",
        }
    }

    /// Full document title for the view.
    pub fn title(self) -> &'static str {
        match self {
            View::Landing => "TalentAI - AI-Powered Talent Marketplace",
            View::Signup => "Join TalentAI",
            View::CandidateDashboard => "Candidate Dashboard - TalentAI",
            View::RecruiterDashboard => "Recruiter Dashboard - TalentAI",
            View::SkillChallenge => "Skill Challenge - TalentAI",
            View::InterviewExperience => "Interview Experience - TalentAI",
            View::JobSearch => "Find AI Jobs - TalentAI",
            View::Profile => "Profile - TalentAI",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            View::Landing => "landing",
            View::Signup => "signup",
            View::CandidateDashboard => "candidate-dashboard",
            View::RecruiterDashboard => "recruiter-dashboard",
            View::SkillChallenge => "skill-challenge",
            View::InterviewExperience => "interview-experience",
            View::JobSearch => "job-search",
            View::Profile => "profile",
        };
        f.write_str(tag)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UserType::Candidate => "candidate",
            UserType::Recruiter => "recruiter",
        })
    }
}

/// Views reachable without signing in.
pub const PUBLIC_VIEWS: &[View] = &[
    View::Landing,
    View::Signup,
    View::JobSearch,
    View::SkillChallenge,
    View::InterviewExperience,
];

/// Views that require a signed-in user of a permitted type.
pub const PROTECTED_VIEWS: &[View] = &[
    View::CandidateDashboard,
    View::RecruiterDashboard,
    View::Profile,
];

/// Views a signed-in candidate may visit.
pub const CANDIDATE_VIEWS: &[View] = &[
    View::CandidateDashboard,
    View::SkillChallenge,
    View::InterviewExperience,
    View::JobSearch,
    View::Profile,
];

/// Views a signed-in recruiter may visit.
pub const RECRUITER_VIEWS: &[View] = &[
    View::RecruiterDashboard,
    View::SkillChallenge,
    View::InterviewExperience,
    View::JobSearch,
    View::Profile,
];

/// The home view for each user type.
pub fn default_dashboard(user_type: UserType) -> View {
    match user_type {
        UserType::Candidate => View::CandidateDashboard,
        UserType::Recruiter => View::RecruiterDashboard,
    }
}

/// User-facing copy for every anticipated failure in the session core.
pub mod messages {
    pub const UNAUTHORIZED: &str = "You need to sign in to access this page";
    pub const FORBIDDEN: &str = "You don't have permission to access this page";
    pub const NOT_FOUND: &str = "Page not found";
    pub const GENERIC: &str = "Something went wrong. Please try again.";
    pub const NETWORK: &str = "Network error. Please check your connection.";
    pub const SIGNUP_FAILED: &str = "Failed to create account";
}
