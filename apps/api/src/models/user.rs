#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::nav::catalog::UserType;

/// Default profile completeness at account creation. Recruiters start higher
/// because the company form pre-fills part of their profile.
const CANDIDATE_STARTING_COMPLETENESS: u8 = 25;
const RECRUITER_STARTING_COMPLETENESS: u8 = 40;

/// A signed-in marketplace user. Lives only in the session store — nothing
/// is persisted, so a session teardown discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
    pub name: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    /// 0–100.
    pub profile_completeness: u8,
}

impl User {
    /// Builds a fresh user record: email lower-cased and trimmed, name
    /// trimmed, never verified at creation, completeness defaulted by type.
    pub fn new(user_type: UserType, email: &str, name: &str) -> Self {
        User {
            id: Uuid::new_v4(),
            user_type,
            email: email.trim().to_lowercase(),
            name: name.trim().to_string(),
            is_verified: false,
            created_at: Utc::now(),
            profile_completeness: match user_type {
                UserType::Candidate => CANDIDATE_STARTING_COMPLETENESS,
                UserType::Recruiter => RECRUITER_STARTING_COMPLETENESS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate_defaults() {
        let user = User::new(UserType::Candidate, "Jane@Example.COM ", "  Jane Doe ");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.user_type, UserType::Candidate);
        assert!(!user.is_verified);
        assert_eq!(user.profile_completeness, 25);
    }

    #[test]
    fn test_new_recruiter_defaults() {
        let user = User::new(UserType::Recruiter, "rex@corp.io", "Rex Hunter");
        assert_eq!(user.profile_completeness, 40);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = User::new(UserType::Candidate, "a@b.co", "Aa");
        let b = User::new(UserType::Candidate, "a@b.co", "Aa");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_type_serializes_under_type_key() {
        let user = User::new(UserType::Recruiter, "rex@corp.io", "Rex Hunter");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["type"], "recruiter");
    }
}
