//! Sign-up submission port — the one async boundary in the session core.
//!
//! There is no real account backend; the production implementation defers
//! completion behind a fixed delay so front-end loading states stay honest.
//! Tests substitute an instant fake. Carried as `Arc<dyn SignupGateway>`,
//! swapped at construction.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::user::User;
use crate::nav::catalog::UserType;
use crate::validation::SanitizedSignup;

/// How long the simulated sign-up takes to resolve.
pub const SIMULATED_SIGNUP_LATENCY: Duration = Duration::from_millis(1000);

#[async_trait]
pub trait SignupGateway: Send + Sync {
    /// Resolves to the created user record, or an error the store converts
    /// into the generic sign-up failure message.
    async fn submit(&self, user_type: UserType, signup: &SanitizedSignup) -> Result<User>;
}

/// Default gateway: synthesizes the user locally after a simulated delay.
pub struct SimulatedSignupGateway;

#[async_trait]
impl SignupGateway for SimulatedSignupGateway {
    async fn submit(&self, user_type: UserType, signup: &SanitizedSignup) -> Result<User> {
        tokio::time::sleep(SIMULATED_SIGNUP_LATENCY).await;
        Ok(User::new(user_type, &signup.email, &signup.name))
    }
}
