//! The session store: sole owner of a session's `SessionState`.
//!
//! Every mutation goes through the reducer; the store adds what the pure
//! layer can't hold: the navigation policy check, the injectable sign-up
//! port, the document-title observer, and the error banner's auto-clear
//! timer. Anticipated failures (denied navigation, sign-up rejection) land
//! in the state's error field and never propagate out of the public
//! operations.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::models::user::User;
use crate::nav::catalog::{messages, UserType, View};
use crate::nav::policy::{dashboard_for, validate_navigation};
use crate::session::gateway::SignupGateway;
use crate::session::reducer::{reduce, Action};
use crate::session::state::SessionState;
use crate::validation::SanitizedSignup;

/// How long an error banner stays up before clearing itself.
pub const ERROR_AUTO_CLEAR: Duration = Duration::from_millis(5000);

/// Collaborator told about every successful view change, so the client can
/// update the document title. Not part of the state machine's contract.
pub trait TitleObserver: Send + Sync {
    fn title_changed(&self, view: View, title: &str);
}

/// Default observer: the title change is only worth a log line server-side.
pub struct TracingTitleObserver;

impl TitleObserver for TracingTitleObserver {
    fn title_changed(&self, view: View, title: &str) {
        debug!(%view, title, "document title updated");
    }
}

/// Returned when a sign-up is submitted while another is still resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("A sign-up is already in progress")]
pub struct SignupInFlight;

struct Inner {
    state: SessionState,
    /// Bumped on every error transition; a pending auto-clear timer only
    /// fires if its epoch still matches (no stale timer may clear a newer
    /// error).
    error_epoch: u64,
    clear_timer: Option<JoinHandle<()>>,
    /// Tracked outside `SessionState` so the reducer's loading-flag rules
    /// cannot widen the duplicate-submission window.
    signup_in_flight: bool,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(timer) = self.clear_timer.take() {
            timer.abort();
        }
    }
}

pub struct SessionStore {
    weak_self: Weak<SessionStore>,
    inner: Mutex<Inner>,
    gateway: Arc<dyn SignupGateway>,
    titles: Arc<dyn TitleObserver>,
    error_ttl: Duration,
}

impl SessionStore {
    pub fn new(gateway: Arc<dyn SignupGateway>, titles: Arc<dyn TitleObserver>) -> Arc<Self> {
        Self::with_error_ttl(gateway, titles, ERROR_AUTO_CLEAR)
    }

    /// Constructor with an explicit banner lifetime, for callers that need
    /// to tighten or stretch the auto-clear window.
    pub fn with_error_ttl(
        gateway: Arc<dyn SignupGateway>,
        titles: Arc<dyn TitleObserver>,
        error_ttl: Duration,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| SessionStore {
            weak_self: weak_self.clone(),
            inner: Mutex::new(Inner {
                state: SessionState::initial(),
                error_epoch: 0,
                clear_timer: None,
                signup_in_flight: false,
            }),
            gateway,
            titles,
            error_ttl,
        })
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.lock().state.clone()
    }

    /// Attempts to change the current view. A denied attempt surfaces the
    /// denial's copy as the session error and leaves the view untouched.
    pub fn navigate(&self, view: View) {
        let mut inner = self.inner.lock();
        match validate_navigation(view, inner.state.user.as_ref()) {
            Ok(()) => {
                self.transition(&mut inner, Action::SetView(view));
            }
            Err(denial) => {
                warn!(%view, %denial, "navigation denied");
                self.transition(&mut inner, Action::SetError(Some(denial.to_string())));
            }
        }
    }

    /// Drives a sign-up through the gateway. Rejects a second submission
    /// while one is still in flight; a gateway failure becomes the generic
    /// sign-up error and leaves the user unset.
    pub async fn sign_up(
        &self,
        user_type: UserType,
        signup: SanitizedSignup,
    ) -> Result<(), SignupInFlight> {
        {
            let mut inner = self.inner.lock();
            if inner.signup_in_flight {
                return Err(SignupInFlight);
            }
            inner.signup_in_flight = true;
            self.transition(&mut inner, Action::SetLoading(true));
        }

        let submitted = self.gateway.submit(user_type, &signup).await;

        let mut inner = self.inner.lock();
        inner.signup_in_flight = false;
        match submitted {
            Ok(user) => {
                self.transition(
                    &mut inner,
                    Action::SignupSuccess {
                        user,
                        redirect_to: dashboard_for(user_type),
                    },
                );
            }
            Err(cause) => {
                error!(%user_type, %cause, "sign-up submission failed");
                self.transition(
                    &mut inner,
                    Action::SetError(Some(messages::SIGNUP_FAILED.to_string())),
                );
            }
        }
        Ok(())
    }

    /// Installs an already-resolved user and lands on their dashboard.
    pub fn sign_in(&self, user: User) {
        let redirect_to = dashboard_for(user.user_type);
        let mut inner = self.inner.lock();
        self.transition(&mut inner, Action::SigninSuccess { user, redirect_to });
    }

    /// Resets the session to its initial state.
    pub fn sign_out(&self) {
        let mut inner = self.inner.lock();
        self.transition(&mut inner, Action::SignOut);
    }

    pub fn set_loading(&self, is_loading: bool) {
        let mut inner = self.inner.lock();
        self.transition(&mut inner, Action::SetLoading(is_loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        let mut inner = self.inner.lock();
        self.transition(&mut inner, Action::SetError(error));
    }

    /// Explicit banner dismissal; cancels the pending auto-clear timer.
    pub fn clear_error(&self) {
        self.set_error(None);
    }

    fn transition(&self, inner: &mut Inner, action: Action) {
        let next = reduce(&inner.state, action);
        let view_changed = next.current_view != inner.state.current_view;
        let error_changed = next.error != inner.state.error;
        inner.state = next;

        if error_changed {
            self.sync_error_timer(inner);
        }
        if view_changed {
            let view = inner.state.current_view;
            self.titles.title_changed(view, view.title());
        }
    }

    /// Cancels any pending auto-clear and arms a fresh timer when an error
    /// is showing. The epoch guards against a cancelled task that already
    /// passed its sleep.
    fn sync_error_timer(&self, inner: &mut Inner) {
        inner.error_epoch += 1;
        if let Some(timer) = inner.clear_timer.take() {
            timer.abort();
        }
        if inner.state.error.is_none() {
            return;
        }

        let epoch = inner.error_epoch;
        let ttl = self.error_ttl;
        let store = self.weak_self.clone();
        inner.clear_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(store) = store.upgrade() {
                store.expire_error(epoch);
            }
        }));
    }

    fn expire_error(&self, epoch: u64) {
        let mut inner = self.inner.lock();
        if inner.error_epoch != epoch {
            // Dismissed or superseded while we slept.
            return;
        }
        debug!("error banner auto-cleared");
        self.transition(&mut inner, Action::SetError(None));
    }
}
