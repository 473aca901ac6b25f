//! Entry guard: one redirect decision per page activation.
//!
//! The guard runs synchronously before anything renders and hands the
//! decision back as a value. It never retries and never shows an error;
//! anything ambiguous resolves to some successful redirect.

use std::sync::Arc;

use tracing::warn;

use crate::session::SessionRepository;

use super::resolver::{self, paths};

/// External authentication predicate. Synchronous and side-effect free from
/// the guard's perspective.
pub trait AuthGate: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Default gate wiring: presence of the stored access token is the whole
/// signal. A store that cannot be read counts as unauthenticated.
pub struct TokenPresenceGate {
    repo: Arc<SessionRepository>,
}

impl TokenPresenceGate {
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }
}

impl AuthGate for TokenPresenceGate {
    fn is_authenticated(&self) -> bool {
        self.repo.is_access_token_present()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Checking,
    Redirecting,
    Terminal,
}

/// The decision, returned as a value rather than performed as a side effect.
/// Issuing the navigation is the caller's problem; there is no recovery path
/// if it never completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: &'static str,
}

/// One-shot state machine: `Idle -> Checking -> Redirecting -> Terminal`.
/// `run` evaluates at most once per activation; later calls replay the
/// recorded decision without touching the gate or the repository again.
pub struct EntryGuard {
    state: GuardState,
    decision: Option<Redirect>,
}

impl Default for EntryGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryGuard {
    pub fn new() -> Self {
        Self { state: GuardState::Idle, decision: None }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn decision(&self) -> Option<&Redirect> {
        self.decision.as_ref()
    }

    pub fn run(&mut self, path: &str, gate: &dyn AuthGate, repo: &SessionRepository) -> Redirect {
        if let Some(prior) = &self.decision {
            return prior.clone();
        }

        // Alias pages have no auth dependency: skip Checking entirely.
        if let Some(target) = resolver::alias_for(path) {
            return self.finish(Redirect { target });
        }

        self.state = GuardState::Checking;
        let target = match path {
            // Stored role alone; deliberately no gate consult on this path
            paths::DASHBOARD => resolver::stored_role_destination(repo.role()),
            _ => {
                if !gate.is_authenticated() {
                    paths::SIGN_IN
                } else {
                    resolver::resolve_destination(true, repo.role())
                }
            }
        };
        self.finish(Redirect { target })
    }

    /// Record the decision and settle. `Redirecting` is transient: handing
    /// the value back is the issuance, so the guard lands on `Terminal`.
    fn finish(&mut self, redirect: Redirect) -> Redirect {
        self.state = GuardState::Redirecting;
        self.decision = Some(redirect.clone());
        self.state = GuardState::Terminal;
        redirect
    }
}

/// Fail-safe mapping for entry handlers: a persistence failure on the way to
/// a destination degrades to the sign-in page, logged but never shown.
pub fn fail_safe_target(err: &crate::error::AppError) -> &'static str {
    warn!("entry guard degraded to sign-in: {}", err);
    paths::SIGN_IN
}
