//! Debug-only identity bootstrap: fabricates a complete admin session with no
//! credential verification and no confirmation, bypassing the auth gate.
//!
//! Exposure is gated twice: the `mock-login` cargo feature controls whether
//! the route exists at all, and the runtime `mock_login` setting controls
//! whether this function will seed anything. Release compositions leave both
//! off.

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::session::{Role, SessionRepository, SessionTokens, UserProfile};

use super::resolver::paths;

// Fixed values keep repeated seeding idempotent end to end.
const MOCK_ACCESS_TOKEN: &str = "mock-access-token";
const MOCK_ID_TOKEN: &str = "mock-id-token";
const MOCK_REFRESH_TOKEN: &str = "mock-refresh-token";
const MOCK_EMAIL: &str = "admin@example.com";
const MOCK_NAME: &str = "Platform Admin";

/// Seed a fully-formed admin session and hand back the landing route.
/// No precondition check; repeated calls land on the same end state.
pub fn seed_admin_and_redirect(repo: &SessionRepository, enabled: bool) -> AppResult<&'static str> {
    if !enabled {
        return Err(AppError::disabled(
            "mock_login_disabled",
            "mock identity bootstrap is not available in this deployment",
        ));
    }
    let tokens = SessionTokens {
        access_token: MOCK_ACCESS_TOKEN.to_string(),
        id_token: MOCK_ID_TOKEN.to_string(),
        refresh_token: MOCK_REFRESH_TOKEN.to_string(),
    };
    let profile = UserProfile { email: MOCK_EMAIL.to_string(), display_name: MOCK_NAME.to_string() };
    repo.set_session(&tokens, &profile)?;
    repo.set_role(Role::Admin)?;
    info!(target: "auth", "mock identity seeded: role=admin");
    Ok(paths::ADMIN_OVERVIEW)
}
