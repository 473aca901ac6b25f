//! The single doorway between routing logic and persisted identity signals.
//! Guard code never touches the store or the cookie jar directly; it goes
//! through an injected `SessionRepository`.

use std::sync::Arc;

use crate::error::AppResult;
use crate::tprintln;

use super::cookie::{CookieMirror, ROLE_COOKIE, ROLE_COOKIE_ATTRS};
use super::model::{SessionTokens, UserProfile};
use super::role::Role;
use super::store::StateStore;

/// Key layout of the durable store. Names match the persisted wire format and
/// must not be renamed.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "accessToken";
    pub const ID_TOKEN: &str = "idToken";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_NAME: &str = "userName";
    pub const USER_TYPE: &str = "userType";

    pub const ALL: [&str; 6] = [ACCESS_TOKEN, ID_TOKEN, REFRESH_TOKEN, USER_EMAIL, USER_NAME, USER_TYPE];
}

pub struct SessionRepository {
    store: Arc<dyn StateStore>,
    cookies: Arc<dyn CookieMirror>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn StateStore>, cookies: Arc<dyn CookieMirror>) -> Self {
        Self { store, cookies }
    }

    /// True iff a non-empty access token sits in the durable store. This is
    /// the whole authenticity signal consumed here; token validation is an
    /// upstream concern.
    pub fn is_access_token_present(&self) -> bool {
        self.store.get(keys::ACCESS_TOKEN).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Stored role, defaulting to `Carrier` when absent or unrecognized.
    /// Never errors.
    pub fn role(&self) -> Role {
        Role::parse_or_carrier(self.store.get(keys::USER_TYPE).as_deref())
    }

    /// Write the role to the store and the mirrored cookie.
    ///
    /// Two independent writes, not transactional: a failure between them
    /// leaves store and cookie divergent. That divergence is longstanding
    /// observable behavior and is preserved, not reconciled.
    pub fn set_role(&self, role: Role) -> AppResult<()> {
        self.store.put(keys::USER_TYPE, role.as_str())?;
        self.cookies.set(ROLE_COOKIE, role.as_str(), &ROLE_COOKIE_ATTRS)?;
        tprintln!("session.set_role role={}", role.as_str());
        Ok(())
    }

    /// Persist the full token triple and profile. Sequential writes; atomic
    /// only from the caller's perspective.
    pub fn set_session(&self, tokens: &SessionTokens, profile: &UserProfile) -> AppResult<()> {
        self.store.put(keys::ACCESS_TOKEN, &tokens.access_token)?;
        self.store.put(keys::ID_TOKEN, &tokens.id_token)?;
        self.store.put(keys::REFRESH_TOKEN, &tokens.refresh_token)?;
        self.store.put(keys::USER_EMAIL, &profile.email)?;
        self.store.put(keys::USER_NAME, &profile.display_name)?;
        Ok(())
    }

    /// Sign-out collaborator: drop every session and role key, cookie
    /// included.
    pub fn clear(&self) -> AppResult<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        self.cookies.clear(ROLE_COOKIE)?;
        Ok(())
    }
}
