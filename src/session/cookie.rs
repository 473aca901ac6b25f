//! Mirrored cookie copy of the role preference.
//!
//! The role lives in the durable store AND in a `userType` cookie. The two
//! writes are independent and can diverge; readers of the cookie are outside
//! this crate, so the mirror is kept rather than consolidated.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::AppResult;

pub const ROLE_COOKIE: &str = "userType";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieAttributes {
    pub path: &'static str,
    pub max_age_secs: u64,
}

/// One year, scoped to the whole site.
pub const ROLE_COOKIE_ATTRS: CookieAttributes = CookieAttributes { path: "/", max_age_secs: 31_536_000 };

pub trait CookieMirror: Send + Sync {
    fn set(&self, name: &str, value: &str, attrs: &CookieAttributes) -> AppResult<()>;
    fn get(&self, name: &str) -> Option<String>;
    fn clear(&self, name: &str) -> AppResult<()>;
}

/// Render a `Set-Cookie` header value for the mirror write.
pub fn set_cookie_header(name: &str, value: &str, attrs: &CookieAttributes) -> String {
    format!("{}={}; Path={}; Max-Age={}", name, value, attrs.path, attrs.max_age_secs)
}

/// In-process jar: remembers the last value and attributes written per name.
/// Serves both as the test double and as the server's record of what the
/// client was last told.
#[derive(Default)]
pub struct MemoryJar {
    cookies: RwLock<HashMap<String, (String, CookieAttributes)>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value plus attributes, for callers that need to emit the header.
    pub fn entry(&self, name: &str) -> Option<(String, CookieAttributes)> {
        self.cookies.read().get(name).cloned()
    }
}

impl CookieMirror for MemoryJar {
    fn set(&self, name: &str, value: &str, attrs: &CookieAttributes) -> AppResult<()> {
        self.cookies.write().insert(name.to_string(), (value.to_string(), *attrs));
        Ok(())
    }

    fn get(&self, name: &str) -> Option<String> {
        self.cookies.read().get(name).map(|(v, _)| v.clone())
    }

    fn clear(&self, name: &str) -> AppResult<()> {
        self.cookies.write().remove(name);
        Ok(())
    }
}
