//! Session persistence and role state for the dashboard gateway.
//! Keep the public surface thin and split implementation across sub-modules.

mod cookie;
mod model;
mod repository;
mod role;
mod store;

pub use cookie::{set_cookie_header, CookieAttributes, CookieMirror, MemoryJar, ROLE_COOKIE, ROLE_COOKIE_ATTRS};
pub use model::{SessionTokens, UserProfile};
pub use repository::{keys, SessionRepository};
pub use role::Role;
pub use store::{FileStore, MemoryStore, StateStore};
