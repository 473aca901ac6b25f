//! Redirect gate: destination resolution, the per-activation entry guard and
//! the debug-only identity bootstrap.

mod bootstrap;
mod guard;
mod resolver;

pub use bootstrap::seed_admin_and_redirect;
pub use guard::{fail_safe_target, AuthGate, EntryGuard, GuardState, Redirect, TokenPresenceGate};
pub use resolver::{alias_for, paths, resolve_destination, stored_role_destination};
