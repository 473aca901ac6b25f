//! Pure destination resolution. No session reads, no side effects; every
//! function here is a straight mapping from inputs to a route.

use crate::session::Role;

pub mod paths {
    pub const ROOT: &str = "/";
    pub const DASHBOARD: &str = "/dashboard";
    pub const SIGN_IN: &str = "/auth/sign-in";
    pub const ADMIN_OVERVIEW: &str = "/admin/overview";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const CARRIER_DASHBOARD: &str = "/carrier/dashboard";
}

/// Landing destination for an entry with an auth dependency.
pub fn resolve_destination(authenticated: bool, role: Role) -> &'static str {
    if !authenticated {
        return paths::SIGN_IN;
    }
    match role {
        Role::Admin => paths::ADMIN_OVERVIEW,
        Role::Carrier => paths::CARRIER_DASHBOARD,
    }
}

/// Route aliases, applied before any auth check on the aliased path.
///
/// `/admin/dashboard` forwards to the overview unconditionally. It is
/// deliberately not gated here: gating it would change observed behavior.
/// Whether the alias is a kept backward-compatible shortcut or leftover from
/// a rename is unresolved, so both hops stay independently observable.
pub fn alias_for(path: &str) -> Option<&'static str> {
    match path {
        paths::ADMIN_DASHBOARD => Some(paths::ADMIN_OVERVIEW),
        _ => None,
    }
}

/// The `/dashboard` rule: stored role alone picks the destination, with no
/// auth check. The admin arm lands on the alias route rather than the
/// overview, keeping the chain two-hop.
pub fn stored_role_destination(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN_DASHBOARD,
        Role::Carrier => paths::CARRIER_DASHBOARD,
    }
}
