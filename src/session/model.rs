use serde::{Deserialize, Serialize};

/// Opaque token triple produced by the sign-in flow. Presence of a non-empty
/// `access_token` is the only signal the gateway itself consumes; validation
/// happens upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    #[serde(default)]
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

/// Descriptive profile fields. Not consulted by any routing decision.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}
