use serde::{Deserialize, Serialize};

/// The two personas the dashboard knows about. Routing treats the role as a
/// landing-page selector, nothing more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Carrier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Carrier => "carrier",
        }
    }

    /// Anything other than the literal `admin` lands on `Carrier`. Unknown
    /// stored values are a default-safe fallback, never an error.
    pub fn parse_or_carrier(stored: Option<&str>) -> Role {
        match stored {
            Some("admin") => Role::Admin,
            _ => Role::Carrier,
        }
    }
}
