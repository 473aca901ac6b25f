//! Environment-derived settings for the gateway process.
//! All knobs default to something workable so a bare `cargo run` starts a
//! local instance.

#[derive(Debug, Clone)]
pub struct Settings {
    /// Port for the HTTP entry surface.
    pub http_port: u16,
    /// Folder holding the durable session store.
    pub state_folder: String,
    /// Runtime switch for the mock identity bootstrap. The `mock-login`
    /// cargo feature must additionally be enabled for the route to exist.
    pub mock_login: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let http_port = std::env::var("CARRIERDECK_HTTP_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(7878);
        let state_folder = std::env::var("CARRIERDECK_STATE_FOLDER").unwrap_or_else(|_| "state".to_string());
        let mock_login = std::env::var("CARRIERDECK_MOCK_LOGIN")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self { http_port, state_folder, mock_login }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { http_port: 7878, state_folder: "state".to_string(), mock_login: false }
    }
}
