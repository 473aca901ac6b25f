//!
//! carrierdeck HTTP server
//! -----------------------
//! Axum-based entry surface for the dashboard gateway.
//!
//! Responsibilities:
//! - Entry routes that run the redirect gate and answer with 307s.
//! - Mirrored `userType` cookie writes on role changes.
//! - Landing stubs so redirect chains terminate observably.
//! - Sign-out endpoint clearing store and cookie.
//! - Debug-only mock identity bootstrap behind the `mock-login` feature.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, warn};

use crate::config::Settings;
use crate::routing::{paths, AuthGate, EntryGuard, TokenPresenceGate};
use crate::session::{FileStore, MemoryJar, SessionRepository, ROLE_COOKIE};

/// Shared server state injected into all handlers.
///
/// Holds the session repository over the durable store, the auth gate, and
/// the process-wide cookie jar recording the last mirror write handed to the
/// client.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<SessionRepository>,
    pub gate: Arc<dyn AuthGate>,
    pub jar: Arc<MemoryJar>,
    pub settings: Settings,
}

pub async fn run() -> anyhow::Result<()> {
    run_with_settings(Settings::from_env()).await
}

pub async fn run_with_settings(settings: Settings) -> anyhow::Result<()> {
    let store = FileStore::open(&settings.state_folder)
        .with_context(|| format!("While opening session store under: {}", settings.state_folder))?;
    let jar = Arc::new(MemoryJar::new());
    let repo = Arc::new(SessionRepository::new(Arc::new(store), jar.clone()));
    let gate: Arc<dyn AuthGate> = Arc::new(TokenPresenceGate::new(repo.clone()));

    if settings.mock_login && !cfg!(feature = "mock-login") {
        warn!("CARRIERDECK_MOCK_LOGIN is set but the mock-login feature is not compiled in");
    }

    let state = AppState { repo, gate, jar, settings: settings.clone() };
    let app = router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", settings.http_port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(enter_root))
        .route("/dashboard", get(enter_dashboard))
        .route("/admin/dashboard", get(enter_admin_dashboard))
        .route("/auth/sign-out", post(sign_out))
        .route("/status", get(status))
        // Landing stubs: the dashboards proper live in the frontend; these
        // terminate redirect chains during local runs and tests.
        .route("/auth/sign-in", get(|| async { "carrierdeck sign-in" }))
        .route("/admin/overview", get(|| async { "carrierdeck admin overview" }))
        .route("/carrier/dashboard", get(|| async { "carrierdeck carrier dashboard" }));

    #[cfg(feature = "mock-login")]
    let app = app.route("/admin/test-login", get(mock_login));

    app.with_state(state)
}

/// `/`: full redirect gate. Gate denial lands on sign-in, otherwise the
/// stored role picks the landing page.
async fn enter_root(State(state): State<AppState>) -> impl IntoResponse {
    let mut guard = EntryGuard::new();
    let decision = guard.run(paths::ROOT, state.gate.as_ref(), &state.repo);
    Redirect::temporary(decision.target)
}

/// `/dashboard`: stored role only, no gate consult. Admin lands on the alias
/// route, which in turn forwards to the overview.
async fn enter_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let mut guard = EntryGuard::new();
    let decision = guard.run(paths::DASHBOARD, state.gate.as_ref(), &state.repo);
    Redirect::temporary(decision.target)
}

/// `/admin/dashboard`: pure alias, applied before any auth check.
async fn enter_admin_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let mut guard = EntryGuard::new();
    let decision = guard.run(paths::ADMIN_DASHBOARD, state.gate.as_ref(), &state.repo);
    Redirect::temporary(decision.target)
}

async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "authenticated": state.gate.is_authenticated(),
        "role": state.repo.role().as_str(),
    }))
}

async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = state.repo.clear() {
        // Still send the visitor to sign-in; the stale state degrades safely
        warn!("sign-out clear failed: {}", e);
    }
    let mut headers = HeaderMap::new();
    headers.insert("Set-Cookie", clear_role_cookie());
    (headers, Redirect::temporary(paths::SIGN_IN))
}

#[cfg(feature = "mock-login")]
async fn mock_login(State(state): State<AppState>) -> axum::response::Response {
    use axum::http::StatusCode;

    use crate::error::AppError;
    use crate::routing::seed_admin_and_redirect;

    match seed_admin_and_redirect(&state.repo, state.settings.mock_login) {
        Ok(target) => {
            let mut headers = HeaderMap::new();
            if let Some(cookie) = role_cookie_header(&state.jar) {
                headers.insert("Set-Cookie", cookie);
            }
            (headers, Redirect::temporary(target)).into_response()
        }
        Err(e @ AppError::Disabled { .. }) => {
            (StatusCode::NOT_FOUND, e.message().to_string()).into_response()
        }
        Err(e) => {
            // Persistence trouble: fail safe to sign-in rather than error out
            Redirect::temporary(crate::routing::fail_safe_target(&e)).into_response()
        }
    }
}

#[cfg(feature = "mock-login")]
fn role_cookie_header(jar: &MemoryJar) -> Option<HeaderValue> {
    let (value, attrs) = jar.entry(ROLE_COOKIE)?;
    HeaderValue::from_str(&crate::session::set_cookie_header(ROLE_COOKIE, &value, &attrs)).ok()
}

fn clear_role_cookie() -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{}=deleted; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Path=/",
        ROLE_COOKIE
    ))
    .unwrap()
}
