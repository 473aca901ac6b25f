//! HTTP surface tests: drive the axum router directly and assert the
//! observable redirect behavior, status codes and cookie headers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use carrierdeck::config::Settings;
use carrierdeck::routing::{AuthGate, TokenPresenceGate};
use carrierdeck::server::{router, AppState};
use carrierdeck::session::{keys, MemoryJar, MemoryStore, Role, SessionRepository, StateStore};

struct Fixture {
    store: Arc<MemoryStore>,
    repo: Arc<SessionRepository>,
    app: axum::Router,
}

fn fixture(mock_login: bool) -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let jar = Arc::new(MemoryJar::new());
    let repo = Arc::new(SessionRepository::new(store.clone(), jar.clone()));
    let gate: Arc<dyn AuthGate> = Arc::new(TokenPresenceGate::new(repo.clone()));
    let settings = Settings { mock_login, ..Settings::default() };
    let app = router(AppState { repo: repo.clone(), gate, jar, settings });
    Fixture { store, repo, app }
}

async fn get(app: axum::Router, path: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post(app: axum::Router, path: &str) -> axum::response::Response {
    app.oneshot(Request::builder().method("POST").uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn root_with_empty_state_answers_307_to_sign_in() {
    let fx = fixture(false);
    let res = get(fx.app, "/").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/auth/sign-in");
}

#[tokio::test]
async fn authenticated_root_routes_by_stored_role() {
    let fx = fixture(false);
    fx.store.put(keys::ACCESS_TOKEN, "tok-123").unwrap();
    let res = get(fx.app, "/").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/carrier/dashboard");

    let fx = fixture(false);
    fx.store.put(keys::ACCESS_TOKEN, "tok-123").unwrap();
    fx.repo.set_role(Role::Admin).unwrap();
    let res = get(fx.app, "/").await;
    assert_eq!(res.headers()["location"], "/admin/overview");
}

#[tokio::test]
async fn dashboard_sends_admins_to_the_alias_route() {
    let fx = fixture(false);
    fx.repo.set_role(Role::Admin).unwrap();
    let res = get(fx.app, "/dashboard").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/admin/dashboard");
}

#[tokio::test]
async fn admin_dashboard_alias_answers_307_regardless_of_state() {
    for seed in [false, true] {
        let fx = fixture(false);
        if seed {
            fx.store.put(keys::ACCESS_TOKEN, "tok-123").unwrap();
            fx.repo.set_role(Role::Admin).unwrap();
        }
        let res = get(fx.app, "/admin/dashboard").await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers()["location"], "/admin/overview");
    }
}

#[tokio::test]
async fn sign_out_clears_state_and_expires_the_cookie() {
    let fx = fixture(false);
    fx.store.put(keys::ACCESS_TOKEN, "tok-123").unwrap();
    fx.repo.set_role(Role::Admin).unwrap();

    let res = post(fx.app, "/auth/sign-out").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/auth/sign-in");

    let cookie = res.headers()["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with("userType=deleted"), "cookie not expired: {}", cookie);
    assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));

    for key in keys::ALL {
        assert_eq!(fx.store.get(key), None, "key not cleared: {}", key);
    }
}

#[tokio::test]
async fn status_reports_authentication_and_role() {
    let fx = fixture(false);
    fx.store.put(keys::ACCESS_TOKEN, "tok-123").unwrap();
    fx.repo.set_role(Role::Admin).unwrap();

    let res = get(fx.app, "/status").await;
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn landing_stubs_answer_200() {
    for path in ["/auth/sign-in", "/admin/overview", "/carrier/dashboard"] {
        let fx = fixture(false);
        let res = get(fx.app, path).await;
        assert_eq!(res.status(), StatusCode::OK, "stub missing: {}", path);
    }
}

#[cfg(feature = "mock-login")]
#[tokio::test]
async fn test_login_seeds_admin_and_sets_the_mirror_cookie() {
    let fx = fixture(true);
    let res = get(fx.app, "/admin/test-login").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/admin/overview");
    assert_eq!(res.headers()["set-cookie"], "userType=admin; Path=/; Max-Age=31536000");
    assert_eq!(fx.store.get(keys::USER_TYPE).as_deref(), Some("admin"));
    assert!(fx.repo.is_access_token_present());
}

#[cfg(feature = "mock-login")]
#[tokio::test]
async fn test_login_with_runtime_flag_off_is_not_found() {
    let fx = fixture(false);
    let res = get(fx.app, "/admin/test-login").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(fx.store.get(keys::ACCESS_TOKEN), None);
    assert_eq!(fx.store.get(keys::USER_TYPE), None);
}
