//! Session lifecycle tests against an in-process stub backend

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use course2ceo::api::models::{RegisterRequest, Role};
use course2ceo::session::{AuthOutcome, SessionStore, TokenFile};
use course2ceo::ApiClient;

#[derive(Clone, Default)]
struct BackendState {
    register_body: Arc<Mutex<Option<Value>>>,
    reject_me: Arc<AtomicBool>,
    slow_me: Arc<AtomicBool>,
}

fn admin_user() -> Value {
    json!({ "id": "u-admin", "name": "Admin", "email": "admin@x.com", "role": "admin" })
}

fn student_user() -> Value {
    json!({ "id": "u-student", "name": "Student", "email": "student@x.com", "role": "student" })
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("admin@x.com"), Some("secret")) => (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "token": "tok-admin",
                "user": admin_user(),
            })),
        ),
        (Some("student@x.com"), Some("secret")) => (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "token": "tok-student",
                "user": student_user(),
            })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        ),
    }
}

async fn register(
    State(state): State<BackendState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.register_body.lock().unwrap() = Some(body.clone());
    let user = json!({
        "id": "u-new",
        "name": body["name"],
        "email": body["email"],
        "role": body["role"],
    });
    (
        StatusCode::OK,
        Json(json!({
            "message": "Registration successful",
            "token": "tok-new",
            "user": user,
        })),
    )
}

async fn me(State(state): State<BackendState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let unauthorized = (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Invalid token" })),
    );
    if state.slow_me.load(Ordering::SeqCst) {
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    }
    if state.reject_me.load(Ordering::SeqCst) {
        return unauthorized;
    }
    let token = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    match token {
        Some("tok-admin") => (StatusCode::OK, Json(json!({ "user": admin_user() }))),
        Some("tok-student") | Some("tok-new") => {
            (StatusCode::OK, Json(json!({ "user": student_user() })))
        }
        _ => unauthorized,
    }
}

async fn spawn_backend(state: BackendState) -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

struct Fixture {
    store: SessionStore,
    backend: BackendState,
    _dir: tempfile::TempDir,
    token_path: std::path::PathBuf,
}

async fn fixture() -> Fixture {
    let backend = BackendState::default();
    let base_url = spawn_backend(backend.clone()).await;
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");
    let store = SessionStore::new(
        ApiClient::new(base_url),
        TokenFile::new(token_path.clone()),
    );
    Fixture {
        store,
        backend,
        _dir: dir,
        token_path,
    }
}

fn persisted_token(fixture: &Fixture) -> Option<String> {
    std::fs::read_to_string(&fixture.token_path).ok()
}

#[tokio::test]
async fn test_login_success_establishes_session() {
    let fixture = fixture().await;

    assert!(!fixture.store.is_authenticated().await);

    let outcome = fixture.store.login("admin@x.com", "secret").await;
    assert_eq!(outcome, AuthOutcome::Success { redirect: "/admin" });

    assert!(fixture.store.is_authenticated().await);
    assert!(fixture.store.is_admin().await);
    let user = fixture.store.current_user().await.unwrap();
    assert_eq!(user.email, "admin@x.com");

    // Persisted token equals the returned token
    assert_eq!(persisted_token(&fixture).as_deref(), Some("tok-admin"));
    assert_eq!(fixture.store.api().token().await.as_deref(), Some("tok-admin"));
}

#[tokio::test]
async fn test_student_login_lands_on_dashboard() {
    let fixture = fixture().await;

    let outcome = fixture.store.login("student@x.com", "secret").await;
    assert_eq!(
        outcome,
        AuthOutcome::Success {
            redirect: "/dashboard"
        }
    );
    assert!(!fixture.store.is_admin().await);
}

#[tokio::test]
async fn test_login_failure_leaves_session_untouched() {
    let fixture = fixture().await;

    let outcome = fixture.store.login("admin@x.com", "wrong").await;
    match outcome {
        AuthOutcome::Failure { message } => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected failure, got {:?}", other),
    }

    assert!(!fixture.store.is_authenticated().await);
    assert!(fixture.store.current_user().await.is_none());
    assert!(persisted_token(&fixture).is_none());
}

#[tokio::test]
async fn test_failed_login_preserves_existing_session() {
    let fixture = fixture().await;

    fixture.store.login("student@x.com", "secret").await;
    let outcome = fixture.store.login("student@x.com", "wrong").await;
    assert!(!outcome.is_success());

    // The earlier session survives a later failed attempt
    assert!(fixture.store.is_authenticated().await);
    assert_eq!(persisted_token(&fixture).as_deref(), Some("tok-student"));
    assert_eq!(
        fixture.store.current_user().await.unwrap().email,
        "student@x.com"
    );
}

#[tokio::test]
async fn test_register_defaults_role_to_student() {
    let fixture = fixture().await;

    let outcome = fixture
        .store
        .register(RegisterRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            role: None,
        })
        .await;
    assert_eq!(
        outcome,
        AuthOutcome::Success {
            redirect: "/dashboard"
        }
    );

    let submitted = fixture.backend.register_body.lock().unwrap().clone().unwrap();
    assert_eq!(submitted["role"], "student");
    assert_eq!(submitted["name"], "A");
}

#[tokio::test]
async fn test_register_keeps_explicit_role() {
    let fixture = fixture().await;

    fixture
        .store
        .register(RegisterRequest {
            name: "B".to_string(),
            email: "b@x.com".to_string(),
            password: "p".to_string(),
            role: Some(Role::Admin),
        })
        .await;

    let submitted = fixture.backend.register_body.lock().unwrap().clone().unwrap();
    assert_eq!(submitted["role"], "admin");
}

#[tokio::test]
async fn test_logout_clears_session_and_disk() {
    let fixture = fixture().await;

    fixture.store.login("admin@x.com", "secret").await;
    fixture.store.logout().await;

    assert!(!fixture.store.is_authenticated().await);
    assert!(fixture.store.current_user().await.is_none());
    assert!(persisted_token(&fixture).is_none());

    // Idempotent: logging out again is a no-op
    fixture.store.logout().await;
    assert!(!fixture.store.is_authenticated().await);
}

#[tokio::test]
async fn test_fetch_user_on_401_clears_session() {
    let fixture = fixture().await;

    fixture.store.login("student@x.com", "secret").await;
    assert!(fixture.store.is_authenticated().await);

    fixture.backend.reject_me.store(true, Ordering::SeqCst);
    fixture.store.fetch_user().await;

    assert!(!fixture.store.is_authenticated().await);
    assert!(fixture.store.current_user().await.is_none());
    assert!(persisted_token(&fixture).is_none());
}

#[tokio::test]
async fn test_fetch_user_network_failure_keeps_session() {
    // Point at a port nothing listens on; the persisted token must survive
    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("token");
    let tokens = TokenFile::new(token_path.clone());
    tokens.save("tok-student").unwrap();

    let store = SessionStore::new(ApiClient::new("http://127.0.0.1:9"), tokens);
    store.restore().await;

    assert!(store.is_authenticated().await);
    assert!(store.current_user().await.is_none());
    assert!(std::fs::read_to_string(&token_path).is_ok());
}

#[tokio::test]
async fn test_fetch_user_without_token_is_noop() {
    let fixture = fixture().await;

    fixture.store.fetch_user().await;
    assert!(!fixture.store.is_authenticated().await);
    assert!(fixture.store.current_user().await.is_none());
}

#[tokio::test]
async fn test_restore_resumes_session_from_disk() {
    let fixture = fixture().await;

    let tokens = TokenFile::new(fixture.token_path.clone());
    tokens.save("tok-admin").unwrap();

    fixture.store.restore().await;

    assert!(fixture.store.is_authenticated().await);
    let user = fixture.store.current_user().await.unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn test_late_fetch_result_discarded_after_logout() {
    let fixture = fixture().await;

    fixture.store.login("student@x.com", "secret").await;
    fixture.backend.slow_me.store(true, Ordering::SeqCst);

    let store = Arc::new(fixture.store);
    let fetcher = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.fetch_user().await })
    };

    // Log out while the profile refresh is still in flight; the late
    // response must not resurrect the session
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    store.logout().await;
    fetcher.await.unwrap();

    assert!(!store.is_authenticated().await);
    assert!(store.current_user().await.is_none());
}

#[tokio::test]
async fn test_snapshot_reflects_session() {
    let fixture = fixture().await;

    let snapshot = fixture.store.snapshot().await;
    assert!(!snapshot.authenticated);
    assert!(!snapshot.is_admin);

    fixture.store.login("admin@x.com", "secret").await;
    let snapshot = fixture.store.snapshot().await;
    assert!(snapshot.authenticated);
    assert!(snapshot.is_admin);
}
