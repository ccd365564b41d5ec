//! Integration tests for the backend API client.
//!
//! Each test spins up a small axum stub standing in for the backend on an
//! ephemeral port and drives the real client against it, verifying:
//! 1. Error text comes from the body's `detail` or the operation fallback
//! 2. 401 responses surface as the distinguished unauthorized error
//! 3. The bearer token is read fresh from the session store on every call
//! 4. Uploads go out as multipart with a single `file` field
//! 5. The auth flow round-trips into a persisted session

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use ecosistema_union::adapters::backend::UnionApi;
use ecosistema_union::adapters::session::InMemorySessionStore;
use ecosistema_union::config::BackendConfig;
use ecosistema_union::domain::session::{LoginData, RegisterData};
use ecosistema_union::domain::Session;
use ecosistema_union::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Serves the router on an ephemeral port and returns its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    format!("http://{addr}")
}

fn client(base_url: &str, store: Arc<InMemorySessionStore>) -> UnionApi {
    let config = BackendConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..Default::default()
    };
    UnionApi::new(&config, store)
}

fn user_json(role: &str) -> serde_json::Value {
    json!({
        "id": "u-1",
        "email": "ana@union.org",
        "full_name": "Ana",
        "role": role,
        "status": "ACTIVE",
        "email_verified": true,
        "referral_code": "UNION123",
        "created_at": "2025-01-15T12:00:00Z"
    })
}

fn auth_response_json(role: &str) -> serde_json::Value {
    json!({
        "access_token": "tok-fresh",
        "refresh_token": "ref-fresh",
        "token_type": "bearer",
        "user": user_json(role)
    })
}

async fn authenticated_store() -> Arc<InMemorySessionStore> {
    let store = Arc::new(InMemorySessionStore::new());
    let user: ecosistema_union::domain::UserSnapshot =
        serde_json::from_value(user_json("MEMBER")).expect("test user");
    store
        .save(&Session {
            access_token: "tok-first".to_string(),
            refresh_token: "ref-first".to_string(),
            user,
        })
        .await
        .expect("seed session");
    store
}

// =============================================================================
// Error Normalization
// =============================================================================

#[tokio::test]
async fn non_2xx_with_detail_displays_the_detail() {
    let router = Router::new().route(
        "/api/v1/auth/login",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": "Email not verified"})),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base, Arc::new(InMemorySessionStore::new()));

    let err = api
        .login(&LoginData {
            email: "ana@union.org".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email not verified");
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn non_2xx_without_detail_displays_the_fallback() {
    let router = Router::new().route(
        "/api/v1/auth/login",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base, Arc::new(InMemorySessionStore::new()));

    let err = api
        .login(&LoginData {
            email: "ana@union.org".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn status_401_is_distinguished_as_unauthorized() {
    let router = Router::new().route(
        "/api/v1/auth/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Could not validate credentials"})),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base, authenticated_store().await);

    let err = api.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Could not validate credentials");
}

#[tokio::test]
async fn malformed_2xx_body_is_a_decode_error() {
    let router = Router::new().route(
        "/api/v1/auth/me",
        get(|| async { Json(json!({"unexpected": true})) }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base, authenticated_store().await);

    let err = api.current_user().await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to decode response"));
}

// =============================================================================
// Bearer Token Handling
// =============================================================================

#[tokio::test]
async fn bearer_token_is_read_fresh_on_every_call() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let router = Router::new()
        .route(
            "/api/v1/auth/me",
            get(
                |State(seen): State<Arc<Mutex<Vec<String>>>>, headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    seen.lock().unwrap().push(auth);
                    Json(user_json("MEMBER"))
                },
            ),
        )
        .with_state(seen.clone());
    let base = spawn_backend(router).await;

    let store = authenticated_store().await;
    let api = client(&base, store.clone());

    api.current_user().await.expect("first call");

    // Re-login happens elsewhere; the client must pick the new token up
    // without being reconstructed.
    let user = serde_json::from_value(user_json("MEMBER")).expect("test user");
    store
        .save(&Session {
            access_token: "tok-second".to_string(),
            refresh_token: "ref-second".to_string(),
            user,
        })
        .await
        .expect("replace session");

    api.current_user().await.expect("second call");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), ["Bearer tok-first", "Bearer tok-second"]);
}

#[tokio::test]
async fn missing_token_fails_before_any_request_is_sent() {
    let hits: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));

    let router = Router::new()
        .route(
            "/api/v1/onboarding/payment/me",
            get(|State(hits): State<Arc<Mutex<u32>>>| async move {
                *hits.lock().unwrap() += 1;
                Json(json!({}))
            }),
        )
        .with_state(hits.clone());
    let base = spawn_backend(router).await;
    let api = client(&base, Arc::new(InMemorySessionStore::new()));

    let err = api.my_payment().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(*hits.lock().unwrap(), 0);
}

// =============================================================================
// Multipart Uploads
// =============================================================================

#[tokio::test]
async fn payment_proof_upload_sends_a_single_file_field() {
    let router = Router::new().route(
        "/api/v1/upload/payment-proof",
        post(|mut multipart: Multipart| async move {
            let field = multipart
                .next_field()
                .await
                .expect("read multipart")
                .expect("one field");
            assert_eq!(field.name(), Some("file"));
            assert_eq!(field.file_name(), Some("comprovante.png"));
            let bytes = field.bytes().await.expect("field bytes");
            assert!(multipart.next_field().await.expect("end").is_none());

            Json(json!({
                "url": "/uploads/proof/comprovante.png",
                "filename": "comprovante.png",
                "size": bytes.len()
            }))
        }),
    );
    let base = spawn_backend(router).await;
    let api = client(&base, authenticated_store().await);

    let uploaded = api
        .upload_payment_file("comprovante.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .expect("upload");

    assert_eq!(uploaded.filename, "comprovante.png");
    assert_eq!(uploaded.size, 4);
    assert_eq!(
        api.resource_url(&uploaded.url),
        format!("{base}/uploads/proof/comprovante.png")
    );
}

// =============================================================================
// Auth Flow
// =============================================================================

#[tokio::test]
async fn register_response_round_trips_into_a_session() {
    let router = Router::new()
        .route(
            "/api/v1/auth/register",
            post(|| async { (StatusCode::CREATED, Json(auth_response_json("VISITOR"))) }),
        )
        .route("/api/v1/auth/logout", post(|| async { StatusCode::OK }));
    let base = spawn_backend(router).await;

    let store = Arc::new(InMemorySessionStore::new());
    let api = client(&base, store.clone());

    let auth = api
        .register(&RegisterData {
            email: "novo@union.org".to_string(),
            password: "password123".to_string(),
            full_name: Some("Novo Visitante".to_string()),
            phone: None,
        })
        .await
        .expect("register");

    store
        .save(&Session::from(auth))
        .await
        .expect("persist session");

    assert!(store.is_authenticated().await);
    assert_eq!(store.access_token().await.as_deref(), Some("tok-fresh"));

    api.logout().await.expect("logout request");
    store.clear().await.expect("clear session");
    assert!(!store.is_authenticated().await);
}
