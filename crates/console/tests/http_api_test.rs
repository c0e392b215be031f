//! Integration tests for the HTTP client.
//!
//! Each test starts an in-process fake of the user-management API on an
//! ephemeral port and drives `HttpUserApi` (and the screens) against it.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

use common::{ApiConfig, AppError};
use console_lib::screens::{RemovalPolicy, UserTableScreen};
use console_lib::{Credentials, HttpUserApi, Session, UserApi};
use domain::{DraftField, LoginResponse, RoleRef, UserDraft, UserRecord, UserRole};

/// `admin@admin.com:admin`
const ADMIN_AUTH: &str = "Basic YWRtaW5AYWRtaW4uY29tOmFkbWlu";

/// Deleting this user always fails on the server.
const LOCKED_EMAIL: &str = "locked@x.com";

// =============================================================================
// Fake API
// =============================================================================

#[derive(Default)]
struct FakeDb {
    users: Vec<UserRecord>,
    next_id: i64,
    /// Raw request paths, in arrival order
    paths: Vec<String>,
}

type Db = Arc<Mutex<FakeDb>>;

fn record(id: i64, email: &str, role: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        email: email.to_string(),
        roles: vec![RoleRef {
            role_name: role.to_string(),
        }],
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == ADMIN_AUTH)
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "admin@admin.com" && body["password"] == "admin" {
        Json(json!({ "name": "Admin", "role": "ADMIN" })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Bad credentials").into_response()
    }
}

async fn register(State(db): State<Db>, Json(draft): Json<UserDraft>) -> Response {
    let mut db = db.lock().unwrap();
    if db.users.iter().any(|u| u.email == draft.email) {
        return StatusCode::CONFLICT.into_response();
    }
    db.next_id += 1;
    let user = record(db.next_id, &draft.email, draft.role.as_str());
    let user = UserRecord {
        first_name: draft.first_name,
        last_name: draft.last_name,
        ..user
    };
    db.users.push(user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn list_users(State(db): State<Db>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(db.lock().unwrap().users.clone()).into_response()
}

async fn user_details(
    State(db): State<Db>,
    headers: HeaderMap,
    uri: Uri,
    Path(email): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut db = db.lock().unwrap();
    db.paths.push(uri.path().to_string());
    match db.users.iter().find(|u| u.email == email) {
        Some(u) => Json(json!({
            "firstName": u.first_name,
            "lastName": u.last_name,
            "email": u.email,
        }))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_user(
    State(db): State<Db>,
    headers: HeaderMap,
    uri: Uri,
    Path(email): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut db = db.lock().unwrap();
    db.paths.push(uri.path().to_string());
    if email == LOCKED_EMAIL {
        return (StatusCode::INTERNAL_SERVER_ERROR, "cannot delete").into_response();
    }
    db.users.retain(|u| u.email != email);
    StatusCode::OK.into_response()
}

/// Start the fake API and return a client pointed at it.
async fn spawn_api() -> (HttpUserApi, Db) {
    let db: Db = Arc::new(Mutex::new(FakeDb {
        users: vec![
            record(1, "admin@admin.com", "ADMIN"),
            record(2, "a+b@x.com", "USER"),
            record(3, LOCKED_EMAIL, "USER"),
        ],
        next_id: 3,
        paths: Vec::new(),
    }));

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/user/register", post(register))
        .route("/api/user", get(list_users))
        .route("/api/user/details/:email", get(user_details))
        .route("/api/user/:email", delete(delete_user))
        .with_state(db.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = HttpUserApi::new(ApiConfig::new(format!("http://{}", addr))).unwrap();
    (api, db)
}

fn admin() -> Credentials {
    Credentials::new("admin@admin.com", "admin")
}

// =============================================================================
// Client
// =============================================================================

#[tokio::test]
async fn test_login_success_and_rejection() {
    let (api, _db) = spawn_api().await;

    let response = api.login("admin@admin.com", "admin").await.unwrap();
    assert_eq!(response.user_role(), UserRole::Admin);
    assert_eq!(response.name, "Admin");

    let err = api.login("admin@admin.com", "nope").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_list_requires_basic_auth() {
    let (api, _db) = spawn_api().await;

    let users = api.list_users(&admin()).await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].primary_role(), "ADMIN");

    let err = api
        .list_users(&Credentials::new("admin@admin.com", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn test_details_path_is_percent_encoded() {
    let (api, db) = spawn_api().await;

    let details = api.user_details(&admin(), "a+b@x.com").await.unwrap();
    assert_eq!(details.first_name, "First2");
    assert_eq!(
        db.lock().unwrap().paths.last().map(String::as_str),
        Some("/api/user/details/a%2Bb%40x.com")
    );

    let err = api.user_details(&admin(), "ghost@x.com").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_register_and_conflict() {
    let (api, _db) = spawn_api().await;

    let mut draft = UserDraft::new();
    draft.set_field(DraftField::Email, "new@x.com").unwrap();
    draft.set_field(DraftField::Password, "Abc123").unwrap();
    draft.set_field(DraftField::FirstName, "New").unwrap();

    let created = api.register(&draft).await.unwrap();
    assert_eq!(created.id, 4);
    assert_eq!(created.first_name, "New");

    let err = assert_err!(api.register(&draft).await);
    assert_eq!(err.user_message(), "User already exists");
}

#[tokio::test]
async fn test_delete_failure_maps_status() {
    let (api, _db) = spawn_api().await;

    assert_ok!(api.delete_user(&admin(), "a+b@x.com").await);
    let err = assert_err!(api.delete_user(&admin(), LOCKED_EMAIL).await);
    assert_eq!(err.status_code(), Some(500));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpUserApi::new(ApiConfig::new(format!("http://{}", addr))).unwrap();
    let err = api.list_users(&admin()).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(
        err.user_message(),
        "Error connecting to the server. Please try again."
    );
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = HttpUserApi::new(ApiConfig::new("not a url"));
    assert!(matches!(result, Err(AppError::Config(_))));
}

// =============================================================================
// User table against the fake API
// =============================================================================

fn admin_session() -> Session {
    Session::from_login(
        LoginResponse {
            name: "Admin".to_string(),
            role: "ADMIN".to_string(),
        },
        "admin@admin.com",
        "admin",
    )
}

#[tokio::test]
async fn test_bulk_delete_end_to_end() {
    let (api, db) = spawn_api().await;

    let mut screen = UserTableScreen::new(admin_session(), admin(), RemovalPolicy::ConfirmedOnly);
    screen.load(&api).await;
    screen.toggle_select("a+b@x.com");
    screen.toggle_select(LOCKED_EMAIL);
    screen.delete_selected();
    assert!(screen.is_confirming_delete());

    let report = screen.confirm_delete(&api).await;
    assert_eq!(report.deleted, vec!["a+b@x.com"]);
    assert_eq!(report.failed, vec![LOCKED_EMAIL]);

    let shown: Vec<_> = screen
        .users()
        .unwrap()
        .iter()
        .map(|u| u.email.clone())
        .collect();
    assert_eq!(shown, vec!["admin@admin.com", LOCKED_EMAIL]);

    let db = db.lock().unwrap();
    assert_eq!(db.users.len(), 2);
    assert_eq!(
        db.paths,
        vec!["/api/user/a%2Bb%40x.com", "/api/user/locked%40x.com"]
    );
}

#[tokio::test]
async fn test_add_user_through_table() {
    let (api, db) = spawn_api().await;

    let mut screen = UserTableScreen::new(admin_session(), admin(), RemovalPolicy::default());
    screen.load(&api).await;
    screen.add_new_user();
    screen.set_field(DraftField::Email, "d@x.com").unwrap();
    screen.set_field(DraftField::Password, "Abc123").unwrap();
    screen.set_field(DraftField::Role, "ADMIN").unwrap();

    assert!(screen.save_user(&api).await.is_saved());
    assert_eq!(screen.users().unwrap().len(), 4);
    let db = db.lock().unwrap();
    assert_eq!(db.users.last().unwrap().primary_role(), "ADMIN");
}
