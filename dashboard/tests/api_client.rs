//! End-to-end tests against an in-process backend.

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver};
use axum::extract::{Multipart, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{json, Value};
use shared::{ErrorResponse, LoginForm, SurveyCreate, TokenResponse};

use dashboard::app::{App, AppEvent, FileStore, Notice, Session, SessionState, SessionStore, View};
use dashboard::services::api::{
    academic, auth, wellbeing, ApiClient, ApiConfig, ApiError, CsvUpload,
};

const GOOD_TOKEN: &str = "good-token";

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
}

fn require_token(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", GOOD_TOKEN);
    if bearer(headers) == Some(expected.as_str()) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                detail: "Could not validate credentials".to_string(),
            }),
        )
            .into_response())
    }
}

async fn token(Form(form): Form<LoginForm>) -> Response {
    let role = match (form.username.as_str(), form.password.as_str()) {
        ("director", "secret") => "course_director",
        ("officer", "secret") => "wellbeing_officer",
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    detail: "Incorrect username or password".to_string(),
                }),
            )
                .into_response()
        }
    };
    Json(TokenResponse {
        access_token: GOOD_TOKEN.to_string(),
        token_type: "bearer".to_string(),
        role: role.to_string(),
        username: form.username,
    })
    .into_response()
}

async fn courses(headers: HeaderMap) -> Response {
    if let Err(rejection) = require_token(&headers) {
        return rejection;
    }
    Json(json!([
        {"id": 1, "code": "CS101", "name": "Programming"},
        {"id": 2, "code": "MA201", "name": "Linear Algebra"}
    ]))
    .into_response()
}

async fn course_dashboard(Path(id): Path<i64>) -> Response {
    if id != 1 {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "course_name": "Programming",
        "course_code": "CS101",
        "analytics": {
            "average_grade": 68.5,
            "attendance_rate": 91.2,
            "total_students_enrolled": 120
        }
    }))
    .into_response()
}

async fn student_details(Path(number): Path<String>, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "student_number": number,
        "authorization": bearer(&headers),
    }))
}

async fn create_survey(Json(survey): Json<SurveyCreate>) -> Json<Value> {
    Json(json!({
        "id": 7,
        "week_number": survey.week_number,
        "stress_level": survey.stress_level,
        "hours_slept": survey.hours_slept,
        "recorded_at": "2024-03-04T09:30:00"
    }))
}

async fn upload_csv(mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let Ok(bytes) = field.bytes().await else {
            return StatusCode::BAD_REQUEST.into_response();
        };
        return Json(json!({
            "file_name": file_name,
            "content_type": content_type,
            "bytes": bytes.len(),
        }))
        .into_response();
    }
    StatusCode::BAD_REQUEST.into_response()
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/auth/token", post(token))
        .route("/academic/courses", get(courses))
        .route("/academic/courses/:id/dashboard", get(course_dashboard))
        .route(
            "/academic/courses/:id/grades",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/academic/dashboard/alerts",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/academic/students/:number/details", get(student_details))
        .route(
            "/wellbeing/dashboard/trends",
            get(|| async { StatusCode::FORBIDDEN }),
        )
        .route(
            "/wellbeing/dashboard/alerts",
            get(|| async { Json(json!({"unexpected": true})) }),
        )
        .route("/wellbeing/surveys", post(create_survey))
        .route("/wellbeing/upload_csv", post(upload_csv));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String, session: Session) -> (ApiClient, Receiver<AppEvent>) {
    let (tx, rx) = unbounded();
    let config = ApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    };
    (ApiClient::new(config, session, tx).unwrap(), rx)
}

fn signed_in(role: &str) -> Session {
    let session = Session::in_memory();
    session
        .replace(SessionState {
            token: Some(GOOD_TOKEN.to_string()),
            role: Some(role.to_string()),
            username: Some("tester".to_string()),
        })
        .unwrap();
    session
}

#[tokio::test]
async fn test_login_posts_form_and_returns_token() {
    let base = spawn_backend().await;
    let (client, rx) = client_for(base, Session::in_memory());

    let token = auth::login(&client, "director".into(), "secret".into())
        .await
        .unwrap();

    assert_eq!(token.access_token, GOOD_TOKEN);
    assert_eq!(token.role, "course_director");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_bad_credentials_are_unauthorized() {
    let base = spawn_backend().await;
    let (client, rx) = client_for(base, Session::in_memory());

    let err = auth::login(&client, "director".into(), "nope".into())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(rx.try_recv().unwrap(), AppEvent::SessionInvalidated);
}

#[tokio::test]
async fn test_bearer_token_reaches_backend() {
    let base = spawn_backend().await;
    let (client, _rx) = client_for(base, signed_in("course_director"));

    let courses = academic::get_courses(&client).await.unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].code, "CS101");

    let details = academic::get_student_details(&client, "S1001").await.unwrap();
    assert_eq!(details["student_number"], "S1001");
    assert_eq!(details["authorization"], "Bearer good-token");
}

#[tokio::test]
async fn test_missing_token_is_rejected_and_session_cleared() {
    let base = spawn_backend().await;
    let session = Session::in_memory();
    session
        .replace(SessionState {
            token: Some("stale".to_string()),
            role: Some("course_director".to_string()),
            username: Some("director".to_string()),
        })
        .unwrap();
    let (client, rx) = client_for(base, session.clone());

    let err = academic::get_courses(&client).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(session.snapshot(), SessionState::default());
    assert_eq!(rx.try_recv().unwrap(), AppEvent::SessionInvalidated);
}

#[tokio::test]
async fn test_typed_course_dashboard() {
    let base = spawn_backend().await;
    let (client, _rx) = client_for(base, signed_in("course_director"));

    let dashboard = academic::get_course_analytics(&client, 1).await.unwrap();
    assert_eq!(dashboard.course_code, "CS101");
    assert_eq!(dashboard.analytics.total_students_enrolled, 120);
}

#[tokio::test]
async fn test_not_found_and_server_error_are_log_only() {
    let base = spawn_backend().await;
    let session = signed_in("course_director");
    let (client, rx) = client_for(base, session.clone());

    let err = academic::get_course_analytics(&client, 99).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let err = academic::get_course_grades(&client, 1).await.unwrap_err();
    assert!(matches!(err, ApiError::Server));

    let err = academic::get_academic_alerts(&client).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));

    assert!(session.is_authenticated());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_forbidden_raises_notice_and_keeps_session() {
    let base = spawn_backend().await;
    let session = signed_in("course_director");
    let (client, rx) = client_for(base, session.clone());

    let err = wellbeing::get_wellbeing_trends(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Forbidden));
    assert!(session.is_authenticated());
    assert_eq!(
        rx.try_recv().unwrap(),
        AppEvent::Notice(Notice::ResourceForbidden)
    );
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let base = spawn_backend().await;
    let (client, rx) = client_for(base, signed_in("wellbeing_officer"));

    let err = wellbeing::get_risk_alerts(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_create_survey_sends_json() {
    let base = spawn_backend().await;
    let (client, _rx) = client_for(base, signed_in("wellbeing_officer"));

    let survey = wellbeing::create_survey(
        &client,
        &SurveyCreate {
            student_number: "S1001".to_string(),
            week_number: 6,
            stress_level: 4,
            hours_slept: 5.5,
        },
    )
    .await
    .unwrap();

    assert_eq!(survey.id, 7);
    assert_eq!(survey.week_number, 6);
    assert_eq!(survey.stress_level, 4);
}

#[tokio::test]
async fn test_csv_upload_is_multipart_file_part() {
    let base = spawn_backend().await;
    let (client, _rx) = client_for(base, signed_in("wellbeing_officer"));

    let contents = "student_number,week_number,stress_level,hours_slept\nS1001,6,4,5.5\n";
    let reply = wellbeing::upload_csv_surveys(&client, CsvUpload::new("week6.csv", contents))
        .await
        .unwrap();

    assert_eq!(reply["file_name"], "week6.csv");
    assert_eq!(reply["content_type"], "text/csv");
    assert_eq!(reply["bytes"], contents.len());
}

#[tokio::test]
async fn test_unreachable_backend_raises_network_notice() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let session = signed_in("course_director");
    let (client, rx) = client_for(format!("http://{}", addr), session.clone());

    let err = academic::get_courses(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert!(session.is_authenticated());
    assert_eq!(
        rx.try_recv().unwrap(),
        AppEvent::Notice(Notice::ServerUnreachable)
    );
}

/// Server that answers with headers and one byte of body, then goes quiet.
async fn spawn_stalling_backend() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n[",
                    )
                    .await;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_body_timeout_is_network_failure() {
    let base = spawn_stalling_backend().await;
    let session = signed_in("course_director");
    let (tx, rx) = unbounded();
    let config = ApiConfig {
        base_url: base,
        timeout: Duration::from_millis(300),
    };
    let client = ApiClient::new(config, session.clone(), tx).unwrap();

    let err = academic::get_courses(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "{:?}", err);
    assert!(session.is_authenticated());
    assert_eq!(
        rx.try_recv().unwrap(),
        AppEvent::Notice(Notice::ServerUnreachable)
    );
}

#[tokio::test]
async fn test_unauthorized_removes_session_file() {
    let base = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = FileStore::new(&path);
    store
        .save(&SessionState {
            token: Some("stale".to_string()),
            role: Some("course_director".to_string()),
            username: Some("director".to_string()),
        })
        .unwrap();
    let session = Session::load(Arc::new(store.clone())).unwrap();
    let (client, rx) = client_for(base, session.clone());

    let err = academic::get_courses(&client).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!path.exists());
    assert_eq!(store.load().unwrap(), SessionState::default());
    assert_eq!(rx.try_recv().unwrap(), AppEvent::SessionInvalidated);
}

#[tokio::test]
async fn test_app_login_then_expired_session_round_trip() {
    let base = spawn_backend().await;
    let session = Session::in_memory();
    let (tx, rx) = unbounded();
    let config = ApiConfig {
        base_url: base,
        timeout: Duration::from_secs(5),
    };
    let client = ApiClient::new(config, session.clone(), tx.clone()).unwrap();
    let mut app = App::from_parts(session.clone(), Arc::new(client), tx, rx);

    let nav = app.login("officer".into(), "secret".into()).await.unwrap();
    assert_eq!(nav.view, View::WellbeingDashboard);
    assert_eq!(session.token().as_deref(), Some(GOOD_TOKEN));

    // Backend no longer accepts the token.
    session
        .replace(SessionState {
            token: Some("revoked".to_string()),
            ..session.snapshot()
        })
        .unwrap();
    let err = app
        .call(|api| async move { api.get_courses().await })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
    assert_eq!(app.current().map(|n| n.view), Some(View::Login));
}
