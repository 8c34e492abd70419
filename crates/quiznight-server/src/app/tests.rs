use crate::AppConfig;
use crate::app::create_app;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use quiznight_core::password::hash_password;
use quiznight_core::session::SessionStore;
use quiznight_db::{role, user};
use quiznight_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use test_log::test;
use tower::ServiceExt;
use uuid::Uuid;

struct TestApp {
    app: Router,
    conn: DatabaseConnection,
    sessions: Arc<SessionStore>,
}

async fn setup() -> TestApp {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&conn, None).await.unwrap();

    let sessions = Arc::new(SessionStore::new());
    let app = create_app(
        AppConfig::new("test".to_owned(), None),
        Arc::clone(&sessions),
        conn.clone(),
        None,
        &[],
    )
    .unwrap();

    TestApp { app, conn, sessions }
}

async fn create_user_with_role(test_app: &TestApp, role_name: Option<&str>) -> Uuid {
    let role_id = match role_name {
        Some(name) => Some(
            role::Query::find_role_by_name(&test_app.conn, name)
                .await
                .unwrap()
                .unwrap()
                .id,
        ),
        None => None,
    };
    let suffix = Uuid::new_v4().simple().to_string();
    user::Mutation::create_user(
        &test_app.conn,
        &format!("user-{suffix}"),
        &format!("user-{suffix}@example.com"),
        &hash_password("hunter2hunter2").unwrap(),
        "Test User",
        role_id,
    )
    .await
    .unwrap()
    .id
}

fn session_header(token: &str) -> String {
    format!("sessionId={token}")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = session {
        builder = builder.header(header::COOKIE, session_header(token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, session: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = session {
        builder = builder.header(header::COOKIE, session_header(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[test(tokio::test)]
async fn test_migrations_are_repeatable() {
    let db_file = quiznight_test_helpers::SqliteDb::new().unwrap();
    let uri = {
        use quiznight_test_helpers::TestDb;
        db_file.db_uri().into_owned()
    };

    let conn = Database::connect(uri.as_str()).await.unwrap();
    // Up twice must be a no-op the second time; a full down/up cycle must
    // leave a working schema behind.
    Migrator::up(&conn, None).await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    Migrator::down(&conn, None).await.unwrap();
    Migrator::up(&conn, None).await.unwrap();

    let admin = role::Query::find_role_by_name(&conn, "Admin").await.unwrap();
    assert!(admin.is_some(), "seeded roles missing after re-migration");
}

#[test(tokio::test)]
async fn test_admin_routes_are_gated() {
    let test_app = setup().await;

    // No cookie at all.
    let (status, _) = send(&test_app.app, get("/api/admin/users", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A garbage cookie.
    let (status, _) = send(&test_app.app, get("/api/admin/users", Some("not-a-session"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A valid session without the Admin role.
    let member_id = create_user_with_role(&test_app, Some("User")).await;
    let member_session = test_app.sessions.create(member_id);
    let (status, _) = send(&test_app.app, get("/api/admin/users", Some(&member_session))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // A valid admin session reaches the handler.
    let admin_id = create_user_with_role(&test_app, Some("Admin")).await;
    let admin_session = test_app.sessions.create(admin_id);
    let (status, body) = send(&test_app.app, get("/api/admin/users", Some(&admin_session))).await;
    assert_eq!(status, StatusCode::OK);
    let users: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[test(tokio::test)]
async fn test_register_login_and_whoami() {
    let test_app = setup().await;

    let (status, body) = send(
        &test_app.app,
        post_json(
            "/api/auth/register",
            None,
            &serde_json::json!({
                "username": "quizmaster",
                "email": "host@example.com",
                "password": "correct horse",
                "full_name": "Quiz Master",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let registered: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // Registration assigns the seeded default role.
    assert_eq!(registered["role"]["name"], "User");
    assert!(registered.get("password").is_none());
    assert!(registered.get("password_hash").is_none());

    // Wrong password is rejected without leaking which part was wrong.
    let (status, _) = send(
        &test_app.app,
        post_json(
            "/api/auth/login",
            None,
            &serde_json::json!({"email": "host@example.com", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let response = test_app
        .app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            None,
            &serde_json::json!({"email": "host@example.com", "password": "correct horse"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("sessionId="));
    assert!(set_cookie.contains("HttpOnly"));
    let token = set_cookie
        .strip_prefix("sessionId=")
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_owned();

    let (status, body) = send(&test_app.app, get("/api/auth/whoami", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let me: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(me["username"], "quizmaster");

    // whoami without a session is a 404, not an error envelope.
    let (status, _) = send(&test_app.app, get("/api/auth/whoami", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test(tokio::test)]
async fn test_dual_read_paths_agree_over_http() {
    let test_app = setup().await;

    let host_id = create_user_with_role(&test_app, Some("User")).await;
    let session = test_app.sessions.create(host_id);

    let (status, body) = send(
        &test_app.app,
        post_json(
            "/api/v2/events",
            Some(&session),
            &serde_json::json!({"title": "Wine Night"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let event: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let event_id = event["id"].as_str().unwrap().to_owned();
    assert_eq!(event["slug"], "wine-night");
    assert_eq!(event["status"], "draft");

    for name in ["Quizteama Aguilera", "The Know-It-Ales"] {
        let (status, _) = send(
            &test_app.app,
            post_json(
                &format!("/api/v2/events/{event_id}/teams"),
                Some(&session),
                &serde_json::json!({"name": name, "table_number": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(
        &test_app.app,
        post_json(
            &format!("/api/v2/events/{event_id}/questions"),
            Some(&session),
            &serde_json::json!({
                "question": "Which grape is used for Chablis?",
                "type": "multiple_choice",
                "options": [
                    {"option": "Chardonnay", "correct": true},
                    {"option": "Riesling", "correct": false}
                ],
                "correct_answer": "Chardonnay",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The raw-SQL path and the ORM path must agree byte for byte.
    let (status_raw, body_raw) = send(&test_app.app, get(&format!("/api/v2/events/{event_id}/teams"), None)).await;
    let (status_orm, body_orm) = send(&test_app.app, get(&format!("/api/orm/events/{event_id}/teams"), None)).await;
    assert_eq!(status_raw, StatusCode::OK);
    assert_eq!(status_orm, StatusCode::OK);
    assert_eq!(body_raw, body_orm);

    let (_, questions_raw) = send(&test_app.app, get(&format!("/api/v2/events/{event_id}/questions"), None)).await;
    let (_, questions_orm) = send(&test_app.app, get(&format!("/api/orm/events/{event_id}/questions"), None)).await;
    assert_eq!(questions_raw, questions_orm);

    // Anonymous readers never see the answers; the host does.
    let anonymous: serde_json::Value = serde_json::from_slice(&questions_raw).unwrap();
    assert!(anonymous[0].get("correct_answer").is_none());
    let (_, questions_host) = send(
        &test_app.app,
        get(&format!("/api/v2/events/{event_id}/questions"), Some(&session)),
    )
    .await;
    let host_view: serde_json::Value = serde_json::from_slice(&questions_host).unwrap();
    assert_eq!(host_view[0]["correct_answer"], "Chardonnay");

    // Timestamps travel as unix-seconds strings.
    let teams: serde_json::Value = serde_json::from_slice(&body_raw).unwrap();
    assert!(teams[0]["created_at"].as_str().unwrap().parse::<i64>().is_ok());
}

#[test(tokio::test)]
async fn test_allow_participants_gates_team_reads() {
    let test_app = setup().await;

    let host_id = create_user_with_role(&test_app, Some("User")).await;
    let session = test_app.sessions.create(host_id);

    let (_, body) = send(
        &test_app.app,
        post_json(
            "/api/v2/events",
            Some(&session),
            &serde_json::json!({"title": "Secret Night", "allow_participants": false}),
        ),
    )
    .await;
    let event: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let event_id = event["id"].as_str().unwrap().to_owned();

    // Hidden from the public, still visible to the host.
    let (status, _) = send(&test_app.app, get(&format!("/api/v2/events/{event_id}/teams"), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(
        &test_app.app,
        get(&format!("/api/v2/events/{event_id}/teams"), Some(&session)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Joining is off while participants are disabled.
    let (status, _) = send(
        &test_app.app,
        post_json(
            &format!("/api/v2/events/{event_id}/join"),
            None,
            &serde_json::json!({"display_name": "Dana"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[test(tokio::test)]
async fn test_join_and_answer_flow() {
    let test_app = setup().await;

    let host_id = create_user_with_role(&test_app, Some("User")).await;
    let session = test_app.sessions.create(host_id);

    let (_, body) = send(
        &test_app.app,
        post_json(
            "/api/v2/events",
            Some(&session),
            &serde_json::json!({"title": "Quiz Night"}),
        ),
    )
    .await;
    let event: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let event_id = event["id"].as_str().unwrap().to_owned();

    let (_, body) = send(
        &test_app.app,
        post_json(
            &format!("/api/v2/events/{event_id}/questions"),
            Some(&session),
            &serde_json::json!({
                "question": "What is the capital of Australia?",
                "type": "fill_blank",
                "correct_answer": "Canberra",
                "points": 10,
            }),
        ),
    )
    .await;
    let question: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let question_id = question["id"].as_str().unwrap().to_owned();

    // Join and capture the participant cookie.
    let response = test_app
        .app
        .clone()
        .oneshot(post_json(
            &format!("/api/v2/events/{event_id}/join"),
            None,
            &serde_json::json!({"display_name": "Dana"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let participant_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_owned();

    // Answering without a token is rejected.
    let (status, _) = send(
        &test_app.app,
        post_json(
            &format!("/api/v2/events/{event_id}/responses"),
            None,
            &serde_json::json!({"question_id": question_id, "answer": "Canberra"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let answer = |answer: &str| {
        Request::builder()
            .method("POST")
            .uri(format!("/api/v2/events/{event_id}/responses"))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::COOKIE, participant_cookie.clone())
            .body(Body::from(
                serde_json::json!({"question_id": question_id, "answer": answer}).to_string(),
            ))
            .unwrap()
    };

    let (status, body) = send(&test_app.app, answer(" canberra ")).await;
    assert_eq!(status, StatusCode::CREATED);
    let result: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(result["is_correct"], true);
    assert_eq!(result["points_awarded"], 10);

    // Second submission for the same question is rejected.
    let (status, _) = send(&test_app.app, answer("Canberra")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
