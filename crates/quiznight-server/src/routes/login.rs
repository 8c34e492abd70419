use crate::routes::error::{client_error, server_error};
use crate::user::ExtractUser;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use http::StatusCode;
use quiznight_core::password;
use quiznight_core::session::{SESSION_COOKIE, SessionStore};
use quiznight_db::util::FlattenTransactionResultExt;
use quiznight_db::{role, user};
use quiznight_model::user::User;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use serde_derive::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use utoipa::ToSchema;

pub fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/password", post(change_password))
        .route("/whoami", get(whoami))
        .with_state(())
}

#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error("username, email, password and full_name are required")]
    MissingFields,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("failed to hash password")]
    Password(#[from] password::PasswordError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::MissingFields => client_error(StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::InvalidCredentials => client_error(StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::Database(error) => server_error(error),
            AuthError::Password(error) => server_error(error),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct RegisterPayload {
    username: String,
    email: String,
    password: String,
    full_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct LoginPayload {
    email: String,
    password: String,
}

fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_max_age(time::Duration::hours(24));
    cookie
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = CREATED, body = User, description = "Account created; the session cookie is set"),
        (status = BAD_REQUEST, description = "A required field is missing"),
    ),
    tag = "auth"
)]
pub(crate) async fn register(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    jar: CookieJar,
    Json(payload): Json<RegisterPayload>,
) -> Result<Response, AuthError> {
    if [&payload.username, &payload.email, &payload.password, &payload.full_name]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AuthError::MissingFields);
    }

    let password_hash = password::hash_password(&payload.password)?;

    let user = conn
        .transaction(|txn| {
            Box::pin(async move {
                let default_role = role::Query::find_role_by_name(txn, "User").await?;
                user::Mutation::create_user(
                    txn,
                    payload.username.trim(),
                    payload.email.trim(),
                    &password_hash,
                    payload.full_name.trim(),
                    default_role.map(|role| role.id),
                )
                .await
            })
        })
        .await
        .flatten_res()?;

    tracing::info!(user_id = %user.id, "registered user");

    let token = sessions.create(user.id);
    let user: User = user::Query::find_user_by_id(&conn, user.id)
        .await?
        .ok_or(DbErr::RecordNotFound("user vanished after registration".to_string()))?
        .into_model();

    Ok((StatusCode::CREATED, jar.add(session_cookie(token)), Json(user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = OK, body = User, description = "Logged in; the session cookie is set"),
        (status = UNAUTHORIZED, description = "Unknown email or wrong password"),
    ),
    tag = "auth"
)]
pub(crate) async fn login(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<Response, AuthError> {
    let Some((user, role)) = user::Query::find_user_by_email(&conn, payload.email.trim()).await? else {
        // Hash verification is skipped but the response is identical, so the
        // endpoint does not reveal which accounts exist.
        return Err(AuthError::InvalidCredentials);
    };

    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let token = sessions.create(user.id);
    tracing::debug!(user_id = %user.id, "logged in");

    let user: User = (user, role).into_model();
    Ok((jar.add(session_cookie(token)), Json(user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = NO_CONTENT, description = "Session deleted and cookie cleared"),
    ),
    tag = "auth"
)]
pub(crate) async fn logout(Extension(sessions): Extension<Arc<SessionStore>>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        sessions.delete(cookie.value());
    }
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    (StatusCode::NO_CONTENT, jar).into_response()
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ChangePasswordPayload {
    current_password: String,
    new_password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/password",
    request_body = ChangePasswordPayload,
    responses(
        (status = NO_CONTENT, description = "Password changed"),
        (status = UNAUTHORIZED, description = "Current password is wrong"),
        (status = BAD_REQUEST, description = "New password is empty"),
    ),
    tag = "auth",
    security(("session" = []))
)]
pub(crate) async fn change_password(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<ChangePasswordPayload>,
) -> Result<Response, AuthError> {
    if payload.new_password.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }

    let (row, _) = user::Query::find_user_by_id(&conn, user.id)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;
    if !password::verify_password(&payload.current_password, &row.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let password_hash = password::hash_password(&payload.new_password)?;
    user::Mutation::set_password_hash(&conn, user.id, &password_hash).await?;
    tracing::info!(user_id = %user.id, "password changed");
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/whoami",
    responses(
        (status = OK, body = User, description = "The user behind the session cookie"),
        (status = NOT_FOUND, description = "No valid session"),
    ),
    tag = "auth"
)]
pub(crate) async fn whoami(user: Option<ExtractUser>) -> Response {
    match user {
        None => {
            tracing::debug!("no user found");
            StatusCode::NOT_FOUND.into_response()
        }
        Some(ExtractUser(user)) => Json(user).into_response(),
    }
}
