use axum::Extension;
use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum_extra::extract::cookie::CookieJar;
use http::StatusCode;
use http::request::Parts;
use quiznight_core::session::{SESSION_COOKIE, SessionStore};
use quiznight_db::user;
use quiznight_model::user::User;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

type Rejection = (StatusCode, &'static str);

/// The authenticated user behind the `sessionId` cookie.
#[derive(Clone)]
pub(crate) struct Session {
    user: User,
}

#[derive(Clone)]
pub(crate) struct ExtractUser(pub User);

#[derive(Clone)]
pub(crate) struct ExtractUserId(pub Uuid);

impl Session {
    /// The session is resolved once per request and memoized in the request
    /// extensions, so stacking `ExtractUser`/`ExtractUserId` does not hit
    /// the store or the database twice.
    async fn cached<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<Self, Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(session.clone());
        }
        let session = Session::from_request_parts(parts, state).await?;
        parts.extensions.insert(session.clone());
        Ok(session)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|err| match err {});
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Err((StatusCode::UNAUTHORIZED, "No session cookie provided"));
        };

        let Extension::<Arc<SessionStore>>(sessions) =
            <Extension<Arc<SessionStore>> as FromRequestParts<S>>::from_request_parts(parts, state).await.map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "session store not found in app data");
                (StatusCode::INTERNAL_SERVER_ERROR, "Session store not found")
            })?;

        let Some(user_id) = sessions.validate(cookie.value()) else {
            return Err((StatusCode::UNAUTHORIZED, "Invalid or expired session"));
        };

        let Extension::<DatabaseConnection>(conn) =
            <Extension<DatabaseConnection> as FromRequestParts<S>>::from_request_parts(parts, state).await.map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "database connection not found in app data");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database connection not found")
            })?;

        let user = user::Query::find_user_by_id(&conn, user_id)
            .await
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "failed to load session user");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading user")
            })?
            .ok_or((StatusCode::UNAUTHORIZED, "Session user no longer exists"))?;

        sentry::configure_scope(|scope| {
            scope.set_user(Some(sentry::User {
                id: Some(user_id.as_hyphenated().to_string()),
                ..Default::default()
            }));
        });

        Ok(Self { user: user.into_model() })
    }
}

impl<S> FromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::cached(parts, state).await?;
        Ok(Self(session.user))
    }
}

impl<S> OptionalFromRequestParts<S> for ExtractUser
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let Ok(session) = Session::cached(parts, state).await else {
            return Ok(None);
        };
        Ok(Some(Self(session.user)))
    }
}

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::cached(parts, state).await?;
        Ok(Self(session.user.id))
    }
}

impl<S> OptionalFromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let session = match Session::cached(parts, state).await {
            Ok(session) => session,
            Err(_) => return Ok(None),
        };
        Ok(Some(Self(session.user.id)))
    }
}
