use crate::routes::api::events::require_host;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use quiznight_core::unsplash::UnsplashClient;
use quiznight_db::{event_image, question};
use quiznight_model::event_image::EventImage;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) mod error;

use error::ImageError;

/// Cached URLs go stale; Unsplash asks integrations not to hot-link forever.
const IMAGE_CACHE_TTL_DAYS: i64 = 30;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/select", post(select_image))
        .route("/cleanup", post(cleanup_expired))
        .route(
            "/question/{question_id}",
            get(get_image_for_question).delete(remove_image),
        )
        .route("/{image_id}/track-usage", post(track_usage))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/event-images/question/{question_id}",
    responses(
        (status = OK, body = EventImage),
        (status = NOT_FOUND, description = "No image cached for this question"),
    ),
    tag = "event-images"
)]
pub(crate) async fn get_image_for_question(
    Extension(conn): Extension<DatabaseConnection>,
    Path(question_id): Path<Uuid>,
) -> Result<impl IntoResponse, ImageError> {
    let image: EventImage = event_image::Query::find_by_question(&conn, question_id)
        .await?
        .ok_or(ImageError::NotFound("no image cached for this question"))?
        .into_model();
    Ok(Json(image))
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SelectImagePayload {
    question_id: Uuid,
    photo_id: String,
}

#[utoipa::path(
    post,
    path = "/api/event-images/select",
    request_body = SelectImagePayload,
    responses(
        (status = CREATED, body = EventImage, description = "Image cached for the question, replacing any previous one"),
        (status = NOT_FOUND, description = "Question missing"),
        (status = BAD_GATEWAY, description = "Unsplash lookup failed"),
    ),
    tag = "event-images",
    security(("session" = []))
)]
pub(crate) async fn select_image(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Json(payload): Json<SelectImagePayload>,
) -> Result<impl IntoResponse, ImageError> {
    let unsplash = unsplash.as_ref().ok_or(ImageError::Disabled)?;

    let question_row = question::Query::find_question_by_id(&conn, payload.question_id)
        .await?
        .ok_or(ImageError::NotFound("question not found"))?;
    require_host(&conn, question_row.event_id, &user).await?;

    let photo = unsplash.get_photo(&payload.photo_id).await?;

    let stored = event_image::Mutation::select_image(
        &conn,
        event_image::NewEventImage {
            question_id: question_row.id,
            unsplash_id: photo.id.clone(),
            image_url: photo.urls.regular.clone(),
            thumbnail_url: Some(photo.urls.thumb.clone()),
            attribution_name: Some(photo.user.name.clone()),
            attribution_url: Some(photo.user.links.html.clone()),
            width: Some(photo.width),
            height: Some(photo.height),
            expires_at: Some(chrono::Utc::now().naive_utc() + chrono::Duration::days(IMAGE_CACHE_TTL_DAYS)),
            selected_by_user_id: Some(user.id),
        },
    )
    .await?;

    // Unsplash requires a download ping when a photo is actually put to use.
    if let Err(error) = unsplash.track_download(&photo.id).await {
        tracing::warn!(
            error = &error as &dyn std::error::Error,
            photo_id = %photo.id,
            "failed to report download to unsplash"
        );
    }

    tracing::info!(question_id = %question_row.id, photo_id = %photo.id, "cached event image");

    let image: EventImage = stored.into_model();
    Ok((StatusCode::CREATED, Json(image)))
}

#[utoipa::path(
    delete,
    path = "/api/event-images/question/{question_id}",
    responses(
        (status = NO_CONTENT, description = "Cached image removed"),
        (status = NOT_FOUND, description = "No image cached for this question"),
    ),
    tag = "event-images",
    security(("session" = []))
)]
pub(crate) async fn remove_image(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(question_id): Path<Uuid>,
) -> Result<impl IntoResponse, ImageError> {
    let question_row = question::Query::find_question_by_id(&conn, question_id)
        .await?
        .ok_or(ImageError::NotFound("question not found"))?;
    require_host(&conn, question_row.event_id, &user).await?;

    let removed = event_image::Mutation::delete_by_question(&conn, question_id).await?;
    if removed == 0 {
        return Err(ImageError::NotFound("no image cached for this question"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/event-images/{image_id}/track-usage",
    responses(
        (status = NO_CONTENT, description = "Usage reported upstream"),
        (status = NOT_FOUND, description = "No such cached image"),
    ),
    tag = "event-images",
    security(("session" = []))
)]
pub(crate) async fn track_usage(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Path(image_id): Path<Uuid>,
) -> Result<impl IntoResponse, ImageError> {
    let unsplash = unsplash.as_ref().ok_or(ImageError::Disabled)?;

    let image = event_image::Query::find_by_id(&conn, image_id)
        .await?
        .ok_or(ImageError::NotFound("image not found"))?;

    unsplash.track_download(&image.unsplash_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CleanupResult {
    removed: u64,
}

#[utoipa::path(
    post,
    path = "/api/event-images/cleanup",
    responses(
        (status = OK, body = CleanupResult, description = "Expired cached images removed"),
    ),
    tag = "event-images",
    security(("session" = []))
)]
pub(crate) async fn cleanup_expired(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, ImageError> {
    let removed = event_image::Mutation::delete_expired(&conn, chrono::Utc::now().naive_utc()).await?;
    tracing::info!(removed, "cleaned up expired event images");
    Ok(Json(CleanupResult { removed }))
}
