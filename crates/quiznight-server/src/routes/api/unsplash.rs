//! Thin authenticated proxies over the Unsplash API, so the browser client
//! never sees the access key.

use crate::user::ExtractUser;
use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use quiznight_core::unsplash::UnsplashClient;
use serde_derive::Deserialize;
use utoipa::IntoParams;

pub(crate) mod error;

use error::UnsplashRouteError;

/// Curated search topics the client offers as categories.
const CATEGORIES: &[&str] = &[
    "food-drink",
    "history",
    "music",
    "nature",
    "science",
    "sports",
    "travel",
];

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/search", get(search))
        .route("/featured", get(featured))
        .route("/categories", get(categories))
        .route("/categories/{name}", get(category_photos))
        .route("/photos/{photo_id}", get(get_photo))
        .route("/photos/{photo_id}/track-download", post(track_download))
        .with_state(())
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct SearchParams {
    query: String,
    page: Option<u32>,
    per_page: Option<u32>,
    orientation: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/unsplash/search",
    params(SearchParams),
    responses(
        (status = OK, description = "Search results as returned by Unsplash"),
        (status = BAD_GATEWAY, description = "Unsplash request failed"),
    ),
    tag = "unsplash",
    security(("session" = []))
)]
pub(crate) async fn search(
    ExtractUser(_user): ExtractUser,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, UnsplashRouteError> {
    let unsplash = unsplash.as_ref().ok_or(UnsplashRouteError::Disabled)?;
    let results = unsplash
        .search_photos(
            &params.query,
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(20).min(30),
            params.orientation.as_deref(),
        )
        .await?;
    Ok(Json(SearchResultsWire::from(results)))
}

#[utoipa::path(
    get,
    path = "/api/unsplash/photos/{photo_id}",
    responses(
        (status = OK, description = "Photo details"),
        (status = BAD_GATEWAY, description = "Unsplash request failed"),
    ),
    tag = "unsplash",
    security(("session" = []))
)]
pub(crate) async fn get_photo(
    ExtractUser(_user): ExtractUser,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Path(photo_id): Path<String>,
) -> Result<impl IntoResponse, UnsplashRouteError> {
    let unsplash = unsplash.as_ref().ok_or(UnsplashRouteError::Disabled)?;
    let photo = unsplash.get_photo(&photo_id).await?;
    Ok(Json(PhotoWire::from(photo)))
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct FeaturedParams {
    count: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/unsplash/featured",
    params(FeaturedParams),
    responses(
        (status = OK, description = "Popular photos"),
        (status = BAD_GATEWAY, description = "Unsplash request failed"),
    ),
    tag = "unsplash",
    security(("session" = []))
)]
pub(crate) async fn featured(
    ExtractUser(_user): ExtractUser,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Query(params): Query<FeaturedParams>,
) -> Result<impl IntoResponse, UnsplashRouteError> {
    let unsplash = unsplash.as_ref().ok_or(UnsplashRouteError::Disabled)?;
    let photos = unsplash.featured_photos(params.count.unwrap_or(12).min(30)).await?;
    let wire: Vec<PhotoWire> = photos.into_iter().map(PhotoWire::from).collect();
    Ok(Json(wire))
}

#[utoipa::path(
    get,
    path = "/api/unsplash/categories",
    responses(
        (status = OK, body = Vec<String>, description = "Curated category names"),
    ),
    tag = "unsplash",
    security(("session" = []))
)]
pub(crate) async fn categories(ExtractUser(_user): ExtractUser) -> impl IntoResponse {
    Json(CATEGORIES)
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct CategoryParams {
    page: Option<u32>,
    per_page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/unsplash/categories/{name}",
    params(CategoryParams),
    responses(
        (status = OK, description = "Search results for the category"),
        (status = NOT_FOUND, description = "Unknown category"),
    ),
    tag = "unsplash",
    security(("session" = []))
)]
pub(crate) async fn category_photos(
    ExtractUser(_user): ExtractUser,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Path(name): Path<String>,
    Query(params): Query<CategoryParams>,
) -> Result<impl IntoResponse, UnsplashRouteError> {
    if !CATEGORIES.contains(&name.as_str()) {
        return Err(UnsplashRouteError::UnknownCategory);
    }
    let unsplash = unsplash.as_ref().ok_or(UnsplashRouteError::Disabled)?;
    let query = name.replace('-', " ");
    let results = unsplash
        .search_photos(&query, params.page.unwrap_or(1), params.per_page.unwrap_or(20).min(30), None)
        .await?;
    Ok(Json(SearchResultsWire::from(results)))
}

#[utoipa::path(
    post,
    path = "/api/unsplash/photos/{photo_id}/track-download",
    responses(
        (status = NO_CONTENT, description = "Download reported"),
        (status = BAD_GATEWAY, description = "Unsplash request failed"),
    ),
    tag = "unsplash",
    security(("session" = []))
)]
pub(crate) async fn track_download(
    ExtractUser(_user): ExtractUser,
    Extension(unsplash): Extension<Option<UnsplashClient>>,
    Path(photo_id): Path<String>,
) -> Result<impl IntoResponse, UnsplashRouteError> {
    let unsplash = unsplash.as_ref().ok_or(UnsplashRouteError::Disabled)?;
    unsplash.track_download(&photo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

mod wire {
    use quiznight_core::unsplash::{Photo, SearchResults};
    use serde_derive::Serialize;

    /// What the client needs from a photo, nothing more.
    #[derive(Debug, Serialize)]
    pub(crate) struct PhotoWire {
        pub id: String,
        pub width: i32,
        pub height: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        pub regular_url: String,
        pub thumb_url: String,
        pub photographer: String,
        pub photographer_url: String,
    }

    #[derive(Debug, Serialize)]
    pub(crate) struct SearchResultsWire {
        pub total: u64,
        pub total_pages: u64,
        pub results: Vec<PhotoWire>,
    }

    impl From<Photo> for PhotoWire {
        fn from(photo: Photo) -> Self {
            Self {
                id: photo.id,
                width: photo.width,
                height: photo.height,
                description: photo.description.or(photo.alt_description),
                regular_url: photo.urls.regular,
                thumb_url: photo.urls.thumb,
                photographer: photo.user.name,
                photographer_url: photo.user.links.html,
            }
        }
    }

    impl From<SearchResults> for SearchResultsWire {
        fn from(results: SearchResults) -> Self {
            Self {
                total: results.total,
                total_pages: results.total_pages,
                results: results.results.into_iter().map(PhotoWire::from).collect(),
            }
        }
    }
}

use wire::{PhotoWire, SearchResultsWire};
