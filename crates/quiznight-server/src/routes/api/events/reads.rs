//! The two read paths for event-scoped resources.
//!
//! `/api/v2/events/{id}/...` answers from hand-written SQL, `/api/orm/...`
//! from the ORM. Both feed the same entity models through the same DTO
//! projection, so the serialized JSON must be byte-identical for the same
//! rows; the integration tests pin that.

use crate::routes::api::events::error::EventError;
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use quiznight_db::raw::RawQuery;
use quiznight_db::{event, fun_fact, participant, question, team};
use quiznight_entity::event::Model as EventModel;
use quiznight_model::fun_fact::FunFact;
use quiznight_model::participant::Participant;
use quiznight_model::question::Question;
use quiznight_model::team::Team;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn raw_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/teams", get(get_teams_raw))
        .route("/participants", get(get_participants_raw))
        .route("/questions", get(get_questions_raw))
        .route("/fun-facts", get(get_fun_facts_raw))
        .with_state(())
}

pub(crate) fn orm_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().nest(
        "/{event_id}",
        Router::new()
            .route("/teams", get(get_teams_orm))
            .route("/participants", get(get_participants_orm))
            .route("/questions", get(get_questions_orm))
            .route("/fun-facts", get(get_fun_facts_orm))
            .with_state(()),
    )
}

pub(crate) async fn load_event(conn: &DatabaseConnection, event_id: Uuid) -> Result<EventModel, EventError> {
    event::Query::find_event_by_id(conn, event_id)
        .await?
        .ok_or(EventError::NotFound("event not found"))
}

fn is_host(event: &EventModel, viewer: Option<&ExtractUserId>) -> bool {
    viewer.is_some_and(|ExtractUserId(user_id)| *user_id == event.host_id)
}

/// Teams, participants and the leaderboard are only visible when the event
/// allows participants; the host always sees them.
pub(crate) fn ensure_participants_visible(
    event: &EventModel,
    viewer: Option<&ExtractUserId>,
) -> Result<(), EventError> {
    if event.allow_participants || is_host(event, viewer) {
        Ok(())
    } else {
        Err(EventError::ParticipantsDisabled)
    }
}

fn project_questions(models: Vec<quiznight_entity::question::Model>, full_view: bool) -> Vec<Question> {
    models
        .into_iter()
        .map(|model| {
            let mut question: Question = model.into_model();
            if !full_view {
                question.sanitize_for_participants();
            }
            question
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}/teams",
    responses(
        (status = OK, body = Vec<Team>),
        (status = FORBIDDEN, description = "Participants are disabled for this event"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_teams_raw(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, viewer.as_ref())?;

    let teams: Vec<Team> = RawQuery::get_teams_by_event(&conn, event_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/api/orm/events/{event_id}/teams",
    responses(
        (status = OK, body = Vec<Team>),
        (status = FORBIDDEN, description = "Participants are disabled for this event"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_teams_orm(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, viewer.as_ref())?;

    let teams: Vec<Team> = team::Query::get_teams_by_event(&conn, event_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}/participants",
    responses(
        (status = OK, body = Vec<Participant>),
        (status = FORBIDDEN, description = "Participants are disabled for this event"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_participants_raw(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, viewer.as_ref())?;

    let participants: Vec<Participant> = RawQuery::get_participants_by_event(&conn, event_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(participants))
}

#[utoipa::path(
    get,
    path = "/api/orm/events/{event_id}/participants",
    responses(
        (status = OK, body = Vec<Participant>),
        (status = FORBIDDEN, description = "Participants are disabled for this event"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_participants_orm(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, viewer.as_ref())?;

    let participants: Vec<Participant> = participant::Query::get_participants_by_event(&conn, event_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(participants))
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}/questions",
    responses(
        (status = OK, body = Vec<Question>, description = "Correct answers are stripped unless the host asks"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_questions_raw(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    let full_view = is_host(&event, viewer.as_ref());

    let models = RawQuery::get_questions_by_event(&conn, event_id).await?;
    Ok(Json(project_questions(models, full_view)))
}

#[utoipa::path(
    get,
    path = "/api/orm/events/{event_id}/questions",
    responses(
        (status = OK, body = Vec<Question>, description = "Correct answers are stripped unless the host asks"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_questions_orm(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    let full_view = is_host(&event, viewer.as_ref());

    let models = question::Query::get_questions_by_event(&conn, event_id).await?;
    Ok(Json(project_questions(models, full_view)))
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}/fun-facts",
    responses(
        (status = OK, body = Vec<FunFact>),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_fun_facts_raw(
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    load_event(&conn, event_id).await?;

    let facts: Vec<FunFact> = RawQuery::get_fun_facts_by_event(&conn, event_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(facts))
}

#[utoipa::path(
    get,
    path = "/api/orm/events/{event_id}/fun-facts",
    responses(
        (status = OK, body = Vec<FunFact>),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_fun_facts_orm(
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    load_event(&conn, event_id).await?;

    let facts: Vec<FunFact> = fun_fact::Query::get_fun_facts_by_event(&conn, event_id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(facts))
}
