use crate::AppConfig;
use crate::routes::api::events::error::EventError;
use crate::user::ExtractUser;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use chrono::NaiveDateTime;
use http::StatusCode;
use quiznight_core::question_gen::{self, GenerationRequest};
use quiznight_core::slug::{MAX_SLUG_LEN, make_unique_slug, slugify};
use quiznight_db::{event, fun_fact, participant, question, team};
use quiznight_entity::event::{ActiveModel as EventActiveModel, Model as EventModel};
use quiznight_model::event::{Event, EventStatus};
use quiznight_model::fun_fact::FunFact;
use quiznight_model::participant::Participant;
use quiznight_model::question::{Question, QuestionRound, QuestionType};
use quiznight_model::team::Team;
use quiznight_model::timestamp;
use quiznight_model::user::User;
use quiznight_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;
use serde_derive::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) mod error;
pub(crate) mod reads;
pub(crate) mod responses;

const MAX_SLUG_ATTEMPTS: u32 = 50;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_my_events).post(create_event))
        .route("/slug/{slug}", get(get_event_by_slug))
        .nest(
            "/{event_id}",
            Router::new()
                .route("/", get(get_event).patch(update_event).delete(delete_event))
                .route("/questions", post(create_question))
                .route("/questions/generate", post(generate_questions))
                .route("/questions/{question_id}", delete(delete_question))
                .route("/teams", post(create_team))
                .route("/teams/{team_id}", delete(delete_team))
                .route("/participants", post(create_participant))
                .route("/participants/{participant_id}", delete(delete_participant))
                .route("/participants/{participant_id}/team", put(move_participant))
                .route("/participants/{participant_id}/active", put(set_participant_active))
                .route("/fun-facts", post(create_fun_fact))
                .route("/fun-facts/{fun_fact_id}", delete(delete_fun_fact))
                .route("/fun-facts/{fun_fact_id}/active", put(set_fun_fact_active))
                .route("/join", post(responses::join_event))
                .route("/responses", post(responses::submit_response))
                .route("/responses/mine", get(responses::my_responses))
                .route("/leaderboard", get(responses::get_leaderboard))
                .merge(reads::raw_router()),
        )
        .with_state(())
}

/// Loads the event and checks that the caller may manage it: the host, or an
/// admin.
pub(crate) async fn require_host(
    conn: &DatabaseConnection,
    event_id: Uuid,
    user: &User,
) -> Result<EventModel, EventError> {
    let event = event::Query::find_event_by_id(conn, event_id)
        .await?
        .ok_or(EventError::NotFound("event not found"))?;
    if event.host_id != user.id && !user.is_admin() {
        return Err(EventError::Forbidden("only the host can manage this event"));
    }
    Ok(event)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateEventPayload {
    title: String,
    event_type: Option<String>,
    description: Option<String>,
    location: Option<String>,
    /// Unix-seconds string, like every timestamp on the wire.
    scheduled_at: Option<String>,
    primary_color: Option<String>,
    secondary_color: Option<String>,
    logo_url: Option<String>,
    welcome_message: Option<String>,
    closing_message: Option<String>,
    refund_policy: Option<String>,
    allow_participants: Option<bool>,
}

fn parse_wire_timestamp(raw: &str) -> Result<NaiveDateTime, EventError> {
    timestamp::from_unix_string(raw).ok_or(EventError::Validation("timestamps must be unix-seconds strings"))
}

#[utoipa::path(
    post,
    path = "/api/v2/events",
    request_body = CreateEventPayload,
    responses(
        (status = CREATED, body = Event, description = "Event created in draft status"),
        (status = BAD_REQUEST, description = "Title is missing"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn create_event(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<CreateEventPayload>,
) -> Result<impl IntoResponse, EventError> {
    if payload.title.trim().is_empty() {
        return Err(EventError::Validation("title is required"));
    }

    let scheduled_at = payload.scheduled_at.as_deref().map(parse_wire_timestamp).transpose()?;

    let existing = event::Query::get_slugs(&conn).await?;
    let slug = make_unique_slug(
        &slugify(payload.title.trim(), MAX_SLUG_LEN),
        existing.iter().map(String::as_str),
        MAX_SLUG_ATTEMPTS,
    );

    let now = chrono::Utc::now().naive_utc();
    let created = event::Mutation::create_event(
        &conn,
        EventActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(payload.title.trim().to_string()),
            slug: Set(slug),
            host_id: Set(user.id),
            event_type: Set(payload.event_type),
            status: Set(quiznight_entity::event::Status::Draft),
            description: Set(payload.description),
            location: Set(payload.location),
            scheduled_at: Set(scheduled_at),
            primary_color: Set(payload.primary_color),
            secondary_color: Set(payload.secondary_color),
            logo_url: Set(payload.logo_url),
            welcome_message: Set(payload.welcome_message),
            closing_message: Set(payload.closing_message),
            refund_policy: Set(payload.refund_policy),
            allow_participants: Set(payload.allow_participants.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await?;

    tracing::info!(event_id = %created.id, slug = %created.slug, "created event");

    let event: Event = created.into_model();
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/api/v2/events",
    responses(
        (status = OK, body = Vec<Event>, description = "Events hosted by the current user"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn list_my_events(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, EventError> {
    let events: Vec<Event> = event::Query::get_events_by_host(&conn, user.id)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}",
    responses(
        (status = OK, body = Event),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events"
)]
pub(crate) async fn get_event(
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event: Event = event::Query::find_event_by_id(&conn, event_id)
        .await?
        .ok_or(EventError::NotFound("event not found"))?
        .into_model();
    Ok(Json(event))
}

#[utoipa::path(
    get,
    path = "/api/v2/events/slug/{slug}",
    responses(
        (status = OK, body = Event),
        (status = NOT_FOUND, description = "No event with this slug"),
    ),
    tag = "events"
)]
pub(crate) async fn get_event_by_slug(
    Extension(conn): Extension<DatabaseConnection>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, EventError> {
    let event: Event = event::Query::find_event_by_slug(&conn, &slug)
        .await?
        .ok_or(EventError::NotFound("event not found"))?
        .into_model();
    Ok(Json(event))
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct UpdateEventPayload {
    title: Option<String>,
    status: Option<EventStatus>,
    allow_participants: Option<bool>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Outer Option = field present, inner Option = value or null
    event_type: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    location: Option<Option<String>>,
    /// Unix-seconds string or null.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    scheduled_at: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    primary_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    secondary_color: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    logo_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    welcome_message: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    closing_message: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    refund_policy: Option<Option<String>>,
}

fn apply_changes(id: Uuid, changes: UpdateEventPayload) -> Result<EventActiveModel, EventError> {
    let mut active_event = EventActiveModel {
        id: Unchanged(id),
        ..EventActiveModel::default()
    };

    if let Some(title) = changes.title {
        if title.trim().is_empty() {
            return Err(EventError::Validation("title must not be empty"));
        }
        tracing::debug!(new_value = %title, "changed event title");
        active_event.title = Set(title.trim().to_string());
    }
    if let Some(status) = changes.status {
        tracing::debug!(new_value = %status, "changed event status");
        active_event.status = Set(status.into_db_model());
    }
    if let Some(allow) = changes.allow_participants {
        tracing::debug!(new_value = %allow, "changed event allow_participants");
        active_event.allow_participants = Set(allow);
    }
    if let Some(scheduled_at) = changes.scheduled_at {
        let parsed = scheduled_at.as_deref().map(parse_wire_timestamp).transpose()?;
        active_event.scheduled_at = Set(parsed);
    }

    macro_rules! apply_change {
        ($i:ident) => {
            if let Some(inner) = changes.$i {
                match inner {
                    Some($i) => {
                        tracing::debug!(new_value = ?$i, concat!("changed event ", stringify!($i)));
                        active_event.$i = Set(Some($i));
                    }
                    None => {
                        tracing::debug!(concat!("unset event field ", stringify!($i)));
                        active_event.$i = Set(None);
                    }
                }
            };
        };
    }

    apply_change!(event_type);
    apply_change!(description);
    apply_change!(location);
    apply_change!(primary_color);
    apply_change!(secondary_color);
    apply_change!(logo_url);
    apply_change!(welcome_message);
    apply_change!(closing_message);
    apply_change!(refund_policy);

    active_event.updated_at = Set(chrono::Utc::now().naive_utc());
    Ok(active_event)
}

#[utoipa::path(
    patch,
    path = "/api/v2/events/{event_id}",
    request_body = UpdateEventPayload,
    responses(
        (status = OK, body = Event, description = "Event updated"),
        (status = FORBIDDEN, description = "Caller is not the host"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn update_event(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
    Json(changes): Json<UpdateEventPayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let updated = event::Mutation::update_event(&conn, apply_changes(event_id, changes)?).await?;
    let event: Event = updated.into_model();
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/api/v2/events/{event_id}",
    responses(
        (status = NO_CONTENT, description = "Event and all owned rows deleted"),
        (status = FORBIDDEN, description = "Caller is not the host"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn delete_event(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    event::Mutation::delete(&conn, event_id).await?;
    tracing::info!(%event_id, "deleted event");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateQuestionPayload {
    question: String,
    r#type: QuestionType,
    #[serde(default)]
    options: Vec<quiznight_model::question::QuestionOption>,
    correct_answer: String,
    points: Option<i32>,
    time_limit_seconds: Option<i32>,
    difficulty: Option<String>,
    category: Option<String>,
    round: Option<QuestionRound>,
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = CREATED, body = Question, description = "Question appended to the event"),
        (status = BAD_REQUEST, description = "Question text or answer missing"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn create_question(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    if payload.question.trim().is_empty() || payload.correct_answer.trim().is_empty() {
        return Err(EventError::Validation("question and correct_answer are required"));
    }

    let options = if payload.options.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&payload.options)?)
    };
    let order_index = question::Query::next_order_index(&conn, event_id).await?;

    let created = question::Mutation::create_question(
        &conn,
        event_id,
        payload.question.trim(),
        &payload.r#type.into_db_model(),
        options.as_deref(),
        payload.correct_answer.trim(),
        payload.points.unwrap_or(10),
        payload.time_limit_seconds,
        payload.difficulty.as_deref(),
        payload.category.as_deref(),
        order_index,
        &payload.round.unwrap_or(QuestionRound::Game).into_db_model(),
    )
    .await?;

    let question: Question = created.into_model();
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    delete,
    path = "/api/v2/events/{event_id}/questions/{question_id}",
    responses(
        (status = NO_CONTENT, description = "Question removed"),
        (status = NOT_FOUND, description = "Question does not belong to this event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn delete_question(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, question_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let question_row = question::Query::find_question_by_id(&conn, question_id)
        .await?
        .ok_or(EventError::NotFound("question not found"))?;
    if question_row.event_id != event_id {
        return Err(EventError::NotFound("question not found"));
    }

    question::Mutation::delete(&conn, question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct GenerateQuestionsPayload {
    topic: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    count: Option<u8>,
    round: Option<QuestionRound>,
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/questions/generate",
    request_body = GenerateQuestionsPayload,
    responses(
        (status = CREATED, body = Vec<Question>, description = "Generated questions appended to the event"),
        (status = SERVICE_UNAVAILABLE, description = "No OpenAI key configured"),
        (status = BAD_GATEWAY, description = "The model call failed"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn generate_questions(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<GenerateQuestionsPayload>,
) -> Result<impl IntoResponse, EventError> {
    let event = require_host(&conn, event_id, &user).await?;
    let settings = app_config.openai().ok_or(EventError::GenerationDisabled)?;

    let request = GenerationRequest {
        topic: payload.topic.unwrap_or_else(|| event.title.clone()),
        category: payload.category,
        difficulty: payload.difficulty,
        count: payload.count.unwrap_or(5).min(20),
    };
    let drafts = question_gen::generate_questions(settings, &request).await?;

    let round = payload.round.unwrap_or(QuestionRound::Game).into_db_model();
    let mut order_index = question::Query::next_order_index(&conn, event_id).await?;
    let mut created: Vec<Question> = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let options = if draft.options.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&draft.options)?)
        };
        let row = question::Mutation::create_question(
            &conn,
            event_id,
            &draft.question,
            &draft.r#type.into_db_model(),
            options.as_deref(),
            &draft.correct_answer,
            draft.points,
            None,
            request.difficulty.as_deref(),
            request.category.as_deref(),
            order_index,
            &round,
        )
        .await?;
        order_index += 1;
        created.push(row.into_model());
    }

    tracing::info!(%event_id, count = created.len(), "generated questions");
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateTeamPayload {
    name: String,
    table_number: Option<i32>,
    max_members: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/teams",
    request_body = CreateTeamPayload,
    responses(
        (status = CREATED, body = Team, description = "Team created"),
        (status = BAD_REQUEST, description = "Name is missing"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn create_team(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<CreateTeamPayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    if payload.name.trim().is_empty() {
        return Err(EventError::Validation("name is required"));
    }

    let created = team::Mutation::create_team(
        &conn,
        event_id,
        payload.name.trim(),
        payload.table_number,
        payload.max_members,
    )
    .await?;
    let team: Team = created.into_model();
    Ok((StatusCode::CREATED, Json(team)))
}

#[utoipa::path(
    delete,
    path = "/api/v2/events/{event_id}/teams/{team_id}",
    responses(
        (status = NO_CONTENT, description = "Team deleted; members stay without a team"),
        (status = NOT_FOUND, description = "Team does not belong to this event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn delete_team(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, team_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let team_row = team::Query::find_team_by_id(&conn, team_id)
        .await?
        .ok_or(EventError::NotFound("team not found"))?;
    if team_row.event_id != event_id {
        return Err(EventError::NotFound("team not found"));
    }

    team::Mutation::delete(&conn, team_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateParticipantPayload {
    display_name: Option<String>,
    team_id: Option<Uuid>,
    can_switch_team: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/participants",
    request_body = CreateParticipantPayload,
    responses(
        (status = CREATED, body = Participant, description = "Participant created; the token is only returned here"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn create_participant(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<CreateParticipantPayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    if let Some(team_id) = payload.team_id {
        let team_row = team::Query::find_team_by_id(&conn, team_id)
            .await?
            .ok_or(EventError::NotFound("team not found"))?;
        if team_row.event_id != event_id {
            return Err(EventError::NotFound("team not found"));
        }
    }

    let created = participant::Mutation::create_participant(
        &conn,
        event_id,
        payload.team_id,
        payload.display_name.as_deref(),
        payload.can_switch_team.unwrap_or(true),
    )
    .await?;
    let participant: Participant = created.into_model();
    Ok((StatusCode::CREATED, Json(participant)))
}

#[utoipa::path(
    delete,
    path = "/api/v2/events/{event_id}/participants/{participant_id}",
    responses(
        (status = NO_CONTENT, description = "Participant removed"),
        (status = NOT_FOUND, description = "Participant does not belong to this event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn delete_participant(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let row = participant::Query::find_participant_by_id(&conn, participant_id)
        .await?
        .ok_or(EventError::NotFound("participant not found"))?;
    if row.event_id != event_id {
        return Err(EventError::NotFound("participant not found"));
    }

    participant::Mutation::delete(&conn, participant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct MoveParticipantPayload {
    team_id: Option<Uuid>,
}

#[utoipa::path(
    put,
    path = "/api/v2/events/{event_id}/participants/{participant_id}/team",
    request_body = MoveParticipantPayload,
    responses(
        (status = OK, body = Participant, description = "Participant moved (null team removes them from any team)"),
        (status = NOT_FOUND, description = "Participant or team missing"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn move_participant(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, participant_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<MoveParticipantPayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let row = participant::Query::find_participant_by_id(&conn, participant_id)
        .await?
        .ok_or(EventError::NotFound("participant not found"))?;
    if row.event_id != event_id {
        return Err(EventError::NotFound("participant not found"));
    }

    if let Some(team_id) = payload.team_id {
        let team_row = team::Query::find_team_by_id(&conn, team_id)
            .await?
            .ok_or(EventError::NotFound("team not found"))?;
        if team_row.event_id != event_id {
            return Err(EventError::NotFound("team not found"));
        }
    }

    let updated = participant::Mutation::set_team(&conn, participant_id, payload.team_id).await?;
    let participant: Participant = updated.into_model();
    Ok(Json(participant))
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SetActivePayload {
    is_active: bool,
}

#[utoipa::path(
    put,
    path = "/api/v2/events/{event_id}/participants/{participant_id}/active",
    request_body = SetActivePayload,
    responses(
        (status = OK, body = Participant, description = "Participant activated or deactivated"),
        (status = NOT_FOUND, description = "Participant does not belong to this event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn set_participant_active(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, participant_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SetActivePayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let row = participant::Query::find_participant_by_id(&conn, participant_id)
        .await?
        .ok_or(EventError::NotFound("participant not found"))?;
    if row.event_id != event_id {
        return Err(EventError::NotFound("participant not found"));
    }

    let updated = participant::Mutation::set_active(&conn, participant_id, payload.is_active).await?;
    let participant: Participant = updated.into_model();
    Ok(Json(participant))
}

#[utoipa::path(
    put,
    path = "/api/v2/events/{event_id}/fun-facts/{fun_fact_id}/active",
    request_body = SetActivePayload,
    responses(
        (status = OK, body = FunFact, description = "Fun fact shown or hidden"),
        (status = NOT_FOUND, description = "Fun fact does not belong to this event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn set_fun_fact_active(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, fun_fact_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SetActivePayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let row = fun_fact::Query::find_fun_fact_by_id(&conn, fun_fact_id)
        .await?
        .ok_or(EventError::NotFound("fun fact not found"))?;
    if row.event_id != event_id {
        return Err(EventError::NotFound("fun fact not found"));
    }

    let updated = fun_fact::Mutation::set_active(&conn, fun_fact_id, payload.is_active).await?;
    let fun_fact: FunFact = updated.into_model();
    Ok(Json(fun_fact))
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateFunFactPayload {
    title: String,
    content: String,
    order_index: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/fun-facts",
    request_body = CreateFunFactPayload,
    responses(
        (status = CREATED, body = FunFact, description = "Fun fact created"),
        (status = BAD_REQUEST, description = "Title or content missing"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn create_fun_fact(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<CreateFunFactPayload>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    if payload.title.trim().is_empty() || payload.content.trim().is_empty() {
        return Err(EventError::Validation("title and content are required"));
    }

    let created = fun_fact::Mutation::create_fun_fact(
        &conn,
        event_id,
        payload.title.trim(),
        payload.content.trim(),
        payload.order_index.unwrap_or(0),
    )
    .await?;
    let fun_fact: FunFact = created.into_model();
    Ok((StatusCode::CREATED, Json(fun_fact)))
}

#[utoipa::path(
    delete,
    path = "/api/v2/events/{event_id}/fun-facts/{fun_fact_id}",
    responses(
        (status = NO_CONTENT, description = "Fun fact removed"),
        (status = NOT_FOUND, description = "Fun fact does not belong to this event"),
    ),
    tag = "events",
    security(("session" = []))
)]
pub(crate) async fn delete_fun_fact(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Path((event_id, fun_fact_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, EventError> {
    require_host(&conn, event_id, &user).await?;

    let row = fun_fact::Query::find_fun_fact_by_id(&conn, fun_fact_id)
        .await?
        .ok_or(EventError::NotFound("fun fact not found"))?;
    if row.event_id != event_id {
        return Err(EventError::NotFound("fun fact not found"));
    }

    fun_fact::Mutation::delete(&conn, fun_fact_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
