//! Attendee-facing endpoints. Attendees are not user accounts; they carry an
//! opaque `participantToken` cookie issued when they join an event.

use crate::routes::api::events::error::EventError;
use crate::routes::api::events::reads::{ensure_participants_visible, load_event};
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use http::StatusCode;
use quiznight_db::{participant, question, response, team};
use quiznight_entity::participant::Model as ParticipantModel;
use quiznight_model::leaderboard::LeaderboardEntry;
use quiznight_model::participant::Participant;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) const PARTICIPANT_COOKIE: &str = "participantToken";

fn participant_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(PARTICIPANT_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie
}

async fn resolve_participant(
    conn: &DatabaseConnection,
    jar: &CookieJar,
    event_id: Uuid,
) -> Result<ParticipantModel, EventError> {
    let Some(cookie) = jar.get(PARTICIPANT_COOKIE) else {
        return Err(EventError::Forbidden("no participant token"));
    };
    let row = participant::Query::find_by_token(conn, cookie.value())
        .await?
        .ok_or(EventError::Forbidden("unknown participant token"))?;
    if row.event_id != event_id {
        return Err(EventError::Forbidden("participant token belongs to another event"));
    }
    if !row.is_active {
        return Err(EventError::Forbidden("participant is inactive"));
    }
    Ok(row)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct JoinPayload {
    display_name: Option<String>,
    team_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/join",
    request_body = JoinPayload,
    responses(
        (status = CREATED, body = Participant, description = "Joined; the participant token cookie is set"),
        (status = FORBIDDEN, description = "Participants are disabled for this event"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "participants"
)]
pub(crate) async fn join_event(
    Extension(conn): Extension<DatabaseConnection>,
    jar: CookieJar,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<JoinPayload>,
) -> Result<Response, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, None)?;

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
        true,
    )
    .await?;
    tracing::info!(%event_id, participant_id = %created.id, "participant joined");

    let token = created.participant_token.clone();
    let participant: Participant = created.into_model();
    Ok((
        StatusCode::CREATED,
        jar.add(participant_cookie(token)),
        Json(participant),
    )
        .into_response())
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SubmitResponsePayload {
    question_id: Uuid,
    answer: String,
    response_time_ms: Option<i32>,
    time_remaining_seconds: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SubmissionResult {
    is_correct: bool,
    points_awarded: i32,
    correct_answer: String,
}

fn grade(answer: &str, correct_answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(correct_answer.trim())
}

#[utoipa::path(
    post,
    path = "/api/v2/events/{event_id}/responses",
    request_body = SubmitResponsePayload,
    responses(
        (status = CREATED, body = SubmissionResult, description = "Answer graded and recorded"),
        (status = CONFLICT, description = "This participant already answered the question"),
        (status = FORBIDDEN, description = "No valid participant token"),
    ),
    tag = "participants"
)]
pub(crate) async fn submit_response(
    Extension(conn): Extension<DatabaseConnection>,
    jar: CookieJar,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<SubmitResponsePayload>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, None)?;
    let participant_row = resolve_participant(&conn, &jar, event_id).await?;

    let question_row = question::Query::find_question_by_id(&conn, payload.question_id)
        .await?
        .ok_or(EventError::NotFound("question not found"))?;
    if question_row.event_id != event_id {
        return Err(EventError::NotFound("question not found"));
    }

    if response::Query::find_response(&conn, participant_row.id, question_row.id)
        .await?
        .is_some()
    {
        return Err(EventError::AlreadyAnswered);
    }

    let is_correct = grade(&payload.answer, &question_row.correct_answer);
    let points = if is_correct { question_row.points } else { 0 };

    response::Mutation::create_response(
        &conn,
        participant_row.id,
        question_row.id,
        payload.answer.trim(),
        is_correct,
        points,
        payload.response_time_ms,
        payload.time_remaining_seconds,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResult {
            is_correct,
            points_awarded: points,
            correct_answer: question_row.correct_answer,
        }),
    ))
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ResponseWire {
    question_id: Uuid,
    answer: String,
    is_correct: bool,
    points: i32,
    #[serde(with = "quiznight_model::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    created_at: chrono::NaiveDateTime,
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}/responses/mine",
    responses(
        (status = OK, body = Vec<ResponseWire>, description = "Answers this participant has already given"),
        (status = FORBIDDEN, description = "No valid participant token"),
    ),
    tag = "participants"
)]
pub(crate) async fn my_responses(
    Extension(conn): Extension<DatabaseConnection>,
    jar: CookieJar,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    load_event(&conn, event_id).await?;
    let participant_row = resolve_participant(&conn, &jar, event_id).await?;

    let responses: Vec<ResponseWire> = response::Query::get_responses_by_participant(&conn, participant_row.id)
        .await?
        .into_iter()
        .map(|row| ResponseWire {
            question_id: row.question_id,
            answer: row.answer,
            is_correct: row.is_correct,
            points: row.points,
            created_at: row.created_at,
        })
        .collect();
    Ok(Json(responses))
}

#[utoipa::path(
    get,
    path = "/api/v2/events/{event_id}/leaderboard",
    responses(
        (status = OK, body = Vec<LeaderboardEntry>, description = "Per-team totals, highest first; teams without answers score zero"),
        (status = FORBIDDEN, description = "Participants are disabled for this event"),
        (status = NOT_FOUND, description = "No such event"),
    ),
    tag = "participants"
)]
pub(crate) async fn get_leaderboard(
    viewer: Option<ExtractUserId>,
    Extension(conn): Extension<DatabaseConnection>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = load_event(&conn, event_id).await?;
    ensure_participants_visible(&event, viewer.as_ref())?;

    let rows = response::Query::leaderboard(&conn, event_id).await?;
    let mut entries: Vec<LeaderboardEntry> = rows
        .into_iter()
        .map(|row| LeaderboardEntry {
            team_id: row.team_id,
            team_name: row.team_name,
            total_points: row.total_points,
            correct_answers: row.correct_answers,
        })
        .collect();

    // Teams without any responses still show up, with zero points.
    let scored: std::collections::HashSet<Uuid> = entries.iter().map(|entry| entry.team_id).collect();
    for team_row in team::Query::get_teams_by_event(&conn, event_id).await? {
        if !scored.contains(&team_row.id) {
            entries.push(LeaderboardEntry {
                team_id: team_row.id,
                team_name: team_row.name,
                total_points: 0,
                correct_answers: 0,
            });
        }
    }

    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_is_case_and_whitespace_insensitive() {
        assert!(grade("  Canberra ", "canberra"));
        assert!(grade("TRUE", "true"));
        assert!(!grade("Sydney", "Canberra"));
        assert!(!grade("", "Canberra"));
    }
}
