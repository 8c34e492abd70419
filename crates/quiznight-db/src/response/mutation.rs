use quiznight_entity::response::{ActiveModel, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    #[allow(clippy::too_many_arguments)]
    pub async fn create_response<C: ConnectionTrait>(
        conn: &C,
        participant_id: Uuid,
        question_id: Uuid,
        answer: &str,
        is_correct: bool,
        points: i32,
        response_time_ms: Option<i32>,
        time_remaining_seconds: Option<i32>,
    ) -> Result<Model, DbErr> {
        let response = ActiveModel {
            id: Set(Uuid::new_v4()),
            participant_id: Set(participant_id),
            question_id: Set(question_id),
            answer: Set(answer.to_string()),
            is_correct: Set(is_correct),
            points: Set(points),
            response_time_ms: Set(response_time_ms),
            time_remaining_seconds: Set(time_remaining_seconds),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        response.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to store response");
        })
    }
}
