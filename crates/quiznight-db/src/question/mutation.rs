use quiznight_entity::question::{ActiveModel, Entity, Model, QuestionType, Round};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    #[allow(clippy::too_many_arguments)]
    pub async fn create_question<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
        question: &str,
        question_type: &QuestionType,
        options: Option<&str>,
        correct_answer: &str,
        points: i32,
        time_limit_seconds: Option<i32>,
        difficulty: Option<&str>,
        category: Option<&str>,
        order_index: i32,
        round: &Round,
    ) -> Result<Model, DbErr> {
        let question = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            question: Set(question.to_string()),
            r#type: Set(*question_type),
            options: Set(options.map(std::string::ToString::to_string)),
            correct_answer: Set(correct_answer.to_string()),
            points: Set(points),
            time_limit_seconds: Set(time_limit_seconds),
            difficulty: Set(difficulty.map(std::string::ToString::to_string)),
            category: Set(category.map(std::string::ToString::to_string)),
            order_index: Set(order_index),
            round: Set(*round),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        question.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create question");
        })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, question_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(question_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete question");
            return Err(error);
        }
        Ok(())
    }
}
