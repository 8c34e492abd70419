use quiznight_entity::question::{self, Entity as Question, Model as QuestionModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_questions_by_event<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
    ) -> Result<Vec<QuestionModel>, DbErr> {
        Question::find()
            .filter(question::Column::EventId.eq(event_id))
            .order_by_asc(question::Column::OrderIndex)
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load questions");
            })
    }

    pub async fn find_question_by_id<C: ConnectionTrait>(
        conn: &C,
        question_id: Uuid,
    ) -> Result<Option<QuestionModel>, DbErr> {
        Question::find_by_id(question_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load question by id");
        })
    }

    pub async fn next_order_index<C: ConnectionTrait>(conn: &C, event_id: Uuid) -> Result<i32, DbErr> {
        use sea_orm::QuerySelect;
        let max: Option<i32> = Question::find()
            .filter(question::Column::EventId.eq(event_id))
            .select_only()
            .column_as(question::Column::OrderIndex.max(), "max_order")
            .into_tuple()
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to compute next order index");
            })?
            .flatten();
        Ok(max.map_or(0, |max| max + 1))
    }
}
