use quiznight_entity::event_image::{self, Entity as EventImage, Model as EventImageModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_question<C: ConnectionTrait>(
        conn: &C,
        question_id: Uuid,
    ) -> Result<Option<EventImageModel>, DbErr> {
        EventImage::find()
            .filter(event_image::Column::QuestionId.eq(question_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load event image");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<EventImageModel>, DbErr> {
        EventImage::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load event image by id");
        })
    }
}
