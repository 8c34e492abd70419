use crate::util::FlattenTransactionResultExt;
use chrono::NaiveDateTime;
use quiznight_entity::event_image::{self, ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::{ConnectionTrait, TransactionTrait};
use std::error::Error;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct NewEventImage {
    pub question_id: Uuid,
    pub unsplash_id: String,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub attribution_name: Option<String>,
    pub attribution_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub expires_at: Option<NaiveDateTime>,
    pub selected_by_user_id: Option<Uuid>,
}

impl Mutation {
    /// Caches a selected image for a question. A question holds at most one
    /// image, so an existing row is replaced inside the same transaction.
    pub async fn select_image<C: TransactionTrait>(conn: &C, image: NewEventImage) -> Result<Model, DbErr> {
        conn.transaction(|txn| {
            Box::pin(async move {
                Entity::delete_many()
                    .filter(event_image::Column::QuestionId.eq(image.question_id))
                    .exec(txn)
                    .await?;

                let row = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    question_id: Set(image.question_id),
                    unsplash_id: Set(image.unsplash_id),
                    image_url: Set(image.image_url),
                    thumbnail_url: Set(image.thumbnail_url),
                    attribution_name: Set(image.attribution_name),
                    attribution_url: Set(image.attribution_url),
                    width: Set(image.width),
                    height: Set(image.height),
                    expires_at: Set(image.expires_at),
                    selected_by_user_id: Set(image.selected_by_user_id),
                    created_at: Set(chrono::Utc::now().naive_utc()),
                };
                row.insert(txn).await
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to cache event image");
        })
    }

    pub async fn delete_by_question<C: ConnectionTrait>(conn: &C, question_id: Uuid) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(event_image::Column::QuestionId.eq(question_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to delete event image");
            })?;
        Ok(res.rows_affected)
    }

    /// Drops rows whose cached URLs have passed their expiry.
    pub async fn delete_expired<C: ConnectionTrait>(conn: &C, now: NaiveDateTime) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(event_image::Column::ExpiresAt.lte(now))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to clean up expired event images");
            })?;
        Ok(res.rows_affected)
    }
}
