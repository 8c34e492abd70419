use quiznight_entity::participant::{self, Entity as Participant, Model as ParticipantModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_participants_by_event<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
    ) -> Result<Vec<ParticipantModel>, DbErr> {
        Participant::find()
            .filter(participant::Column::EventId.eq(event_id))
            .order_by_asc(participant::Column::CreatedAt)
            .order_by_asc(participant::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load participants");
            })
    }

    pub async fn find_participant_by_id<C: ConnectionTrait>(
        conn: &C,
        participant_id: Uuid,
    ) -> Result<Option<ParticipantModel>, DbErr> {
        Participant::find_by_id(participant_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load participant by id");
            })
    }

    /// Resolves the cookie-based pseudo-identity of an attendee.
    pub async fn find_by_token<C: ConnectionTrait>(
        conn: &C,
        token: &str,
    ) -> Result<Option<ParticipantModel>, DbErr> {
        Participant::find()
            .filter(participant::Column::ParticipantToken.eq(token))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load participant by token");
            })
    }
}
