use quiznight_entity::event::{self, Entity as Event, Model as EventModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_event_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<EventModel>, DbErr> {
        Event::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading event");
        })
    }

    pub async fn find_event_by_slug<C: ConnectionTrait>(conn: &C, slug: &str) -> Result<Option<EventModel>, DbErr> {
        Event::find()
            .filter(event::Column::Slug.eq(slug))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading event by slug");
            })
    }

    pub async fn get_events_by_host<C: ConnectionTrait>(conn: &C, host_id: Uuid) -> Result<Vec<EventModel>, DbErr> {
        Event::find()
            .filter(event::Column::HostId.eq(host_id))
            .order_by_asc(event::Column::CreatedAt)
            .order_by_asc(event::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list events for host");
            })
    }

    /// All slugs currently in use, for uniqueness resolution on create.
    pub async fn get_slugs<C: ConnectionTrait>(conn: &C) -> Result<Vec<String>, DbErr> {
        Event::find()
            .select_only()
            .column(event::Column::Slug)
            .into_tuple()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load event slugs");
            })
    }
}
