use quiznight_entity::fun_fact::{self, Entity as FunFact, Model as FunFactModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_fun_facts_by_event<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
    ) -> Result<Vec<FunFactModel>, DbErr> {
        FunFact::find()
            .filter(fun_fact::Column::EventId.eq(event_id))
            .order_by_asc(fun_fact::Column::OrderIndex)
            .order_by_asc(fun_fact::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load fun facts");
            })
    }

    pub async fn find_fun_fact_by_id<C: ConnectionTrait>(
        conn: &C,
        fun_fact_id: Uuid,
    ) -> Result<Option<FunFactModel>, DbErr> {
        FunFact::find_by_id(fun_fact_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load fun fact by id");
        })
    }
}
