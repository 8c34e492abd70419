//! Raw-SQL read path for the legacy `/api/v2` endpoints.
//!
//! These queries decode into the same entity models the ORM path returns and
//! go through the same DTO projection, so both endpoint families emit
//! identical JSON for identical rows. Keep the column lists and the ordering
//! in sync with the `Query` structs of the sibling modules.

use quiznight_entity::{fun_fact, participant, question, team};
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};
use std::error::Error;
use uuid::Uuid;

pub struct RawQuery;

impl RawQuery {
    pub async fn get_teams_by_event<C: ConnectionTrait>(conn: &C, event_id: Uuid) -> Result<Vec<team::Model>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            conn.get_database_backend(),
            r#"SELECT "id", "event_id", "name", "table_number", "max_members", "created_at"
               FROM "teams" WHERE "event_id" = ? ORDER BY "name" ASC, "id" ASC"#,
            [event_id.into()],
        );
        team::Model::find_by_statement(stmt).all(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "raw team query failed");
        })
    }

    pub async fn get_participants_by_event<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
    ) -> Result<Vec<participant::Model>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            conn.get_database_backend(),
            r#"SELECT "id", "event_id", "team_id", "display_name", "participant_token",
                      "is_active", "can_switch_team", "created_at"
               FROM "participants" WHERE "event_id" = ? ORDER BY "created_at" ASC, "id" ASC"#,
            [event_id.into()],
        );
        participant::Model::find_by_statement(stmt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "raw participant query failed");
            })
    }

    pub async fn get_questions_by_event<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
    ) -> Result<Vec<question::Model>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            conn.get_database_backend(),
            r#"SELECT "id", "event_id", "question", "type", "options", "correct_answer",
                      "points", "time_limit_seconds", "difficulty", "category",
                      "order_index", "round", "created_at"
               FROM "questions" WHERE "event_id" = ? ORDER BY "order_index" ASC, "id" ASC"#,
            [event_id.into()],
        );
        question::Model::find_by_statement(stmt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "raw question query failed");
            })
    }

    pub async fn get_fun_facts_by_event<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
    ) -> Result<Vec<fun_fact::Model>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            conn.get_database_backend(),
            r#"SELECT "id", "event_id", "title", "content", "order_index", "is_active", "created_at"
               FROM "fun_facts" WHERE "event_id" = ? ORDER BY "order_index" ASC, "id" ASC"#,
            [event_id.into()],
        );
        fun_fact::Model::find_by_statement(stmt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "raw fun fact query failed");
            })
    }
}
