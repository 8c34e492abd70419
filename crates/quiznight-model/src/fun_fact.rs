use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct FunFact {
    pub id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub content: String,
    pub order_index: i32,
    pub is_active: bool,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}
