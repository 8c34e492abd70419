use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of users currently assigned to this role.
    pub user_count: u64,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}
