use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub question_id: Uuid,
    pub unsplash_id: String,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub attribution_name: Option<String>,
    pub attribution_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub expires_at: Option<DateTime>,
    pub selected_by_user_id: Option<Uuid>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id"
    )]
    Question,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SelectedByUserId",
        to = "super::user::Column::Id"
    )]
    SelectedBy,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelectedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
